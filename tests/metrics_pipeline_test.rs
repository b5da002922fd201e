use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde_json::json;

use pfinance_core::budgets::{compute_budget_metrics, Budget, BudgetProgress};
use pfinance_core::engine::{CustomMetric, MetricsEngine, MetricsInput};
use pfinance_core::records::{Expense, Income, TaxStatus};
use pfinance_core::tax::{assess, TaxConfig};
use pfinance_core::Frequency;

#[test]
fn test_full_pipeline_from_records_to_dashboard() {
    // A household with a salaried job, a freelance side income already
    // taxed at source, and a handful of recurring expenses.
    let incomes = vec![
        Income {
            id: "salary".to_string(),
            source: "Acme Corp".to_string(),
            amount: dec!(5000),
            frequency: Frequency::Monthly,
            tax_status: TaxStatus::PreTax,
            deductions: Vec::new(),
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        },
        Income {
            id: "freelance".to_string(),
            source: "Side projects".to_string(),
            amount: dec!(250),
            frequency: Frequency::Weekly,
            tax_status: TaxStatus::PostTax,
            deductions: Vec::new(),
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        },
    ];
    let expenses = vec![
        Expense {
            id: "rent".to_string(),
            description: "Apartment rent".to_string(),
            amount: dec!(1800),
            frequency: Frequency::Monthly,
            category: "Housing".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        },
        Expense {
            id: "food".to_string(),
            description: "Groceries".to_string(),
            amount: dec!(150),
            frequency: Frequency::Weekly,
            category: "Food".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 4).unwrap(),
        },
    ];
    let tax_config = TaxConfig::flat(dec!(0.25));

    let mut engine = MetricsEngine::new();
    engine
        .register(CustomMetric::new("annual-savings", Vec::new(), |finance, _| {
            // Normalize so the string is scale-independent ("28600", not "28600.00").
            Ok(json!(finance.savings.amount.annualized.normalize().to_string()))
        }))
        .unwrap();

    let result = engine.compute_all(&MetricsInput {
        incomes: &incomes,
        expenses: &expenses,
        tax_config: &tax_config,
        display_period: Frequency::Annually,
        currency: "USD",
    });

    // Income: 60000 pre-tax + 13000 post-tax, 25% flat on the pre-tax part.
    assert_eq!(result.finance.income.gross.annualized, dec!(73000));
    assert_eq!(result.finance.income.tax.annualized, dec!(15000));
    assert_eq!(result.finance.income.net.annualized, dec!(58000));

    // Expenses: 21600 housing + 7800 food.
    assert_eq!(result.finance.expenses.total.annualized, dec!(29400));
    assert_eq!(result.finance.expenses.categories[0].category, "Housing");

    // Savings close the identity net - expenses.
    assert_eq!(result.finance.savings.amount.annualized, dec!(28600));
    assert_eq!(
        result.custom["annual-savings"],
        json!(dec!(28600).to_string())
    );

    // The flow graph conserves each node: outgoing links sum to its amount.
    let sankey = &result.visualization.sankey;
    for node in &sankey.nodes {
        let outgoing: rust_decimal::Decimal = sankey
            .links
            .iter()
            .filter(|l| l.source == node.id)
            .map(|l| l.value)
            .sum();
        if outgoing > dec!(0) {
            assert!(
                (outgoing - node.amount).abs() <= node.amount * dec!(0.000001),
                "node {} leaks: {} out of {}",
                node.id,
                outgoing,
                node.amount
            );
        }
    }

    // Memoization: the same snapshot is not recomputed.
    let again = engine.compute_all(&MetricsInput {
        incomes: &incomes,
        expenses: &expenses,
        tax_config: &tax_config,
        display_period: Frequency::Annually,
        currency: "USD",
    });
    assert_eq!(engine.computations(), 1);
    assert_eq!(again.finance, result.finance);
}

#[test]
fn test_australian_assessment_for_a_median_salary() {
    let config = TaxConfig::australia("2024-25");
    let assessment = assess(dec!(85000), &config);

    // 4288 to 45000, then 30c on the 40000 above it.
    assert_eq!(assessment.base_tax, dec!(16288));
    assert_eq!(assessment.offset, dec!(0));
    // 2% levy applies unless an exemption is requested.
    assert_eq!(assessment.medicare_levy, dec!(1700));
    assert_eq!(assessment.total, dec!(17988));
}

#[test]
fn test_budget_metrics_over_engine_categories() {
    let budgets = vec![Budget {
        id: "housing".to_string(),
        name: "Housing".to_string(),
        amount: dec!(2000),
        period: Frequency::Monthly,
        category_ids: vec!["Housing".to_string()],
        start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        is_active: true,
    }];
    let mut progresses = HashMap::new();
    progresses.insert(
        "housing".to_string(),
        BudgetProgress { spent_amount: dec!(1800) },
    );

    let metrics = compute_budget_metrics(
        &budgets,
        &progresses,
        NaiveDate::from_ymd_opt(2025, 1, 16).unwrap(),
    );

    assert_eq!(metrics.budgets[0].utilization_percent, dec!(90));
    assert!(!metrics.budgets[0].is_exceeded);
    // 90% utilization is no longer on track.
    assert_eq!(metrics.on_track_count, 0);
    assert_eq!(metrics.overall_utilization, dec!(90));
}

#[test]
fn test_output_serializes_camel_case() {
    let incomes = vec![Income {
        id: "salary".to_string(),
        source: "Acme Corp".to_string(),
        amount: dec!(5000),
        frequency: Frequency::Monthly,
        tax_status: TaxStatus::PreTax,
        deductions: Vec::new(),
        date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
    }];
    let tax_config = TaxConfig::flat(dec!(0.20));

    let mut engine = MetricsEngine::new();
    let result = engine.compute_all(&MetricsInput {
        incomes: &incomes,
        expenses: &[],
        tax_config: &tax_config,
        display_period: Frequency::Monthly,
        currency: "USD",
    });

    let value = serde_json::to_value(result.as_ref()).unwrap();
    assert!(value["finance"]["income"]["gross"]["annualized"].is_number());
    assert!(value["finance"]["tax"]["effectiveRate"].is_number());
    assert!(value["visualization"]["summaryCards"].is_array());
    assert_eq!(
        value["finance"]["income"]["sources"][0]["taxStatus"],
        json!("preTax")
    );
}
