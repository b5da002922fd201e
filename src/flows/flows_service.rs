//! Builds the income-flow graph from computed finance metrics.
//!
//! Money moves one way: income sources feed a single Tax node (pre-tax
//! sources only, in proportion to their share of pre-tax income) and split
//! their after-tax remainder between Expenses and Savings. Expenses fans
//! out to one node per category; Savings fans out to the fixed
//! Investments/Cash/Retirement display split. Links whose computed value
//! is not positive are omitted rather than emitted as degenerate edges.

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{
    CATEGORY_COLORS, EXPENSES_COLOR, INCOME_COLOR, SAVINGS_COLOR, SAVINGS_SPLIT, TAX_COLOR,
};
use crate::metrics::FinanceMetrics;

use super::{FlowNodeKind, SankeyData, SankeyLink, SankeyNode};

const TAX_NODE_ID: &str = "tax";
const EXPENSES_NODE_ID: &str = "expenses";
const SAVINGS_NODE_ID: &str = "savings";

fn share_percent(part: Decimal, whole: Decimal) -> Decimal {
    if whole > Decimal::ZERO {
        (part / whole * dec!(100)).round_dp(2)
    } else {
        Decimal::ZERO
    }
}

/// Builds the Sankey node/link graph for one computed metrics pass.
/// All node amounts and link values are annual.
pub fn build_flow_graph(metrics: &FinanceMetrics) -> SankeyData {
    let gross_total = metrics.income.gross.annualized;
    if gross_total <= Decimal::ZERO {
        return SankeyData::default();
    }

    debug!("Building income flow graph for gross {}", gross_total);

    let tax_total = metrics.income.tax.annualized;
    let net_total = metrics.income.net.annualized;
    let expense_total = metrics.expenses.total.annualized;
    let savings_total = metrics.savings.amount.annualized;

    let mut nodes = Vec::new();
    let mut links = Vec::new();

    // Income roots.
    for source in &metrics.income.sources {
        let amount = source.gross.annualized;
        if amount <= Decimal::ZERO {
            continue;
        }
        nodes.push(SankeyNode {
            id: format!("income-{}", source.id),
            name: source.source.clone(),
            kind: FlowNodeKind::Income,
            amount,
            percentage: share_percent(amount, gross_total),
            color: INCOME_COLOR.to_string(),
        });
    }

    // Tax receives each pre-tax source's allocated share.
    if tax_total > Decimal::ZERO {
        nodes.push(SankeyNode {
            id: TAX_NODE_ID.to_string(),
            name: "Tax".to_string(),
            kind: FlowNodeKind::Tax,
            amount: tax_total,
            percentage: share_percent(tax_total, gross_total),
            color: TAX_COLOR.to_string(),
        });
    }

    if expense_total > Decimal::ZERO {
        nodes.push(SankeyNode {
            id: EXPENSES_NODE_ID.to_string(),
            name: "Expenses".to_string(),
            kind: FlowNodeKind::ExpenseCategory,
            amount: expense_total,
            percentage: share_percent(expense_total, gross_total),
            color: EXPENSES_COLOR.to_string(),
        });
    }

    if savings_total > Decimal::ZERO {
        nodes.push(SankeyNode {
            id: SAVINGS_NODE_ID.to_string(),
            name: "Savings".to_string(),
            kind: FlowNodeKind::SavingsCategory,
            amount: savings_total,
            percentage: share_percent(savings_total, gross_total),
            color: SAVINGS_COLOR.to_string(),
        });
    }

    // Per-source outgoing links: tax share, then the after-tax remainder
    // split between Expenses and Savings in proportion to their share of
    // total net income. When spending exceeds net income the savings flow
    // is negative and omitted; each source then sends its whole after-tax
    // amount to Expenses rather than emitting more than it holds.
    let allocated_expenses = expense_total.min(net_total);
    for source in &metrics.income.sources {
        let source_id = format!("income-{}", source.id);
        let gross = source.gross.annualized;
        if gross <= Decimal::ZERO {
            continue;
        }

        let tax_share = source.tax.annualized;
        if tax_share > Decimal::ZERO {
            links.push(SankeyLink {
                source: source_id.clone(),
                target: TAX_NODE_ID.to_string(),
                value: tax_share,
                percentage: share_percent(tax_share, gross),
            });
        }

        let after_tax = source.net.annualized;
        if after_tax <= Decimal::ZERO || net_total <= Decimal::ZERO {
            continue;
        }
        let to_expenses = after_tax * allocated_expenses / net_total;
        if to_expenses > Decimal::ZERO {
            links.push(SankeyLink {
                source: source_id.clone(),
                target: EXPENSES_NODE_ID.to_string(),
                value: to_expenses,
                percentage: share_percent(to_expenses, gross),
            });
        }
        let to_savings = after_tax * savings_total / net_total;
        if to_savings > Decimal::ZERO {
            links.push(SankeyLink {
                source: source_id,
                target: SAVINGS_NODE_ID.to_string(),
                value: to_savings,
                percentage: share_percent(to_savings, gross),
            });
        }
    }

    // Expense categories fan out from the Expenses node.
    for (index, category) in metrics.expenses.categories.iter().enumerate() {
        let amount = category.amount.annualized;
        if amount <= Decimal::ZERO {
            continue;
        }
        let node_id = format!("expense-{}", category.category);
        nodes.push(SankeyNode {
            id: node_id.clone(),
            name: category.category.clone(),
            kind: FlowNodeKind::ExpenseSubcategory,
            amount,
            percentage: share_percent(amount, gross_total),
            color: CATEGORY_COLORS[index % CATEGORY_COLORS.len()].to_string(),
        });
        links.push(SankeyLink {
            source: EXPENSES_NODE_ID.to_string(),
            target: node_id,
            value: amount,
            percentage: share_percent(amount, expense_total),
        });
    }

    // Fixed display split of savings.
    if savings_total > Decimal::ZERO {
        for (name, percent) in SAVINGS_SPLIT {
            let amount = savings_total * Decimal::from(percent) / dec!(100);
            if amount <= Decimal::ZERO {
                continue;
            }
            let node_id = format!("savings-{}", name.to_lowercase());
            nodes.push(SankeyNode {
                id: node_id.clone(),
                name: name.to_string(),
                kind: FlowNodeKind::SavingsSubcategory,
                amount,
                percentage: share_percent(amount, gross_total),
                color: SAVINGS_COLOR.to_string(),
            });
            links.push(SankeyLink {
                source: SAVINGS_NODE_ID.to_string(),
                target: node_id,
                value: amount,
                percentage: Decimal::from(percent),
            });
        }
    }

    SankeyData { nodes, links }
}
