use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::flows::SankeyData;
use crate::metrics::FinanceMetrics;
use crate::periods::Frequency;
use crate::records::{Expense, Income};
use crate::tax::TaxConfig;

/// One input snapshot for a full computation pass.
#[derive(Debug, Clone, Copy)]
pub struct MetricsInput<'a> {
    pub incomes: &'a [Income],
    pub expenses: &'a [Expense],
    pub tax_config: &'a TaxConfig,
    pub display_period: Frequency,
    pub currency: &'a str,
}

/// One slice of the expense breakdown pie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
    pub name: String,
    /// Amount in the display period
    pub value: Decimal,
    /// Share of total expenses (0-100)
    pub percentage: Decimal,
    pub color: String,
}

/// A headline figure for dashboard display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCard {
    pub title: String,
    pub value: String,
    pub subtitle: String,
}

/// Chart-ready projections of the finance metrics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationData {
    pub expense_breakdown: Vec<PieSlice>,
    pub sankey: SankeyData,
    pub summary_cards: Vec<SummaryCard>,
}

/// Everything one computation pass produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedMetrics {
    pub finance: FinanceMetrics,
    pub visualization: VisualizationData,
    /// Values of the registered custom metrics, keyed by id. Metrics
    /// whose computation failed are absent.
    pub custom: BTreeMap<String, Value>,
}
