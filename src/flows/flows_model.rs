use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Role of a node in the income-flow graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowNodeKind {
    Income,
    Tax,
    ExpenseCategory,
    ExpenseSubcategory,
    SavingsCategory,
    SavingsSubcategory,
}

/// A node in the income-flow graph. Amounts are annual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SankeyNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FlowNodeKind,
    pub amount: Decimal,
    /// Share of total gross income (0-100)
    pub percentage: Decimal,
    /// Hex color for rendering
    pub color: String,
}

/// A directed edge between two node ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SankeyLink {
    pub source: String,
    pub target: String,
    pub value: Decimal,
    /// Share of the source node's amount (0-100); the percentages of a
    /// node's outgoing links sum to at most 100
    pub percentage: Decimal,
}

/// Node/link lists ready for a Sankey chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SankeyData {
    pub nodes: Vec<SankeyNode>,
    pub links: Vec<SankeyLink>,
}
