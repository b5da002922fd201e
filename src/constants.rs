use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for display values
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Savings-rate status thresholds (percent of gross income)
pub const SAVINGS_RATE_EXCELLENT: Decimal = dec!(20);
pub const SAVINGS_RATE_GOOD: Decimal = dec!(10);

/// Fixed display split of the savings flow into sub-categories.
/// This is a presentation heuristic, not user data; the percentages are
/// not derived from records anywhere.
pub const SAVINGS_SPLIT: [(&str, u32); 3] =
    [("Investments", 40), ("Cash", 30), ("Retirement", 30)];

/// Relative tolerance for flow-conservation checks on Sankey nodes
pub const FLOW_TOLERANCE: Decimal = dec!(0.000001);

/// Budget utilization (percent) under which an active budget counts as on track
pub const BUDGET_ON_TRACK_THRESHOLD: Decimal = dec!(90);

/// Node colors for the income-flow graph
pub const INCOME_COLOR: &str = "#879a39";
pub const TAX_COLOR: &str = "#d14d41";
pub const EXPENSES_COLOR: &str = "#da702c";
pub const SAVINGS_COLOR: &str = "#4385be";

/// Palette cycled through for expense-category nodes and pie slices
pub const CATEGORY_COLORS: [&str; 10] = [
    "#4385be", "#da702c", "#879a39", "#d14d41", "#8b7ec8", "#3aa99f", "#d0a215", "#ce5d97",
    "#66800b", "#878580",
];
