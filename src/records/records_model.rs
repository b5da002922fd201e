//! Income and expense records.
//!
//! These are snapshots created and updated by collaborators (forms, the
//! sync layer); the engine reads them and never mutates them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::periods::Frequency;

/// Whether an income amount is quoted before or after tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaxStatus {
    /// Gross amount; tax is owed on it.
    PreTax,
    /// Amount already net of tax; contributes no tax.
    PostTax,
}

/// A deduction attached to an income source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deduction {
    pub id: String,
    pub name: String,
    /// Annual deduction amount
    pub amount: Decimal,
    /// Only deductible deductions reduce taxable income
    pub is_tax_deductible: bool,
}

/// A recurring or one-off income source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: String,
    pub source: String,
    /// Amount per `frequency` period
    pub amount: Decimal,
    pub frequency: Frequency,
    pub tax_status: TaxStatus,
    #[serde(default)]
    pub deductions: Vec<Deduction>,
    pub date: NaiveDate,
}

/// A recurring or one-off expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub description: String,
    /// Amount per `frequency` period
    pub amount: Decimal,
    pub category: String,
    pub frequency: Frequency,
    pub date: NaiveDate,
}
