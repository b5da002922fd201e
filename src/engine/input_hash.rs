//! Structural fingerprint of a computation input.
//!
//! The engine memoizes by this hash: identical snapshots hash identically,
//! and any change to an amount, record set, tax setting, or display option
//! produces a different fingerprint.

use rust_decimal::Decimal;
use sha2::{Digest, Sha256};

use crate::periods::Frequency;
use crate::records::{Expense, Income};
use crate::tax::TaxConfig;

/// Normalizes a decimal so scale differences (1.50 vs 1.5) hash equal.
fn normalize_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Computes the SHA-256 fingerprint of one input snapshot.
pub fn compute_input_fingerprint(
    incomes: &[Income],
    expenses: &[Expense],
    tax_config: &TaxConfig,
    display_period: Frequency,
    currency: &str,
) -> String {
    let mut hasher = Sha256::new();

    for income in incomes {
        hasher.update(income.id.as_bytes());
        hasher.update(b"|");
        hasher.update(normalize_decimal(income.amount).as_bytes());
        hasher.update(b"|");
        hasher.update(format!("{:?}", income.frequency).as_bytes());
        hasher.update(b"|");
        hasher.update(format!("{:?}", income.tax_status).as_bytes());
        hasher.update(b"|");
        for deduction in &income.deductions {
            hasher.update(deduction.id.as_bytes());
            hasher.update(b",");
            hasher.update(normalize_decimal(deduction.amount).as_bytes());
            hasher.update(b",");
            hasher.update(if deduction.is_tax_deductible { b"d" } else { b"-" } as &[u8]);
            hasher.update(b";");
        }
        hasher.update(b"\n");
    }
    hasher.update(b"#");

    for expense in expenses {
        hasher.update(expense.id.as_bytes());
        hasher.update(b"|");
        hasher.update(normalize_decimal(expense.amount).as_bytes());
        hasher.update(b"|");
        hasher.update(expense.category.as_bytes());
        hasher.update(b"|");
        hasher.update(format!("{:?}", expense.frequency).as_bytes());
        hasher.update(b"\n");
    }
    hasher.update(b"#");

    // Tax config changes invalidate everything downstream.
    hasher.update(serde_json::to_string(tax_config).unwrap_or_default().as_bytes());
    hasher.update(b"#");
    hasher.update(format!("{:?}", display_period).as_bytes());
    hasher.update(b"#");
    hasher.update(currency.as_bytes());

    hex::encode(hasher.finalize())
}
