//! Per-chat balance summary.
//!
//! Turns the per-kind totals returned by the ledger into the three figures shown by
//! `/resumo`. Missing kinds count as zero.

use super::ledger::KindTotals;
use crate::entities::Kind;
use std::fmt;

/// Income, expense and balance for one chat.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChatSummary {
    /// Sum of all income
    pub income: f64,
    /// Sum of all expenses
    pub expense: f64,
}

impl ChatSummary {
    /// Builds a summary from ledger totals, treating absent kinds as zero.
    #[must_use]
    pub fn from_totals(totals: &KindTotals) -> Self {
        Self {
            income: totals.get(&Kind::Income).copied().unwrap_or(0.0),
            expense: totals.get(&Kind::Expense).copied().unwrap_or(0.0),
        }
    }

    /// `income - expense`
    #[must_use]
    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }
}

impl fmt::Display for ChatSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📊 Resumo deste chat:")?;
        writeln!(f, "💰 Receitas: {}", format_amount(self.income))?;
        writeln!(f, "🛒 Despesas: {}", format_amount(self.expense))?;
        write!(f, "Saldo: {}", format_amount(self.balance()))
    }
}

/// Plain text form of an amount: shortest round-trip decimal, always with a fractional
/// part (`1000.0`, `0.1`). No rounding, currency symbol or thousands separator.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("{amount:?}")
}
