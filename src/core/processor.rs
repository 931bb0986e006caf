//! Command processor - validates chat command arguments and talks to the ledger.
//!
//! Every command is a single request/response. `/receita` and `/despesa` share one
//! validation pipeline ([`parse_record_args`]) parameterized by kind and label. Invalid
//! input is answered with a warning and never reaches the ledger; storage failures are
//! returned as [`Error`](crate::errors::Error) for the transport to report.

use super::{
    ledger::Ledger,
    summary::{ChatSummary, format_amount},
};
use crate::{config::settings::BotSettings, entities::Kind, errors::Result};
use thiserror::Error;
use tracing::{debug, instrument};

/// User input problems. The `Display` text is the reply sent to the chat.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Fewer than two tokens (amount and category)
    #[error("⚠ Uso correto: /{label} <valor> <categoria>")]
    MissingArguments {
        /// Command alias the user typed
        label: String,
    },

    /// First token is not a decimal number with `.` as separator
    #[error("⚠ O valor deve ser um número. (Utilize ponto no lugar da vírgula)")]
    NotANumber,

    /// Amount is zero or negative
    #[error("⚠ O valor deve ser um número positivo.")]
    NotPositive,
}

/// Validated arguments of a record command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordArgs<'a> {
    /// Strictly positive, finite amount
    pub amount: f64,
    /// Second token, taken verbatim
    pub category: &'a str,
}

/// Splits raw argument text into whitespace-separated tokens.
#[must_use]
pub fn tokenize(raw: Option<&str>) -> Vec<&str> {
    raw.map(|text| text.split_whitespace().collect())
        .unwrap_or_default()
}

/// Runs the record validation pipeline, stopping at the first failure:
/// arity, numeric parse, positivity. Tokens after the second are ignored.
pub fn parse_record_args<'a, S: AsRef<str>>(
    args: &'a [S],
    label: &str,
) -> std::result::Result<RecordArgs<'a>, InputError> {
    let [amount_text, category, ..] = args else {
        return Err(InputError::MissingArguments {
            label: label.to_string(),
        });
    };

    let amount = amount_text
        .as_ref()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or(InputError::NotANumber)?;

    if amount <= 0.0 {
        return Err(InputError::NotPositive);
    }

    Ok(RecordArgs {
        amount,
        category: category.as_ref(),
    })
}

/// Handles ledger commands for any transport.
#[derive(Debug, Clone)]
pub struct CommandProcessor {
    ledger: Ledger,
    owner_name: String,
}

impl CommandProcessor {
    /// Creates a processor over an already initialized ledger.
    #[must_use]
    pub fn new(ledger: Ledger, settings: &BotSettings) -> Self {
        Self {
            ledger,
            owner_name: settings.owner_name.clone(),
        }
    }

    #[cfg(test)]
    pub(crate) const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Validates `args` and records an income or expense.
    ///
    /// Returns the reply text: a warning for invalid input (nothing is stored) or a
    /// confirmation echoing `label`, the amount and the category.
    #[instrument(skip(self, args))]
    pub async fn handle_record<S: AsRef<str>>(
        &self,
        args: &[S],
        chat_id: i64,
        user_id: i64,
        kind: Kind,
        label: &str,
    ) -> Result<String> {
        let RecordArgs { amount, category } = match parse_record_args(args, label) {
            Ok(parsed) => parsed,
            Err(rejection) => {
                debug!("Rejected /{} input: {:?}", label, rejection);
                return Ok(rejection.to_string());
            }
        };

        self.ledger
            .record(chat_id, user_id, kind, category, amount)
            .await?;

        Ok(format!(
            "✅ Registrado {label} de {} em {category}",
            format_amount(amount)
        ))
    }

    /// Reports income, expense and balance for the chat.
    #[instrument(skip(self))]
    pub async fn handle_summary(&self, chat_id: i64) -> Result<String> {
        let totals = self.ledger.aggregate_by_kind(chat_id).await?;
        Ok(ChatSummary::from_totals(&totals).to_string())
    }

    /// Static greeting listing the available commands.
    #[must_use]
    pub fn handle_start(&self) -> String {
        format!(
            "👋 Olá! Eu sou o bot de finanças do {}.\n\n\
             Use os comandos:\n\
             • /receita <valor> <categoria>\n\
             • /despesa <valor> <categoria>\n\
             • /resumo -> mostra o balanço deste chat",
            self.owner_name
        )
    }
}
