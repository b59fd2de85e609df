use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{format_amount, Cents};

pub type TransactionId = Uuid;

/// Separator between the amount and the time in a history entry.
pub const HISTORY_SEPARATOR: &str = " ----- ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdraw => "withdraw",
        }
    }

    /// Past-tense verb used in messages and history entries.
    pub fn verb(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposited",
            TransactionKind::Withdraw => "Withdrew",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            TransactionKind::Deposit => Tone::Positive,
            TransactionKind::Withdraw => Tone::Negative,
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "deposit" => Ok(TransactionKind::Deposit),
            "withdraw" | "withdrawal" => Ok(TransactionKind::Withdraw),
            other => Err(format!("unknown transaction kind '{}'", other)),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display hint for renderers. The ledger only classifies; styling is up to the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Accepted deposits (green)
    Positive,
    /// Withdrawals and rejections (red)
    Negative,
    /// Informational (blue)
    Notice,
    /// Missing input (orange)
    Warning,
}

impl Tone {
    pub fn color(&self) -> &'static str {
        match self {
            Tone::Positive => "green",
            Tone::Negative => "red",
            Tone::Notice => "blue",
            Tone::Warning => "orange",
        }
    }
}

/// A single accepted deposit or withdrawal. Transactions are immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    /// 1-based position in the ledger history
    pub sequence: u64,
    pub kind: TransactionKind,
    /// Amount in cents (always positive)
    pub amount_cents: Cents,
    /// When the ledger accepted the operation
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction. Sequence number is assigned by the ledger.
    pub fn new(kind: TransactionKind, amount_cents: Cents, timestamp: DateTime<Utc>) -> Self {
        assert!(amount_cents > 0, "Transaction amount must be positive");
        Self {
            id: Uuid::new_v4(),
            sequence: 0,
            kind,
            amount_cents,
            timestamp,
        }
    }

    pub fn with_sequence(mut self, sequence: u64) -> Self {
        self.sequence = sequence;
        self
    }

    /// Signed effect on the balance.
    pub fn signed_amount(&self) -> Cents {
        match self.kind {
            TransactionKind::Deposit => self.amount_cents,
            TransactionKind::Withdraw => -self.amount_cents,
        }
    }
}

/// Format a history entry in the local time zone:
/// "Deposited $100 ----- 3:04:05 PM"
pub fn format_history_entry(tx: &Transaction, currency_symbol: &str) -> String {
    format_history_entry_in(tx, currency_symbol, &Local)
}

/// Same as [`format_history_entry`] with an explicit time zone.
pub fn format_history_entry_in<Tz>(tx: &Transaction, currency_symbol: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let time = tx.timestamp.with_timezone(tz).format("%-I:%M:%S %p");
    format!(
        "{} {}{}{}{}",
        tx.kind.verb(),
        currency_symbol,
        format_amount(tx.amount_cents),
        HISTORY_SEPARATOR,
        time
    )
}
