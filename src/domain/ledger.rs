use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{format_amount, Cents, Tone, Transaction, TransactionKind};

/// Why the ledger refused an operation. Rejections never change the ledger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Please enter a valid amount!")]
    InvalidAmount,

    #[error("Insufficient funds!")]
    InsufficientFunds { balance: Cents, requested: Cents },
}

/// Wording used for outcome messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStyle {
    /// Full teller wording ("Insufficient funds!")
    #[default]
    Standard,
    /// Plain calculator wording ("Insufficient balance.")
    Terse,
}

impl MessageStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStyle::Standard => "standard",
            MessageStyle::Terse => "terse",
        }
    }
}

impl FromStr for MessageStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(MessageStyle::Standard),
            "terse" => Ok(MessageStyle::Terse),
            other => Err(format!("unknown message style '{}'", other)),
        }
    }
}

impl fmt::Display for MessageStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a single ledger operation: the balance after it ran, and either the
/// recorded transaction or the rejection reason.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub balance: Cents,
    pub result: Result<Transaction, LedgerError>,
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        self.result.is_ok()
    }

    pub fn transaction(&self) -> Option<&Transaction> {
        self.result.as_ref().ok()
    }

    pub fn rejection(&self) -> Option<&LedgerError> {
        self.result.as_ref().err()
    }

    pub fn tone(&self) -> Tone {
        match &self.result {
            Ok(tx) => tx.kind.tone(),
            Err(_) => Tone::Negative,
        }
    }

    /// User-facing message, e.g. "Deposited $100." or "Insufficient funds!".
    pub fn message(&self, currency_symbol: &str, style: MessageStyle) -> String {
        match (&self.result, style) {
            (Ok(tx), _) => format!(
                "{} {}{}.",
                tx.kind.verb(),
                currency_symbol,
                format_amount(tx.amount_cents)
            ),
            (Err(LedgerError::InsufficientFunds { .. }), MessageStyle::Terse) => {
                "Insufficient balance.".to_string()
            }
            (Err(e), _) => e.to_string(),
        }
    }
}

/// In-memory balance and append-only history for one session.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    balance: Cents,
    history: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> Cents {
        self.balance
    }

    /// Accepted transactions, oldest first.
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    pub fn deposit(&mut self, amount_cents: Cents, timestamp: DateTime<Utc>) -> Outcome {
        if amount_cents <= 0 {
            return self.reject(LedgerError::InvalidAmount);
        }
        let Some(new_balance) = self.balance.checked_add(amount_cents) else {
            return self.reject(LedgerError::InvalidAmount);
        };

        self.apply(TransactionKind::Deposit, amount_cents, new_balance, timestamp)
    }

    pub fn withdraw(&mut self, amount_cents: Cents, timestamp: DateTime<Utc>) -> Outcome {
        if amount_cents <= 0 {
            return self.reject(LedgerError::InvalidAmount);
        }
        if amount_cents > self.balance {
            return self.reject(LedgerError::InsufficientFunds {
                balance: self.balance,
                requested: amount_cents,
            });
        }

        let new_balance = self.balance - amount_cents;
        self.apply(TransactionKind::Withdraw, amount_cents, new_balance, timestamp)
    }

    /// Reject without touching the ledger.
    pub fn reject(&self, error: LedgerError) -> Outcome {
        Outcome {
            balance: self.balance,
            result: Err(error),
        }
    }

    fn apply(
        &mut self,
        kind: TransactionKind,
        amount_cents: Cents,
        new_balance: Cents,
        timestamp: DateTime<Utc>,
    ) -> Outcome {
        let sequence = self.history.len() as u64 + 1;
        let transaction = Transaction::new(kind, amount_cents, timestamp).with_sequence(sequence);

        self.balance = new_balance;
        self.history.push(transaction.clone());

        Outcome {
            balance: self.balance,
            result: Ok(transaction),
        }
    }
}

/// Recompute a balance by replaying transactions in order.
pub fn replay_balance(transactions: &[Transaction]) -> Cents {
    transactions.iter().map(Transaction::signed_amount).sum()
}
