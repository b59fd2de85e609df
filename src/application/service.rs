use chrono::{DateTime, Utc};

use crate::domain::{
    format_amount, parse_cents, Cents, Ledger, LedgerError, Outcome, ParseCentsError,
    Transaction,
};

use super::SessionConfig;

/// Application service for one teller session.
/// This is the primary interface for any client (CLI, tests, a future UI).
pub struct TellerService {
    ledger: Ledger,
    config: SessionConfig,
}

/// Result of a deposit or withdrawal, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct OperationResult {
    pub message: String,
    pub outcome: Outcome,
}

impl OperationResult {
    pub fn balance(&self) -> Cents {
        self.outcome.balance
    }

    pub fn is_accepted(&self) -> bool {
        self.outcome.is_accepted()
    }
}

impl TellerService {
    /// Start a session with an empty ledger.
    pub fn new(config: SessionConfig) -> Self {
        tracing::debug!(
            currency = %config.currency_symbol,
            style = %config.style,
            "Session started"
        );
        Self {
            ledger: Ledger::new(),
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn balance(&self) -> Cents {
        self.ledger.balance()
    }

    pub fn history(&self) -> &[Transaction] {
        self.ledger.history()
    }

    /// Balance formatted for display ("$60", "$12.5").
    pub fn balance_display(&self) -> String {
        format!("{}{}", self.config.currency_symbol, format_amount(self.balance()))
    }

    // ========================
    // Ledger operations
    // ========================

    /// Deposit an amount typed by the user.
    pub fn deposit(&mut self, raw_amount: &str) -> OperationResult {
        self.deposit_at(raw_amount, Utc::now())
    }

    /// Withdraw an amount typed by the user.
    pub fn withdraw(&mut self, raw_amount: &str) -> OperationResult {
        self.withdraw_at(raw_amount, Utc::now())
    }

    pub fn deposit_at(&mut self, raw_amount: &str, timestamp: DateTime<Utc>) -> OperationResult {
        let outcome = match parse_cents(raw_amount) {
            Ok(amount_cents) => self.ledger.deposit(amount_cents, timestamp),
            Err(e) => self.reject_input("deposit", raw_amount, e),
        };
        self.report("deposit", raw_amount, outcome)
    }

    pub fn withdraw_at(&mut self, raw_amount: &str, timestamp: DateTime<Utc>) -> OperationResult {
        let outcome = match parse_cents(raw_amount) {
            Ok(amount_cents) => self.ledger.withdraw(amount_cents, timestamp),
            Err(e) => self.reject_input("withdraw", raw_amount, e),
        };
        self.report("withdraw", raw_amount, outcome)
    }

    /// Text that does not parse as whole cents never reaches the ledger.
    fn reject_input(&self, operation: &str, raw_amount: &str, error: ParseCentsError) -> Outcome {
        tracing::debug!(operation, input = raw_amount, error = %error, "Amount did not parse");
        self.ledger.reject(LedgerError::InvalidAmount)
    }

    fn report(&self, operation: &str, raw_amount: &str, outcome: Outcome) -> OperationResult {
        match &outcome.result {
            Ok(tx) => tracing::info!(
                operation,
                amount_cents = tx.amount_cents,
                sequence = tx.sequence,
                balance = outcome.balance,
                "Operation accepted"
            ),
            Err(e) => tracing::info!(
                operation,
                input = raw_amount,
                balance = outcome.balance,
                reason = ?e,
                "Operation rejected"
            ),
        }

        let message = outcome.message(&self.config.currency_symbol, self.config.style);
        OperationResult { message, outcome }
    }
}

impl Default for TellerService {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::MessageStyle;

    use super::*;

    #[test]
    fn test_deposit_parses_text() {
        let mut service = TellerService::default();
        let result = service.deposit("12.5");

        assert!(result.is_accepted());
        assert_eq!(result.message, "Deposited $12.5.");
        assert_eq!(service.balance(), 1250);
        assert_eq!(service.balance_display(), "$12.5");
    }

    #[test]
    fn test_malformed_input_is_invalid_amount() {
        let mut service = TellerService::default();
        for raw in ["", "abc", "NaN", "-5", "0"] {
            let result = service.deposit(raw);
            assert_eq!(result.outcome.result, Err(LedgerError::InvalidAmount), "{:?}", raw);
            assert_eq!(result.message, "Please enter a valid amount!");
        }
        assert_eq!(service.balance(), 0);
        assert!(service.history().is_empty());
    }

    #[test]
    fn test_terse_style_and_symbol() {
        let mut service = TellerService::new(SessionConfig::new("€", MessageStyle::Terse));
        service.deposit("10");

        let result = service.withdraw("20");

        assert_eq!(result.message, "Insufficient balance.");
        assert_eq!(result.balance(), 1000);
        assert_eq!(service.balance_display(), "€10");
    }

    #[test]
    fn test_sub_cent_amounts_are_refused_not_truncated() {
        let mut service = TellerService::default();
        service.deposit("100");

        for raw in ["100.999", "0.001", "0.005"] {
            let deposit = service.deposit(raw);
            assert_eq!(deposit.outcome.result, Err(LedgerError::InvalidAmount), "{:?}", raw);
            assert_eq!(deposit.message, "Please enter a valid amount!");

            let withdraw = service.withdraw(raw);
            assert_eq!(withdraw.outcome.result, Err(LedgerError::InvalidAmount), "{:?}", raw);
        }

        assert_eq!(service.balance(), 10000);
        assert_eq!(service.history().len(), 1);
    }

    #[test]
    fn test_trailing_zero_decimals_are_exact() {
        let mut service = TellerService::default();
        let result = service.deposit("100.990");

        assert_eq!(result.message, "Deposited $100.99.");
        assert_eq!(service.balance(), 10099);
    }
}
