use crate::domain::MessageStyle;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Settings for one teller session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Prefix for amounts in messages and history ("$", "€", ...)
    pub currency_symbol: String,
    pub style: MessageStyle,
}

impl SessionConfig {
    pub fn new(currency_symbol: impl Into<String>, style: MessageStyle) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            style,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL, MessageStyle::Standard)
    }
}
