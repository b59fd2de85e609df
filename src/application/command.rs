use std::str::FromStr;

use super::CommandError;

/// Output format for the `history` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HistoryFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl FromStr for HistoryFormat {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(HistoryFormat::Text),
            "csv" => Ok(HistoryFormat::Csv),
            "json" => Ok(HistoryFormat::Json),
            other => Err(CommandError::UnknownFormat(other.to_string())),
        }
    }
}

/// One line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Raw amount text, parsed by the service
    Deposit(String),
    Withdraw(String),
    Balance,
    History(HistoryFormat),
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse a line. Returns `Ok(None)` for blank lines and `#` comments.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let head = head.to_lowercase();
        let arg = words.next();
        if let Some(extra) = words.next() {
            return Err(CommandError::UnexpectedArgument(extra.to_string()));
        }

        let command = match head.as_str() {
            "deposit" | "d" => SessionCommand::Deposit(required_amount(&head, arg)?),
            "withdraw" | "w" => SessionCommand::Withdraw(required_amount(&head, arg)?),
            "balance" | "b" => no_argument(SessionCommand::Balance, arg)?,
            "history" | "h" => {
                let format = arg
                    .map(str::parse::<HistoryFormat>)
                    .transpose()?
                    .unwrap_or_default();
                SessionCommand::History(format)
            }
            "help" | "?" => no_argument(SessionCommand::Help, arg)?,
            "quit" | "exit" | "q" => no_argument(SessionCommand::Quit, arg)?,
            _ => return Err(CommandError::UnknownCommand(head)),
        };
        Ok(Some(command))
    }
}

fn required_amount(command: &str, arg: Option<&str>) -> Result<String, CommandError> {
    arg.map(str::to_string)
        .ok_or_else(|| CommandError::MissingAmount(command.to_string()))
}

fn no_argument(command: SessionCommand, arg: Option<&str>) -> Result<SessionCommand, CommandError> {
    match arg {
        Some(extra) => Err(CommandError::UnexpectedArgument(extra.to_string())),
        None => Ok(command),
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  deposit <amount>        Add money (alias: d)
  withdraw <amount>       Take money out (alias: w)
  balance                 Show the current balance (alias: b)
  history [text|csv|json] List accepted transactions (alias: h)
  help                    Show this help
  quit                    End the session";
