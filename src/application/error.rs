use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (type 'help' for a list of commands)")]
    UnknownCommand(String),

    #[error("Missing amount for '{0}'")]
    MissingAmount(String),

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("Unknown history format: {0}. Valid formats: text, csv, json")]
    UnknownFormat(String),
}
