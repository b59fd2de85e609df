// Application layer: session orchestration on top of the domain ledger.

pub mod command;
pub mod config;
pub mod error;
pub mod service;

pub use command::*;
pub use config::*;
pub use error::*;
pub use service::*;
