mod session;

pub use session::*;

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::application::{SessionConfig, TellerService, DEFAULT_CURRENCY_SYMBOL};
use crate::domain::{validate_login, LoginForm, MessageStyle};
use crate::io::{Presenter, TextPresenter};

/// Teller - in-memory deposit/withdraw ledger
#[derive(Parser)]
#[command(name = "teller")]
#[command(about = "Deposit and withdraw against an in-memory balance, with a transaction log")]
#[command(version)]
pub struct Cli {
    /// Currency symbol shown in front of amounts
    #[arg(long, global = true, env = "TELLER_CURRENCY", default_value = DEFAULT_CURRENCY_SYMBOL)]
    pub currency: String,

    /// Message wording: standard, terse
    #[arg(long, global = true, env = "TELLER_STYLE", default_value = "standard")]
    pub style: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session on stdin
    Session,

    /// Run a command script non-interactively, then print the final balance
    Replay {
        /// Script file (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Validate login form fields
    Validate {
        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        password: String,

        #[arg(long, default_value = "")]
        age: String,
    },
}

impl Cli {
    pub fn session_config(&self) -> Result<SessionConfig> {
        let style: MessageStyle = self.style.parse().map_err(|e| {
            anyhow::anyhow!(
                "Invalid style '{}'. Valid styles: standard, terse. Error: {}",
                self.style,
                e
            )
        })?;
        Ok(SessionConfig::new(self.currency.clone(), style))
    }

    /// Dispatch the command. `validate` reports an incomplete form as a failure exit code.
    pub fn run(self) -> Result<ExitCode> {
        let config = self.session_config()?;
        let mut presenter = TextPresenter::new(io::stdout().lock());

        match self.command {
            Commands::Session => {
                let mut service = TellerService::new(config);
                let stdin = io::stdin();
                let interactive = stdin.is_terminal();
                run_session(&mut service, stdin.lock(), &mut presenter, interactive)?;
            }

            Commands::Replay { input } => {
                let mut service = TellerService::new(config);
                let summary = match input.as_deref() {
                    Some(path) => {
                        let file = File::open(path)
                            .with_context(|| format!("Failed to open script file: {}", path))?;
                        run_session(&mut service, BufReader::new(file), &mut presenter, false)?
                    }
                    None => run_session(&mut service, io::stdin().lock(), &mut presenter, false)?,
                };

                presenter.present_notice(&format!(
                    "Final balance: {} ({} accepted, {} rejected)",
                    service.balance_display(),
                    summary.accepted,
                    summary.rejected
                ))?;
                if summary.invalid_lines > 0 {
                    eprintln!("Skipped {} invalid line(s)", summary.invalid_lines);
                }
            }

            Commands::Validate {
                email,
                password,
                age,
            } => {
                let form = LoginForm {
                    email,
                    password,
                    age,
                };
                if !run_validate(&form, &mut presenter)? {
                    return Ok(ExitCode::FAILURE);
                }
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}

/// Validate the form and show its status. Returns whether the login succeeded.
pub fn run_validate(form: &LoginForm, presenter: &mut dyn Presenter) -> Result<bool> {
    let status = validate_login(form);
    presenter.present_form_status(&status)?;
    Ok(status.is_success())
}
