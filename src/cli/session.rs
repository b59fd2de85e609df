use std::io::BufRead;

use anyhow::{Context, Result};

use crate::application::{HistoryFormat, SessionCommand, TellerService, HELP_TEXT};
use crate::io::{HistoryExporter, Presenter};

const PROMPT: &str = "> ";

/// Summary of a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub accepted: usize,
    pub rejected: usize,
    pub invalid_lines: usize,
}

/// Read commands line by line and hand every result to the presenter.
/// Stops at end of input or on `quit`.
pub fn run_session<R: BufRead>(
    service: &mut TellerService,
    reader: R,
    presenter: &mut dyn Presenter,
    interactive: bool,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();

    if interactive {
        presenter.present_notice("Type 'help' for a list of commands.")?;
        prompt(presenter)?;
    }

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read input line {}", index + 1))?;

        match SessionCommand::parse(&line) {
            Ok(Some(SessionCommand::Quit)) => break,
            Ok(Some(command)) => run_command(service, command, presenter, &mut summary)?,
            Ok(None) => {}
            Err(e) => {
                tracing::debug!(line = index + 1, error = %e, "Invalid session input");
                summary.invalid_lines += 1;
                if interactive {
                    presenter.present_notice(&e.to_string())?;
                } else {
                    presenter.present_notice(&format!("line {}: {}", index + 1, e))?;
                }
            }
        }

        if interactive {
            prompt(presenter)?;
        }
    }

    tracing::info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        invalid_lines = summary.invalid_lines,
        balance = service.balance(),
        "Session ended"
    );
    Ok(summary)
}

fn run_command(
    service: &mut TellerService,
    command: SessionCommand,
    presenter: &mut dyn Presenter,
    summary: &mut SessionSummary,
) -> Result<()> {
    match command {
        SessionCommand::Deposit(raw) => {
            let result = service.deposit(&raw);
            tally(summary, result.is_accepted());
            presenter.present_result(&result)?;
            presenter.present_balance(&service.balance_display())?;
        }
        SessionCommand::Withdraw(raw) => {
            let result = service.withdraw(&raw);
            tally(summary, result.is_accepted());
            presenter.present_result(&result)?;
            presenter.present_balance(&service.balance_display())?;
        }
        SessionCommand::Balance => presenter.present_balance(&service.balance_display())?,
        SessionCommand::History(format) => {
            let exporter = HistoryExporter::new(service);
            match format {
                HistoryFormat::Text => presenter
                    .present_history(service.history(), &service.config().currency_symbol)?,
                HistoryFormat::Csv => {
                    exporter.export_csv(presenter.writer())?;
                }
                HistoryFormat::Json => {
                    exporter.export_json(presenter.writer())?;
                }
            }
        }
        SessionCommand::Help => presenter.present_notice(HELP_TEXT)?,
        SessionCommand::Quit => {}
    }
    Ok(())
}

fn tally(summary: &mut SessionSummary, accepted: bool) {
    if accepted {
        summary.accepted += 1;
    } else {
        summary.rejected += 1;
    }
}

fn prompt(presenter: &mut dyn Presenter) -> Result<()> {
    let out = presenter.writer();
    write!(out, "{}", PROMPT)?;
    out.flush()?;
    Ok(())
}
