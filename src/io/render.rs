use std::io::{self, Write};

use crate::application::OperationResult;
use crate::domain::{format_history_entry, FormStatus, Transaction};

/// Output collaborator. Receives what the ledger produced and decides how to show it.
pub trait Presenter {
    fn present_result(&mut self, result: &OperationResult) -> io::Result<()>;

    fn present_balance(&mut self, balance: &str) -> io::Result<()>;

    /// Accepted transactions, oldest first.
    fn present_history(
        &mut self,
        history: &[Transaction],
        currency_symbol: &str,
    ) -> io::Result<()>;

    fn present_form_status(&mut self, status: &FormStatus) -> io::Result<()>;

    /// Free-form text: help, errors in the input, raw exports.
    fn present_notice(&mut self, text: &str) -> io::Result<()>;

    /// Direct access to the sink for machine-readable output.
    fn writer(&mut self) -> &mut dyn Write;
}

/// Plain-text presenter for terminals and pipes.
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn present_result(&mut self, result: &OperationResult) -> io::Result<()> {
        writeln!(self.out, "[{}] {}", result.outcome.tone().color(), result.message)
    }

    fn present_balance(&mut self, balance: &str) -> io::Result<()> {
        writeln!(self.out, "Balance: {}", balance)
    }

    fn present_history(
        &mut self,
        history: &[Transaction],
        currency_symbol: &str,
    ) -> io::Result<()> {
        if history.is_empty() {
            return writeln!(self.out, "No transactions yet.");
        }
        for tx in history {
            writeln!(
                self.out,
                "{:>3}. [{}] {}",
                tx.sequence,
                tx.kind.tone().color(),
                format_history_entry(tx, currency_symbol)
            )?;
        }
        Ok(())
    }

    fn present_form_status(&mut self, status: &FormStatus) -> io::Result<()> {
        writeln!(self.out, "[{}] {}", status.tone.color(), status.message)
    }

    fn present_notice(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    fn writer(&mut self) -> &mut dyn Write {
        &mut self.out
    }
}
