use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::application::TellerService;
use crate::domain::{format_cents, Cents, Transaction};

/// Session history snapshot for JSON output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorySnapshot {
    pub exported_at: DateTime<Utc>,
    pub currency_symbol: String,
    pub balance_cents: Cents,
    pub transactions: Vec<Transaction>,
}

/// Exporter for writing the session history in machine-readable formats
pub struct HistoryExporter<'a> {
    service: &'a TellerService,
}

impl<'a> HistoryExporter<'a> {
    pub fn new(service: &'a TellerService) -> Self {
        Self { service }
    }

    /// Export history to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["sequence", "id", "kind", "amount", "timestamp"])?;

        let mut count = 0;
        for tx in self.service.history() {
            csv_writer.write_record(&[
                tx.sequence.to_string(),
                tx.id.to_string(),
                tx.kind.as_str().to_string(),
                format_cents(tx.amount_cents),
                tx.timestamp.to_rfc3339(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export history and balance as a JSON snapshot
    pub fn export_json<W: Write>(&self, mut writer: W) -> Result<HistorySnapshot> {
        let snapshot = HistorySnapshot {
            exported_at: Utc::now(),
            currency_symbol: self.service.config().currency_symbol.clone(),
            balance_cents: self.service.balance(),
            transactions: self.service.history().to_vec(),
        };

        serde_json::to_writer_pretty(&mut writer, &snapshot)?;
        writeln!(writer)?;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_service() -> TellerService {
        let mut service = TellerService::default();
        service.deposit("100");
        service.withdraw("150");
        service.withdraw("40.5");
        service
    }

    #[test]
    fn test_export_csv() {
        let service = sample_service();
        let mut out = Vec::new();

        let count = HistoryExporter::new(&service).export_csv(&mut out).unwrap();

        assert_eq!(count, 2);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "sequence,id,kind,amount,timestamp");
        assert!(lines[1].starts_with("1,"));
        assert!(lines[1].contains(",deposit,100.00,"));
        assert!(lines[2].contains(",withdraw,40.50,"));
    }

    #[test]
    fn test_export_json_roundtrips_history() {
        let service = sample_service();
        let mut out = Vec::new();

        let snapshot = HistoryExporter::new(&service).export_json(&mut out).unwrap();
        let parsed: HistorySnapshot = serde_json::from_slice(&out).unwrap();

        assert_eq!(snapshot.balance_cents, 5950);
        assert_eq!(parsed.balance_cents, 5950);
        assert_eq!(parsed.transactions, service.history());
        assert_eq!(parsed.currency_symbol, "$");
    }
}
