use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::cashbook::{self, WriteOutcome};
use crate::config::Config;
use crate::marker;
use crate::notimon::{self, DailyRecords, NotificationRecord};
use crate::parser;

/// What happened during one import run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub num_files: usize,
    pub num_records: usize,
    pub num_matched: usize,
    pub num_not_matched: usize,
    pub num_already_imported: usize,
    /// Documents written, or in a dry run the documents that would have been written
    pub written: Vec<PathBuf>,
}

pub struct Importer<'a> {
    cash_book_path: &'a Path,
    dry_run: bool,
}

impl<'a> Importer<'a> {
    pub fn new(cash_book_path: &'a Path) -> Self {
        Self {
            cash_book_path,
            dry_run: false,
        }
    }

    /// Parse everything but don't write any documents
    pub fn dry_run(self) -> Self {
        Self {
            dry_run: true,
            ..self
        }
    }

    pub fn import(&self, daily_records: &DailyRecords) -> Result<ImportSummary> {
        let mut summary = ImportSummary {
            num_files: daily_records.len(),
            ..ImportSummary::default()
        };
        for (date, records) in daily_records {
            log::debug!("Importing {} records of {}", records.len(), date);
            for record in records {
                self.import_record(record, &mut summary)?;
            }
        }
        Ok(summary)
    }

    fn import_record(&self, record: &NotificationRecord, summary: &mut ImportSummary) -> Result<()> {
        summary.num_records += 1;
        let Some(entry) = parser::parse(record, self.cash_book_path) else {
            log::debug!(
                "No grammar matched notification from {} at {}",
                record.package,
                record.timestamp
            );
            summary.num_not_matched += 1;
            return Ok(());
        };
        summary.num_matched += 1;

        let outcome = if self.dry_run {
            // A path written earlier in this run would already exist in a real run
            if entry.path.exists() || summary.written.contains(&entry.path) {
                WriteOutcome::AlreadyExists
            } else {
                WriteOutcome::Written
            }
        } else {
            cashbook::write(&entry)?
        };
        match outcome {
            WriteOutcome::Written => summary.written.push(entry.path),
            WriteOutcome::AlreadyExists => summary.num_already_imported += 1,
        }
        Ok(())
    }
}

/// Imports all notifications logged since the marker date into the cash book
pub fn import_to_cashbook(config: &Config, dry_run: bool) -> Result<ImportSummary> {
    let watermark = marker::load(&config.cash_book_path)?;
    let files = notimon::scan(&config.notimon_log_path, &watermark)?;
    let daily_records = notimon::read(&files)?;

    let importer = Importer::new(&config.cash_book_path);
    let importer = if dry_run { importer.dry_run() } else { importer };
    let summary = importer.import(&daily_records)?;

    log::info!(
        "Imported {} of {} records, {} already imported",
        summary.written.len(),
        summary.num_records,
        summary.num_already_imported,
    );
    Ok(summary)
}
