use anyhow::{anyhow, Context as _, Result};
use std::{fs::File, io::ErrorKind};

use super::{DailyRecords, LogFile, NotificationRecord};

/// Reads the records of all `files`. The mapping keeps the order of `files`.
///
/// The first row of each file is a header and always discarded, whatever its content.
/// The remaining rows are taken positionally as `Timestamp,Package,Title,Text`.
pub fn read(files: &[LogFile]) -> Result<DailyRecords> {
    let mut found = DailyRecords::new();
    for file in files {
        let records = read_file(file)?;
        log::debug!("Read {} records from {}", records.len(), file.path.display());
        found.insert(file.date_key(), records);
    }
    Ok(found)
}

fn read_file(file: &LogFile) -> Result<Vec<NotificationRecord>> {
    let handle = match File::open(&file.path) {
        Ok(handle) => handle,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(anyhow!("File not found: {}", file.path.display()))
        }
        Err(err) => {
            return Err(err).with_context(|| anyhow!("Failed to open {}", file.path.display()))
        }
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(handle);
    reader
        .records()
        .map(|record| -> Result<NotificationRecord> {
            let record =
                record.with_context(|| anyhow!("Failed to read {}", file.path.display()))?;
            Ok(NotificationRecord::from_csv(&record))
        })
        .collect()
}

impl NotificationRecord {
    fn from_csv(record: &csv::StringRecord) -> Self {
        let field = |index: usize| record.get(index).unwrap_or_default().to_string();
        Self {
            timestamp: field(0),
            package: field(1),
            title: field(2),
            text: field(3),
        }
    }
}
