use anyhow::{anyhow, Context as _, Result};
use std::{
    fs::OpenOptions,
    io::{ErrorKind, Write as _},
};

use crate::parser::LedgerEntry;

const FRONT_MATTER_DELIMITER: &str = "---";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// A document already exists at the entry's path and was left untouched
    AlreadyExists,
}

/// Writes the cashbook document for `entry` unless one already exists at its path.
pub fn write(entry: &LedgerEntry) -> Result<WriteOutcome> {
    if entry.path.exists() {
        log::debug!("{} already exists", entry.path.display());
        return Ok(WriteOutcome::AlreadyExists);
    }
    if let Some(parent) = entry.path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| anyhow!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&entry.path)
    {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::AlreadyExists => {
            log::debug!("{} already exists", entry.path.display());
            return Ok(WriteOutcome::AlreadyExists);
        }
        Err(err) => {
            return Err(err).with_context(|| anyhow!("Failed to create {}", entry.path.display()))
        }
    };
    file.write_all(render(entry).as_bytes())
        .with_context(|| anyhow!("Failed to write {}", entry.path.display()))?;

    log::info!("Wrote {}", entry.path.display());
    Ok(WriteOutcome::Written)
}

/// The markdown document for `entry`, consisting of the front-matter only
pub fn render(entry: &LedgerEntry) -> String {
    let properties = [
        ("일시", entry.formatted_timestamp()),
        ("패키지", entry.package.clone()),
        ("항목", entry.title.clone()),
        ("입출금분류", entry.category.clone()),
        ("설명", entry.description.clone()),
        ("금액", entry.amount.to_string()),
        ("계좌", entry.account.clone()),
        ("잔액(알림)", entry.balance.to_string()),
    ];
    let mut document = format!("{FRONT_MATTER_DELIMITER}\n");
    for (label, value) in properties {
        document.push_str(&format!("{label}: {value}\n"));
    }
    document.push_str(&format!("{FRONT_MATTER_DELIMITER}\n"));
    document
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::path::Path;

    use super::*;
    use crate::parser::destination_path;

    fn entry(cash_book_path: &Path) -> LedgerEntry {
        let timestamp = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        LedgerEntry {
            path: destination_path(cash_book_path, &timestamp),
            timestamp,
            package: "com.wooribank.smart.npib".to_string(),
            title: "가게이름".to_string(),
            category: String::new(),
            description: String::new(),
            amount: -10000,
            account: "110-123-456".to_string(),
            balance: 90000,
        }
    }

    const EXPECTED_DOCUMENT: &str = "---
일시: 2024-03-15T09:30:00
패키지: com.wooribank.smart.npib
항목: 가게이름
입출금분류: 
설명: 
금액: -10000
계좌: 110-123-456
잔액(알림): 90000
---
";

    #[test]
    fn test_render() {
        assert_eq!(EXPECTED_DOCUMENT, render(&entry(Path::new("/cashbook"))));
    }

    #[test]
    fn writes_new_document_and_creates_directories() {
        let tempdir = tempfile::tempdir().unwrap();
        let entry = entry(tempdir.path());

        assert_eq!(WriteOutcome::Written, write(&entry).unwrap());
        assert_eq!(
            EXPECTED_DOCUMENT,
            std::fs::read_to_string(tempdir.path().join("2024/03/2024-03-15T09-30-00.md"))
                .unwrap()
        );
    }

    #[test]
    fn existing_document_is_not_overwritten() {
        let tempdir = tempfile::tempdir().unwrap();
        let entry = entry(tempdir.path());
        std::fs::create_dir_all(entry.path.parent().unwrap()).unwrap();
        std::fs::write(&entry.path, "edited by hand").unwrap();

        assert_eq!(WriteOutcome::AlreadyExists, write(&entry).unwrap());
        assert_eq!(
            "edited by hand",
            std::fs::read_to_string(&entry.path).unwrap()
        );
    }

    #[test]
    fn writing_twice() {
        let tempdir = tempfile::tempdir().unwrap();
        let entry = entry(tempdir.path());

        assert_eq!(WriteOutcome::Written, write(&entry).unwrap());
        assert_eq!(WriteOutcome::AlreadyExists, write(&entry).unwrap());
        assert_eq!(
            EXPECTED_DOCUMENT,
            std::fs::read_to_string(&entry.path).unwrap()
        );
    }

    #[test]
    fn parent_is_a_file() {
        let tempdir = tempfile::tempdir().unwrap();
        std::fs::write(tempdir.path().join("2024"), "").unwrap();
        assert!(write(&entry(tempdir.path())).is_err());
    }
}
