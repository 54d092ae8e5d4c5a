//! Grammars turning notification texts of specific bank apps into ledger entries.

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

use crate::notimon::NotificationRecord;

pub(crate) mod utils;
mod woori;

/// A transaction parsed from a notification, to be written as one cashbook document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    /// Where the cashbook document for this entry lives
    pub path: PathBuf,
    pub timestamp: NaiveDateTime,
    pub package: String,
    pub title: String,
    pub category: String,
    pub description: String,
    /// Positive for deposits, negative for withdrawals
    pub amount: i64,
    pub account: String,
    /// Account balance after the transaction, as reported by the notification
    pub balance: i64,
}

impl LedgerEntry {
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

/// `<cash book>/<YYYY>/<MM>/<YYYY-MM-DDTHH-MM-SS>.md`
pub fn destination_path(cash_book_path: &Path, timestamp: &NaiveDateTime) -> PathBuf {
    cash_book_path
        .join(timestamp.format("%Y").to_string())
        .join(timestamp.format("%m").to_string())
        .join(format!("{}.md", timestamp.format("%Y-%m-%dT%H-%M-%S")))
}

/// A notification grammar for one bank app
pub struct Grammar {
    pub package: &'static str,
    pub title: &'static str,
    parse: fn(&NotificationRecord, &Path) -> Option<LedgerEntry>,
}

const GRAMMARS: &[Grammar] = &[Grammar {
    package: woori::PACKAGE,
    title: woori::TITLE,
    parse: woori::parse,
}];

pub fn grammar_for(package: &str) -> Option<&'static Grammar> {
    GRAMMARS.iter().find(|grammar| grammar.package == package)
}

/// Parses `record` with the grammar registered for its package.
///
/// Returns `None` if there is no grammar for the package, the title isn't the grammar's title,
/// or the text doesn't match the grammar.
pub fn parse(record: &NotificationRecord, cash_book_path: &Path) -> Option<LedgerEntry> {
    let grammar = grammar_for(&record.package)?;
    if record.title != grammar.title {
        return None;
    }
    (grammar.parse)(record, cash_book_path)
}
