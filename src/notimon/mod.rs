//! Daily CSV logs written by the notimon notification logger, laid out as
//! `<log root>/<YYYY>/<MM>/<YYYY-MM-DD>.csv`.

use indexmap::IndexMap;
use std::path::PathBuf;

mod read;
mod scan;

pub use read::read;
pub use scan::scan;

/// One candidate daily log file found by [scan]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    pub path: PathBuf,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl LogFile {
    /// The file name without extension, `YYYY-MM-DD`
    pub fn date_key(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// One captured notification, i.e. one row of a daily log file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationRecord {
    pub timestamp: String,
    pub package: String,
    pub title: String,
    pub text: String,
}

/// Records of each log file keyed by [LogFile::date_key], in scan order
pub type DailyRecords = IndexMap<String, Vec<NotificationRecord>>;
