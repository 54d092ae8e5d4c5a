use anyhow::{anyhow, Context as _, Result};
use chrono::{Datelike as _, NaiveDate};
use std::{fmt, io::ErrorKind, path::Path};

use crate::parser::utils::{date, token};

pub const MARKER_FILE_NAME: &str = "marker.md";

/// The last imported date. Log data before this day is presumed to be imported already.
///
/// Ordered lexicographically by (year, month, day). The zero watermark means nothing was imported yet.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Watermark {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Watermark {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Whether the year directory `<year>` may contain unseen data
    pub fn admits_year(&self, year: i32) -> bool {
        year >= self.year
    }

    /// Whether the month directory `<year>/<month>` may contain unseen data
    pub fn admits_month(&self, year: i32, month: u32) -> bool {
        (year, month) >= (self.year, self.month)
    }

    /// Whether a daily log file for this date may contain unseen data. The watermark day itself
    /// is admitted since entries may have been appended after the last import.
    pub fn admits_day(&self, year: i32, month: u32, day: u32) -> bool {
        (year, month, day) >= (self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for Watermark {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for Watermark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Loads the watermark from `<cash_book_path>/marker.md`.
///
/// A missing marker file or content that isn't exactly `YYYY-MM-DD` yields the zero watermark.
pub fn load(cash_book_path: &Path) -> Result<Watermark> {
    let marker_path = cash_book_path.join(MARKER_FILE_NAME);
    let content = match std::fs::read(&marker_path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::info!("No marker at {}, importing everything", marker_path.display());
            return Ok(Watermark::default());
        }
        Err(err) => {
            return Err(err)
                .with_context(|| anyhow!("Failed to read marker {}", marker_path.display()))
        }
    };
    let watermark = String::from_utf8(content)
        .ok()
        .and_then(|content| token(date(), content.trim()))
        .map(|(year, month, day)| Watermark::new(year, month, day));
    match watermark {
        Some(watermark) => {
            log::info!("Loaded marker {}", watermark);
            Ok(watermark)
        }
        None => {
            log::warn!(
                "Marker {} isn't a YYYY-MM-DD date, importing everything",
                marker_path.display()
            );
            Ok(Watermark::default())
        }
    }
}

/// Persists `watermark` to `<cash_book_path>/marker.md`
pub fn save(cash_book_path: &Path, watermark: Watermark) -> Result<()> {
    let marker_path = cash_book_path.join(MARKER_FILE_NAME);
    log::info!("Saving marker {} to {}", watermark, marker_path.display());

    // First write to temporary file so we don't lose the old marker if writing fails halfway
    let tmppath = marker_path.with_file_name(format!("{}.temp", MARKER_FILE_NAME));
    std::fs::write(&tmppath, format!("{}\n", watermark))
        .with_context(|| anyhow!("Failed to write {}", tmppath.display()))?;
    std::fs::rename(&tmppath, &marker_path)
        .with_context(|| anyhow!("Failed to replace {}", marker_path.display()))?;

    Ok(())
}
