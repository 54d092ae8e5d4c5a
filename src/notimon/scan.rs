use anyhow::{anyhow, ensure, Context as _, Result};
use std::path::{Path, PathBuf};

use super::LogFile;
use crate::marker::Watermark;
use crate::parser::utils::{log_file_name, number, token};

/// Finds the daily log files under `log_root` that may contain notifications newer than `watermark`.
///
/// Only `<YYYY>/<MM>/<YYYY-MM-DD>.csv` is looked at. Year and month directories that lie completely
/// before the watermark aren't entered. Anything not matching the layout is skipped.
/// The result is sorted by path.
pub fn scan(log_root: &Path, watermark: &Watermark) -> Result<Vec<LogFile>> {
    ensure!(
        log_root.is_dir(),
        "NOTIMON_LOG_PATH is invalid: {} is not a directory",
        log_root.display(),
    );
    log::info!("Scanning {} for logs since {}...", log_root.display(), watermark);

    let mut files = Vec::new();
    for (year_dir, year) in subdirectories::<i32>(log_root, 4)? {
        if !watermark.admits_year(year) {
            log::debug!("Skipping {}", year_dir.display());
            continue;
        }
        for (month_dir, month) in subdirectories::<u32>(&year_dir, 2)? {
            if !watermark.admits_month(year, month) {
                log::debug!("Skipping {}", month_dir.display());
                continue;
            }
            files.extend(
                log_files(&month_dir)?
                    .into_iter()
                    .filter(|file| watermark.admits_day(file.year, file.month, file.day)),
            );
        }
    }
    files.sort_by(|lhs, rhs| lhs.path.cmp(&rhs.path));

    log::info!("Scanning {} for logs...found {} files", log_root.display(), files.len());

    Ok(files)
}

/// Subdirectories of `dir` named by exactly `digits` digits, along with the parsed number
fn subdirectories<N: std::str::FromStr>(dir: &Path, digits: usize) -> Result<Vec<(PathBuf, N)>> {
    let mut result = Vec::new();
    for entry in read_dir(dir)? {
        let path = entry.path();
        let Some(number) = entry
            .file_name()
            .to_str()
            .and_then(|name| token(number::<N>(digits), name))
        else {
            continue;
        };
        if path.is_dir() {
            result.push((path, number));
        }
    }
    Ok(result)
}

fn log_files(month_dir: &Path) -> Result<Vec<LogFile>> {
    let mut result = Vec::new();
    for entry in read_dir(month_dir)? {
        let path = entry.path();
        let Some((year, month, day)) = entry
            .file_name()
            .to_str()
            .and_then(|name| token(log_file_name(), name))
        else {
            continue;
        };
        if path.is_file() {
            result.push(LogFile {
                path,
                year,
                month,
                day,
            });
        }
    }
    Ok(result)
}

fn read_dir(dir: &Path) -> Result<Vec<std::fs::DirEntry>> {
    std::fs::read_dir(dir)
        .and_then(|entries| entries.collect::<Result<Vec<_>, _>>())
        .with_context(|| anyhow!("Failed to list {}", dir.display()))
}
