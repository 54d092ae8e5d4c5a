use anyhow::Result;
use chrono::NaiveDate;
use console::{style, StyledObject};
use std::path::Path;

use crate::args::{Args, Command};
use crate::config::Config;
use crate::import::{self, ImportSummary};
use crate::marker::{self, Watermark};
use crate::notimon::{self, LogFile};
use crate::terminal::{BulletPointPrinter, LineWriter};

pub fn main(args: Args) -> Result<()> {
    let config = Config::load(&args.config)?;
    let printer = BulletPointPrinter::new_stdout();
    match args.command.unwrap_or_default() {
        Command::Import { dry_run } => main_import(&config, dry_run, &printer),
        Command::Status => main_status(&config, &printer),
        Command::Mark { date } => main_mark(&config, date, &printer),
    }
}

fn main_import<W: LineWriter + Clone>(
    config: &Config,
    dry_run: bool,
    printer: &BulletPointPrinter<W>,
) -> Result<()> {
    let summary = import::import_to_cashbook(config, dry_run)?;
    print_summary(printer, &config.cash_book_path, &summary, dry_run);
    Ok(())
}

fn main_status<W: LineWriter + Clone>(
    config: &Config,
    printer: &BulletPointPrinter<W>,
) -> Result<()> {
    let watermark = marker::load(&config.cash_book_path)?;
    let files = notimon::scan(&config.notimon_log_path, &watermark)?;
    print_status(printer, &config.notimon_log_path, &watermark, &files);
    Ok(())
}

fn main_mark<W: LineWriter + Clone>(
    config: &Config,
    date: NaiveDate,
    printer: &BulletPointPrinter<W>,
) -> Result<()> {
    let previous = marker::load(&config.cash_book_path)?;
    let watermark = Watermark::from(date);
    if watermark < previous {
        log::warn!(
            "Moving the marker back from {} to {}, existing documents will be skipped",
            previous,
            watermark
        );
    }
    marker::save(&config.cash_book_path, watermark)?;
    printer.print_item(format!(
        "Marker: {} -> {}",
        style_watermark(&previous),
        style_watermark(&watermark)
    ));
    Ok(())
}

fn print_summary<W: LineWriter + Clone>(
    printer: &BulletPointPrinter<W>,
    cash_book_path: &Path,
    summary: &ImportSummary,
    dry_run: bool,
) {
    printer.print_item(format!(
        "Read {} records from {} log files",
        summary.num_records, summary.num_files
    ));
    printer.print_item(format!(
        "{} matched, {} not matched",
        style(summary.num_matched).green(),
        style(summary.num_not_matched).dim(),
    ));
    printer.print_item(format!(
        "{} already imported",
        style(summary.num_already_imported).dim()
    ));
    let written_header = if dry_run { "Would write" } else { "Wrote" };
    printer.print_item(format!(
        "{} {} documents",
        written_header,
        style(summary.written.len()).bold()
    ));
    printer.print_sub_items(
        summary
            .written
            .iter()
            .map(|path| style_path(path.strip_prefix(cash_book_path).unwrap_or(path))),
    );
}

fn print_status<W: LineWriter + Clone>(
    printer: &BulletPointPrinter<W>,
    notimon_log_path: &Path,
    watermark: &Watermark,
    files: &[LogFile],
) {
    printer.print_item(format!("Marker: {}", style_watermark(watermark)));
    printer.print_item(format!("{} log files to read", style(files.len()).bold()));
    printer.print_sub_items(files.iter().map(|file| {
        style_path(file.path.strip_prefix(notimon_log_path).unwrap_or(&file.path))
    }));
}

fn style_watermark(watermark: &Watermark) -> StyledObject<String> {
    if watermark.is_zero() {
        style("(none)".to_string()).italic()
    } else {
        style(watermark.to_string()).cyan()
    }
}

fn style_path(path: &Path) -> StyledObject<String> {
    style(path.display().to_string()).magenta()
}
