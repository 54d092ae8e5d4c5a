//! Deposit/withdrawal alerts of the Woori WON banking app, e.g.
//!
//! ```text
//! [출금] 지에스２５　도곡 2,400원 1002-123-456***계좌 잔액 8,525원 02/26 01:13:38
//! ```
//!
//! The merchant in the middle has any number of tokens, so the text is matched from both ends.

use chrono::NaiveDate;
use chumsky::Parser as _;
use std::path::Path;

use super::utils::{masked_account, month_day, number, time, token, won_amount};
use super::{destination_path, LedgerEntry};
use crate::notimon::NotificationRecord;

pub const PACKAGE: &str = "com.wooribank.smart.npib";
pub const TITLE: &str = "우리WON뱅킹 입출금알림";

const DEPOSIT: &str = "[입금]";
const WITHDRAWAL: &str = "[출금]";
const BALANCE: &str = "잔액";

pub fn parse(record: &NotificationRecord, cash_book_path: &Path) -> Option<LedgerEntry> {
    let tokens: Vec<&str> = record.text.split(' ').collect();
    let [direction, source @ .., amount, account, balance_label, balance, date, time_of_day] =
        tokens.as_slice()
    else {
        return None;
    };
    let sign = match *direction {
        DEPOSIT => 1,
        WITHDRAWAL => -1,
        _ => return None,
    };
    if source.is_empty() {
        return None;
    }

    let time_of_day = token(time(), time_of_day)?;
    let (month, day) = token(month_day(), date)?;
    let balance = token(won_amount(), balance)?;
    if *balance_label != BALANCE {
        return None;
    }
    let account = token(masked_account(), account)?;
    let amount = token(won_amount(), amount)?;

    // The text has no year, take it from the time the notification was logged
    let year = number::<i32>(4).parse(record.timestamp.as_str()).ok()?;
    let timestamp = NaiveDate::from_ymd_opt(year, month, day)?.and_time(time_of_day);

    Some(LedgerEntry {
        path: destination_path(cash_book_path, &timestamp),
        timestamp,
        package: record.package.clone(),
        title: source.join(" "),
        category: String::new(),
        description: String::new(),
        amount: sign * amount,
        account,
        balance,
    })
}
