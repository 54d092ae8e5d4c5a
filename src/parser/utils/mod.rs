use chumsky::{error::Simple, prelude::end, Parser as _};

mod account;
mod amount;
mod datetime;
mod digits;
#[cfg(test)]
mod testutils;

pub use account::masked_account;
pub use amount::won_amount;
pub use datetime::{date, log_file_name, month_day, time};
pub use digits::number;

/// Runs `parser` against one whole token. Returns `None` if the parser fails or
/// doesn't consume the full token.
pub fn token<T>(
    parser: impl chumsky::Parser<char, T, Error = Simple<char>>,
    input: &str,
) -> Option<T> {
    parser.then_ignore(end()).parse(input).ok()
}
