use std::{ops::Range, str::FromStr};

use chumsky::{error::Simple, prelude::filter, Parser as _};

/// Matches exactly `digits` ASCII digits and parses them as a number.
pub fn number<N: FromStr>(digits: usize) -> impl chumsky::Parser<char, N, Error = Simple<char>> {
    filter(|c: &char| c.is_ascii_digit())
        .repeated()
        .exactly(digits)
        .try_map(parse_number::<N>)
        .labelled("number")
}

fn parse_number<N: FromStr>(content: Vec<char>, span: Range<usize>) -> Result<N, Simple<char>> {
    content
        .into_iter()
        .collect::<String>()
        .parse()
        .map_err(|_err| Simple::custom(span, "Failed to parse number"))
}
