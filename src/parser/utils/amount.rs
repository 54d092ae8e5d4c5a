use chumsky::{
    error::Simple,
    prelude::{filter, just},
    Parser as _,
};

const WON_SUFFIX: char = '원';

/// A non-negative amount in won with optional thousand separators, e.g. `10,000원`
pub fn won_amount() -> impl chumsky::Parser<char, i64, Error = Simple<char>> {
    filter(|c: &char| c.is_ascii_digit() || *c == ',')
        .repeated()
        .at_least(1)
        .collect::<String>()
        .then_ignore(just(WON_SUFFIX))
        .try_map(|digits, span| {
            digits
                .replace(',', "")
                .parse::<i64>()
                .map_err(|_| Simple::custom(span, "Failed to parse amount"))
        })
        .labelled("won amount")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::parser::utils::token;

    use super::*;

    #[rstest]
    #[case("0원", 0)]
    #[case("2,400원", 2400)]
    #[case("10,000원", 10000)]
    #[case("1234567원", 1234567)]
    #[case("1,234,567원", 1234567)]
    fn test_won_amount(#[case] input: &str, #[case] expected: i64) {
        assert_eq!(Some(expected), token(won_amount(), input));
    }

    #[rstest]
    #[case("10,000")]
    #[case("원")]
    #[case(",원")]
    #[case(",,,원")]
    #[case("-10,000원")]
    #[case("10.000원")]
    #[case("10,000원원")]
    #[case("１０원")]
    #[case("99999999999999999999원")]
    fn invalid_amount(#[case] input: &str) {
        assert_eq!(None, token(won_amount(), input));
    }
}
