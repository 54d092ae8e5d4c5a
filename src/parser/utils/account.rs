use chumsky::{
    error::Simple,
    prelude::{filter, just},
    Parser as _,
};

const MASK_SUFFIX: &str = "***계좌";

/// An account number masked by the bank app, e.g. `1002-123-456***계좌`.
/// Yields the visible part without the mask suffix.
pub fn masked_account() -> impl chumsky::Parser<char, String, Error = Simple<char>> {
    filter(|c: &char| c.is_ascii_digit() || *c == '-')
        .repeated()
        .at_least(1)
        .collect::<String>()
        .then_ignore(just(MASK_SUFFIX))
        .labelled("masked account")
}
