use chumsky::{
    error::Simple,
    prelude::{end, just},
    Parser as _,
};

/// Asserts that `parser` parses the beginning of `input` into `expected` and leaves exactly `rest` unparsed.
#[track_caller]
pub fn test_parser<T>(
    input: &str,
    parser: impl chumsky::Parser<char, T, Error = Simple<char>>,
    expected: T,
    rest: &str,
) where
    T: std::fmt::Debug + Eq + PartialEq,
{
    let parser = parser.then_ignore(just(rest)).then_ignore(end());
    let parsed = parser.parse(input).unwrap();
    assert_eq!(expected, parsed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chumsky::{error::Simple, Parser};

    #[test]
    fn success_without_rest() {
        let parser = chumsky::primitive::just::<char, _, Simple<char>>("원");
        test_parser("원", parser, "원", "");
    }

    #[test]
    fn success_with_rest() {
        let parser = chumsky::primitive::just::<char, _, Simple<char>>("[입금]");
        test_parser("[입금] 가게", parser, "[입금]", " 가게");
    }

    #[test]
    #[should_panic]
    fn parser_does_not_match() {
        let parser = chumsky::primitive::just::<char, _, Simple<char>>("[입금]");
        test_parser("[출금]", parser, "[입금]", "");
    }

    #[test]
    #[should_panic]
    fn expected_rest_but_has_no_rest() {
        let parser = chumsky::primitive::just::<char, _, Simple<char>>('a');
        test_parser("a", parser, 'a', "bc");
    }

    #[test]
    #[should_panic]
    fn expected_no_rest_but_has_rest() {
        let parser = chumsky::primitive::just::<char, _, Simple<char>>('a').rewind();
        test_parser("abc", parser, 'a', "");
    }
}
