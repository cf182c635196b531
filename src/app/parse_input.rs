use crate::error::{Error, Result};

/// Reads a whole number out of a field like `R: 128`. The prefix is optional.
pub fn parse_input(prefix: &str, string: &str) -> Result<i64> {
    let trimmed = string.trim();
    let num_str = trimmed.strip_prefix(prefix).unwrap_or(trimmed);
    num_str.trim().parse::<i64>().map_err(|_| Error::InvalidChannelInput {
        input: string.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("R: 12", 12)]
    #[case("R:12", 12)]
    #[case("12", 12)]
    #[case("  12 ", 12)]
    #[case("R: 300", 300)]
    #[case("-1", -1)]
    fn accepts_numbers(#[case] input: &str, #[case] expected: i64) {
        assert_eq!(parse_input("R:", input).unwrap(), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("R: ")]
    #[case("G: 12")]
    #[case("1.5")]
    fn rejects_non_numbers(#[case] input: &str) {
        assert!(matches!(
            parse_input("R:", input),
            Err(Error::InvalidChannelInput { .. })
        ));
    }
}
