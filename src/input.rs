//! Parsing and validation for raw sequence text.
//!
//! The solvers accept any totally ordered slice; this layer turns the
//! free-form text the driver reads into one of the two element types the
//! tool supports, and rejects anything the solvers must never see.

use std::fmt;

use log::debug;

use crate::error::{Error, Result};

/// Maximum length of a single numeric token. A longer run of digits almost
/// always means the separator between two numbers was forgotten.
pub const MAX_NUMBER_LEN: usize = 6;

/// A parsed input sequence.
///
/// When every token parses as an integer the sequence is numeric;
/// otherwise every token is kept verbatim and ordered lexicographically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sequence {
    Numbers(Vec<i64>),
    Words(Vec<String>),
}

impl Sequence {
    /// Number of items in the sequence.
    pub fn len(&self) -> usize {
        match self {
            Sequence::Numbers(values) => values.len(),
            Sequence::Words(values) => values.len(),
        }
    }

    /// True when the sequence holds no items. [`parse_sequence`] never
    /// produces an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sequence::Numbers(values) => write_joined(f, values),
            Sequence::Words(values) => write_joined(f, values),
        }
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, values: &[T]) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}

/// Parses free-form sequence text into a typed [`Sequence`].
///
/// Commas and whitespace both separate items. Input with no items is
/// rejected, as is any integer-shaped token longer than [`MAX_NUMBER_LEN`]
/// characters.
///
/// # Examples
///
/// ```
/// use lislab::input::{parse_sequence, Sequence};
///
/// let seq = parse_sequence("10, 9, 2 5").unwrap();
/// assert_eq!(seq, Sequence::Numbers(vec![10, 9, 2, 5]));
///
/// let seq = parse_sequence("pear apple fig").unwrap();
/// assert_eq!(
///     seq,
///     Sequence::Words(vec!["pear".into(), "apple".into(), "fig".into()])
/// );
/// ```
pub fn parse_sequence(raw: &str) -> Result<Sequence> {
    // Normalize separators: commas become whitespace, then split.
    let normalized = raw.replace(',', " ");
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    if tokens.is_empty() {
        return Err(Error::EmptySequence);
    }

    for token in &tokens {
        if is_integer_token(token) && token.len() > MAX_NUMBER_LEN {
            return Err(Error::NumberTooLong((*token).to_string()));
        }
    }

    // Type detection: all-numeric input runs as numbers, anything else
    // runs every token as a word.
    let numbers: Option<Vec<i64>> = tokens.iter().map(|t| t.parse::<i64>().ok()).collect();
    match numbers {
        Some(numbers) => {
            debug!("parsed {} numeric items", numbers.len());
            Ok(Sequence::Numbers(numbers))
        }
        None => {
            debug!("parsed {} word items", tokens.len());
            Ok(Sequence::Words(
                tokens.into_iter().map(str::to_string).collect(),
            ))
        }
    }
}

/// True for an optionally `-`-signed run of ASCII digits.
fn is_integer_token(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commas_and_whitespace_both_separate() {
        let expected = Sequence::Numbers(vec![10, 9, 2, 5]);
        assert_eq!(parse_sequence("10 9 2 5").unwrap(), expected);
        assert_eq!(parse_sequence("10,9,2,5").unwrap(), expected);
        assert_eq!(parse_sequence("  10, 9 ,2   5  ").unwrap(), expected);
    }

    #[test]
    fn test_negative_numbers_parse() {
        assert_eq!(
            parse_sequence("-3 0 7").unwrap(),
            Sequence::Numbers(vec![-3, 0, 7])
        );
    }

    #[test]
    fn test_blank_input_is_rejected() {
        assert_eq!(parse_sequence(""), Err(Error::EmptySequence));
        assert_eq!(parse_sequence("   "), Err(Error::EmptySequence));
        assert_eq!(parse_sequence(",,,"), Err(Error::EmptySequence));
    }

    #[test]
    fn test_long_number_is_rejected() {
        assert_eq!(
            parse_sequence("1 2 34567890"),
            Err(Error::NumberTooLong("34567890".to_string()))
        );
        // Six digits is the limit; the sign counts toward the length.
        assert!(parse_sequence("123456").is_ok());
        assert_eq!(
            parse_sequence("-123456"),
            Err(Error::NumberTooLong("-123456".to_string()))
        );
    }

    #[test]
    fn test_rejection_message_names_the_token() {
        let err = parse_sequence("9999999").unwrap_err();
        assert!(err.to_string().contains("\"9999999\""));
        assert!(err.to_string().contains("too long"));
    }

    #[test]
    fn test_mixed_tokens_fall_back_to_words() {
        // One non-numeric token turns the whole sequence into words.
        assert_eq!(
            parse_sequence("pear 3 apple").unwrap(),
            Sequence::Words(vec!["pear".into(), "3".into(), "apple".into()])
        );
    }

    #[test]
    fn test_word_tokens_keep_their_length() {
        // The length guard only applies to integer-shaped tokens.
        let seq = parse_sequence("unquestionably yes").unwrap();
        assert_eq!(
            seq,
            Sequence::Words(vec!["unquestionably".into(), "yes".into()])
        );
    }

    #[test]
    fn test_display_joins_with_commas() {
        let seq = parse_sequence("3 1 2").unwrap();
        assert_eq!(seq.to_string(), "3, 1, 2");
        assert_eq!(seq.len(), 3);
        assert!(!seq.is_empty());
    }
}
