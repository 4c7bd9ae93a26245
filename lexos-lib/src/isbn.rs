use std::{fmt, str::FromStr};

use crate::{Error, ErrorKind};

/// A checksum-valid ISBN-10 or ISBN-13, normalized to its bare digits.
///
/// Constructed once from user input via [`FromStr`] and never mutated.
/// Hyphens are stripped before validation so both `9780747532743` and
/// `978-0747532743` parse to the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Isbn(String);

impl Isbn {
    /// The normalized ISBN string with hyphens removed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Isbn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let isbn: String = s
            .chars()
            .filter(|&c| c != '-')
            .map(|c| c.to_ascii_uppercase())
            .collect();

        let valid = match isbn.len() {
            10 => checksum_10(&isbn),
            13 => checksum_13(&isbn),
            _ => false,
        };

        if valid {
            Ok(Self(isbn))
        } else {
            Err(Error::new(
                ErrorKind::InvalidIsbn,
                format!("'{s}' is not a checksum-valid ISBN-10 or ISBN-13"),
            ))
        }
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Weighted sum 10..=1 over the digits must divide by 11.
///
/// The final position may be the letter `X`, which carries the value 10.
fn checksum_10(isbn: &str) -> bool {
    let mut sum = 0;
    let mut weight = 10;
    for c in isbn.chars() {
        let value = match c {
            '0'..='9' => u32::from(c) - u32::from('0'),
            'X' if weight == 1 => 10,
            _ => return false,
        };
        sum += weight * value;
        weight -= 1;
    }
    sum % 11 == 0
}

/// Alternating 1/3 weights over the digits must divide by 10.
fn checksum_13(isbn: &str) -> bool {
    let mut sum = 0;
    for (i, c) in isbn.chars().enumerate() {
        let Some(digit) = c.to_digit(10) else {
            return false;
        };
        sum += if i % 2 == 0 { digit } else { 3 * digit };
    }
    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_isbn_10_parses() {
        let isbn: Isbn = "0306406152".parse().unwrap();
        assert_eq!("0306406152", isbn.as_str());
    }

    #[test]
    fn valid_isbn_10_with_check_letter_parses() {
        let isbn: Isbn = "097522980X".parse().unwrap();
        assert_eq!("097522980X", isbn.as_str());
    }

    #[test]
    fn lowercase_check_letter_is_normalized() {
        let isbn: Isbn = "097522980x".parse().unwrap();
        assert_eq!("097522980X", isbn.as_str());
    }

    #[test]
    fn valid_isbn_13_parses() {
        let isbn: Isbn = "9780306406157".parse().unwrap();
        assert_eq!("9780306406157", isbn.as_str());
    }

    #[test]
    fn hyphens_are_stripped_before_validation() {
        let isbn: Isbn = "978-0-306-40615-7".parse().unwrap();
        assert_eq!("9780306406157", isbn.as_str());
    }

    #[test]
    fn bad_check_digit_is_rejected() {
        let err = "0306406153".parse::<Isbn>().unwrap_err();
        assert_eq!(ErrorKind::InvalidIsbn, err.kind());

        let err = "9780306406158".parse::<Isbn>().unwrap_err();
        assert_eq!(ErrorKind::InvalidIsbn, err.kind());
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!("12345".parse::<Isbn>().is_err());
        assert!(String::new().parse::<Isbn>().is_err());
        assert!("97803064061570".parse::<Isbn>().is_err());
    }

    #[test]
    fn check_letter_is_only_valid_in_the_final_position() {
        assert!("0X06406152".parse::<Isbn>().is_err());
    }

    #[test]
    fn non_digit_characters_are_rejected() {
        assert!("03064o6152".parse::<Isbn>().is_err());
        assert!("978030640615a".parse::<Isbn>().is_err());
    }
}
