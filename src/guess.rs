//! Player guesses.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseGuessError;

/// The player's prediction for the challenging card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guess {
    /// The challenging card outranks the current card.
    Higher,
    /// The challenging card underranks the current card.
    Lower,
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Higher => f.write_str("higher"),
            Self::Lower => f.write_str("lower"),
        }
    }
}

/// Parses `h`/`higher` and `l`/`lower`, ignoring case and surrounding
/// whitespace.
///
/// ```
/// use hilo::{Guess, ParseGuessError};
///
/// assert_eq!(" H ".parse::<Guess>(), Ok(Guess::Higher));
/// assert_eq!("lower".parse::<Guess>(), Ok(Guess::Lower));
/// assert_eq!("x".parse::<Guess>(), Err(ParseGuessError::InvalidGuess));
/// ```
impl FromStr for Guess {
    type Err = ParseGuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("h") || s.eq_ignore_ascii_case("higher") {
            Ok(Self::Higher)
        } else if s.eq_ignore_ascii_case("l") || s.eq_ignore_ascii_case("lower") {
            Ok(Self::Lower)
        } else {
            Err(ParseGuessError::InvalidGuess)
        }
    }
}
