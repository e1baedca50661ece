//! Player name and birthdate validation
//!
//! Everything here is pure: the current date is passed in by the caller, so the same
//! checks run against a fixed calendar in tests.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Birthdate format accepted at the prompt, as shown to the player
pub const BIRTHDATE_FORMAT: &str = "yyyyMMdd";

/// Error type for rejected identity input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// Not two names separated by a single whitespace character
    NameFormat,
    /// Not an eight-digit calendar date
    DateFormat,
    /// In the future, or not after the minimum year
    ImplausibleBirthYear { minimum_year: i32 },
    /// Younger than the age limit
    Underage { minimum_age: u32 },
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameFormat => write!(
                f,
                "Enter a first- and a lastname, separated by exactly one (1) white space character."
            ),
            Self::DateFormat => write!(f, "Invalid date - use the format {BIRTHDATE_FORMAT}!"),
            Self::ImplausibleBirthYear { minimum_year } => write!(
                f,
                "The year must be in the past (but after {minimum_year}) to be believable!"
            ),
            Self::Underage { minimum_age } => write!(f, "Age limit is {minimum_age} years."),
        }
    }
}

impl std::error::Error for IdentityError {}

/// Validate a full name and normalize it to `"First Last"`
///
/// Both names must consist of letters only (any script); they are separated by exactly
/// one space or tab.
///
/// # Errors
/// Returns `IdentityError::NameFormat` for anything else.
///
/// # Examples
/// ```
/// use lucky_number::core::parse_full_name;
///
/// assert_eq!(parse_full_name("Grace\tHopper").unwrap(), "Grace Hopper");
/// assert!(parse_full_name("Grace  Hopper").is_err());
/// ```
pub fn parse_full_name(input: &str) -> Result<String, IdentityError> {
    let input = input.trim_end_matches(['\r', '\n']);
    let (first, last) = input
        .split_once([' ', '\t'])
        .ok_or(IdentityError::NameFormat)?;

    let is_name = |s: &str| !s.is_empty() && s.chars().all(char::is_alphabetic);
    if !is_name(first) || !is_name(last) {
        return Err(IdentityError::NameFormat);
    }

    Ok(format!("{first} {last}"))
}

/// Parse a `yyyyMMdd` birthdate
///
/// # Errors
/// Returns `IdentityError::DateFormat` unless the input is exactly eight digits forming
/// a real calendar date.
pub fn parse_birthdate(input: &str) -> Result<NaiveDate, IdentityError> {
    let input = input.trim();
    if input.len() != 8 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IdentityError::DateFormat);
    }
    NaiveDate::parse_from_str(input, "%Y%m%d").map_err(|_| IdentityError::DateFormat)
}

/// Full years elapsed between `birthdate` and `today`
///
/// Returns 0 for birthdates after `today`.
#[must_use]
pub fn age_on(birthdate: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - birthdate.year();
    if (today.month(), today.day()) < (birthdate.month(), birthdate.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// Check a birthdate against the plausibility window and the age limit
///
/// Returns the player's age in years.
///
/// # Errors
/// - `ImplausibleBirthYear` if the date is after `today` or its year is not after
///   `minimum_year`
/// - `Underage` if the player is younger than `minimum_age`
pub fn validate_birthdate(
    birthdate: NaiveDate,
    today: NaiveDate,
    minimum_year: i32,
    minimum_age: u32,
) -> Result<u32, IdentityError> {
    if birthdate > today || birthdate.year() <= minimum_year {
        return Err(IdentityError::ImplausibleBirthYear { minimum_year });
    }

    let age = age_on(birthdate, today);
    if age < minimum_age {
        return Err(IdentityError::Underage { minimum_age });
    }

    Ok(age)
}
