use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;

use crate::core::checksum::check_character;
use crate::core::{
    DecodedIdentity, LocationLookup, PlaceKind, Sex, ValidationError, UNKNOWN_PLACE_NAME,
};

/// Month letters in calendar order: index 0 is January, index 11 is
/// December. Only these twelve letters are legal in the month position.
const MONTH_LETTERS: &str = "ABCDEHLMPRST";

/// Full structure of a normalized tax code: name code, year, month letter,
/// day (with the +40 female offset), place code, check character.
const STRUCTURE_PATTERN: &str =
    r"^[A-Z]{6}[0-9]{2}[ABCDEHLMPRST][0-9]{2}[A-Z][0-9]{3}[A-Z]$";

/// Decodes and validates tax codes against an injected location lookup.
///
/// Validation is pure and synchronous: no I/O, no internal mutable state,
/// safe to share across threads as long as the lookup is.
pub struct Validator<L: LocationLookup> {
    lookup: L,
    structure: Regex,
}

impl<L: LocationLookup> Validator<L> {
    pub fn new(lookup: L) -> Self {
        // The pattern is a compile-time constant; compiled once and reused
        // across calls.
        let structure = Regex::new(STRUCTURE_PATTERN).expect("structure pattern must compile");
        Self { lookup, structure }
    }

    /// Validates a candidate tax code against the local calendar date.
    pub fn validate(&self, input: &str) -> Result<DecodedIdentity, ValidationError> {
        self.validate_at(input, Local::now().date_naive())
    }

    /// Validates a candidate tax code against an explicit reference date.
    ///
    /// The reference date drives the two-digit year window and the age
    /// computation, so tests can pin "today".
    pub fn validate_at(
        &self,
        input: &str,
        today: NaiveDate,
    ) -> Result<DecodedIdentity, ValidationError> {
        // Case-insensitive acceptance
        let code = input.to_uppercase();

        let length = code.chars().count();
        if length != 16 {
            return Err(ValidationError::InvalidLength { actual: length });
        }

        if !self.structure.is_match(&code) {
            return Err(ValidationError::InvalidFormat);
        }

        // ASCII-only from here on: the pattern admits nothing else, so
        // byte offsets and character positions coincide.
        let expected = check_character(&code[..15]);
        let actual = code.as_bytes()[15] as char;
        if actual != expected {
            return Err(ValidationError::ChecksumMismatch { expected, actual });
        }

        // Two-digit years slide over a 100-year window anchored at the
        // reference year: values above its last two digits mean 19xx,
        // the rest mean 20xx. Ambiguous around age 100 by construction.
        let year_two_digits: i32 = code[6..8]
            .parse()
            .map_err(|_| ValidationError::InvalidFormat)?;
        let year = if year_two_digits > today.year() % 100 {
            1900 + year_two_digits
        } else {
            2000 + year_two_digits
        };

        // The structure check already pinned the letter to MONTH_LETTERS.
        let month_letter = code.as_bytes()[8] as char;
        let month = MONTH_LETTERS
            .find(month_letter)
            .map(|index| index as u32 + 1)
            .ok_or(ValidationError::InvalidFormat)?;

        // Days above 40 carry the female offset.
        let day_raw: u32 = code[9..11]
            .parse()
            .map_err(|_| ValidationError::InvalidFormat)?;
        let (sex, day) = if day_raw > 40 {
            (Sex::Female, day_raw - 40)
        } else {
            (Sex::Male, day_raw)
        };

        // Sole range check for day/month combinations: a date that cannot
        // be constructed never reaches the result.
        let birth_date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(ValidationError::InvalidBirthDate { year, month, day })?;

        let mut age = today.year() - birth_date.year();
        if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
            age -= 1;
        }

        let birth_place_code = code[11..15].to_string();
        // A code missing from both namespaces degrades to Unknown; the
        // identity itself is still valid even with a stale table.
        let (birth_place_name, birth_place_kind) = match self.lookup.resolve(&birth_place_code) {
            Some(place) => (place.name, place.kind),
            None => (UNKNOWN_PLACE_NAME.to_string(), PlaceKind::Unknown),
        };

        Ok(DecodedIdentity {
            sex,
            birth_date,
            age,
            birth_place_code,
            birth_place_name,
            birth_place_kind,
        })
    }
}
