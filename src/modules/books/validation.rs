//! Field constraints for book payloads.
//!
//! Every check runs and every violation is reported, so a client sees all
//! problems with a payload in one response.

use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;

use super::models::{BookId, BookRequest};

pub const TITLE_MIN_LEN: usize = 3;
pub const DESCRIPTION_LEN: RangeInclusive<usize> = 3..=100;
pub const RATING_RANGE: RangeInclusive<i32> = 0..=5;
pub const PUBLISHED_DATE_RANGE: RangeInclusive<i32> = 2000..=2025;
/// Ratings accepted by the rating filter; 0 is storable but not queryable.
pub const RATING_FILTER_RANGE: RangeInclusive<i32> = 1..=5;

/// One violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub error: String,
}

/// All constraints a payload violated, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, error: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            error: error.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.errors.iter().map(|e| e.field).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate a payload for create. `id` is not looked at.
pub fn validate_book(request: &BookRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    check_fields(request, &mut errors);
    errors.into_result()
}

/// Validate a payload for update: all create checks plus a positive `id`,
/// which is returned on success.
pub fn validate_book_update(request: &BookRequest) -> Result<BookId, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let id = match request.id {
        None => {
            errors.push("id", "field required");
            None
        }
        Some(id) if id <= 0 => {
            errors.push("id", "must be greater than 0");
            None
        }
        Some(id) => Some(id),
    };
    check_fields(request, &mut errors);

    match id {
        Some(id) if errors.is_empty() => Ok(id),
        _ => Err(errors),
    }
}

fn check_fields(request: &BookRequest, errors: &mut ValidationErrors) {
    if request.title.chars().count() < TITLE_MIN_LEN {
        errors.push(
            "title",
            format!("must be at least {TITLE_MIN_LEN} characters"),
        );
    }

    if !is_two_word_name(&request.author) {
        errors.push(
            "author",
            "must be two words of at least 2 letters separated by a single space",
        );
    }

    if !DESCRIPTION_LEN.contains(&request.description.chars().count()) {
        errors.push(
            "description",
            format!(
                "must be between {} and {} characters",
                DESCRIPTION_LEN.start(),
                DESCRIPTION_LEN.end()
            ),
        );
    }

    if !RATING_RANGE.contains(&request.rating) {
        errors.push(
            "rating",
            format!(
                "must be between {} and {}",
                RATING_RANGE.start(),
                RATING_RANGE.end()
            ),
        );
    }

    if !PUBLISHED_DATE_RANGE.contains(&request.published_date) {
        errors.push(
            "published_date",
            format!(
                "must be between {} and {}",
                PUBLISHED_DATE_RANGE.start(),
                PUBLISHED_DATE_RANGE.end()
            ),
        );
    }
}

/// "First Last": two ASCII-letter words of length >= 2 joined by one space.
pub fn is_two_word_name(name: &str) -> bool {
    let is_word = |word: &str| word.len() >= 2 && word.bytes().all(|b| b.is_ascii_alphabetic());

    match name.split_once(' ') {
        Some((first, last)) => is_word(first) && is_word(last),
        None => false,
    }
}
