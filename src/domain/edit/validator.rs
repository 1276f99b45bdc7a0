use super::draft::Draft;
use super::field::{FieldError, FieldErrors, FieldName};
use crate::domain::movie::{Movie, YEAR_MAX, YEAR_MIN};

/// Validate a draft against the Movie invariants
///
/// Every field is checked independently and every violation is reported;
/// nothing short-circuits on the first failure. On success the draft is
/// coerced to canonical types (trimmed text, integer year and runtime).
pub fn validate(draft: &Draft) -> Result<Movie, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title = required_text(draft, FieldName::Title, &mut errors);
    let year = collect(FieldName::Year, parse_year(&draft.year), &mut errors);
    let runtime = collect(FieldName::Runtime, parse_runtime(&draft.runtime), &mut errors);
    let director = required_text(draft, FieldName::Director, &mut errors);
    let actors = required_text(draft, FieldName::Actors, &mut errors);

    match (title, year, runtime, director, actors) {
        (Some(title), Some(year), Some(runtime), Some(director), Some(actors))
            if errors.is_empty() =>
        {
            Ok(Movie {
                id: draft.id,
                title,
                year,
                runtime,
                director,
                actors,
                genres: draft.genres.clone(),
            })
        }
        _ => Err(errors),
    }
}

fn collect<T>(field: FieldName, result: Result<T, FieldError>, errors: &mut FieldErrors) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            errors.insert(field, error);
            None
        }
    }
}

fn required_text(draft: &Draft, field: FieldName, errors: &mut FieldErrors) -> Option<String> {
    let value = draft.field(field).trim();
    let result = if value.is_empty() {
        Err(FieldError::Required)
    } else {
        Ok(value.to_string())
    };
    collect(field, result, errors)
}

fn parse_integer(raw: &str) -> Result<i64, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::Required);
    }
    raw.parse::<i64>().map_err(|_| FieldError::NotANumber)
}

fn parse_year(raw: &str) -> Result<i32, FieldError> {
    let year = parse_integer(raw)?;
    let (min, max) = (i64::from(YEAR_MIN), i64::from(YEAR_MAX));
    if !(min..=max).contains(&year) {
        return Err(FieldError::OutOfRange { min, max });
    }
    Ok(year as i32)
}

fn parse_runtime(raw: &str) -> Result<u32, FieldError> {
    let runtime = parse_integer(raw)?;
    if runtime <= 0 {
        return Err(FieldError::NotPositive);
    }
    u32::try_from(runtime).map_err(|_| FieldError::OutOfRange {
        min: 1,
        max: i64::from(u32::MAX),
    })
}
