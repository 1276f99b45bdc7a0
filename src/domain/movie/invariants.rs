use super::entity::{Movie, YEAR_MAX, YEAR_MIN};
use crate::domain::{DomainError, DomainResult};

/// Validates all Movie invariants
/// Used as a guard on records crossing the persistence boundary
pub fn validate_movie(movie: &Movie) -> DomainResult<()> {
    validate_text("title", &movie.title)?;
    validate_year(movie.year)?;
    validate_runtime(movie.runtime)?;
    validate_text("director", &movie.director)?;
    validate_text("actors", &movie.actors)?;
    Ok(())
}

fn validate_text(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "Movie {} cannot be empty",
            field
        )));
    }
    Ok(())
}

fn validate_year(year: i32) -> DomainResult<()> {
    if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
        return Err(DomainError::InvariantViolation(format!(
            "Year {} is outside {}..={}",
            year, YEAR_MIN, YEAR_MAX
        )));
    }
    Ok(())
}

fn validate_runtime(runtime: u32) -> DomainResult<()> {
    if runtime == 0 {
        return Err(DomainError::InvariantViolation(
            "Runtime must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for a persisted Movie:
///
/// 1. Title, director and actors are non-blank
/// 2. Year lies in 1900..=2050 (both bounds valid)
/// 3. Runtime is a positive number of minutes
/// 4. Genres form a set (no duplicates), possibly empty
/// 5. Identity (UUID) is immutable

#[cfg(test)]
mod tests {
    use super::*;

    fn movie() -> Movie {
        Movie::new("The Third Man", 1949, 104, "Carol Reed", "Joseph Cotten, Orson Welles")
    }

    #[test]
    fn test_valid_movie() {
        assert!(validate_movie(&movie()).is_ok());
    }

    #[test]
    fn test_year_bounds_are_inclusive() {
        let mut m = movie();
        m.year = YEAR_MIN;
        assert!(validate_movie(&m).is_ok());
        m.year = YEAR_MAX;
        assert!(validate_movie(&m).is_ok());
        m.year = YEAR_MIN - 1;
        assert!(validate_movie(&m).is_err());
        m.year = YEAR_MAX + 1;
        assert!(validate_movie(&m).is_err());
    }

    #[test]
    fn test_blank_director_fails() {
        let mut m = movie();
        m.director = "  ".to_string();
        assert!(validate_movie(&m).is_err());
    }

    #[test]
    fn test_zero_runtime_fails() {
        let mut m = movie();
        m.runtime = 0;
        assert!(validate_movie(&m).is_err());
    }
}
