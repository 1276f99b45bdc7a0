pub mod entity;
pub mod invariants;

pub use entity::{Movie, YEAR_MAX, YEAR_MIN};
pub use invariants::validate_movie;
