pub mod genre_set;
pub mod selector;

pub use genre_set::GenreSet;
pub use selector::{GenreSelector, DEFAULT_GENRES};
