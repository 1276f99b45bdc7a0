pub mod query;
pub mod sort_key;

#[cfg(test)]
pub(crate) mod fixtures;

pub use query::{query, CatalogQuery, PageSize};
pub use sort_key::SortKey;
