use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use super::sort_key::SortKey;
use crate::domain::movie::Movie;

/// Maximum number of movies in one result page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Page size of the movie list (10 titles per page)
    pub const DEFAULT: PageSize = match NonZeroUsize::new(10) {
        Some(n) => PageSize(n),
        None => unreachable!(),
    };

    /// Returns None for zero
    pub fn new(size: usize) -> Option<Self> {
        NonZeroUsize::new(size).map(PageSize)
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A search over a catalog snapshot: filter by title, sort, then paginate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Case-insensitive title substring, matched as given; empty matches everything
    pub term: String,

    /// None keeps the snapshot's order
    pub sort_key: Option<SortKey>,

    #[serde(default)]
    pub page_size: PageSize,

    /// Zero-based page index
    #[serde(default)]
    pub page: usize,
}

impl CatalogQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    pub fn sorted_by(mut self, sort_key: SortKey) -> Self {
        self.sort_key = Some(sort_key);
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn on_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Run the query against a snapshot
    ///
    /// Pure: the snapshot is never reordered or mutated, and the same inputs
    /// always yield the same page. An empty result is a normal outcome.
    pub fn run(&self, collection: &[Movie]) -> Vec<Movie> {
        let needle = self.term.to_lowercase();

        let mut matches: Vec<&Movie> = collection
            .iter()
            .filter(|movie| needle.is_empty() || movie.title.to_lowercase().contains(&needle))
            .collect();

        // sort_by is stable: equal keys keep snapshot order
        if let Some(key) = self.sort_key {
            matches.sort_by(|a, b| key.compare(a, b));
        }

        let size = self.page_size.get();
        matches
            .into_iter()
            .skip(self.page.saturating_mul(size))
            .take(size)
            .cloned()
            .collect()
    }
}

/// First page of `collection` matching `term`, ordered by `sort_key`
pub fn query(
    collection: &[Movie],
    term: &str,
    sort_key: Option<SortKey>,
    page_size: PageSize,
) -> Vec<Movie> {
    CatalogQuery {
        term: term.to_string(),
        sort_key,
        page_size,
        page: 0,
    }
    .run(collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::fixtures::sample_catalog;
    use proptest::prelude::*;

    fn titles(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn test_page_size_rejects_zero() {
        assert!(PageSize::new(0).is_none());
        assert_eq!(PageSize::default().get(), 10);
    }

    #[test]
    fn test_first_page_has_ten_titles() {
        let catalog = sample_catalog();
        let result = query(&catalog, "", Some(SortKey::Title), PageSize::DEFAULT);
        assert_eq!(result.len(), 10);
    }

    #[test]
    fn test_partial_title_search() {
        let catalog = sample_catalog();
        let result = query(&catalog, "third", Some(SortKey::Title), PageSize::DEFAULT);
        assert!(result[0].title.contains("The Third Man"));
    }

    #[test]
    fn test_no_results_is_empty() {
        let catalog = sample_catalog();
        let result = query(&catalog, "asdfasdfasdf", Some(SortKey::Title), PageSize::DEFAULT);
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let catalog = sample_catalog();
        let result = query(&catalog, "", None, PageSize::new(50).unwrap());
        assert_eq!(result.len(), catalog.len());
    }

    #[test]
    fn test_spaces_in_term_are_significant() {
        let catalog = vec![
            Movie::new("Batman", 1989, 126, "Tim Burton", "Michael Keaton"),
            Movie::new("The Third Man", 1949, 104, "Carol Reed", "Joseph Cotten"),
        ];
        let result = query(&catalog, " man", None, PageSize::DEFAULT);
        assert_eq!(titles(&result), vec!["The Third Man"]);

        assert!(query(&catalog, "   ", None, PageSize::DEFAULT).is_empty());
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let catalog = vec![
            Movie::new("Zodiac", 2007, 157, "David Fincher", "Jake Gyllenhaal"),
            Movie::new("Aliens", 1986, 137, "James Cameron", "Sigourney Weaver"),
            Movie::new("amadeus", 1984, 160, "Milos Forman", "F. Murray Abraham"),
            Movie::new("alien", 1979, 117, "Ridley Scott", "Sigourney Weaver"),
        ];
        let result = query(&catalog, "", Some(SortKey::Title), PageSize::DEFAULT);
        assert_eq!(titles(&result), vec!["alien", "Aliens", "amadeus", "Zodiac"]);
    }

    #[test]
    fn test_unsorted_keeps_snapshot_order() {
        let catalog = sample_catalog();
        let result = query(&catalog, "the", None, PageSize::DEFAULT);
        assert_eq!(
            titles(&result),
            vec![
                "The Shawshank Redemption",
                "The Godfather",
                "The Dark Knight",
                "The Good, the Bad and the Ugly",
                "The Third Man",
            ]
        );
    }

    #[test]
    fn test_title_sort_puts_digits_first() {
        let catalog = sample_catalog();
        let result = query(&catalog, "", Some(SortKey::Title), PageSize::DEFAULT);
        assert_eq!(result[0].title, "12 Angry Men");
        assert_eq!(result[1].title, "Alien");
    }

    #[test]
    fn test_year_ties_keep_snapshot_order() {
        let catalog = sample_catalog();
        let result = query(&catalog, "", Some(SortKey::Year), PageSize::new(20).unwrap());
        let of_1994: Vec<&str> = result
            .iter()
            .filter(|m| m.year == 1994)
            .map(|m| m.title.as_str())
            .collect();
        assert_eq!(
            of_1994,
            vec!["The Shawshank Redemption", "Pulp Fiction", "Forrest Gump"]
        );
    }

    #[test]
    fn test_second_page() {
        let catalog = sample_catalog();
        let q = CatalogQuery::new("").sorted_by(SortKey::Runtime);
        let first = q.clone().run(&catalog);
        let second = q.clone().on_page(1).run(&catalog);
        let third = q.on_page(2).run(&catalog);
        assert_eq!(first.len(), 10);
        assert_eq!(second.len(), 10);
        assert!(third.is_empty());
        assert!(first.last().unwrap().runtime <= second[0].runtime);
    }

    #[test]
    fn test_query_does_not_touch_snapshot() {
        let catalog = sample_catalog();
        let before = catalog.clone();
        let a = query(&catalog, "the", Some(SortKey::Year), PageSize::DEFAULT);
        let b = query(&catalog, "the", Some(SortKey::Year), PageSize::DEFAULT);
        assert_eq!(a, b);
        assert_eq!(catalog, before);
    }

    // The narrow alphabet yields titles that differ only in case
    fn arb_title() -> impl Strategy<Value = String> {
        prop_oneof!["[A-Za-z ]{0,8}", "[AaBb ]{1,3}"]
    }

    fn arb_movie() -> impl Strategy<Value = Movie> {
        (arb_title(), 1900i32..=2050, 1u32..=240).prop_map(|(title, year, runtime)| {
            Movie::new(title, year, runtime, "Director", "Actors")
        })
    }

    proptest! {
        #[test]
        fn prop_results_contain_term(
            catalog in prop::collection::vec(arb_movie(), 0..40),
            term in "[a-zA-Z ]{0,2}"
        ) {
            let result = query(&catalog, &term, None, PageSize::new(40).unwrap());
            let needle = term.to_lowercase();
            for movie in &result {
                prop_assert!(movie.title.to_lowercase().contains(&needle));
            }
            let expected = catalog
                .iter()
                .filter(|m| m.title.to_lowercase().contains(&needle))
                .count();
            prop_assert_eq!(result.len(), expected);
        }

        #[test]
        fn prop_never_exceeds_page_size(
            catalog in prop::collection::vec(arb_movie(), 0..40),
            size in 1usize..15
        ) {
            let page_size = PageSize::new(size).unwrap();
            let result = query(&catalog, "", Some(SortKey::Title), page_size);
            prop_assert_eq!(result.len(), catalog.len().min(size));
        }

        #[test]
        fn prop_sorted_by_each_key(catalog in prop::collection::vec(arb_movie(), 0..40)) {
            let page_size = PageSize::new(40).unwrap();
            for key in SortKey::ALL {
                let result = query(&catalog, "", Some(key), page_size);
                for pair in result.windows(2) {
                    let (a, b) = (&pair[0], &pair[1]);
                    match key {
                        SortKey::Title => {
                            prop_assert!(a.title.to_lowercase() <= b.title.to_lowercase());
                        }
                        SortKey::Year => {
                            prop_assert!(a.year <= b.year);
                        }
                        SortKey::Runtime => {
                            prop_assert!(a.runtime <= b.runtime);
                        }
                    }
                }
            }
        }

        #[test]
        fn prop_sort_is_stable(catalog in prop::collection::vec(arb_movie(), 0..40)) {
            let page_size = PageSize::new(40).unwrap();
            let position = |m: &Movie| catalog.iter().position(|c| c.id == m.id).unwrap();
            for key in SortKey::ALL {
                let result = query(&catalog, "", Some(key), page_size);
                for pair in result.windows(2) {
                    if key.compare(&pair[0], &pair[1]) == std::cmp::Ordering::Equal {
                        prop_assert!(position(&pair[0]) < position(&pair[1]));
                    }
                }
            }
        }
    }
}
