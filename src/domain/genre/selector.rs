use super::genre_set::GenreSet;

/// Genres offered by the tag menu when no vocabulary is configured
pub const DEFAULT_GENRES: &[&str] = &[
    "Action",
    "Adventure",
    "Animation",
    "Biography",
    "Comedy",
    "Crime",
    "Documentary",
    "Drama",
    "Family",
    "Fantasy",
    "Film-Noir",
    "History",
    "Horror",
    "Music",
    "Musical",
    "Mystery",
    "Romance",
    "Sci-Fi",
    "Sport",
    "Thriller",
    "War",
    "Western",
];

/// Menu state of the genre multi-select
///
/// The selector owns only transient menu state (open flag, typed filter,
/// highlighted row). The chosen tags live in the draft's `GenreSet`, which
/// every operation receives explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreSelector {
    vocabulary: Vec<String>,
    input: String,
    highlighted: usize,
    open: bool,
}

impl GenreSelector {
    /// Create a selector over a fixed vocabulary
    /// Duplicate and blank labels are dropped; order is kept
    pub fn new<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let vocabulary: GenreSet = vocabulary.into_iter().collect();
        Self {
            vocabulary: vocabulary.into_vec(),
            input: String::new(),
            highlighted: 0,
            open: false,
        }
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn open(&mut self) {
        self.open = true;
        self.highlighted = 0;
    }

    /// Close the menu, discarding the typed filter
    pub fn close(&mut self) {
        self.open = false;
        self.input.clear();
        self.highlighted = 0;
    }

    /// Append typed text to the filter; opens the menu
    pub fn type_text(&mut self, text: &str) {
        self.input.push_str(text);
        self.open = true;
        self.highlighted = 0;
    }

    /// Options not yet chosen, in vocabulary order, narrowed by the typed filter
    pub fn options<'a>(&'a self, chosen: &GenreSet) -> Vec<&'a str> {
        let needle = self.input.trim().to_lowercase();
        self.vocabulary
            .iter()
            .filter(|g| !chosen.contains(g))
            .filter(|g| needle.is_empty() || g.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    /// Currently highlighted option, if the menu has any
    pub fn highlighted<'a>(&'a self, chosen: &GenreSet) -> Option<&'a str> {
        let options = self.options(chosen);
        if options.is_empty() {
            return None;
        }
        Some(options[self.highlighted.min(options.len() - 1)])
    }

    /// Move the highlight down; clamps at the last option
    /// On a closed menu this only opens it with the first option highlighted
    pub fn step_down(&mut self, chosen: &GenreSet) {
        if !self.open {
            self.open();
            return;
        }
        let len = self.options(chosen).len();
        self.highlighted = (self.highlighted + 1).min(len.saturating_sub(1));
    }

    /// Move the highlight up; clamps at the first option
    pub fn step_up(&mut self, chosen: &GenreSet) {
        let len = self.options(chosen).len();
        self.highlighted = self
            .highlighted
            .min(len.saturating_sub(1))
            .saturating_sub(1);
    }

    /// Add the highlighted option to the set
    /// Returns the committed genre, or None when the menu offers nothing
    pub fn commit(&mut self, chosen: &mut GenreSet) -> Option<String> {
        let genre = self.highlighted(chosen)?.to_string();
        chosen.add(&genre);
        self.input.clear();
        let remaining = self.options(chosen).len();
        self.highlighted = self.highlighted.min(remaining.saturating_sub(1));
        Some(genre)
    }

    /// Pick a genre by label (click on a menu row)
    /// Labels matching the vocabulary case-insensitively use its spelling
    pub fn select(&mut self, chosen: &mut GenreSet, genre: &str) -> bool {
        let label = self
            .vocabulary
            .iter()
            .find(|g| g.eq_ignore_ascii_case(genre.trim()))
            .map(String::as_str)
            .unwrap_or(genre);
        let added = chosen.add(label);
        self.input.clear();
        added
    }

    /// Remove a genre via its remove cross
    pub fn remove(&self, chosen: &mut GenreSet, genre: &str) -> bool {
        chosen.remove(genre)
    }

    /// Backspace in the tag input
    /// Deletes a typed character when there is one, otherwise the last tag
    pub fn backspace(&mut self, chosen: &mut GenreSet) -> Option<String> {
        if self.input.pop().is_some() {
            self.highlighted = 0;
            return None;
        }
        chosen.remove_last()
    }
}

impl Default for GenreSelector {
    fn default() -> Self {
        Self::new(DEFAULT_GENRES.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crime_drama() -> GenreSet {
        ["Crime", "Drama"].into_iter().collect()
    }

    #[test]
    fn test_click_to_add() {
        let mut selector = GenreSelector::default();
        let mut genres = crime_drama();
        selector.open();
        assert!(selector.select(&mut genres, "Comedy"));
        selector.close();
        assert!(genres.contains("Comedy"));
        assert!(!selector.options(&genres).contains(&"Comedy"));
    }

    #[test]
    fn test_select_uses_vocabulary_spelling() {
        let mut selector = GenreSelector::default();
        let mut genres = GenreSet::new();
        selector.select(&mut genres, "sci-fi");
        assert!(genres.contains("Sci-Fi"));
    }

    #[test]
    fn test_select_present_genre_is_noop() {
        let mut selector = GenreSelector::default();
        let mut genres = crime_drama();
        assert!(!selector.select(&mut genres, "Crime"));
        assert_eq!(genres.len(), 2);
    }

    #[test]
    fn test_remove_by_click() {
        let selector = GenreSelector::default();
        let mut genres = crime_drama();
        assert!(selector.remove(&mut genres, "Crime"));
        assert!(!genres.contains("Crime"));
        assert!(!selector.remove(&mut genres, "Crime"));
    }

    #[test]
    fn test_backspace_twice_removes_both_tags() {
        let mut selector = GenreSelector::default();
        let mut genres = crime_drama();
        selector.backspace(&mut genres);
        selector.backspace(&mut genres);
        assert!(!genres.contains("Crime"));
        assert!(!genres.contains("Drama"));
        assert_eq!(selector.backspace(&mut genres), None);
        assert!(genres.is_empty());
    }

    #[test]
    fn test_backspace_edits_typed_text_first() {
        let mut selector = GenreSelector::default();
        let mut genres = crime_drama();
        selector.type_text("co");
        assert_eq!(selector.backspace(&mut genres), None);
        assert_eq!(selector.input(), "c");
        assert_eq!(genres.len(), 2);
    }

    #[test]
    fn test_arrow_past_end_clamps_then_commits() {
        let mut selector = GenreSelector::new(["Action", "Comedy", "Crime", "Drama"]);
        let mut genres = crime_drama();
        // first press opens the menu, the rest walk and clamp
        for _ in 0..10 {
            selector.step_down(&genres);
        }
        assert_eq!(selector.highlighted(&genres), Some("Comedy"));
        assert_eq!(selector.commit(&mut genres).as_deref(), Some("Comedy"));
        assert!(genres.contains("Comedy"));
        assert_eq!(selector.highlighted(&genres), Some("Action"));
    }

    #[test]
    fn test_step_up_clamps_at_first() {
        let mut selector = GenreSelector::default();
        let genres = GenreSet::new();
        selector.open();
        selector.step_up(&genres);
        selector.step_up(&genres);
        assert_eq!(selector.highlighted(&genres), Some("Action"));
    }

    #[test]
    fn test_commit_with_nothing_available() {
        let mut selector = GenreSelector::new(["Crime"]);
        let mut genres: GenreSet = ["Crime"].into_iter().collect();
        selector.open();
        assert_eq!(selector.commit(&mut genres), None);
        assert_eq!(genres.len(), 1);
    }

    #[test]
    fn test_typed_filter_narrows_options() {
        let mut selector = GenreSelector::default();
        let genres = GenreSet::new();
        selector.type_text("mus");
        assert_eq!(selector.options(&genres), vec!["Music", "Musical"]);
        selector.close();
        assert_eq!(selector.input(), "");
    }
}
