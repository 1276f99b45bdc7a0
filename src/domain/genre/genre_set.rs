use serde::{Deserialize, Serialize};

/// Insertion-ordered set of genre tags
///
/// Every way of editing tags (menu pick, keyboard commit, click on the
/// remove cross, backspace) goes through `add`, `remove` and `remove_last`.
/// All three are idempotent-safe: adding a present tag, removing an absent
/// tag, or popping an empty set leaves the set unchanged.
///
/// Deserialization goes through the same dedup as `add`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct GenreSet(Vec<String>);

impl GenreSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add a genre; returns false when it was blank or already present
    pub fn add(&mut self, genre: impl AsRef<str>) -> bool {
        let genre = genre.as_ref().trim();
        if genre.is_empty() || self.contains(genre) {
            return false;
        }
        self.0.push(genre.to_string());
        true
    }

    /// Remove a specific genre; returns false when it was not present
    pub fn remove(&mut self, genre: &str) -> bool {
        let genre = genre.trim();
        match self.0.iter().position(|g| g == genre) {
            Some(idx) => {
                self.0.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Remove the most recently added genre still present
    pub fn remove_last(&mut self) -> Option<String> {
        self.0.pop()
    }

    /// Labels are compared after trimming, as in `add` and `remove`
    pub fn contains(&self, genre: &str) -> bool {
        let genre = genre.trim();
        self.0.iter().any(|g| g == genre)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<S: Into<String>> FromIterator<S> for GenreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = GenreSet::new();
        for genre in iter {
            let genre: String = genre.into();
            set.add(genre);
        }
        set
    }
}

impl From<Vec<String>> for GenreSet {
    fn from(genres: Vec<String>) -> Self {
        genres.into_iter().collect()
    }
}

impl From<GenreSet> for Vec<String> {
    fn from(set: GenreSet) -> Self {
        set.0
    }
}

impl<'a> IntoIterator for &'a GenreSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for GenreSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}
