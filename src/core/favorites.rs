use crate::domain::ports::Storage;

/// Fixed storage key holding the JSON-encoded favorites array.
pub const FAVORITES_KEY: &str = "favorites";

/// Persists the user's favorited country codes across sessions.
///
/// The list is ordered, duplicate-free, and written wholesale on every
/// mutation. A missing or unavailable backend is never an error: reads
/// behave as an empty list and writes become no-ops, so callers can
/// use the store unconditionally.
pub struct FavoritesStore<S: Storage> {
    storage: S,
}

impl<S: Storage> FavoritesStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Current favorites, oldest first.
    pub fn get_favorites(&self) -> Vec<String> {
        let payload = match self.storage.read(FAVORITES_KEY) {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Favorites storage unavailable, treating as empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&payload) {
            Ok(codes) => codes,
            Err(e) => {
                tracing::warn!("Stored favorites payload is unreadable, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Appends `code` unless it is already present.
    pub fn add_to_favorites(&self, code: &str) {
        let mut favorites = self.get_favorites();
        if favorites.iter().any(|c| c == code) {
            return;
        }
        favorites.push(code.to_string());
        self.save(&favorites);
    }

    /// Removes every occurrence of `code`.
    pub fn remove_from_favorites(&self, code: &str) {
        let favorites: Vec<String> = self
            .get_favorites()
            .into_iter()
            .filter(|c| c != code)
            .collect();
        self.save(&favorites);
    }

    pub fn is_favorite(&self, code: &str) -> bool {
        self.get_favorites().iter().any(|c| c == code)
    }

    fn save(&self, favorites: &[String]) {
        let payload = match serde_json::to_string(favorites) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Failed to encode favorites, list unchanged: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.write(FAVORITES_KEY, &payload) {
            tracing::warn!("Favorites write failed, list unchanged: {}", e);
        }
    }
}
