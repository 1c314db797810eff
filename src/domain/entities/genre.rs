//! Genre entity for movie categorization.

/// A movie genre.
#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

impl Genre {
    /// Creates a new Genre instance.
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}

/// Input data for creating a genre.
#[derive(Debug, Clone)]
pub struct NewGenre {
    pub name: String,
}
