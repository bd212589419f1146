//! Repository layer for document-store operations

pub mod tourists;

use mongodb::Database;

/// Main repository struct holding per-collection repositories
#[derive(Clone)]
pub struct Repository {
    pub tourists: tourists::TouristsRepository,
}

impl Repository {
    /// Create a new repository on the given database handle
    pub fn new(db: &Database) -> Self {
        Self {
            tourists: tourists::TouristsRepository::new(db),
        }
    }
}
