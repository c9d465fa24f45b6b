//! Context plumbing for the local fallback catalog.
//!
//! One catalog value per app, seeded at mount and provided through context,
//! so every page reads and appends to the same tables without module-level
//! globals.

use leptos::prelude::*;
use stayhub_shared::Review;
use stayhub_shared::catalog::Catalog;

/// Context handle for the shared catalog signal.
#[derive(Clone, Copy)]
pub struct CatalogStore(RwSignal<Catalog>);

impl CatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        Self(RwSignal::new(catalog))
    }

    /// Reads from the catalog without cloning it whole.
    pub fn with<R>(&self, f: impl FnOnce(&Catalog) -> R) -> R {
        self.0.with(f)
    }

    /// Appends a review locally and returns the stored copy. `None` only if
    /// the app is already disposed.
    pub fn add_review(
        &self,
        place_id: &str,
        rating: u8,
        comment: &str,
        author: &str,
    ) -> Option<Review> {
        self.0
            .try_update(|catalog| catalog.add_review(place_id, rating, comment, author))
    }
}

pub fn use_catalog() -> CatalogStore {
    use_context::<CatalogStore>().expect("CatalogStore should be provided")
}
