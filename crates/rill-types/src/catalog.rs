//! Ordered actor and action rosters that events are drawn from.

use serde::Serialize;

use crate::error::TypesError;

/// Default player roster, in emission order.
pub const DEFAULT_ACTORS: [&str; 5] = ["alice", "bob", "charlie", "dina", "youssef"];

/// Default action roster, in emission order.
pub const DEFAULT_ACTIONS: [&str; 3] = ["killed monster", "found treasure", "leveled up"];

/// The fixed, ordered actor and action sets used to derive events.
///
/// Both sets are guaranteed non-empty, so index lookups always resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    actors: Vec<String>,
    actions: Vec<String>,
}

impl Catalog {
    /// Builds a catalog from explicit rosters.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::EmptyCatalog`] if either roster is empty.
    pub fn new<A, B>(
        actors: impl IntoIterator<Item = A>,
        actions: impl IntoIterator<Item = B>,
    ) -> Result<Self, TypesError>
    where
        A: Into<String>,
        B: Into<String>,
    {
        let actors: Vec<String> = actors.into_iter().map(Into::into).collect();
        let actions: Vec<String> = actions.into_iter().map(Into::into).collect();

        if actors.is_empty() {
            return Err(TypesError::EmptyCatalog { which: "actors" });
        }
        if actions.is_empty() {
            return Err(TypesError::EmptyCatalog { which: "actions" });
        }

        Ok(Self { actors, actions })
    }

    /// Returns the actor roster in emission order.
    pub fn actors(&self) -> &[String] {
        &self.actors
    }

    /// Returns the action roster in emission order.
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// Returns the actor at `index`, wrapping modulo the roster size.
    pub fn actor(&self, index: u64) -> &str {
        &self.actors[wrap(index, self.actors.len())]
    }

    /// Returns the action at `index`, wrapping modulo the roster size.
    pub fn action(&self, index: u64) -> &str {
        &self.actions[wrap(index, self.actions.len())]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            actors: DEFAULT_ACTORS.iter().map(|s| s.to_string()).collect(),
            actions: DEFAULT_ACTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// `len` is non-zero by construction.
fn wrap(index: u64, len: usize) -> usize {
    (index % len as u64) as usize
}
