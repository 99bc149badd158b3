//! Authorship aggregate roots and their composition root.
//!
//! # Responsibility
//! - Give each authorship area its own nominal type.
//! - Own one instance of every aggregate root for the domain lifetime.
//!
//! # Invariants
//! - Aggregate roots carry no state; they are told apart by type only.
//! - `AuthorshipDomain` never swaps an aggregate root after construction.

use log::debug;
use serde::{Deserialize, Serialize};

/// Operations aggregate root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operations;

/// Presentations aggregate root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Presentations;

/// Features aggregate root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Features;

/// Interactions aggregate root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interactions;

/// Composition root for the Authorship domain.
///
/// Fields stay private so callers can read the aggregates but never replace
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorshipDomain {
    operations: Operations,
    presentations: Presentations,
    features: Features,
    interactions: Interactions,
}

impl AuthorshipDomain {
    /// Constructs the domain and initializes all four aggregate roots.
    pub fn new() -> Self {
        let domain = Self {
            operations: Operations,
            presentations: Presentations,
            features: Features,
            interactions: Interactions,
        };
        debug!("event=authorship_init module=model status=ok aggregates=4");
        domain
    }

    pub fn operations(&self) -> &Operations {
        &self.operations
    }

    pub fn presentations(&self) -> &Presentations {
        &self.presentations
    }

    pub fn features(&self) -> &Features {
        &self.features
    }

    pub fn interactions(&self) -> &Interactions {
        &self.interactions
    }
}

impl Default for AuthorshipDomain {
    fn default() -> Self {
        Self::new()
    }
}
