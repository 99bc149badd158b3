//! Domain model for the Authorship area.
//!
//! # Responsibility
//! - Declare the aggregate roots that later authorship features attach to.
//! - Provide one composition root that owns them.
//!
//! # Invariants
//! - Each aggregate root is constructed exactly once per `AuthorshipDomain`.

pub mod authorship;
