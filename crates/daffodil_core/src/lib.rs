//! Core data model for Daffodil.
//! Screen models and Authorship aggregate roots live here; UI hosts construct
//! them directly.

pub mod logging;
pub mod model;
pub mod presentation;

pub use logging::{
    default_log_level, flush_logs, init_logging, logging_status, LoggingConfig, LoggingError,
};
pub use model::authorship::{
    AuthorshipDomain, Features, Interactions, Operations, Presentations,
};
pub use presentation::books_screen::{Book, Books, BooksScreen};
pub use presentation::splash_screen::{Profile, Profiles, SplashScreen};

/// Constant reply used by hosts to confirm the core library is linked.
pub fn ping() -> &'static str {
    "pong"
}

/// Version string baked in from the crate manifest.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
