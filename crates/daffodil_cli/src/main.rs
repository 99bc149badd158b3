//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `daffodil_core` linkage without a UI host.
//! - Print deterministic lines for quick local sanity checks.
//! - Start core logging under the system temp dir.

use daffodil_core::{
    flush_logs, init_logging, AuthorshipDomain, BooksScreen, LoggingConfig, SplashScreen,
};

const LOG_DIR_NAME: &str = "daffodil-logs";

fn main() {
    let log_dir = std::env::temp_dir().join(LOG_DIR_NAME);
    if let Err(err) = init_logging(&LoggingConfig::with_default_level(&log_dir)) {
        eprintln!("daffodil_core logging disabled: {err}");
    }

    println!("daffodil_core ping={}", daffodil_core::ping());
    println!("daffodil_core version={}", daffodil_core::core_version());

    let books = BooksScreen::new();
    let splash = SplashScreen::new();
    let _domain = AuthorshipDomain::new();
    println!(
        "books_screen books={} splash_screen profiles={} authorship_aggregates=4",
        books.books().len(),
        splash.profiles().len()
    );

    flush_logs();
}
