#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    missing_docs,
    rust_2018_idioms
)]
#![allow(clippy::module_name_repetitions)]
#![doc = include_str!("../README.md")]

pub mod browser;
mod error;
mod isbn;
mod report;
mod scrape;

pub use error::{Error, ErrorKind};
pub use isbn::Isbn;
pub use report::Report;
pub use scrape::arbookfind::AtosScores;
pub use scrape::Page;

use log::info;

/// Look up the Lexile level for `isbn` on the Lexile hub.
///
/// `None` means the hub has no plain whole-number level for this ISBN; it
/// is an expected outcome, not an error.
///
/// # Errors
///
/// An `Err` is returned when the navigation to the hub fails.
pub fn lexile_by_isbn<P: Page>(page: &P, isbn: &Isbn) -> Result<Option<i64>, Error> {
    scrape::lexile::level_by_isbn(page, isbn)
}

/// Look up the ATOS level and AR points for `isbn` on AR BookFinder.
///
/// Either field of the result may be absent independently; absence is an
/// expected outcome, not an error.
///
/// # Errors
///
/// An `Err` is returned when navigation or a form interaction fails, or
/// when the ISBN search form never loads.
pub fn atos_by_isbn<P: Page>(page: &P, isbn: &Isbn) -> Result<AtosScores, Error> {
    scrape::arbookfind::scores_by_isbn(page, isbn)
}

/// Gather all metrics for `isbn` on a single page, AR BookFinder first and
/// the Lexile hub second.
///
/// # Errors
///
/// An `Err` is returned when either scraper fails on navigation or a form
/// interaction; metrics the sites simply do not have are reported as absent
/// fields on the [`Report`] instead.
pub fn lookup<P: Page>(page: &P, isbn: &Isbn) -> Result<Report, Error> {
    info!("Gathering ATOS level and AR points");
    let scores = scrape::arbookfind::scores_by_isbn(page, isbn)?;
    info!("Gathering Lexile level");
    let lexile = scrape::lexile::level_by_isbn(page, isbn)?;

    Ok(Report {
        lexile,
        atos: scores.level,
        points: scores.points,
    })
}
