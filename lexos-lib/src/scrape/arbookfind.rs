use log::{info, trace};

use super::Page;
use crate::{isbn::Isbn, Error, ErrorKind};

const USER_TYPE_URL: &str = "https://www.arbookfind.com/UserType.aspx?RedirectURL=%2fadvanced.aspx";
const LIBRARIAN_RADIO: &str = "#radLibrarian";
const USER_TYPE_SUBMIT: &str = "#btnSubmitUserType";
const ISBN_BOX: &str = "#ctl00_ContentPlaceHolder1_txtISBN";
const SEARCH_BUTTON: &str = "#ctl00_ContentPlaceHolder1_btnDoIt";
const SEARCH_FAILED: &str = "#ctl00_ContentPlaceHolder1_lblSearchResultFailedLabel";
const BOOK_TITLE: &str = "#book-title";
const BOOK_LEVEL: &str = "#ctl00_ContentPlaceHolder1_ucBookDetail_lblBookLevel";
const POINTS: &str = "#ctl00_ContentPlaceHolder1_ucBookDetail_lblPoints";

/// ATOS book level and Accelerated Reader points for a single book.
///
/// The two values come from the same detail page but are extracted
/// independently, so one can be present without the other.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AtosScores {
    /// ATOS readability level, e.g. `4.5`.
    pub level: Option<f64>,
    /// AR quiz points, e.g. `3`.
    pub points: Option<f64>,
}

/// Looks up the ATOS level and AR points for `isbn` on AR BookFinder.
///
/// The site gates every search behind a user-type form, so the flow first
/// submits the librarian profile (the one that exposes book levels), then
/// searches by ISBN and opens the first result's detail page. A failed
/// search or a results page without a title link reads as not found for
/// both values.
///
/// # Errors
///
/// An `Err` is returned when navigation or a form interaction fails, or
/// when the ISBN search form itself never loads.
pub(crate) fn scores_by_isbn<P: Page>(page: &P, isbn: &Isbn) -> Result<AtosScores, Error> {
    info!("Searching AR BookFinder for ISBN '{isbn}'");
    page.goto(USER_TYPE_URL)?;
    page.click(LIBRARIAN_RADIO)?;
    page.click(USER_TYPE_SUBMIT)?;

    if !page.wait_for(ISBN_BOX) {
        return Err(Error::new(
            ErrorKind::Page,
            "the ISBN search form never loaded",
        ));
    }
    page.type_into(ISBN_BOX, isbn.as_str())?;
    page.click(SEARCH_BUTTON)?;
    page.wait_for_load()?;

    if page.is_present(SEARCH_FAILED) {
        trace!("Search-failed label present, no match for this ISBN");
        return Ok(AtosScores::default());
    }

    // Always takes the first result; ambiguous matches are not disambiguated.
    if !page.wait_for(BOOK_TITLE) {
        trace!("No book title rendered on the results page");
        return Ok(AtosScores::default());
    }
    page.click(BOOK_TITLE)?;
    page.wait_for_load()?;

    Ok(AtosScores {
        level: page.text(BOOK_LEVEL).as_deref().and_then(parse_decimal),
        points: page.text(POINTS).as_deref().and_then(parse_decimal),
    })
}

fn parse_decimal(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}
