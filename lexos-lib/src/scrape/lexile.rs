use log::{info, trace};

use super::Page;
use crate::{isbn::Isbn, Error};

const BOOK_DETAILS_URL: &str = "https://hub.lexile.com/find-a-book/book-details/";
const BOOK_RESULTS_URL: &str = "https://hub.lexile.com/find-a-book/book-results";
const LEVEL_SELECTOR: &str = "#content > div > div > div > div.details > div.metadata > \
                              div.sc-kexyCK.cawTwh > div.header-info > div > span";

/// Looks up the Lexile level for `isbn` on the Lexile hub.
///
/// A single navigation and a single extraction attempt: the hub redirects
/// unknown ISBNs to its empty results listing, which reads as not found,
/// and a missing or unparsable level span reads as not found too.
///
/// # Errors
///
/// An `Err` is returned when the navigation itself fails.
pub(crate) fn level_by_isbn<P: Page>(page: &P, isbn: &Isbn) -> Result<Option<i64>, Error> {
    info!("Searching the Lexile hub for ISBN '{isbn}'");
    let mut url = BOOK_DETAILS_URL.to_owned();
    url.push_str(isbn.as_str());
    page.goto(&url)?;

    if page.url() == BOOK_RESULTS_URL {
        trace!("Redirected to the results listing, no match for this ISBN");
        return Ok(None);
    }

    Ok(page.text(LEVEL_SELECTOR).as_deref().and_then(leading_number))
}

/// Parses the leading digit run of a rendered level such as "700L".
///
/// Beginning-reader levels render as "BR100L" and have no leading digits,
/// so they read as not found, the same as any other unparsable text.
fn leading_number(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::{Call, MockPage};
    use std::collections::HashMap;

    fn isbn() -> Isbn {
        "9780747532743".parse().unwrap()
    }

    #[test]
    fn isbn_is_appended_to_the_book_details_url() {
        let page = MockPage::default();

        let level = level_by_isbn(&page, &isbn()).unwrap();

        assert_eq!(None, level);
        assert!(page.called(&Call::Goto(
            "https://hub.lexile.com/find-a-book/book-details/9780747532743".to_owned()
        )));
    }

    #[test]
    fn redirect_to_results_listing_is_not_found_without_extraction() {
        let page = MockPage {
            landing_url: Some(BOOK_RESULTS_URL.to_owned()),
            ..MockPage::default()
        };

        let level = level_by_isbn(&page, &isbn()).unwrap();

        assert_eq!(None, level);
        assert!(
            !page.calls().iter().any(|c| matches!(c, Call::Text(_))),
            "no extraction should be attempted on the results listing"
        );
    }

    #[test]
    fn level_text_parses_to_a_whole_number() {
        let page = MockPage {
            texts: HashMap::from([(LEVEL_SELECTOR, "700L")]),
            ..MockPage::default()
        };

        assert_eq!(Some(700), level_by_isbn(&page, &isbn()).unwrap());
    }

    #[test]
    fn missing_level_element_is_not_found() {
        let page = MockPage::default();

        assert_eq!(None, level_by_isbn(&page, &isbn()).unwrap());
        assert!(page.called(&Call::Text(LEVEL_SELECTOR.to_owned())));
    }

    #[test]
    fn beginning_reader_level_is_not_found() {
        let page = MockPage {
            texts: HashMap::from([(LEVEL_SELECTOR, "BR100L")]),
            ..MockPage::default()
        };

        assert_eq!(None, level_by_isbn(&page, &isbn()).unwrap());
    }

    #[test]
    fn leading_digits_parse_with_surrounding_noise() {
        assert_eq!(Some(700), leading_number(" 700L"));
        assert_eq!(Some(1010), leading_number("1010L (with quiz)"));
        assert_eq!(None, leading_number(""));
        assert_eq!(None, leading_number("pending"));
    }
}
