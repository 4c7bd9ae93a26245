pub(crate) mod arbookfind;
pub(crate) mod lexile;

use crate::Error;

/// A navigable browser page.
///
/// The scrapers are generic over this trait so their flows can be exercised
/// against a scripted page in tests; the real implementation drives a
/// headless Chromium tab (see [`Session`](crate::browser::Session)).
///
/// Operations that target a selector come in two failure flavors, matching
/// how the scrapers treat the sites: element lookups that merely prove a
/// result is missing return `Option`/`bool`, while interactions the flow
/// cannot continue without return an [`Error`].
pub trait Page {
    /// Navigates to `url` and waits for the document to load.
    ///
    /// # Errors
    ///
    /// An `Err` is returned when navigation fails outright; landing on an
    /// unexpected page is not an error and is observed through [`Page::url`].
    fn goto(&self, url: &str) -> Result<(), Error>;

    /// The current page URL after any redirects.
    fn url(&self) -> String;

    /// Rendered text of the first element matching `selector`, or `None`
    /// when the element is missing or its text cannot be read.
    fn text(&self, selector: &str) -> Option<String>;

    /// Waits for `selector` and clicks the first match.
    ///
    /// # Errors
    ///
    /// An `Err` is returned when the element never appears or the click is
    /// rejected by the browser.
    fn click(&self, selector: &str) -> Result<(), Error>;

    /// Waits for `selector` and types `text` into the first match.
    ///
    /// # Errors
    ///
    /// An `Err` is returned when the element never appears or does not
    /// accept input.
    fn type_into(&self, selector: &str, text: &str) -> Result<(), Error>;

    /// Blocks until `selector` is present, returning `false` on timeout.
    fn wait_for(&self, selector: &str) -> bool;

    /// Blocks until the current navigation settles.
    ///
    /// # Errors
    ///
    /// An `Err` is returned when the page never reaches a loaded state.
    fn wait_for_load(&self) -> Result<(), Error>;

    /// Non-blocking probe for whether `selector` currently matches.
    fn is_present(&self, selector: &str) -> bool;
}

#[cfg(test)]
pub(crate) use test::{Call, MockPage};
