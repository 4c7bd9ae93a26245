//! Headless-browser session management.
//!
//! One [`Session`] is launched per program run and owns the browser process
//! and the single tab that both scrapers reuse sequentially.

use std::sync::Arc;

use headless_chrome::{Browser, FetcherOptions, LaunchOptions, Tab};
use log::{debug, info};

use crate::{Error, ErrorKind, Page};

/// An exclusively-owned headless Chromium instance and its single tab.
///
/// Dropping the session kills the browser process, so resources are
/// released on every exit path without explicit teardown.
pub struct Session {
    tab: Arc<Tab>,
    _browser: Browser,
}

impl Session {
    /// Launches a headless Chromium and opens the tab used for lookups.
    ///
    /// The browser binary is resolved from the system or from a previously
    /// installed managed build; nothing is downloaded here.
    ///
    /// # Errors
    ///
    /// An `Err` of kind [`ErrorKind::Browser`] is returned when no usable
    /// Chromium is found (see [`install`]) or the process fails to start.
    pub fn launch() -> Result<Self, Error> {
        debug!("Launching headless Chromium");
        let browser = Browser::new(LaunchOptions::default())
            .map_err(|e| Error::wrap(ErrorKind::Browser, e))?;
        let tab = browser
            .new_tab()
            .map_err(|e| Error::wrap(ErrorKind::Browser, e))?;
        Ok(Self {
            tab,
            _browser: browser,
        })
    }
}

/// Downloads a managed Chromium build and launches it once to prove it runs.
///
/// Required once before the first lookup on machines without a system
/// Chromium; later launches resolve the same installed build.
///
/// # Errors
///
/// An `Err` of kind [`ErrorKind::Browser`] is returned when the download or
/// the verification launch fails.
pub fn install() -> Result<(), Error> {
    info!("Fetching a managed Chromium build (the first run downloads it)");
    let options = LaunchOptions::default_builder()
        .fetcher_options(FetcherOptions::default().with_allow_download(true))
        .build()
        .map_err(|e| Error::new(ErrorKind::Browser, e.to_string()))?;
    let browser = Browser::new(options).map_err(|e| Error::wrap(ErrorKind::Browser, e))?;
    drop(browser);
    info!("Chromium is installed and launches");
    Ok(())
}

impl Page for Session {
    fn goto(&self, url: &str) -> Result<(), Error> {
        self.tab.navigate_to(url).map_err(page_error)?;
        self.tab.wait_until_navigated().map_err(page_error)?;
        Ok(())
    }

    fn url(&self) -> String {
        self.tab.get_url()
    }

    fn text(&self, selector: &str) -> Option<String> {
        self.tab.find_element(selector).ok()?.get_inner_text().ok()
    }

    fn click(&self, selector: &str) -> Result<(), Error> {
        self.tab
            .wait_for_element(selector)
            .and_then(|element| element.click().map(|_| ()))
            .map_err(page_error)
    }

    fn type_into(&self, selector: &str, text: &str) -> Result<(), Error> {
        self.tab
            .wait_for_element(selector)
            .and_then(|element| element.type_into(text).map(|_| ()))
            .map_err(page_error)
    }

    fn wait_for(&self, selector: &str) -> bool {
        self.tab.wait_for_element(selector).is_ok()
    }

    fn wait_for_load(&self) -> Result<(), Error> {
        self.tab
            .wait_until_navigated()
            .map(|_| ())
            .map_err(page_error)
    }

    fn is_present(&self, selector: &str) -> bool {
        self.tab.find_element(selector).is_ok()
    }
}

fn page_error(err: anyhow::Error) -> Error {
    Error::wrap(ErrorKind::Page, err)
}
