//! The browser capabilities the condition poller relies on
//!
//! Anything that can locate an element and answer a handful of read-only
//! questions about it can be waited on. [`crate::webdriver::WebDriverSession`]
//! is the real implementation; tests plug in scripted sessions.

use async_trait::async_trait;
use thiserror::Error;

use crate::selector::Selector;

/// Failure reported by a session while answering a query
#[derive(Debug, Error)]
pub enum SessionError {
    /// The element was detached from the DOM between locating and querying it
    #[error("element is no longer attached to the DOM")]
    StaleElement,
    /// Any other WebDriver command failure
    #[error("WebDriver command failed: {0}")]
    Command(String),
}

impl SessionError {
    /// Whether a retry loop should treat this as "condition not met yet"
    pub fn is_transient(&self) -> bool {
        matches!(self, SessionError::StaleElement)
    }
}

/// A live element handle
#[async_trait]
pub trait Element: Send + Sync {
    async fn is_displayed(&self) -> Result<bool, SessionError>;

    async fn is_enabled(&self) -> Result<bool, SessionError>;

    /// Selected state of options, checkboxes and radio buttons
    async fn is_selected(&self) -> Result<bool, SessionError>;

    /// Rendered text
    async fn text(&self) -> Result<String, SessionError>;

    /// The `value` DOM property, `None` when the element has none
    async fn value_property(&self) -> Result<Option<String>, SessionError>;
}

/// A browser session elements can be located in
#[async_trait]
pub trait Session: Send + Sync {
    type Element: Element;

    /// Locate the first element matching `selector`.
    ///
    /// Returns `Ok(None)` when nothing matches.
    async fn locate(&self, selector: &Selector) -> Result<Option<Self::Element>, SessionError>;
}
