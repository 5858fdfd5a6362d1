//! Element selectors as written in step definitions

use fantoccini::Locator;
use std::fmt;

/// How a selector string is interpreted by the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    /// XPath expression (anything starting with `//`)
    XPath,
    /// CSS selector
    Css,
}

/// A selector string together with its inferred kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    raw: String,
    kind: SelectorKind,
}

impl Selector {
    /// Build a selector, treating a leading `//` as XPath and everything else as CSS
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let kind = if raw.starts_with("//") {
            SelectorKind::XPath
        } else {
            SelectorKind::Css
        };
        Selector { raw, kind }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> SelectorKind {
        self.kind
    }

    /// WebDriver locator for this selector
    pub fn locator(&self) -> Locator<'_> {
        match self.kind {
            SelectorKind::XPath => Locator::XPath(&self.raw),
            SelectorKind::Css => Locator::Css(&self.raw),
        }
    }
}

impl From<&str> for Selector {
    fn from(raw: &str) -> Self {
        Selector::new(raw)
    }
}

impl From<String> for Selector {
    fn from(raw: String) -> Self {
        Selector::new(raw)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;
