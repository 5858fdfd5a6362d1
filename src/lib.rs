//! # webstep
#![allow(clippy::uninlined_format_args)]
//!
//! Element condition waits for behaviour-driven browser tests.
//!
//! Step definitions describe what they expect of an element in plain phrases
//! ("wait on element `#submit` to be enabled", "... to not exist"). This crate
//! resolves those phrases to typed conditions and polls them against a
//! browser session until they hold or a timeout passes.
//!
//! ## Condition phrases
//!
//! | Phrase            | Holds when                               |
//! |-------------------|------------------------------------------|
//! | `exist`           | the selector matches an element          |
//! | `be visible`      | the element is displayed                 |
//! | `be enabled`      | the element is enabled                   |
//! | `be checked`      | the element is selected                  |
//! | `be selected`     | the element is selected                  |
//! | `contain a text`  | the rendered text is non-empty           |
//! | `contain a value` | the `value` property is non-empty        |
//!
//! Selectors starting with `//` are XPath, everything else is CSS.
//!
//! ## CLI Usage
//!
//! ```bash
//! # Wait up to 2s for the submit button to become enabled
//! webstep wait "https://example.com/form" "#submit" --condition "be enabled" --timeout 2000
//!
//! # Wait for a spinner to go away
//! webstep wait "https://example.com" ".spinner" --not
//!
//! # Wait for a heading to mention "Saved"
//! webstep wait "https://example.com" "//h1" --condition "contain a text" --text Saved
//! ```
//!
//! ## Library Usage
//!
//! ```no_run
//! use webstep::{DriverConfig, StepDriver};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let driver = StepDriver::connect(&DriverConfig::default()).await?;
//! driver.open_url("https://example.com").await?;
//!
//! let found = driver
//!     .wait_for_element_condition("#submit", Some(2000), false, Some("be enabled"))
//!     .await?;
//! assert!(found.is_some());
//!
//! driver.close().await?;
//! # Ok(())
//! # }
//! ```

/// Typed conditions and one-shot predicates
pub mod condition;

/// Driver configuration
pub mod config;

/// Step-level driver facade
pub mod driver;

/// Error types and CLI exit codes
pub mod errors;

/// Selector kind detection
pub mod selector;

/// Capabilities required from a browser session
pub mod session;

/// CLI output types
pub mod types;

/// Condition polling
pub mod wait;

/// WebDriver-backed session
pub mod webdriver;

pub use condition::{Condition, ConditionName, Predicate, Satisfied};
pub use config::DriverConfig;
pub use driver::StepDriver;
pub use errors::{WaitError, WebstepError};
pub use selector::{Selector, SelectorKind};
pub use session::{Element, Session, SessionError};
pub use wait::{DEFAULT_WAIT, ElementWait, POLL_INTERVAL, Poller};
pub use webdriver::{BrowserType, WebDriverElement, WebDriverSession};
