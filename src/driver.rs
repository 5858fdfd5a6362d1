//! Step-level entry point wrapping a browser session

use anyhow::Result;
use std::time::Duration;
use tracing::info;

use crate::condition::{Condition, Predicate, Satisfied};
use crate::config::DriverConfig;
use crate::errors::WaitError;
use crate::selector::Selector;
use crate::session::Session;
use crate::wait::{ElementWait, Poller};
use crate::webdriver::WebDriverSession;

/// What step definitions talk to: a session plus the default wait
pub struct StepDriver<S: Session> {
    session: S,
    default_wait: Option<Duration>,
}

impl<S: Session> StepDriver<S> {
    pub fn new(session: S, default_wait: Option<Duration>) -> Self {
        StepDriver {
            session,
            default_wait,
        }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn default_wait(&self) -> Option<Duration> {
        self.default_wait
    }

    pub fn set_default_wait(&mut self, default_wait: Option<Duration>) {
        self.default_wait = default_wait;
    }

    fn poller(&self) -> Poller<'_, S> {
        Poller::new(&self.session, self.default_wait)
    }

    /// Wait on an element until `condition` holds (or stops holding when
    /// `negative` is set), for at most `timeout_ms`.
    ///
    /// Returns `Ok(None)` when the time runs out.
    pub async fn wait_for_element_condition(
        &self,
        selector: &str,
        timeout_ms: Option<u64>,
        negative: bool,
        condition: Option<&str>,
    ) -> Result<Option<Satisfied<S::Element>>, WaitError> {
        self.poller()
            .wait_for_element_condition(selector, timeout_ms, negative, condition)
            .await
    }

    pub async fn wait(
        &self,
        request: &ElementWait,
    ) -> Result<Option<Satisfied<S::Element>>, WaitError> {
        self.poller().wait(request).await
    }

    /// Whether `selector` matches anything right now, without waiting
    pub async fn element_exists(&self, selector: &str) -> Result<bool, WaitError> {
        let predicate = Predicate::new(Selector::new(selector), Condition::Present, false);
        match predicate.check(&self.session).await {
            Ok(found) => Ok(found.is_some()),
            Err(e) if e.is_transient() => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

impl StepDriver<WebDriverSession> {
    /// Start a browser session as described by `config`
    pub async fn connect(config: &DriverConfig) -> Result<Self> {
        let session = WebDriverSession::connect(config).await?;
        Ok(StepDriver::new(session, config.default_wait()))
    }

    pub async fn open_url(&self, url: &str) -> Result<()> {
        self.session.goto(url).await
    }

    pub async fn close(self) -> Result<()> {
        info!("Closing browser session");
        self.session.close().await
    }
}
