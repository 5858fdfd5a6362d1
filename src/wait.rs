//! Bounded-time element condition waits
//!
//! A [`Poller`] turns a one-shot [`Predicate`] into a wait: it re-checks the
//! predicate every [`POLL_INTERVAL`] until it holds or the timeout passes.
//! Running out of time is reported as `Ok(None)`, never as an error, so step
//! definitions only have to look at whether something came back.

use std::time::Duration;
use tokio::time::{Instant, sleep};
use tracing::{debug, trace};

use crate::condition::{ConditionName, Predicate, Satisfied};
use crate::errors::WaitError;
use crate::selector::Selector;
use crate::session::Session;

/// Timeout used when neither the step nor the configuration gives one
pub const DEFAULT_WAIT: Duration = Duration::from_millis(1500);

/// Pause between two checks of the same predicate
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Everything that describes a single element wait
#[derive(Debug, Clone)]
pub struct ElementWait {
    selector: Selector,
    timeout: Option<Duration>,
    negative: bool,
    condition: ConditionName,
    expected: Option<String>,
}

impl ElementWait {
    /// Wait for `selector` to exist, with the default timeout
    pub fn new(selector: impl Into<Selector>) -> Self {
        ElementWait {
            selector: selector.into(),
            timeout: None,
            negative: false,
            condition: ConditionName::default(),
            expected: None,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Timeout in milliseconds as written in a step. `None` and `0` both
    /// fall back to the default wait.
    pub fn timeout_ms(mut self, ms: Option<u64>) -> Self {
        self.timeout = ms.filter(|ms| *ms > 0).map(Duration::from_millis);
        self
    }

    /// Wait for the condition to become false instead of true
    pub fn negative(mut self, negative: bool) -> Self {
        self.negative = negative;
        self
    }

    pub fn condition(mut self, condition: ConditionName) -> Self {
        self.condition = condition;
        self
    }

    /// Substring the text or value conditions look for
    pub fn expecting(mut self, text: impl Into<String>) -> Self {
        self.expected = Some(text.into());
        self
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn condition_name(&self) -> ConditionName {
        self.condition
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Timeout this wait runs with when the session default is `default_wait`
    pub fn effective_timeout(&self, default_wait: Option<Duration>) -> Duration {
        self.timeout.or(default_wait).unwrap_or(DEFAULT_WAIT)
    }

    pub fn predicate(&self) -> Predicate {
        Predicate::new(
            self.selector.clone(),
            self.condition.condition(self.expected.clone()),
            self.negative,
        )
    }
}

/// Polls predicates against a borrowed session
pub struct Poller<'s, S: Session> {
    session: &'s S,
    default_wait: Option<Duration>,
}

impl<'s, S: Session> Poller<'s, S> {
    /// `default_wait` overrides [`DEFAULT_WAIT`] for waits that carry no timeout
    pub fn new(session: &'s S, default_wait: Option<Duration>) -> Self {
        Poller {
            session,
            default_wait,
        }
    }

    /// Timeout applied to waits that do not specify one
    pub fn effective_default(&self) -> Duration {
        self.default_wait.unwrap_or(DEFAULT_WAIT)
    }

    /// Wait on an element using the step vocabulary.
    ///
    /// `condition` must be one of the [`ConditionName`] phrases, or `None` to
    /// wait for presence. An unknown phrase fails before the page is touched.
    pub async fn wait_for_element_condition(
        &self,
        selector: &str,
        timeout_ms: Option<u64>,
        negative: bool,
        condition: Option<&str>,
    ) -> Result<Option<Satisfied<S::Element>>, WaitError> {
        let condition = condition
            .map(str::parse::<ConditionName>)
            .transpose()?
            .unwrap_or_default();

        let request = ElementWait::new(selector)
            .timeout_ms(timeout_ms)
            .negative(negative)
            .condition(condition);
        self.wait(&request).await
    }

    pub async fn wait(
        &self,
        request: &ElementWait,
    ) -> Result<Option<Satisfied<S::Element>>, WaitError> {
        let timeout = request.effective_timeout(self.default_wait);
        debug!(
            "Waiting up to {}ms for {} to {}{}",
            timeout.as_millis(),
            request.selector,
            if request.negative { "not " } else { "" },
            request.condition
        );
        self.poll(&request.predicate(), timeout).await
    }

    /// Check `predicate` until it holds or `timeout` has passed
    pub async fn poll(
        &self,
        predicate: &Predicate,
        timeout: Duration,
    ) -> Result<Option<Satisfied<S::Element>>, WaitError> {
        let started = Instant::now();
        let deadline = started + timeout;
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            match predicate.check(self.session).await {
                Ok(Some(satisfied)) => {
                    debug!(
                        "Condition on {} met after {} attempt(s) in {}ms",
                        predicate.selector,
                        attempts,
                        started.elapsed().as_millis()
                    );
                    return Ok(Some(satisfied));
                }
                Ok(None) => trace!("Attempt {} on {}: not met", attempts, predicate.selector),
                Err(e) if e.is_transient() => {
                    trace!("Attempt {} on {}: {}", attempts, predicate.selector, e)
                }
                Err(e) => return Err(e.into()),
            }

            let now = Instant::now();
            if now >= deadline {
                debug!(
                    "Gave up on {} after {} attempt(s) in {}ms",
                    predicate.selector,
                    attempts,
                    started.elapsed().as_millis()
                );
                return Ok(None);
            }
            sleep(POLL_INTERVAL.min(deadline - now)).await;
        }
    }
}

#[cfg(test)]
#[path = "wait_test.rs"]
mod wait_test;
