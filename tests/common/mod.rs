// Common test utilities: an in-memory session whose page changes over time

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::Instant;
use webstep::{Element, Selector, Session, SessionError};

/// Element snapshot returned by a [`ScriptedSession`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockElement {
    pub name: String,
    pub displayed: bool,
    pub enabled: bool,
    pub selected: bool,
    pub text: String,
    pub value: Option<String>,
}

impl MockElement {
    /// Element for which every condition holds
    pub fn ready(name: &str) -> Self {
        MockElement {
            name: name.to_string(),
            displayed: true,
            enabled: true,
            selected: true,
            text: "Save".to_string(),
            value: Some("filled".to_string()),
        }
    }

    /// Element for which every condition but presence fails
    pub fn inert(name: &str) -> Self {
        MockElement {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl Element for MockElement {
    async fn is_displayed(&self) -> Result<bool, SessionError> {
        Ok(self.displayed)
    }

    async fn is_enabled(&self) -> Result<bool, SessionError> {
        Ok(self.enabled)
    }

    async fn is_selected(&self) -> Result<bool, SessionError> {
        Ok(self.selected)
    }

    async fn text(&self) -> Result<String, SessionError> {
        Ok(self.text.clone())
    }

    async fn value_property(&self) -> Result<Option<String>, SessionError> {
        Ok(self.value.clone())
    }
}

type Script = Box<dyn Fn(Duration) -> Option<MockElement> + Send + Sync>;

/// Session answering each selector from a script of time since creation
pub struct ScriptedSession {
    started: Instant,
    scripts: HashMap<String, Script>,
    locates: AtomicUsize,
    seen: Mutex<Vec<Selector>>,
}

impl ScriptedSession {
    pub fn new() -> Self {
        ScriptedSession {
            started: Instant::now(),
            scripts: HashMap::new(),
            locates: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Answer `selector` with whatever `script` returns for the elapsed time
    pub fn with(
        mut self,
        selector: &str,
        script: impl Fn(Duration) -> Option<MockElement> + Send + Sync + 'static,
    ) -> Self {
        self.scripts.insert(selector.to_string(), Box::new(script));
        self
    }

    /// Answer `selector` with the same element at all times
    pub fn with_element(self, selector: &str, element: MockElement) -> Self {
        self.with(selector, move |_| Some(element.clone()))
    }

    pub fn locate_count(&self) -> usize {
        self.locates.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<Selector> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Session for ScriptedSession {
    type Element = MockElement;

    async fn locate(&self, selector: &Selector) -> Result<Option<MockElement>, SessionError> {
        self.locates.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(selector.clone());

        let elapsed = self.started.elapsed();
        Ok(self
            .scripts
            .get(selector.as_str())
            .and_then(|script| script(elapsed)))
    }
}

/// Assert `elapsed` lies in `[min_ms, max_ms)`
pub fn assert_elapsed_between(elapsed: Duration, min_ms: u64, max_ms: u64) {
    assert!(
        elapsed >= Duration::from_millis(min_ms) && elapsed < Duration::from_millis(max_ms),
        "elapsed {:?} not in [{}ms, {}ms)",
        elapsed,
        min_ms,
        max_ms
    );
}
