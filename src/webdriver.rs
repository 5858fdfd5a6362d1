use anyhow::{Context, Result};
use async_trait::async_trait;
use fantoccini::elements::Element as FantocciniElement;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder};
use serde_json::json;
use tracing::{debug, info};
use url::Url;

use crate::config::DriverConfig;
use crate::selector::Selector;
use crate::session::{Element, Session, SessionError};

/// Supported browser types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserType {
    /// Mozilla Firefox
    #[default]
    Firefox,
    /// Google Chrome/Chromium
    Chrome,
}

impl std::str::FromStr for BrowserType {
    type Err = anyhow::Error;

    /// Parse browser type from string (case-insensitive)
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "firefox" => Ok(BrowserType::Firefox),
            "chrome" | "chromium" => Ok(BrowserType::Chrome),
            _ => anyhow::bail!("Unsupported browser: {}", s),
        }
    }
}

impl BrowserType {
    /// Default WebDriver URL for this browser type
    pub fn default_webdriver_url(&self) -> &'static str {
        match self {
            BrowserType::Firefox => "http://localhost:4444",
            BrowserType::Chrome => "http://localhost:9515",
        }
    }

    fn driver_name(&self) -> &'static str {
        match self {
            BrowserType::Firefox => "geckodriver",
            BrowserType::Chrome => "chromedriver",
        }
    }

    /// W3C capabilities for a new session
    pub fn capabilities(&self, headless: bool) -> serde_json::Map<String, serde_json::Value> {
        let mut caps = serde_json::Map::new();

        match self {
            BrowserType::Firefox => {
                let mut args = Vec::new();
                if headless {
                    args.push("--headless".to_string());
                }
                caps.insert("moz:firefoxOptions".to_string(), json!({ "args": args }));
            }
            BrowserType::Chrome => {
                let mut args = vec!["--no-sandbox".to_string()];
                if headless {
                    args.push("--headless=new".to_string());
                    args.push("--disable-gpu".to_string());
                    args.push("--disable-dev-shm-usage".to_string());
                }
                caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
            }
        }

        caps
    }
}

/// Browser session driven over the WebDriver protocol
pub struct WebDriverSession {
    client: Client,
}

impl WebDriverSession {
    /// Connect to a running WebDriver and start a new browser session
    pub async fn connect(config: &DriverConfig) -> Result<Self> {
        let browser_type = config.browser;
        let webdriver_url = config.webdriver_url();
        info!("Connecting to {:?} WebDriver at {}", browser_type, webdriver_url);

        if !Self::is_webdriver_running(&webdriver_url).await {
            let driver_name = browser_type.driver_name();
            anyhow::bail!(
                "Cannot connect to {} WebDriver at {}.\n\
                Please ensure {} is running:\n\
                  For Firefox: geckodriver --port 4444\n\
                  For Chrome: chromedriver --port 9515",
                driver_name,
                webdriver_url,
                driver_name
            );
        }

        let caps = browser_type.capabilities(config.headless);
        debug!("Session capabilities: {}", serde_json::Value::Object(caps.clone()));

        let client = ClientBuilder::rustls()
            .capabilities(caps)
            .connect(&webdriver_url)
            .await
            .context("Failed to connect to WebDriver")?;

        Ok(WebDriverSession { client })
    }

    async fn is_webdriver_running(url: &str) -> bool {
        let Ok(base) = Url::parse(url) else {
            return false;
        };
        let status_url = format!("{}/status", base.as_str().trim_end_matches('/'));

        match reqwest::get(status_url).await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    /// Navigate and give the page up to two seconds to finish loading
    pub async fn goto(&self, url: &str) -> Result<()> {
        info!("Navigating to {}", url);
        self.client.goto(url).await?;

        let ready_script = "return document.readyState === 'complete';";
        for _ in 0..20 {
            match self.client.execute(ready_script, vec![]).await {
                Ok(val) if val.as_bool().unwrap_or(false) => break,
                _ => tokio::time::sleep(tokio::time::Duration::from_millis(100)).await,
            }
        }

        Ok(())
    }

    pub async fn close(self) -> Result<()> {
        self.client.close().await?;
        Ok(())
    }
}

/// Element handle from a [`WebDriverSession`]
#[derive(Debug, Clone)]
pub struct WebDriverElement(FantocciniElement);

impl WebDriverElement {
    /// The underlying fantoccini element, for actions beyond waiting
    pub fn inner(&self) -> &FantocciniElement {
        &self.0
    }
}

/// Sort a WebDriver error code. `None` means nothing matched the locator.
fn classify(code: &str, message: String) -> Option<SessionError> {
    match code {
        "no such element" => None,
        "stale element reference" => Some(SessionError::StaleElement),
        _ => Some(SessionError::Command(message)),
    }
}

fn error_code(err: &CmdError) -> Option<&str> {
    match err {
        CmdError::Standard(e) | CmdError::NoSuchElement(e) => Some(e.error()),
        _ => None,
    }
}

/// Error from a query on an already located element
fn session_error(err: CmdError) -> SessionError {
    let message = err.to_string();
    match error_code(&err) {
        Some(code) => classify(code, message.clone()).unwrap_or(SessionError::Command(message)),
        None => SessionError::Command(message),
    }
}

#[async_trait]
impl Element for WebDriverElement {
    async fn is_displayed(&self) -> Result<bool, SessionError> {
        self.0.is_displayed().await.map_err(session_error)
    }

    async fn is_enabled(&self) -> Result<bool, SessionError> {
        self.0.is_enabled().await.map_err(session_error)
    }

    async fn is_selected(&self) -> Result<bool, SessionError> {
        self.0.is_selected().await.map_err(session_error)
    }

    async fn text(&self) -> Result<String, SessionError> {
        self.0.text().await.map_err(session_error)
    }

    async fn value_property(&self) -> Result<Option<String>, SessionError> {
        self.0.prop("value").await.map_err(session_error)
    }
}

#[async_trait]
impl Session for WebDriverSession {
    type Element = WebDriverElement;

    async fn locate(&self, selector: &Selector) -> Result<Option<WebDriverElement>, SessionError> {
        match self.client.find(selector.locator()).await {
            Ok(element) => Ok(Some(WebDriverElement(element))),
            Err(e) => {
                let message = e.to_string();
                match error_code(&e) {
                    Some(code) => classify(code, message).map_or(Ok(None), Err),
                    None => Err(SessionError::Command(message)),
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "webdriver_test.rs"]
mod webdriver_test;
