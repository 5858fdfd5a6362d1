use anyhow::Result;
use webstep::{BrowserType, DriverConfig};

/// Load the config file and environment, then apply command line overrides
pub fn resolve_config(
    browser: Option<String>,
    webdriver_url: Option<String>,
    no_headless: bool,
) -> Result<DriverConfig> {
    let config = DriverConfig::load()?;
    apply_overrides(config, browser, webdriver_url, no_headless)
}

pub fn apply_overrides(
    mut config: DriverConfig,
    browser: Option<String>,
    webdriver_url: Option<String>,
    no_headless: bool,
) -> Result<DriverConfig> {
    if let Some(browser) = browser {
        config.browser = browser.parse::<BrowserType>()?;
    }
    if webdriver_url.is_some() {
        config.webdriver_url = webdriver_url;
    }
    if no_headless {
        config.headless = false;
    }
    Ok(config)
}
