use anyhow::{Context, Result};
use tokio::time::Instant;
use tracing::{info, warn};

use webstep::types::{OutputFormat, WaitOutcome, WaitReport};
use webstep::{ConditionName, DriverConfig, ElementWait, Satisfied, StepDriver, WebstepError};

use super::utils::resolve_config;

/// Build the wait, keeping `text` only for the text and value conditions
pub fn build_request(
    selector: &str,
    condition: ConditionName,
    negative: bool,
    timeout: Option<u64>,
    text: Option<String>,
) -> (ElementWait, Option<String>) {
    let request = ElementWait::new(selector)
        .timeout_ms(timeout)
        .negative(negative)
        .condition(condition);

    let Some(text) = text else {
        return (request, None);
    };
    if !matches!(
        condition,
        ConditionName::ContainAText | ConditionName::ContainAValue
    ) {
        warn!("--text is ignored for condition '{}'", condition);
        return (request, None);
    }
    (request.expecting(text.clone()), Some(text))
}

#[allow(clippy::too_many_arguments)]
pub async fn handle_wait(
    url: String,
    selector: String,
    condition: Option<String>,
    negative: bool,
    timeout: Option<u64>,
    text: Option<String>,
    browser: Option<String>,
    webdriver_url: Option<String>,
    no_headless: bool,
    format: OutputFormat,
) -> Result<()> {
    // Reject unknown phrases before a browser is started
    let condition = condition
        .as_deref()
        .map(str::parse::<ConditionName>)
        .transpose()?
        .unwrap_or_default();

    let (request, text) = build_request(&selector, condition, negative, timeout, text);

    let config = resolve_config(browser, webdriver_url, no_headless)?;
    let driver = StepDriver::connect(&config).await?;

    let result = run_wait(&driver, &config, &url, request, text).await;
    if let Err(e) = driver.close().await {
        warn!("Failed to close browser session: {}", e);
    }
    let report = result?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Simple => println!("{}", report.summary()),
    }

    if report.matched() {
        Ok(())
    } else {
        Err(WebstepError::ConditionNotMet(report.summary()).into())
    }
}

async fn run_wait(
    driver: &StepDriver<webstep::WebDriverSession>,
    config: &DriverConfig,
    url: &str,
    request: ElementWait,
    expected: Option<String>,
) -> Result<WaitReport> {
    if !url.is_empty() {
        driver.open_url(url).await?;
    }

    let timeout = request.effective_timeout(config.default_wait());
    info!("Waiting on {}", request.selector());

    let started = Instant::now();
    let outcome = driver
        .wait(&request)
        .await
        .with_context(|| format!("Waiting on {}", request.selector()))?;
    let elapsed = started.elapsed();

    let outcome = match outcome {
        Some(Satisfied::Element(_)) => WaitOutcome::Element,
        Some(Satisfied::Absent) => WaitOutcome::Absent,
        None => WaitOutcome::TimedOut,
    };

    Ok(WaitReport {
        selector: request.selector().to_string(),
        condition: request.condition_name().to_string(),
        negative: request.is_negative(),
        expected,
        timeout_ms: timeout.as_millis() as u64,
        outcome,
        elapsed_ms: elapsed.as_millis() as u64,
    })
}
