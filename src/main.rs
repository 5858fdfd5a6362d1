#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use webstep::WebstepError;
use webstep::types::OutputFormat;

mod commands;

use crate::commands::config::ConfigCommands;

const EXIT_SUCCESS: i32 = 0;

#[derive(Parser)]
#[command(name = "webstep")]
#[command(about = "Wait on page elements the way BDD steps describe them", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a page and wait on an element condition
    Wait {
        /// URL to open (empty string to stay on the start page)
        url: String,

        /// CSS selector, or XPath when it starts with //
        selector: String,

        /// Condition phrase, e.g. "be visible" (defaults to "exist")
        #[arg(short, long)]
        condition: Option<String>,

        /// Wait for the condition to be false instead
        #[arg(long = "not")]
        negative: bool,

        /// Timeout in milliseconds (configured default wait if omitted)
        #[arg(short, long)]
        timeout: Option<u64>,

        /// Substring for "contain a text" / "contain a value"
        #[arg(long)]
        text: Option<String>,

        /// Browser to use (firefox, chrome)
        #[arg(short, long)]
        browser: Option<String>,

        /// WebDriver endpoint
        #[arg(long)]
        webdriver_url: Option<String>,

        /// Run browser in visible mode (disables headless)
        #[arg(long = "no-headless")]
        no_headless: bool,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// List the supported condition phrases
    Conditions {
        /// Output format
        #[arg(short, long, default_value = "simple")]
        format: OutputFormat,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[tokio::main]
async fn main() {
    let result = run().await;

    match result {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(err) => {
            let webstep_err: WebstepError = err.into();

            // A wait that ran out of time already printed its report
            if !matches!(webstep_err, WebstepError::ConditionNotMet(_)) {
                let error_json = json!({
                    "error": true,
                    "message": webstep_err.to_string(),
                    "exit_code": webstep_err.exit_code()
                });
                println!(
                    "{}",
                    serde_json::to_string(&error_json).unwrap_or_else(|_| "{}".to_string())
                );
            }

            eprintln!("Error: {}", webstep_err);
            std::process::exit(webstep_err.exit_code());
        }
    }
}

async fn run() -> Result<()> {
    // Initialize tracing to stderr (so JSON output to stdout remains clean)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "webstep=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Wait {
            url,
            selector,
            condition,
            negative,
            timeout,
            text,
            browser,
            webdriver_url,
            no_headless,
            format,
        } => {
            commands::wait::handle_wait(
                url,
                selector,
                condition,
                negative,
                timeout,
                text,
                browser,
                webdriver_url,
                no_headless,
                format,
            )
            .await?
        }

        Commands::Conditions { format } => commands::conditions::handle_conditions(format)?,

        Commands::Config { command } => commands::config::handle_config(command).await?,
    }

    Ok(())
}
