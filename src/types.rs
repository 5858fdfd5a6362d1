use serde::{Deserialize, Serialize};

/// Output format for CLI results
#[derive(Clone, Copy, Debug, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON format for programmatic consumption
    Json,
    /// Human-readable simple format
    Simple,
}

/// How a wait ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitOutcome {
    /// The condition was met on a located element
    Element,
    /// Nothing matched, which satisfied a negated `exist`
    Absent,
    /// The timeout passed first
    TimedOut,
}

/// Result of a `webstep wait` run
#[derive(Debug, Serialize, Deserialize)]
pub struct WaitReport {
    /// Selector that was waited on
    pub selector: String,
    /// Condition phrase
    pub condition: String,
    /// Whether the condition was negated
    pub negative: bool,
    /// Substring the condition looked for, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// Timeout that applied
    pub timeout_ms: u64,
    pub outcome: WaitOutcome,
    /// Wall-clock time spent waiting
    pub elapsed_ms: u64,
}

impl WaitReport {
    pub fn matched(&self) -> bool {
        self.outcome != WaitOutcome::TimedOut
    }

    /// One line summary for `--format simple`
    pub fn summary(&self) -> String {
        let not = if self.negative { "not " } else { "" };
        let expected = self
            .expected
            .as_ref()
            .map(|text| format!(" \"{}\"", text))
            .unwrap_or_default();
        let verdict = match self.outcome {
            WaitOutcome::Element | WaitOutcome::Absent => "met",
            WaitOutcome::TimedOut => "not met",
        };
        format!(
            "{} to {}{}{}: {} after {}ms (timeout {}ms)",
            self.selector, not, self.condition, expected, verdict, self.elapsed_ms, self.timeout_ms
        )
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
