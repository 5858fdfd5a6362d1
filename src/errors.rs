use std::fmt;
use thiserror::Error;

use crate::session::SessionError;

/// Errors a wait can fail with.
///
/// A wait that simply runs out of time is not an error; it returns `Ok(None)`.
#[derive(Debug, Error)]
pub enum WaitError {
    /// The condition phrase is not one the wait step understands
    #[error("unknown condition: '{0}'")]
    UnknownCondition(String),
    /// The session failed in a way retrying cannot fix
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// CLI error type that includes exit codes
#[derive(Debug)]
pub enum WebstepError {
    /// Unknown condition phrase (exit code 2)
    UnknownCondition(String),
    /// Wait finished without the condition being met (exit code 3)
    ConditionNotMet(String),
    /// WebDriver connection or command failed (exit code 4)
    WebDriverFailed(String),
    /// Generic error (exit code 1)
    Other(anyhow::Error),
}

impl WebstepError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            WebstepError::UnknownCondition(_) => 2,
            WebstepError::ConditionNotMet(_) => 3,
            WebstepError::WebDriverFailed(_) => 4,
            WebstepError::Other(_) => 1,
        }
    }
}

impl fmt::Display for WebstepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebstepError::UnknownCondition(phrase) => {
                write!(f, "Unknown condition '{}'", phrase)?;
                write!(f, " (run `webstep conditions` for the supported phrases)")
            }
            WebstepError::ConditionNotMet(msg) => write!(f, "Condition not met: {}", msg),
            WebstepError::WebDriverFailed(msg) => {
                write!(f, "WebDriver connection failed: {}", msg)
            }
            WebstepError::Other(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for WebstepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebstepError::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<WaitError> for WebstepError {
    fn from(err: WaitError) -> Self {
        match err {
            WaitError::UnknownCondition(phrase) => WebstepError::UnknownCondition(phrase),
            WaitError::Session(e) => WebstepError::WebDriverFailed(e.to_string()),
        }
    }
}

impl From<anyhow::Error> for WebstepError {
    fn from(err: anyhow::Error) -> Self {
        let err = match err.downcast::<WebstepError>() {
            Ok(webstep_err) => return webstep_err,
            Err(err) => err,
        };

        if let Some(wait_err) = err.downcast_ref::<WaitError>() {
            return match wait_err {
                WaitError::UnknownCondition(phrase) => {
                    WebstepError::UnknownCondition(phrase.clone())
                }
                WaitError::Session(_) => WebstepError::WebDriverFailed(format!("{:#}", err)),
            };
        }

        // Fall back to the message for errors raised with context strings
        let msg = format!("{:#}", err);
        if msg.contains("WebDriver") || msg.contains("geckodriver") || msg.contains("chromedriver")
        {
            WebstepError::WebDriverFailed(msg)
        } else {
            WebstepError::Other(err)
        }
    }
}

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;
