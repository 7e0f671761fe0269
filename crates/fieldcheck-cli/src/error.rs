//! CLI errors and how they are reported.
//!
//! Every failure ends up as one [`CliError`]. Its [`ErrorCategory`] picks the
//! exit code and [`CliError::report`] renders the text printed on stderr.

use std::error::Error as _;
use std::fmt::Write as _;
use std::io;

use owo_colors::OwoColorize;
use thiserror::Error;

use fieldcheck_core::error::{ErrorCategory as CoreCategory, FieldcheckError};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Several values were given for a single-valued kind.
    #[error("`{kind}` takes a single value, got {count}")]
    TooManyValues { kind: String, count: usize },

    /// Configuration could not be loaded, looked up or serialised.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Raised by `fieldcheck-core`; every rejected value arrives here.
    #[error(transparent)]
    Core(#[from] FieldcheckError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: io::Error,
    },

    /// `--output-format json` could not encode a result.
    #[error("Failed to serialise {what}")]
    Serialization {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl From<io::Error> for CliError {
    fn from(source: io::Error) -> Self {
        Self::IoError {
            message: source.to_string(),
            source,
        }
    }
}

/// Who has to act on an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The value or invocation was wrong.
    UserError,
    /// A config file or environment override was wrong.
    Configuration,
    /// Something broke that retyping the command will not fix.
    Internal,
}

impl ErrorCategory {
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::UserError => 2,
            Self::Configuration => 4,
            Self::Internal => 1,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::UserError => "user",
            Self::Configuration => "configuration",
            Self::Internal => "internal",
        }
    }
}

impl CliError {
    /// Hints printed under the message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TooManyValues { .. } => vec![
                "Only `tags` accepts several values".into(),
                "Quote the value if it contains spaces".into(),
            ],
            Self::ConfigError { .. } => vec![
                "Run `fieldcheck config path` to locate the active file".into(),
                "Check FIELDCHECK_* environment variables and .env".into(),
                "Use `fieldcheck init --force` to recreate a default config".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec!["Check that the path exists and is writable".into()],
            Self::Serialization { .. } => vec!["Try --output-format plain".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TooManyValues { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } | Self::Serialization { .. } => ErrorCategory::Internal,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.category().exit_code()
    }

    /// The underlying errors, outermost first.
    fn causes(&self) -> impl Iterator<Item = &(dyn std::error::Error + 'static)> {
        std::iter::successors(self.source(), |err| (*err).source())
    }

    /// Text for stderr. `verbose` adds the cause chain, `color` turns on
    /// ANSI styling.
    pub fn report(&self, verbose: bool, color: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "\n{} {}",
            paint(color, "Error:", |s| s.red().bold().to_string()),
            paint(color, &self.to_string(), |s| s.red().to_string()),
        );

        if verbose {
            for cause in self.causes() {
                let line = format!("Caused by: {cause}");
                let _ = writeln!(out, "  {}", paint(color, &line, |s| s.dimmed().to_string()));
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let heading = paint(color, "Suggestions:", |s| s.yellow().bold().to_string());
            let _ = writeln!(out, "\n{heading}");
            for hint in &suggestions {
                let _ = writeln!(out, "  {hint}");
            }
        }

        if !verbose && self.source().is_some() {
            let hint = "Run with -v to see the underlying cause.";
            let _ = writeln!(out, "\n{}", paint(color, hint, |s| s.dimmed().to_string()));
        }

        out
    }

    /// Record the error on the tracing subscriber.
    pub fn log(&self) {
        let category = self.category().label();
        match self.category() {
            ErrorCategory::UserError => tracing::warn!(category, "{self}"),
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(category, "{self}")
            }
        }
        for cause in self.causes() {
            tracing::debug!("caused by: {cause}");
        }
    }
}

fn paint(color: bool, text: &str, style: fn(&str) -> String) -> String {
    if color { style(text) } else { text.to_owned() }
}

/// Attach a message to a failed filesystem call.
pub trait IoContext<T> {
    fn io_context<F>(self, message: F) -> CliResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> IoContext<T> for io::Result<T> {
    fn io_context<F>(self, message: F) -> CliResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|source| CliError::IoError {
            message: message(),
            source,
        })
    }
}
