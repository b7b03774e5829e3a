use std::{env, fmt, path::PathBuf, str::FromStr};

use thiserror::Error;
use tracing::Level;

const LOG_LEVEL_ENV: &str = "AEL_LOG";
const EMIT_ENV: &str = "AEL_EMIT";
const DEFAULT_LOG_LEVEL: Level = Level::WARN;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown log level {0:?} in AEL_LOG, expected error, warn, info, debug or trace")]
    UnknownLogLevel(String),
    #[error("unknown output {0:?} in AEL_EMIT, expected ast, tokens or derivation")]
    UnknownEmit(String),
    #[error("expected at most one source path, received {0}")]
    TooManyArguments(usize),
}

/// What the binary prints for a successfully read source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    Ast,
    Tokens,
    Derivation,
}

impl FromStr for Emit {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ast" => Ok(Emit::Ast),
            "tokens" => Ok(Emit::Tokens),
            "derivation" | "cst" => Ok(Emit::Derivation),
            _ => Err(ConfigError::UnknownEmit(value.to_string())),
        }
    }
}

impl fmt::Display for Emit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Emit::Ast => write!(f, "ast"),
            Emit::Tokens => write!(f, "tokens"),
            Emit::Derivation => write!(f, "derivation"),
        }
    }
}

/// Settings for the `ael` binary.
///
/// Resolved from, in order:
///  1. The first positional argument, the source path (stdin when absent)
///  2. `AEL_LOG` for the log level (default `warn`)
///  3. `AEL_EMIT` for the output (default `ast`)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub source: Option<PathBuf>,
    pub log_level: Level,
    pub emit: Emit,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(
            env::args().skip(1),
            env::var(LOG_LEVEL_ENV).ok(),
            env::var(EMIT_ENV).ok(),
        )
    }

    /// Builds a config from explicit inputs; `from_env` feeds it the process state.
    pub fn resolve(
        args: impl IntoIterator<Item = String>,
        log_level: Option<String>,
        emit: Option<String>,
    ) -> Result<Self, ConfigError> {
        let args: Vec<String> = args.into_iter().collect();
        if args.len() > 1 {
            return Err(ConfigError::TooManyArguments(args.len()));
        }

        let log_level = match log_level {
            Some(value) => Level::from_str(value.trim())
                .map_err(|_| ConfigError::UnknownLogLevel(value.clone()))?,
            None => DEFAULT_LOG_LEVEL,
        };

        let emit = match emit {
            Some(value) => value.parse()?,
            None => Emit::Ast,
        };

        Ok(Config {
            source: args.into_iter().next().map(PathBuf::from),
            log_level,
            emit,
        })
    }

    /// Name used for the source in diagnostics.
    pub fn source_name(&self) -> String {
        match &self.source {
            Some(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned()),
            None => String::from("stdin"),
        }
    }
}
