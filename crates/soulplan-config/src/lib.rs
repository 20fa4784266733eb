//! Configuration system for soulplan.
//!
//! Three kinds of input are loaded here, each from TOML or YAML:
//! - [`PlannerConfig`]: search threads, global crit switch, soul database path
//! - [`TeamConfig`]: the members to plan, resolved into [`Member`]s
//! - [`SoulDb`]: the six slot inventories, loaded and saved back after removals
//!
//! Names are normalized and checked against the shikigami and soul-type
//! catalogs here, so the planner only ever sees validated inputs.
//!
//! # Examples
//!
//! ```
//! use soulplan_config::{PlannerConfig, ThreadCount};
//!
//! let config = PlannerConfig::from_toml_str(r#"
//!     ignore_crit = true
//!     thread_count = { specific = 4 }
//! "#).unwrap();
//!
//! assert!(config.ignore_crit);
//! assert_eq!(config.thread_count, ThreadCount::Specific(4));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use soulplan_config::PlannerConfig;
//!
//! let config = PlannerConfig::load_or_default("missing/soulplan.toml").unwrap();
//! assert_eq!(config, PlannerConfig::default());
//! ```
//!
//! [`Member`]: soulplan_core::Member

mod souls;
mod team;

#[cfg(test)]
mod tests;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use soulplan_core::{ConstraintParseError, PlanError};
use thiserror::Error;

pub use souls::SoulDb;
pub use team::{parse_constraint_arg, MemberConfig, NameList, TeamConfig};

use team::has_toml_extension;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Constraint(#[from] ConstraintParseError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Planner-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct PlannerConfig {
    /// Threads used by one combination search.
    #[serde(default)]
    pub thread_count: ThreadCount,

    /// Ignore crit for every member, e.g. in fights that negate crits.
    #[serde(default)]
    pub ignore_crit: bool,

    /// Soul database to load when none is given on the command line.
    #[serde(default)]
    pub soul_db: Option<PathBuf>,
}

impl PlannerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, TOML for a `.toml` extension and
    /// YAML otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if has_toml_extension(path) {
            Self::from_toml_file(path)
        } else {
            Self::from_yaml_file(path)
        }
    }

    /// Like [`load`](Self::load), but a missing file means defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            result => result,
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn with_thread_count(mut self, thread_count: ThreadCount) -> Self {
        self.thread_count = thread_count;
        self
    }

    pub fn with_ignore_crit(mut self, ignore_crit: bool) -> Self {
        self.ignore_crit = ignore_crit;
        self
    }

    pub fn with_soul_db(mut self, path: impl Into<PathBuf>) -> Self {
        self.soul_db = Some(path.into());
        self
    }
}

/// Thread count for parallel search.
///
/// Serialized as `"auto"`, `"unlimited"` or `{ specific = N }`. Files may
/// also give a plain number, as may the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "ThreadCountRepr", into = "ThreadCountRepr")]
pub enum ThreadCount {
    /// One thread per available core, capped by the number of work units.
    #[default]
    Auto,
    /// One thread per available core.
    Unlimited,
    /// A fixed number of threads, capped by the number of work units.
    Specific(usize),
}

impl ThreadCount {
    /// Resolves the thread count to an actual number, never less than one.
    ///
    /// # Examples
    ///
    /// ```
    /// use soulplan_config::ThreadCount;
    ///
    /// assert_eq!(ThreadCount::Specific(4).resolve(10), 4);
    /// assert_eq!(ThreadCount::Specific(10).resolve(4), 4);
    /// assert_eq!(ThreadCount::Specific(0).resolve(4), 1);
    /// ```
    pub fn resolve(&self, unit_count: usize) -> usize {
        let cpus = std::thread::available_parallelism()
            .map(|p| p.get())
            .unwrap_or(1);
        let threads = match self {
            ThreadCount::Auto => cpus.min(unit_count),
            ThreadCount::Unlimited => cpus,
            ThreadCount::Specific(n) => (*n).min(unit_count),
        };
        threads.max(1)
    }
}

impl fmt::Display for ThreadCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThreadCount::Auto => write!(f, "auto"),
            ThreadCount::Unlimited => write!(f, "unlimited"),
            ThreadCount::Specific(n) => write!(f, "{}", n),
        }
    }
}

impl FromStr for ThreadCount {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ThreadCount::Auto),
            "unlimited" => Ok(ThreadCount::Unlimited),
            n => n
                .parse()
                .map(ThreadCount::Specific)
                .map_err(|_| ConfigError::Invalid(format!("thread count {}", s))),
        }
    }
}

// Untagged so TOML and YAML share one shape; serde_yaml would otherwise
// expect `!specific N` for the newtype variant.
#[derive(Deserialize, Serialize)]
#[serde(untagged)]
enum ThreadCountRepr {
    Count(usize),
    Named(String),
    Specific { specific: usize },
}

impl TryFrom<ThreadCountRepr> for ThreadCount {
    type Error = ConfigError;

    fn try_from(repr: ThreadCountRepr) -> Result<Self, Self::Error> {
        match repr {
            ThreadCountRepr::Count(n) | ThreadCountRepr::Specific { specific: n } => {
                Ok(ThreadCount::Specific(n))
            }
            ThreadCountRepr::Named(name) => name.parse(),
        }
    }
}

impl From<ThreadCount> for ThreadCountRepr {
    fn from(count: ThreadCount) -> Self {
        match count {
            ThreadCount::Specific(n) => ThreadCountRepr::Specific { specific: n },
            named => ThreadCountRepr::Named(named.to_string()),
        }
    }
}
