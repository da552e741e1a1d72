//! Environment-driven tuning for property suites.
//!
//! `PROGTEST_CASES` overrides the case count and `DENDRO_PBT_FORK` runs each
//! case in a forked subprocess. Unparseable overrides are logged and ignored.

use std::env;

use proptest::test_runner::Config;
use thiserror::Error;

/// Environment variable controlling proptest case counts.
pub const CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const FORK_ENV_KEY: &str = "DENDRO_PBT_FORK";

/// Reason an environment override was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OverrideError {
    /// The value was not an unsigned integer.
    #[error("expected an unsigned integer, got {0:?}")]
    NotANumber(String),
    /// The case count was zero.
    #[error("case count must be positive")]
    ZeroCases,
    /// The value was not a recognised boolean spelling.
    #[error("expected true/false/1/0/yes/no/on/off, got {0:?}")]
    NotABool(String),
}

/// Case count and fork mode for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads the profile from the environment, falling back to
    /// `default_cases` and no forking.
    ///
    /// # Examples
    /// ```
    /// use dendro_test_support::proptest_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32) -> Self {
        Self {
            cases: override_or(CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(FORK_ENV_KEY, false, parse_bool),
        }
    }

    /// Number of cases per property.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cases(&self) -> u32 { self.cases }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    #[rustfmt::skip]
    pub const fn fork(&self) -> bool { self.fork }

    /// Converts the profile into a proptest runner configuration.
    #[must_use]
    pub fn into_config(self) -> Config {
        Config {
            cases: self.cases,
            fork: self.fork,
            ..Config::default()
        }
    }
}

fn override_or<T>(key: &'static str, default: T, parse: fn(&str) -> Result<T, OverrideError>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(env = key, %raw, %error, "ignoring property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(_) => Err(OverrideError::NotANumber(raw.to_owned())),
    }
}

fn parse_bool(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotABool(raw.to_owned())),
    }
}
