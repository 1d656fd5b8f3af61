//! Runtime settings
//!
//! The only process-wide state in the crate. It tells validators whether
//! they run in production or under a test harness, which controls
//! developer warnings such as the unhandled-case warning of
//! [`Case`](crate::combinators::Case).
//!
//! Settings are never inferred from environment variables; the host
//! application calls [`init`], and test harnesses call [`enter_test_mode`].
//!
//! ```rust
//! use tessera_validator::config::{self, Environment};
//!
//! let guard = config::enter_test_mode();
//! assert_eq!(config::current().environment, Environment::Test);
//! drop(guard);
//! ```

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};

static SETTINGS: LazyLock<ArcSwap<Settings>> =
    LazyLock::new(|| ArcSwap::from_pointee(Settings::default()));

/// Where the validators are running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// Normal operation; developer warnings are emitted.
    #[default]
    Production,
    /// Under a test harness; developer warnings are suppressed.
    Test,
}

/// Process-wide validator settings.
///
/// Embeddable in a host application's configuration; missing fields fall
/// back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Current environment.
    pub environment: Environment,
}

impl Settings {
    /// Settings for the given environment.
    #[must_use]
    pub const fn new(environment: Environment) -> Self {
        Self { environment }
    }

    /// Policy applied to unhandled cases under these settings.
    #[must_use]
    pub const fn unhandled_case_policy(&self) -> UnhandledCasePolicy {
        match self.environment {
            Environment::Production => UnhandledCasePolicy::Warn,
            Environment::Test => UnhandledCasePolicy::Silent,
        }
    }
}

/// What a case validator does besides failing when it meets a variant it
/// does not handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnhandledCasePolicy {
    /// Emit a `tracing` warning.
    Warn,
    /// Only fail.
    Silent,
}

/// Installs process-wide settings, replacing the previous ones.
pub fn init(settings: Settings) {
    SETTINGS.store(Arc::new(settings));
}

/// The current settings.
#[inline]
pub fn current() -> Arc<Settings> {
    SETTINGS.load_full()
}

/// Switches to [`Environment::Test`] until the guard is dropped.
///
/// ```rust
/// use tessera_validator::config::{self, Environment};
///
/// {
///     let _guard = config::enter_test_mode();
///     assert_eq!(config::current().environment, Environment::Test);
/// }
/// ```
#[must_use = "test mode ends when the guard is dropped"]
pub fn enter_test_mode() -> TestModeGuard {
    let previous = SETTINGS.swap(Arc::new(Settings::new(Environment::Test)));
    TestModeGuard { previous }
}

/// Restores the settings that were active before [`enter_test_mode`].
#[derive(Debug)]
pub struct TestModeGuard {
    previous: Arc<Settings>,
}

impl Drop for TestModeGuard {
    fn drop(&mut self) {
        SETTINGS.store(Arc::clone(&self.previous));
    }
}
