//! Feature gates controlling whether the configured default branch is used.

use crate::settings::{env, parse_bool};

/// A boolean toggle, evaluated every time it is asked.
pub trait FeatureGate {
    fn is_enabled(&self) -> bool;
}

impl FeatureGate for bool {
    fn is_enabled(&self) -> bool {
        *self
    }
}

impl<G: FeatureGate + ?Sized> FeatureGate for &G {
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

/// Gate driven by the `GIT_DEFAULT_BRANCH_SETTING` environment variable.
///
/// Enabled unless the variable holds a git-style false value
/// (`false`, `no`, `off`, `0`). Unrecognized values leave it enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBranchSetting;

impl FeatureGate for DefaultBranchSetting {
    fn is_enabled(&self) -> bool {
        match std::env::var(env::DEFAULT_BRANCH_SETTING) {
            Ok(value) => parse_bool(&value, true),
            Err(_) => true,
        }
    }
}
