//! The persisted robots.txt settings record

use serde::{Deserialize, Serialize};

/// The robots.txt configuration record.
///
/// Supplied transiently on every save; the file on disk is the only state
/// the synchronizer manages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotsSettings {
    /// Whether a robots.txt file should carry any rules at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Rules published in the live environment.
    #[serde(default)]
    pub live_content: String,

    /// Rules published in any non-live environment.
    #[serde(default)]
    pub test_content: String,
}

fn default_enabled() -> bool {
    true
}

impl Default for RobotsSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            live_content: String::new(),
            test_content: String::new(),
        }
    }
}

impl RobotsSettings {
    /// The content that is active for the given environment.
    ///
    /// Exactly one of the two rule sets is selected, based solely on
    /// whether the environment is live.
    pub fn active_content(&self, env: crate::Environment) -> &str {
        if env.is_live() {
            &self.live_content
        } else {
            &self.test_content
        }
    }
}
