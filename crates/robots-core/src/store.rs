//! Settings persistence with the synchronization hook
//!
//! `SettingsStore` models the save flow of the settings record: `save`
//! first runs the synchronizer (the before-write hook), then persists the
//! record. A failed robots.txt write never fails the save; the next save
//! is the natural retry point.

use std::path::{Path, PathBuf};

use robots_fs::ConfigStore;

use crate::{Result, RobotsSettings, RobotsTxtSynchronizer};

/// File name of the persisted settings record.
pub const SETTINGS_FILE_NAME: &str = "robots.toml";

/// Loads and saves the robots.txt settings record.
pub struct SettingsStore {
    path: PathBuf,
    config: ConfigStore,
    syncer: RobotsTxtSynchronizer,
}

impl SettingsStore {
    /// Create a store persisting to `<state_dir>/robots.toml`.
    pub fn new(state_dir: impl AsRef<Path>, syncer: RobotsTxtSynchronizer) -> Self {
        Self {
            path: state_dir.as_ref().join(SETTINGS_FILE_NAME),
            config: ConfigStore::new(),
            syncer,
        }
    }

    /// Path of the settings record.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the settings record, falling back to defaults when no record
    /// has been saved yet.
    pub fn load(&self) -> Result<RobotsSettings> {
        if !self.path.is_file() {
            return Ok(RobotsSettings::default());
        }
        Ok(self.config.load(&self.path)?)
    }

    /// Persist the settings record, synchronizing robots.txt first.
    ///
    /// Synchronization failures are reported through the synchronizer's
    /// sink and do not fail the save; only a failure to persist the record
    /// itself is returned.
    pub fn save(&self, settings: &RobotsSettings) -> Result<()> {
        self.syncer.synchronize(settings);
        self.config.save(&self.path, settings)?;
        Ok(())
    }
}
