//! robots.txt synchronization logic
//!
//! This module provides the `RobotsTxtSynchronizer`, which makes the on-disk
//! `robots.txt` match the settings record's current intent on every save.
//! The managed file has two logical states: active (environment-appropriate
//! rules) and blank (disabled); each call recomputes the state from scratch,
//! so repeated calls with identical input are idempotent.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use robots_fs::io;

use crate::report::{ErrorSink, TracingSink};
use crate::{Environment, Result, RobotsSettings};

/// Name of the managed file inside the base directory.
pub const ROBOTS_FILE_NAME: &str = "robots.txt";

/// Default base directory, relative to the site root.
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Fixed tag attached to every reported synchronization error, so
/// downstream alerting can filter on it.
pub const SYNC_TAG: &str = "RobotsDotTxt";

/// Synchronizes the on-disk robots.txt with the settings record.
///
/// The base directory is an explicit constructor parameter rather than a
/// global, so tests can redirect writes without touching shared state. The
/// file at `<base>/robots.txt` must already exist: the synchronizer rewrites
/// it in place (blanking on disable rather than unlinking) and never creates
/// it from nothing.
///
/// [`synchronize`](Self::synchronize) never returns an error: every failure
/// is forwarded to the injected [`ErrorSink`] and swallowed, so the save
/// that triggered it always completes.
pub struct RobotsTxtSynchronizer {
    base: PathBuf,
    environment: Environment,
    sink: Arc<dyn ErrorSink>,
}

impl RobotsTxtSynchronizer {
    /// Create a synchronizer reporting errors through the default
    /// [`TracingSink`].
    pub fn new(base: impl Into<PathBuf>, environment: Environment) -> Self {
        Self::with_sink(base, environment, Arc::new(TracingSink))
    }

    /// Create a synchronizer for the conventional `<site_root>/public`
    /// layout.
    pub fn for_site_root(site_root: impl AsRef<Path>, environment: Environment) -> Self {
        Self::new(site_root.as_ref().join(DEFAULT_PUBLIC_DIR), environment)
    }

    /// Create a synchronizer with an explicit error sink.
    pub fn with_sink(
        base: impl Into<PathBuf>,
        environment: Environment,
        sink: Arc<dyn ErrorSink>,
    ) -> Self {
        Self {
            base: base.into(),
            environment,
            sink,
        }
    }

    /// The directory the managed file lives in.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Absolute path of the managed file.
    pub fn target_path(&self) -> PathBuf {
        self.base.join(ROBOTS_FILE_NAME)
    }

    /// Bring the managed file in line with the settings.
    ///
    /// Mutates exactly one file per invocation and has no other observable
    /// effect: no return value, no panic, no propagated error.
    pub fn synchronize(&self, settings: &RobotsSettings) {
        if let Err(error) = self.apply(settings) {
            self.sink.report(&error);
        }
    }

    /// The checked core of [`synchronize`](Self::synchronize).
    fn apply(&self, settings: &RobotsSettings) -> Result<()> {
        let target = self.target_path();

        // Disabled: blank the file, keeping inode and permissions so the
        // toggle can be flipped back without re-provisioning.
        if !settings.enabled {
            io::overwrite_in_place(&target, "")?;
            return Ok(());
        }

        let content = settings.active_content(self.environment);
        io::overwrite_in_place(&target, content)?;

        Ok(())
    }
}
