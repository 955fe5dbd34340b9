//! robots.txt synchronization
//!
//! This crate keeps a site's `robots.txt` file in sync with a persisted
//! settings record:
//!
//! - **Environment model**: which deployment stage is running, and therefore
//!   which rule set is active.
//! - **Synchronizer**: recomputes the managed file's content from the
//!   settings on every save, swallowing I/O failures at the boundary.
//! - **Settings store**: loads and persists the record, running the
//!   synchronizer as a before-write hook.
//!
//! # Architecture
//!
//! `robots-core` sits above the filesystem layer:
//!
//! ```text
//!   SettingsStore
//!        |
//!   RobotsTxtSynchronizer --- ErrorSink
//!        |
//!    robots-fs
//! ```
//!
//! # Example
//!
//! ```ignore
//! use robots_core::{Environment, RobotsSettings, RobotsTxtSynchronizer};
//!
//! let syncer = RobotsTxtSynchronizer::new("/srv/site/public", Environment::Live);
//! syncer.synchronize(&RobotsSettings::default());
//! ```

pub mod environment;
pub mod error;
pub mod logging;
pub mod report;
pub mod settings;
pub mod store;
pub mod sync;

pub use environment::Environment;
pub use error::{Error, Result};
pub use report::{CapturingSink, ErrorSink, TracingSink};
pub use settings::RobotsSettings;
pub use store::SettingsStore;
pub use sync::{DEFAULT_PUBLIC_DIR, ROBOTS_FILE_NAME, RobotsTxtSynchronizer, SYNC_TAG};
