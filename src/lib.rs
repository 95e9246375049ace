//! Volinfo - status bar volume info core
//!
//! Provides a bounded TTL/LRU cache of per-volume free/total space, a
//! single-flight background refresher, and the periodic driver that keeps a
//! file manager's status display current without hammering slow volume
//! queries. Widget toolkits plug in through the [`volume::Volume`] and
//! [`context::ActiveContext`] traits.

pub mod cache;
pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod refresh;
pub mod registrar;
pub mod tasks;
pub mod volume;

pub use cache::VolumeInfoCache;
pub use config::Config;
pub use models::{VolumeSpace, VolumeSpaceUpdate};
pub use refresh::VolumeInfoRefresher;
pub use tasks::StatusDisplayDriver;
