//! Volume Abstraction Module
//!
//! Defines the external storage-volume collaborator as traits, so local
//! disks, network shares and test doubles plug in interchangeably.

use std::path::Path;

use crate::error::Result;

// == Volume Trait ==
/// A mounted storage unit (disk, network share) with aggregate free/total
/// capacity.
///
/// Free and total space are exposed as one atomic capability of the backend;
/// either query may be I/O bound and slow, which is why callers go through
/// the cache and the background refresher instead of calling these directly
/// from a rendering path.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; queries are issued from blocking
/// background tasks.
pub trait Volume: Send + Sync {
    /// Canonical absolute path of the volume, used as the cache key.
    /// Equality is exact string equality.
    fn key(&self) -> String;

    /// Free space on the volume in bytes.
    ///
    /// # Errors
    /// [`crate::error::VolumeError::Query`] when the backend cannot be read.
    fn free_space(&self) -> Result<u64>;

    /// Total capacity of the volume in bytes.
    ///
    /// # Errors
    /// [`crate::error::VolumeError::Query`] when the backend cannot be read.
    fn total_space(&self) -> Result<u64>;
}

// == Symlink Target Capability ==
/// Capability trait for backends that can resolve a symlink's target path.
///
/// Backends that support it (local files, SFTP, FTP listings) implement this
/// polymorphically; callers ask for the capability instead of matching on
/// concrete backend types.
pub trait SymlinkTarget {
    /// Target path of the symlink, or None when the entry is not a symlink
    /// or the target cannot be resolved.
    fn symlink_target(&self, path: &Path) -> Option<String>;
}
