//! Data Models Module
//!
//! Defines the value types exchanged between the cache, the refresher and the
//! display layer.

use serde::Serialize;

// == Unknown Marker ==
/// Sentinel byte count meaning "unknown / unavailable", distinct from a
/// legitimate zero.
pub const UNKNOWN_BYTES: i64 = -1;

// == Volume Space ==
/// Immutable free/total space snapshot for a single volume.
///
/// Either quantity may be [`UNKNOWN_BYTES`] when the underlying query failed
/// or the backend does not expose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VolumeSpace {
    /// Total capacity of the volume in bytes, or -1 if unknown
    pub total_bytes: i64,
    /// Free space on the volume in bytes, or -1 if unknown
    pub free_bytes: i64,
}

impl VolumeSpace {
    // == Constructor ==
    /// Creates a new snapshot from raw byte counts.
    pub fn new(total_bytes: i64, free_bytes: i64) -> Self {
        Self {
            total_bytes,
            free_bytes,
        }
    }

    // == Unknown ==
    /// Returns a snapshot with both quantities unknown, the value published
    /// when a volume query fails entirely.
    pub fn unknown() -> Self {
        Self {
            total_bytes: UNKNOWN_BYTES,
            free_bytes: UNKNOWN_BYTES,
        }
    }

    /// True if the total capacity was successfully resolved.
    pub fn is_total_known(&self) -> bool {
        self.total_bytes != UNKNOWN_BYTES
    }

    /// True if the free space was successfully resolved.
    pub fn is_free_known(&self) -> bool {
        self.free_bytes != UNKNOWN_BYTES
    }
}

// == Volume Space Update ==
/// A refresh result handed off to the display layer.
///
/// Carries the volume key so the display can ignore updates for volumes it is
/// no longer showing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolumeSpaceUpdate {
    /// Canonical absolute path of the volume this snapshot belongs to
    pub key: String,
    /// The free/total space snapshot
    pub space: VolumeSpace,
}

impl VolumeSpaceUpdate {
    /// Creates a new update for the given volume key.
    pub fn new(key: impl Into<String>, space: VolumeSpace) -> Self {
        Self {
            key: key.into(),
            space,
        }
    }
}
