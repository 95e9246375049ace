//! Background Tasks Module
//!
//! Contains the periodic ticker that keeps the displayed volume info from
//! going stale without hammering slow volume queries on every repaint.

mod ticker;

pub use ticker::StatusDisplayDriver;

// == Public Constants ==
/// Default number of milliseconds between volume info update ticks
pub const DEFAULT_UPDATE_PERIOD_MS: u64 = 60_000;
