//! Active Context Module
//!
//! Trait through which the ticker observes the owning window and folder
//! panel without depending on any widget toolkit.

use std::sync::Arc;

use crate::volume::Volume;

// == Active Context Trait ==
/// View of the display's surroundings consulted before each refresh tick.
///
/// Implemented by the UI layer; all methods are cheap state reads and must
/// not block.
pub trait ActiveContext: Send + Sync {
    /// True while the status display itself is visible.
    fn is_display_visible(&self) -> bool;

    /// True while the owning window/application is active and foregrounded.
    fn is_foreground(&self) -> bool;

    /// True while a folder change/navigation is in progress.
    fn is_navigation_in_progress(&self) -> bool;

    /// True until the owning window is disposed. Once false, the ticker
    /// exits instead of rescheduling.
    fn is_owner_window_open(&self) -> bool;

    /// The volume backing the currently displayed folder, if any.
    fn current_volume(&self) -> Option<Arc<dyn Volume>>;
}
