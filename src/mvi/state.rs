//! Base trait for slice state.

/// Marker trait for state objects.
///
/// States should be:
/// - Cloneable (subscribers receive snapshots)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait StoreState: Clone + PartialEq + Default + Send + Sync + 'static {}
