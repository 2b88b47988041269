//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (clearing a selection)
/// - Phases of an async operation (pending, fulfilled, rejected)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
