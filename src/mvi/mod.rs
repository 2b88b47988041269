//! Model-View-Intent (MVI) primitives for client-side state slices.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                                 │
//!    └─────────── effects ─────────────┘
//! ```
//!
//! - **State**: Cloneable snapshot of a slice
//! - **Intent**: User actions or phases of an async operation
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::StoreState;
