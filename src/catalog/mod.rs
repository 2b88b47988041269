//! Book catalog state slice.
//!
//! Holds the fetched book listing, the selected book, category and year
//! labels, a loading flag and the last list/detail failure.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Slice state and request bookkeeping
//! - `intent.rs` - Phases of each async operation plus user actions
//! - `reducer.rs` - State transitions
//! - `store.rs` - Owns the state, runs the async operations

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::{CatalogIntent, Phase};
pub use reducer::CatalogReducer;
pub use state::{CatalogState, RequestId, RequestKind, StalePolicy};
pub use store::CatalogStore;
