//! Reducer for the book catalog slice.

use crate::mvi::Reducer;

use super::intent::{CatalogIntent, Phase};
use super::state::{CatalogState, RequestKind};

/// Reducer for catalog state transitions.
pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::Books(phase) => {
                reduce_phase(state, RequestKind::Books, phase, |state, books| {
                    state.books = books;
                })
            }

            CatalogIntent::Categories(phase) => {
                reduce_phase(state, RequestKind::Categories, phase, |state, categories| {
                    state.categories = categories;
                })
            }

            CatalogIntent::PublicationYears(phase) => {
                reduce_phase(state, RequestKind::PublicationYears, phase, |state, years| {
                    state.publication_years = years;
                })
            }

            CatalogIntent::BookDetail(phase) => {
                reduce_phase(state, RequestKind::BookDetail, phase, |state, book| {
                    state.selected_book = Some(book);
                })
            }

            CatalogIntent::ClearSelectedBook => CatalogState {
                selected_book: None,
                ..state
            },
        }
    }
}

/// Shared pending/fulfilled/rejected handling.
///
/// Only list and detail requests touch `loading` and `error`; a failed
/// category or year lookup leaves the state as it was.
fn reduce_phase<T>(
    mut state: CatalogState,
    kind: RequestKind,
    phase: Phase<T>,
    on_fulfilled: impl FnOnce(&mut CatalogState, T),
) -> CatalogState {
    match phase {
        Phase::Pending { request_id } => {
            state.requests.record(kind, request_id);
            if kind.tracks_loading() {
                state.loading = true;
            }
        }

        Phase::Fulfilled {
            request_id,
            payload,
        } => {
            if state.accepts(kind, request_id) {
                on_fulfilled(&mut state, payload);
                if kind.tracks_loading() {
                    state.loading = false;
                }
            }
        }

        Phase::Rejected {
            request_id,
            failure,
        } => {
            if state.accepts(kind, request_id) && kind.tracks_loading() {
                state.error = Some(failure);
                state.loading = false;
            }
        }
    }

    state
}
