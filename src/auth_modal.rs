//! Props contract for the signup/login modal.
//!
//! Pure data shape: the modal consumer receives two visibility flags, a
//! setter for each, and a handle to the email input so it can move focus.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

/// Shared `bool` setter handed to the modal.
pub type VisibilitySetter = Arc<dyn Fn(bool) + Send + Sync>;

/// Nullable handle to a rendered element.
///
/// Starts empty; the view fills it once the element is mounted. Clones
/// point at the same slot.
pub struct ElementRef<E> {
    current: Arc<Mutex<Option<E>>>,
}

impl<E> ElementRef<E> {
    pub fn new() -> Self {
        Self {
            current: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set(&self, element: E) {
        *self.current.lock() = Some(element);
    }

    pub fn clear(&self) {
        *self.current.lock() = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.current.lock().is_some()
    }
}

impl<E: Clone> ElementRef<E> {
    pub fn current(&self) -> Option<E> {
        self.current.lock().clone()
    }
}

impl<E> Clone for ElementRef<E> {
    fn clone(&self) -> Self {
        Self {
            current: Arc::clone(&self.current),
        }
    }
}

impl<E> Default for ElementRef<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Debug> fmt::Debug for ElementRef<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementRef")
            .field("current", &*self.current.lock())
            .finish()
    }
}

/// Inputs a modal-rendering consumer must be given.
#[derive(Clone)]
pub struct AuthModalProps<E> {
    pub open_signup_modal: bool,
    pub set_open_signup_modal: VisibilitySetter,
    pub open_login_modal: bool,
    pub set_open_login_modal: VisibilitySetter,
    pub email_input_ref: ElementRef<E>,
}

impl<E: fmt::Debug> fmt::Debug for AuthModalProps<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthModalProps")
            .field("open_signup_modal", &self.open_signup_modal)
            .field("open_login_modal", &self.open_login_modal)
            .field("email_input_ref", &self.email_input_ref)
            .finish_non_exhaustive()
    }
}
