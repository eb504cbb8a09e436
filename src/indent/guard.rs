use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::indent::tracker::Indenter;

/// RAII guard for one indentation level.
///
/// Created by [`Indenter::enter_scope`]. Dereferences to the tracker it was
/// entered on and gives the level back when dropped, whether the scope ends
/// normally, through `?`, or by unwinding.
#[must_use = "the indentation level is released as soon as the guard is dropped"]
pub struct IndentGuard<'a> {
    tracker: &'a mut Indenter,
    entered_at: i64,
}

impl<'a> IndentGuard<'a> {
    pub(crate) fn new(tracker: &'a mut Indenter, entered_at: i64) -> Self {
        IndentGuard { tracker, entered_at }
    }
}

impl Drop for IndentGuard<'_> {
    fn drop(&mut self) {
        self.tracker.exit_scope(self.entered_at);
    }
}

impl Deref for IndentGuard<'_> {
    type Target = Indenter;

    fn deref(&self) -> &Self::Target {
        self.tracker
    }
}

impl DerefMut for IndentGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.tracker
    }
}

impl fmt::Debug for IndentGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IndentGuard").field(&self.tracker).finish()
    }
}

impl fmt::Display for IndentGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&**self, f)
    }
}
