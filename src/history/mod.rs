mod config;
mod store;

pub use config::{HistoryConfig, RedoPolicy};
pub use store::HistoryStore;

/// Borrowed view of both history sequences, most recent entry last
pub struct DrawingPaths<'a, U> {
    undoable: &'a [U],
    redoable: &'a [U],
}

// Manual impls so the view stays Copy for any unit type
impl<U> Clone for DrawingPaths<'_, U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U> Copy for DrawingPaths<'_, U> {}

impl<U: std::fmt::Debug> std::fmt::Debug for DrawingPaths<'_, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawingPaths")
            .field("undoable", &self.undoable)
            .field("redoable", &self.redoable)
            .finish()
    }
}

impl<'a, U> DrawingPaths<'a, U> {
    pub fn new(undoable: &'a [U], redoable: &'a [U]) -> Self {
        Self { undoable, redoable }
    }

    /// Units currently applied to the canvas, in drawing order
    pub fn undoable(&self) -> &'a [U] {
        self.undoable
    }

    /// Units that were undone, most recently undone last
    pub fn redoable(&self) -> &'a [U] {
        self.redoable
    }

    /// The unit an undo would act on
    pub fn last_visible(&self) -> Option<&'a U> {
        self.undoable.last()
    }
}
