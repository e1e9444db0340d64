use super::{DrawingPaths, HistoryConfig, RedoPolicy};
use crate::observer::{ChangeObserver, ObserverBus, ObserverId, SurfaceId};

/// Undo/redo history of the units drawn on one surface.
///
/// `undoable` holds what is currently on the canvas in drawing order,
/// `redoable` holds what was undone, most recently undone last. A unit lives in
/// at most one of them. The four mutators are the only way to change either
/// sequence, and every structural change reaches each subscribed observer
/// exactly once after the mutation has happened.
#[derive(Debug)]
pub struct HistoryStore<U> {
    surface: SurfaceId,
    config: HistoryConfig,
    /// Units currently applied, most recent last
    undoable: Vec<U>,
    /// Units that were undone, most recently undone last
    redoable: Vec<U>,
    observers: ObserverBus<U>,
}

impl<U> HistoryStore<U> {
    /// Creates an empty history with the default config
    pub fn new(surface: SurfaceId) -> Self {
        Self::with_config(surface, HistoryConfig::default())
    }

    pub fn with_config(surface: SurfaceId, config: HistoryConfig) -> Self {
        Self::from_parts(surface, config, Vec::new(), Vec::new())
    }

    /// Restores a history from previously captured sequences.
    ///
    /// Nothing is notified and the sequences are taken as given.
    ///
    /// # Invariant
    ///
    /// A unit must not appear in both `undoable` and `redoable`. The store
    /// cannot check this for an opaque `U`; breaking it means an undo followed
    /// by a redo can leave the same unit visible twice.
    pub fn from_parts(
        surface: SurfaceId,
        config: HistoryConfig,
        undoable: Vec<U>,
        redoable: Vec<U>,
    ) -> Self {
        Self {
            surface,
            config,
            undoable,
            redoable,
            observers: ObserverBus::new(),
        }
    }

    /// Subscribe an observer to this surface's changes.
    ///
    /// Observers are owned by the store; the fan-out bus behind it is not
    /// public API.
    ///
    /// ```compile_fail
    /// let _bus = paint_history::observer::ObserverBus::<u32>::new();
    /// ```
    pub fn subscribe(&mut self, observer: Box<dyn ChangeObserver<U>>) -> ObserverId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Append a freshly completed unit and announce it
    pub fn record_new_unit(&mut self, unit: U) {
        if self.config.redo_policy == RedoPolicy::DiscardOnRecord && !self.redoable.is_empty() {
            log::debug!(
                "Discarding {} redoable units on surface {}",
                self.redoable.len(),
                self.surface
            );
            self.redoable.clear();
        }

        self.undoable.push(unit);
        log::debug!(
            "Recorded unit on surface {} ({} undoable)",
            self.surface,
            self.undoable.len()
        );

        self.observers.emit_added(
            self.surface,
            DrawingPaths::new(&self.undoable, &self.redoable),
        );
    }

    /// Move the most recent unit to the redo sequence.
    ///
    /// Returns false, without notifying anyone, when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(unit) = self.undoable.pop() else {
            log::trace!("Nothing to undo on surface {}", self.surface);
            return false;
        };
        self.redoable.push(unit);
        log::debug!(
            "Undo on surface {} ({} undoable, {} redoable)",
            self.surface,
            self.undoable.len(),
            self.redoable.len()
        );

        self.observers.emit_removed(
            self.surface,
            DrawingPaths::new(&self.undoable, &self.redoable),
        );
        true
    }

    /// Restore the most recently undone unit.
    ///
    /// Returns false, without notifying anyone, when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(unit) = self.redoable.pop() else {
            log::trace!("Nothing to redo on surface {}", self.surface);
            return false;
        };
        self.undoable.push(unit);
        log::debug!(
            "Redo on surface {} ({} undoable, {} redoable)",
            self.surface,
            self.undoable.len(),
            self.redoable.len()
        );

        self.observers.emit_added(
            self.surface,
            DrawingPaths::new(&self.undoable, &self.redoable),
        );
        true
    }

    /// Drop both sequences at once.
    ///
    /// No observer is called. A host that wants observers to know about the
    /// reset calls [`Self::notify_reset`] afterwards.
    pub fn clear_all(&mut self) {
        let dropped = self.undoable.len() + self.redoable.len();
        self.undoable.clear();
        self.redoable.clear();
        log::info!("Cleared history on surface {} ({} units dropped)", self.surface, dropped);
    }

    /// Tell every observer that a full reset happened
    pub fn notify_reset(&mut self) {
        self.observers.emit_cleared(self.surface);
    }

    pub fn can_undo(&self) -> bool {
        !self.undoable.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redoable.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undoable.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redoable.len()
    }

    /// True when both sequences are empty
    pub fn is_empty(&self) -> bool {
        self.undoable.is_empty() && self.redoable.is_empty()
    }

    /// Read-only view of both sequences
    pub fn drawing_paths(&self) -> DrawingPaths<'_, U> {
        DrawingPaths::new(&self.undoable, &self.redoable)
    }

    /// Units currently on the canvas, in drawing order
    pub fn visible_units(&self) -> &[U] {
        &self.undoable
    }

    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }
}
