use std::fmt;

use super::{ChangeObserver, SurfaceId};
use crate::history::DrawingPaths;

/// Handle returned by [`HistoryStore::subscribe`](crate::HistoryStore::subscribe), used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Fans history changes out to every subscribed observer, in subscription order
pub struct ObserverBus<U> {
    observers: Vec<(ObserverId, Box<dyn ChangeObserver<U>>)>,
    next_id: u64,
}

impl<U> fmt::Debug for ObserverBus<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverBus")
            .field("observers", &format!("<{} observers>", self.observers.len()))
            .finish()
    }
}

impl<U> Default for ObserverBus<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> ObserverBus<U> {
    /// Creates a bus with no observers
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Subscribe an observer to receive change notifications
    pub fn subscribe(&mut self, observer: Box<dyn ChangeObserver<U>>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove a previously subscribed observer. Returns false for unknown ids.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub(crate) fn emit_added(&mut self, source: SurfaceId, paths: DrawingPaths<'_, U>) {
        for (_, observer) in &mut self.observers {
            observer.on_unit_added(source, paths);
        }
    }

    pub(crate) fn emit_removed(&mut self, source: SurfaceId, paths: DrawingPaths<'_, U>) {
        for (_, observer) in &mut self.observers {
            observer.on_unit_removed(source, paths);
        }
    }

    pub(crate) fn emit_cleared(&mut self, source: SurfaceId) {
        for (_, observer) in &mut self.observers {
            observer.on_history_cleared(source);
        }
    }
}
