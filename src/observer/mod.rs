mod bus;
mod handlers;

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::history::DrawingPaths;

pub(crate) use bus::ObserverBus;
pub use bus::ObserverId;
pub use handlers::LoggingObserver;

/// Identifies the drawing surface a notification originates from.
///
/// One observer may be subscribed to several surfaces; the id lets it tell
/// them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceId(Uuid);

impl SurfaceId {
    /// Creates a fresh random surface id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SurfaceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Receives structural changes of a drawing history.
///
/// Calls are made synchronously, after both sequences have been mutated, so
/// `paths` always shows the post-change state. An observer cannot reach back
/// into the store while it is being notified.
pub trait ChangeObserver<U> {
    /// A unit became visible, through a new recording or a redo
    fn on_unit_added(&mut self, source: SurfaceId, paths: DrawingPaths<'_, U>);

    /// A unit was hidden by an undo
    fn on_unit_removed(&mut self, source: SurfaceId, paths: DrawingPaths<'_, U>);

    /// The host announced a full reset. Never called per unit.
    fn on_history_cleared(&mut self, _source: SurfaceId) {}
}
