use log::Level;

use super::{ChangeObserver, SurfaceId};
use crate::history::DrawingPaths;

/// Observer that writes every history change to the `log` facade
#[derive(Debug, Clone)]
pub struct LoggingObserver {
    level: Level,
}

impl LoggingObserver {
    /// Creates a logging observer that reports at `level`
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl<U> ChangeObserver<U> for LoggingObserver {
    fn on_unit_added(&mut self, source: SurfaceId, paths: DrawingPaths<'_, U>) {
        log::log!(
            self.level,
            "Unit added on surface {}: {} visible, {} redoable",
            source,
            paths.undoable().len(),
            paths.redoable().len()
        );
    }

    fn on_unit_removed(&mut self, source: SurfaceId, paths: DrawingPaths<'_, U>) {
        log::log!(
            self.level,
            "Unit removed on surface {}: {} visible, {} redoable",
            source,
            paths.undoable().len(),
            paths.redoable().len()
        );
    }

    fn on_history_cleared(&mut self, source: SurfaceId) {
        log::log!(self.level, "History cleared on surface {}", source);
    }
}
