#![warn(clippy::all, rust_2018_idioms)]

pub mod error;
pub mod history;
pub mod observer;
pub mod shape;

pub use error::{ConfigError, ConfigResult};
pub use history::{DrawingPaths, HistoryConfig, HistoryStore, RedoPolicy};
pub use observer::{ChangeObserver, LoggingObserver, ObserverId, SurfaceId};
pub use shape::{Shape, ShapeBuilder, ShapeKind, ShapeRef};
