use egui::{Color32, Pos2, Rect};
use std::sync::Arc;

/// Padding added around a shape's points when computing its dirty region
pub const SHAPE_BOUNDS_PADDING: f32 = 2.0;

/// The geometric kind of a drawn unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Freehand path through every captured point
    Brush,
    Line,
    Oval,
    Rectangle,
    Arrow,
}

impl ShapeKind {
    /// Fewest points a finished shape of this kind can have
    pub fn min_points(&self) -> usize {
        match self {
            ShapeKind::Brush => 1,
            _ => 2,
        }
    }
}

// Immutable once built, shared between history and renderer
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
    eraser: bool,
}

/// Reference-counted shape, the unit stored in a drawing history
pub type ShapeRef = Arc<Shape>;

impl Shape {
    pub fn new(kind: ShapeKind, color: Color32, width: f32, points: Vec<Pos2>) -> Self {
        Self {
            kind,
            points,
            color,
            width,
            eraser: false,
        }
    }

    /// An eraser pass; the renderer clears instead of painting
    pub fn eraser(width: f32, points: Vec<Pos2>) -> Self {
        Self {
            kind: ShapeKind::Brush,
            points,
            color: Color32::TRANSPARENT,
            width,
            eraser: true,
        }
    }

    pub fn into_ref(self) -> ShapeRef {
        Arc::new(self)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn is_eraser(&self) -> bool {
        self.eraser
    }

    /// Region the renderer has to repaint when this shape appears or disappears
    pub fn bounds(&self) -> Rect {
        if self.points.is_empty() {
            return Rect::NOTHING;
        }
        Rect::from_points(&self.points).expand(self.width / 2.0 + SHAPE_BOUNDS_PADDING)
    }
}

/// Accumulates points of an in-progress gesture into a [`Shape`]
#[derive(Debug, Clone)]
pub struct ShapeBuilder {
    kind: ShapeKind,
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
}

impl ShapeBuilder {
    pub fn new(kind: ShapeKind, color: Color32, width: f32) -> Self {
        Self {
            kind,
            points: Vec::new(),
            color,
            width,
        }
    }

    /// Add a captured point. Non-brush shapes only keep the start and the latest point.
    pub fn add_point(&mut self, point: Pos2) {
        if self.kind != ShapeKind::Brush && self.points.len() == 2 {
            self.points[1] = point;
        } else {
            self.points.push(point);
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    /// Finish the gesture. Returns None if too few points were captured.
    pub fn finish(self) -> Option<ShapeRef> {
        if self.points.len() < self.kind.min_points() {
            log::debug!(
                "Dropping {:?} gesture with {} points",
                self.kind,
                self.points.len()
            );
            return None;
        }
        Some(Shape::new(self.kind, self.color, self.width, self.points).into_ref())
    }
}
