//! Chart Geometric Entities
//!
//! Points and edges of a stitch-chart outline. Every entity carries a stable id
//! assigned at creation; nothing downstream depends on storage position.

use glam::Vec2;
use knit_core::MeasurementItemId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Coordinate space ceiling: positions live on a 0..=1000 integer grid
pub const GRID_MAX: f32 = 1000.0;

/// Clamp to the grid and round to whole grid units
pub fn snap_to_grid(pos: Vec2) -> Vec2 {
    Vec2::new(
        pos.x.clamp(0.0, GRID_MAX).round(),
        pos.y.clamp(0.0, GRID_MAX).round(),
    )
}

/// A point on the chart outline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub id: Uuid,
    /// Position on the 0..=1000 grid
    pub position: Vec2,
    /// Body measurement associated with the point itself
    pub measurement_item: Option<MeasurementItemId>,
    /// Orientation hint in degrees, stored but unused by grading
    pub angle: Option<f32>,
}

impl ChartPoint {
    /// Create a new point snapped to the grid
    pub fn new(position: Vec2) -> Self {
        Self {
            id: Uuid::new_v4(),
            position: snap_to_grid(position),
            measurement_item: None,
            angle: None,
        }
    }
}

/// How an edge is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    #[default]
    Straight,
    Curve,
}

impl EdgeKind {
    pub fn label(&self) -> &'static str {
        match self {
            EdgeKind::Straight => "직선",
            EdgeKind::Curve => "곡선",
        }
    }
}

/// A typed connection between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: Uuid,
    pub from: Uuid,
    pub to: Uuid,
    pub kind: EdgeKind,
    /// Measurement governing this edge's length across sizes
    pub measurement_item: Option<MeasurementItemId>,
}

impl Edge {
    /// Create a new edge between two points
    pub fn new(from: Uuid, to: Uuid, kind: EdgeKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            from,
            to,
            kind,
            measurement_item: None,
        }
    }

    /// Whether the edge touches the given point
    pub fn touches(&self, point_id: Uuid) -> bool {
        self.from == point_id || self.to == point_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_to_grid() {
        assert_eq!(snap_to_grid(Vec2::new(10.4, 999.6)), Vec2::new(10.0, 1000.0));
        assert_eq!(snap_to_grid(Vec2::new(-5.0, 1200.0)), Vec2::new(0.0, 1000.0));
    }

    #[test]
    fn test_point_snaps_on_creation() {
        let point = ChartPoint::new(Vec2::new(500.7, -3.0));
        assert_eq!(point.position, Vec2::new(501.0, 0.0));
        assert!(point.measurement_item.is_none());
    }

    #[test]
    fn test_edge_touches() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let edge = Edge::new(a, b, EdgeKind::Straight);
        assert!(edge.touches(a));
        assert!(edge.touches(b));
        assert!(!edge.touches(Uuid::new_v4()));
    }
}
