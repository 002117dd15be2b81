//! Chart outline container
//!
//! Holds the points, draw order, edges and curve control points of one chart
//! geometry, and keeps them consistent under mutation: removing a point removes
//! its draw-order entry, every incident edge and those edges' control points in
//! one step.

use std::collections::HashMap;

use glam::Vec2;
use knit_core::MeasurementItemId;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::entity::{ChartPoint, Edge, EdgeKind, GRID_MAX, snap_to_grid};

/// Vertical rise of a generated curve control point, in grid units
pub const CURVE_RISE: f32 = 80.0;

/// Outline-related errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OutlineError {
    #[error("점을 찾을 수 없습니다: {0}")]
    PointNotFound(Uuid),

    #[error("연결선을 찾을 수 없습니다: {0}")]
    EdgeNotFound(Uuid),
}

/// A chart outline under construction or loaded for editing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartOutline {
    /// Points in insertion order
    points: Vec<ChartPoint>,
    /// Point ids in the order they were selected into the outline
    draw_order: Vec<Uuid>,
    /// Edges in display order
    edges: Vec<Edge>,
    /// Explicit curve control points, keyed by edge id
    control_points: HashMap<Uuid, Vec2>,
    /// Kind given to auto-created edges
    pub default_edge_kind: EdgeKind,
}

impl ChartOutline {
    pub fn new() -> Self {
        Self::default()
    }

    // ============== Accessors ==============

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn draw_order(&self) -> &[Uuid] {
        &self.draw_order
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn point(&self, id: Uuid) -> Option<&ChartPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    pub fn edge(&self, id: Uuid) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Edges incident to a point, in display order
    pub fn edges_touching(&self, point_id: Uuid) -> Vec<&Edge> {
        self.edges.iter().filter(|e| e.touches(point_id)).collect()
    }

    /// 1-based display number of a point (its position in the point list)
    pub fn point_number(&self, id: Uuid) -> Option<usize> {
        self.points.iter().position(|p| p.id == id).map(|i| i + 1)
    }

    // ============== Point authoring ==============

    /// Add a point, auto-connecting it to the tail of the draw order.
    ///
    /// The first point becomes the sole draw-order entry with no edge; every
    /// later point is appended to the draw order with a new edge of the default
    /// kind from the previous tail. Canvas clicks and manual coordinate entry
    /// both come through here.
    pub fn add_point(&mut self, position: Vec2) -> Uuid {
        let point = ChartPoint::new(position);
        let id = point.id;
        self.points.push(point);

        if let Some(&prev) = self.draw_order.last() {
            self.edges.push(Edge::new(prev, id, self.default_edge_kind));
        }
        self.draw_order.push(id);

        debug!(%id, "added chart point");
        id
    }

    /// Remove a point together with everything that references it.
    pub fn remove_point(&mut self, id: Uuid) -> Result<ChartPoint, OutlineError> {
        let idx = self
            .points
            .iter()
            .position(|p| p.id == id)
            .ok_or(OutlineError::PointNotFound(id))?;

        let point = self.points.remove(idx);
        self.draw_order.retain(|&p| p != id);

        let incident: Vec<Uuid> = self
            .edges
            .iter()
            .filter(|e| e.touches(id))
            .map(|e| e.id)
            .collect();
        for edge_id in &incident {
            self.control_points.remove(edge_id);
        }
        self.edges.retain(|e| !e.touches(id));

        debug!(%id, removed_edges = incident.len(), "removed chart point");
        Ok(point)
    }

    /// Move a point (drag or numeric edit), snapped to the grid
    pub fn move_point(&mut self, id: Uuid, position: Vec2) -> Result<(), OutlineError> {
        let point = self
            .points
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(OutlineError::PointNotFound(id))?;
        point.position = snap_to_grid(position);
        Ok(())
    }

    /// Tag or untag a point with a body measurement
    pub fn set_point_measurement(
        &mut self,
        id: Uuid,
        item: Option<MeasurementItemId>,
    ) -> Result<(), OutlineError> {
        let point = self
            .points
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(OutlineError::PointNotFound(id))?;
        point.measurement_item = item;
        Ok(())
    }

    // ============== Edge authoring ==============

    /// Change an edge's kind. Switching to straight discards its control point.
    pub fn set_edge_kind(&mut self, edge_id: Uuid, kind: EdgeKind) -> Result<(), OutlineError> {
        let edge = self
            .edges
            .iter_mut()
            .find(|e| e.id == edge_id)
            .ok_or(OutlineError::EdgeNotFound(edge_id))?;
        edge.kind = kind;
        if kind == EdgeKind::Straight {
            self.control_points.remove(&edge_id);
        }
        Ok(())
    }

    /// Associate or clear the measurement governing an edge's length
    pub fn set_edge_measurement(
        &mut self,
        edge_id: Uuid,
        item: Option<MeasurementItemId>,
    ) -> Result<(), OutlineError> {
        let edge = self
            .edges
            .iter_mut()
            .find(|e| e.id == edge_id)
            .ok_or(OutlineError::EdgeNotFound(edge_id))?;
        edge.measurement_item = item;
        Ok(())
    }

    /// Remove an edge without touching its endpoints
    pub fn remove_edge(&mut self, edge_id: Uuid) -> Result<Edge, OutlineError> {
        let idx = self
            .edges
            .iter()
            .position(|e| e.id == edge_id)
            .ok_or(OutlineError::EdgeNotFound(edge_id))?;
        self.control_points.remove(&edge_id);
        Ok(self.edges.remove(idx))
    }

    /// Splice-move an edge in the display list. Geometry is unaffected.
    pub fn reorder_edge(&mut self, from: usize, to: usize) {
        if from < self.edges.len() && to < self.edges.len() && from != to {
            let edge = self.edges.remove(from);
            self.edges.insert(to, edge);
        }
    }

    // ============== Curve control points ==============

    /// Control point of a curve edge: the dragged override if present, else a
    /// generated default above the chord midpoint.
    pub fn control_point(&self, edge_id: Uuid) -> Option<Vec2> {
        let edge = self.edge(edge_id)?;
        if edge.kind != EdgeKind::Curve {
            return None;
        }

        if let Some(&explicit) = self.control_points.get(&edge_id) {
            return Some(explicit);
        }

        let from = self.point(edge.from)?.position;
        let to = self.point(edge.to)?.position;
        Some(snap_to_grid(Vec2::new(
            (from.x + to.x) / 2.0,
            from.y.min(to.y) - CURVE_RISE,
        )))
    }

    /// Store an explicit control point for a curve edge
    pub fn set_control_point(&mut self, edge_id: Uuid, position: Vec2) -> Result<(), OutlineError> {
        if self.edge(edge_id).is_none() {
            return Err(OutlineError::EdgeNotFound(edge_id));
        }
        self.control_points.insert(edge_id, snap_to_grid(position));
        Ok(())
    }

    /// Whether an edge has a dragged (non-default) control point
    pub fn has_explicit_control(&self, edge_id: Uuid) -> bool {
        self.control_points.contains_key(&edge_id)
    }

    // ============== Hit testing ==============

    /// The closest point within `radius` of `pos`, if any
    pub fn point_at(&self, pos: Vec2, radius: f32) -> Option<Uuid> {
        let mut closest: Option<(Uuid, f32)> = None;
        for point in &self.points {
            let dist = point.position.distance(pos);
            if dist <= radius && closest.is_none_or(|(_, best)| dist < best) {
                closest = Some((point.id, dist));
            }
        }
        closest.map(|(id, _)| id)
    }

    /// The closest curve control handle within `radius` of `pos`, if any
    pub fn control_at(&self, pos: Vec2, radius: f32) -> Option<Uuid> {
        let mut closest: Option<(Uuid, f32)> = None;
        for edge in &self.edges {
            let Some(control) = self.control_point(edge.id) else {
                continue;
            };
            let dist = control.distance(pos);
            if dist <= radius && closest.is_none_or(|(_, best)| dist < best) {
                closest = Some((edge.id, dist));
            }
        }
        closest.map(|(id, _)| id)
    }

    /// Consistency check: every edge and draw-order entry references a stored
    /// point. Holds after any sequence of outline operations.
    pub fn is_consistent(&self) -> bool {
        let has_point = |id: Uuid| self.points.iter().any(|p| p.id == id);
        self.draw_order.iter().all(|&id| has_point(id))
            && self
                .edges
                .iter()
                .all(|e| has_point(e.from) && has_point(e.to))
            && self
                .control_points
                .keys()
                .all(|&edge_id| self.edge(edge_id).is_some())
    }
}

/// Map a canvas-relative position to grid coordinates.
///
/// `canvas_pos` is the pointer position relative to the canvas origin and
/// `canvas_size` the canvas dimensions in screen units.
pub fn canvas_to_grid(canvas_pos: Vec2, canvas_size: Vec2) -> Vec2 {
    snap_to_grid(Vec2::new(
        canvas_pos.x / canvas_size.x * GRID_MAX,
        canvas_pos.y / canvas_size.y * GRID_MAX,
    ))
}

/// Map grid coordinates back to a canvas-relative position
pub fn grid_to_canvas(grid_pos: Vec2, canvas_size: Vec2) -> Vec2 {
    Vec2::new(
        grid_pos.x / GRID_MAX * canvas_size.x,
        grid_pos.y / GRID_MAX * canvas_size.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(points: &[(f32, f32)]) -> (ChartOutline, Vec<Uuid>) {
        let mut outline = ChartOutline::new();
        let ids = points
            .iter()
            .map(|&(x, y)| outline.add_point(Vec2::new(x, y)))
            .collect();
        (outline, ids)
    }

    #[test]
    fn test_first_point_has_no_edge() {
        let (outline, ids) = path(&[(0.0, 0.0)]);
        assert_eq!(outline.draw_order(), &[ids[0]]);
        assert!(outline.edges().is_empty());
    }

    #[test]
    fn test_points_auto_connect_in_draw_order() {
        let (outline, ids) = path(&[(0.0, 0.0), (500.0, 0.0), (500.0, 500.0)]);

        assert_eq!(outline.draw_order(), &[ids[0], ids[1], ids[2]]);
        assert_eq!(outline.edges().len(), 2);
        assert_eq!(outline.edges()[0].from, ids[0]);
        assert_eq!(outline.edges()[0].to, ids[1]);
        assert_eq!(outline.edges()[1].from, ids[1]);
        assert_eq!(outline.edges()[1].to, ids[2]);
        assert!(outline.is_consistent());
    }

    #[test]
    fn test_remove_middle_point_drops_both_incident_edges() {
        let (mut outline, ids) = path(&[(0.0, 0.0), (500.0, 0.0), (500.0, 500.0)]);

        outline.remove_point(ids[1]).unwrap();

        assert_eq!(outline.points().len(), 2);
        assert_eq!(outline.points()[0].position, Vec2::new(0.0, 0.0));
        assert_eq!(outline.points()[1].position, Vec2::new(500.0, 500.0));
        assert_eq!(outline.draw_order(), &[ids[0], ids[2]]);
        assert!(outline.edges().is_empty());
        assert!(outline.is_consistent());
    }

    #[test]
    fn test_remove_interior_point_preserves_remaining_path() {
        // Path of five points; deleting one interior point must leave the
        // untouched segments connecting the same points as before.
        let (mut outline, ids) = path(&[
            (0.0, 0.0),
            (200.0, 0.0),
            (400.0, 0.0),
            (600.0, 0.0),
            (800.0, 0.0),
        ]);
        assert_eq!(outline.edges().len(), 4);

        outline.remove_point(ids[2]).unwrap();

        assert_eq!(outline.edges().len(), 2);
        let survivors: Vec<(Uuid, Uuid)> =
            outline.edges().iter().map(|e| (e.from, e.to)).collect();
        assert!(survivors.contains(&(ids[0], ids[1])));
        assert!(survivors.contains(&(ids[3], ids[4])));
        assert_eq!(outline.draw_order(), &[ids[0], ids[1], ids[3], ids[4]]);
        assert!(outline.is_consistent());
    }

    #[test]
    fn test_remove_point_removes_exactly_incident_edges() {
        let (mut outline, ids) = path(&[(0.0, 0.0), (100.0, 0.0), (200.0, 0.0), (300.0, 0.0)]);
        let before = outline.edges().len();
        let incident = outline.edges_touching(ids[1]).len();

        outline.remove_point(ids[1]).unwrap();
        assert_eq!(outline.edges().len(), before - incident);
    }

    #[test]
    fn test_remove_endpoint() {
        let (mut outline, ids) = path(&[(0.0, 0.0), (100.0, 0.0), (200.0, 0.0)]);
        outline.remove_point(ids[2]).unwrap();

        assert_eq!(outline.edges().len(), 1);
        assert_eq!(outline.draw_order(), &[ids[0], ids[1]]);
        // A point added afterwards connects to the new tail.
        let new_id = outline.add_point(Vec2::new(50.0, 50.0));
        assert_eq!(outline.edges().last().unwrap().from, ids[1]);
        assert_eq!(outline.edges().last().unwrap().to, new_id);
    }

    #[test]
    fn test_remove_unknown_point() {
        let (mut outline, _) = path(&[(0.0, 0.0)]);
        let ghost = Uuid::new_v4();
        assert_eq!(
            outline.remove_point(ghost),
            Err(OutlineError::PointNotFound(ghost))
        );
    }

    #[test]
    fn test_edge_kind_and_measurement_are_pure_replaces() {
        let (mut outline, _) = path(&[(0.0, 0.0), (100.0, 0.0)]);
        let edge_id = outline.edges()[0].id;

        outline.set_edge_kind(edge_id, EdgeKind::Curve).unwrap();
        outline
            .set_edge_measurement(edge_id, Some(MeasurementItemId::ChestWidth))
            .unwrap();

        let edge = outline.edge(edge_id).unwrap();
        assert_eq!(edge.kind, EdgeKind::Curve);
        assert_eq!(edge.measurement_item, Some(MeasurementItemId::ChestWidth));
        assert_eq!(outline.points().len(), 2);

        outline.set_edge_measurement(edge_id, None).unwrap();
        assert_eq!(outline.edge(edge_id).unwrap().measurement_item, None);
    }

    #[test]
    fn test_reorder_edge_keeps_geometry() {
        let (mut outline, ids) = path(&[(0.0, 0.0), (100.0, 0.0), (200.0, 0.0)]);
        let first = outline.edges()[0].id;

        outline.reorder_edge(0, 1);
        assert_eq!(outline.edges()[1].id, first);
        // Endpoints unchanged, only display position moved.
        assert_eq!(outline.edges()[1].from, ids[0]);
        assert_eq!(outline.edges()[1].to, ids[1]);

        // Out-of-bounds indices are ignored.
        outline.reorder_edge(5, 0);
        assert_eq!(outline.edges().len(), 2);
    }

    #[test]
    fn test_generated_control_point_rises_above_chord() {
        let (mut outline, _) = path(&[(0.0, 400.0), (200.0, 300.0)]);
        let edge_id = outline.edges()[0].id;

        assert_eq!(outline.control_point(edge_id), None);

        outline.set_edge_kind(edge_id, EdgeKind::Curve).unwrap();
        let control = outline.control_point(edge_id).unwrap();
        assert_eq!(control, Vec2::new(100.0, 300.0 - CURVE_RISE));
    }

    #[test]
    fn test_explicit_control_point_wins_and_is_dropped_on_straighten() {
        let (mut outline, _) = path(&[(0.0, 400.0), (200.0, 300.0)]);
        let edge_id = outline.edges()[0].id;
        outline.set_edge_kind(edge_id, EdgeKind::Curve).unwrap();

        outline
            .set_control_point(edge_id, Vec2::new(150.0, 100.0))
            .unwrap();
        assert!(outline.has_explicit_control(edge_id));
        assert_eq!(outline.control_point(edge_id), Some(Vec2::new(150.0, 100.0)));

        outline.set_edge_kind(edge_id, EdgeKind::Straight).unwrap();
        assert!(!outline.has_explicit_control(edge_id));
        assert_eq!(outline.control_point(edge_id), None);
    }

    #[test]
    fn test_control_point_removed_with_point() {
        let (mut outline, ids) = path(&[(0.0, 400.0), (200.0, 300.0), (400.0, 400.0)]);
        let edge_id = outline.edges()[0].id;
        outline.set_edge_kind(edge_id, EdgeKind::Curve).unwrap();
        outline
            .set_control_point(edge_id, Vec2::new(100.0, 50.0))
            .unwrap();

        outline.remove_point(ids[1]).unwrap();
        assert!(!outline.has_explicit_control(edge_id));
        assert!(outline.is_consistent());
    }

    #[test]
    fn test_hit_testing() {
        let (outline, ids) = path(&[(100.0, 100.0), (500.0, 500.0)]);

        assert_eq!(outline.point_at(Vec2::new(105.0, 102.0), 15.0), Some(ids[0]));
        assert_eq!(outline.point_at(Vec2::new(300.0, 300.0), 15.0), None);
        // The closest of several candidates wins.
        assert_eq!(outline.point_at(Vec2::new(490.0, 495.0), 50.0), Some(ids[1]));
    }

    #[test]
    fn test_canvas_mapping_round_trip() {
        let size = Vec2::new(800.0, 400.0);
        let grid = canvas_to_grid(Vec2::new(400.0, 100.0), size);
        assert_eq!(grid, Vec2::new(500.0, 250.0));
        assert_eq!(grid_to_canvas(grid, size), Vec2::new(400.0, 100.0));
    }

    #[test]
    fn test_point_number_is_display_position() {
        let (mut outline, ids) = path(&[(0.0, 0.0), (100.0, 0.0), (200.0, 0.0)]);
        assert_eq!(outline.point_number(ids[2]), Some(3));
        outline.remove_point(ids[0]).unwrap();
        assert_eq!(outline.point_number(ids[2]), Some(2));
    }
}
