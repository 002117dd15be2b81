//! Size grading
//!
//! Deforms an outline from the base size to a target size by scaling each point
//! with the mean ratio of the measurements bound to its incident edges. A local
//! per-point heuristic, not a constraint solve: points with no measurement-bound
//! edges do not move.

use std::collections::HashMap;

use glam::Vec2;
use knit_core::{BASE_SIZE, MeasurementItem, MeasurementItemId, ScaleAxis, SizeDetail, SizeRange};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::snap_to_grid;
use crate::outline::ChartOutline;

/// Per-size measurement values, as looked up during grading
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeTable {
    values: HashMap<SizeRange, HashMap<MeasurementItemId, f32>>,
}

impl SizeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a template's size-detail rows
    pub fn from_size_details(details: &[SizeDetail]) -> Self {
        let mut values = HashMap::new();
        for detail in details {
            values.insert(detail.size_range, detail.measurements.clone());
        }
        Self { values }
    }

    pub fn set(&mut self, size: SizeRange, item: MeasurementItemId, value: f32) {
        self.values.entry(size).or_default().insert(item, value);
    }

    pub fn get(&self, size: SizeRange, item: MeasurementItemId) -> Option<f32> {
        self.values.get(&size).and_then(|m| m.get(&item)).copied()
    }
}

/// A point position after grading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradedPoint {
    pub id: Uuid,
    pub position: Vec2,
}

/// Mean-ratio accumulator for one axis
#[derive(Debug, Clone, Copy, Default)]
struct AxisRatio {
    sum: f32,
    count: u32,
}

impl AxisRatio {
    fn push(&mut self, ratio: f32) {
        self.sum += ratio;
        self.count += 1;
    }

    fn factor(&self) -> f32 {
        if self.count == 0 {
            1.0
        } else {
            self.sum / self.count as f32
        }
    }
}

/// Compute per-point positions for `target`, relative to `BASE_SIZE`.
///
/// For each point, every incident edge bound to a measurement contributes
/// `target / base` of that measurement to the axis the catalog assigns it
/// (`X`, `Y` or both). Edges whose base or target value is missing or zero are
/// skipped. The per-axis factor is the mean of the contributions, defaulting to
/// 1 when nothing qualified, and positions stay snapped to the grid.
pub fn grade_outline(outline: &ChartOutline, table: &SizeTable, target: SizeRange) -> Vec<GradedPoint> {
    grade_outline_from(outline, table, target, BASE_SIZE)
}

/// `grade_outline` with an explicit base size
pub fn grade_outline_from(
    outline: &ChartOutline,
    table: &SizeTable,
    target: SizeRange,
    base: SizeRange,
) -> Vec<GradedPoint> {
    outline
        .points()
        .iter()
        .map(|point| {
            let mut x_ratio = AxisRatio::default();
            let mut y_ratio = AxisRatio::default();

            for edge in outline.edges_touching(point.id) {
                let Some(item) = edge.measurement_item else {
                    continue;
                };
                let (Some(base_value), Some(target_value)) =
                    (table.get(base, item), table.get(target, item))
                else {
                    continue;
                };
                if base_value == 0.0 || target_value == 0.0 {
                    continue;
                }

                let ratio = target_value / base_value;
                match MeasurementItem::find(item).axis {
                    ScaleAxis::X => x_ratio.push(ratio),
                    ScaleAxis::Y => y_ratio.push(ratio),
                    ScaleAxis::Both => {
                        x_ratio.push(ratio);
                        y_ratio.push(ratio);
                    }
                }
            }

            GradedPoint {
                id: point.id,
                position: snap_to_grid(Vec2::new(
                    point.position.x * x_ratio.factor(),
                    point.position.y * y_ratio.factor(),
                )),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EdgeKind;
    use approx::assert_relative_eq;

    fn table() -> SizeTable {
        let mut table = SizeTable::new();
        // ChestWidth is X-scaled, SleeveLength Y-scaled, HeadCircumference both.
        table.set(BASE_SIZE, MeasurementItemId::ChestWidth, 45.0);
        table.set(SizeRange::S90_94, MeasurementItemId::ChestWidth, 54.0);
        table.set(BASE_SIZE, MeasurementItemId::SleeveLength, 60.0);
        table.set(SizeRange::S90_94, MeasurementItemId::SleeveLength, 62.0);
        table.set(BASE_SIZE, MeasurementItemId::HeadCircumference, 50.0);
        table.set(SizeRange::S90_94, MeasurementItemId::HeadCircumference, 55.0);
        table
    }

    #[test]
    fn test_untagged_points_do_not_move() {
        let mut outline = ChartOutline::new();
        let a = outline.add_point(Vec2::new(100.0, 200.0));
        let b = outline.add_point(Vec2::new(300.0, 400.0));

        for size in SizeRange::ALL {
            let graded = grade_outline(&outline, &table(), size);
            assert_eq!(graded[0].id, a);
            assert_eq!(graded[0].position, Vec2::new(100.0, 200.0));
            assert_eq!(graded[1].id, b);
            assert_eq!(graded[1].position, Vec2::new(300.0, 400.0));
        }
    }

    #[test]
    fn test_width_item_scales_x_only() {
        let mut outline = ChartOutline::new();
        outline.add_point(Vec2::new(100.0, 200.0));
        outline.add_point(Vec2::new(300.0, 200.0));
        let edge_id = outline.edges()[0].id;
        outline
            .set_edge_measurement(edge_id, Some(MeasurementItemId::ChestWidth))
            .unwrap();

        let graded = grade_outline(&outline, &table(), SizeRange::S90_94);
        let ratio: f32 = 54.0 / 45.0;
        assert_eq!(graded[0].position.x, (100.0 * ratio).round());
        assert_eq!(graded[0].position.y, 200.0);
        assert_eq!(graded[1].position.x, (300.0 * ratio).round());
        assert_eq!(graded[1].position.y, 200.0);
    }

    #[test]
    fn test_length_item_scales_y_only() {
        let mut outline = ChartOutline::new();
        outline.add_point(Vec2::new(100.0, 200.0));
        outline.add_point(Vec2::new(100.0, 600.0));
        let edge_id = outline.edges()[0].id;
        outline
            .set_edge_measurement(edge_id, Some(MeasurementItemId::SleeveLength))
            .unwrap();

        let graded = grade_outline(&outline, &table(), SizeRange::S90_94);
        let ratio: f32 = 62.0 / 60.0;
        assert_eq!(graded[0].position.x, 100.0);
        assert_eq!(graded[0].position.y, (200.0 * ratio).round());
        assert_eq!(graded[1].position.y, (600.0 * ratio).round());
    }

    #[test]
    fn test_circumference_scales_both_axes() {
        let mut outline = ChartOutline::new();
        outline.add_point(Vec2::new(200.0, 200.0));
        outline.add_point(Vec2::new(400.0, 400.0));
        let edge_id = outline.edges()[0].id;
        outline
            .set_edge_measurement(edge_id, Some(MeasurementItemId::HeadCircumference))
            .unwrap();

        let graded = grade_outline(&outline, &table(), SizeRange::S90_94);
        let ratio: f32 = 55.0 / 50.0;
        assert_eq!(graded[0].position, Vec2::new(220.0, 220.0));
        assert_relative_eq!(graded[1].position.x, (400.0 * ratio).round());
        assert_relative_eq!(graded[1].position.y, (400.0 * ratio).round());
    }

    #[test]
    fn test_mean_of_multiple_ratios_per_axis() {
        // Middle point of a path with a width measurement on each side: the
        // x factor is the mean of both ratios.
        let mut outline = ChartOutline::new();
        outline.add_point(Vec2::new(0.0, 0.0));
        let mid = outline.add_point(Vec2::new(500.0, 0.0));
        outline.add_point(Vec2::new(1000.0, 0.0));
        let left = outline.edges()[0].id;
        let right = outline.edges()[1].id;
        outline
            .set_edge_measurement(left, Some(MeasurementItemId::ChestWidth))
            .unwrap();
        outline
            .set_edge_measurement(right, Some(MeasurementItemId::NeckWidth))
            .unwrap();

        let mut table = table();
        table.set(BASE_SIZE, MeasurementItemId::NeckWidth, 17.0);
        table.set(SizeRange::S90_94, MeasurementItemId::NeckWidth, 19.0);

        let graded = grade_outline(&outline, &table, SizeRange::S90_94);
        let mean: f32 = (54.0 / 45.0 + 19.0 / 17.0) / 2.0;
        let graded_mid = graded.iter().find(|g| g.id == mid).unwrap();
        assert_eq!(graded_mid.position.x, (500.0 * mean).round());
        assert_eq!(graded_mid.position.y, 0.0);
    }

    #[test]
    fn test_zero_and_missing_values_skip_the_edge() {
        let mut outline = ChartOutline::new();
        outline.add_point(Vec2::new(100.0, 100.0));
        outline.add_point(Vec2::new(300.0, 100.0));
        let edge_id = outline.edges()[0].id;
        outline
            .set_edge_measurement(edge_id, Some(MeasurementItemId::WristWidth))
            .unwrap();

        // Zero base value.
        let mut zero_table = SizeTable::new();
        zero_table.set(BASE_SIZE, MeasurementItemId::WristWidth, 0.0);
        zero_table.set(SizeRange::S90_94, MeasurementItemId::WristWidth, 10.0);
        let graded = grade_outline(&outline, &zero_table, SizeRange::S90_94);
        assert_eq!(graded[0].position, Vec2::new(100.0, 100.0));

        // Missing target value.
        let mut sparse_table = SizeTable::new();
        sparse_table.set(BASE_SIZE, MeasurementItemId::WristWidth, 8.0);
        let graded = grade_outline(&outline, &sparse_table, SizeRange::S90_94);
        assert_eq!(graded[1].position, Vec2::new(300.0, 100.0));
    }

    #[test]
    fn test_target_equal_to_base_is_identity() {
        let mut outline = ChartOutline::new();
        outline.add_point(Vec2::new(123.0, 456.0));
        outline.add_point(Vec2::new(789.0, 12.0));
        let edge_id = outline.edges()[0].id;
        outline
            .set_edge_measurement(edge_id, Some(MeasurementItemId::ChestWidth))
            .unwrap();

        let graded = grade_outline(&outline, &table(), BASE_SIZE);
        assert_eq!(graded[0].position, Vec2::new(123.0, 456.0));
        assert_eq!(graded[1].position, Vec2::new(789.0, 12.0));
    }

    #[test]
    fn test_graded_positions_stay_on_grid() {
        let mut outline = ChartOutline::new();
        outline.add_point(Vec2::new(900.0, 100.0));
        outline.add_point(Vec2::new(1000.0, 100.0));
        let edge_id = outline.edges()[0].id;
        outline.set_edge_kind(edge_id, EdgeKind::Straight).unwrap();
        outline
            .set_edge_measurement(edge_id, Some(MeasurementItemId::ChestWidth))
            .unwrap();

        // Ratio > 1 would push x past the grid ceiling; grading clamps.
        let graded = grade_outline(&outline, &table(), SizeRange::S90_94);
        assert!(graded.iter().all(|g| g.position.x <= 1000.0));
    }

    #[test]
    fn test_size_table_from_details() {
        let details = knit_core::samples::sweater_size_details();
        let table = SizeTable::from_size_details(&details);
        assert_eq!(table.get(BASE_SIZE, MeasurementItemId::ChestWidth), Some(45.0));
        assert_eq!(
            table.get(SizeRange::S90_94, MeasurementItemId::ChestWidth),
            Some(54.0)
        );
        assert_eq!(table.get(SizeRange::Min, MeasurementItemId::ChestWidth), Some(3.0));
    }
}
