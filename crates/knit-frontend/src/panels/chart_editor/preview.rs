//! Size-graded preview
//!
//! Grades the authored outline against a template's size table and paints the
//! base shape as a ghost under the graded one. Points without measurement-bound
//! edges stay put across every size.

use std::collections::HashMap;

use egui::epaint::QuadraticBezierShape;
use egui::{Color32, ComboBox, Pos2, Rect, Sense, Stroke, Vec2 as EVec2};
use glam::Vec2;
use uuid::Uuid;

use knit_chart::{EdgeKind, SizeTable, grade_outline, grid_to_canvas};
use knit_core::{BASE_SIZE, SizeRange};

use crate::app_state::AppState;
use crate::panels::widgets;
use crate::state::ChartEditorState;

mod preview_colors {
    use egui::Color32;

    pub const BASE: Color32 = Color32::from_gray(190);
    pub const GRADED: Color32 = Color32::from_rgb(59, 130, 246);
    pub const GRADED_POINT: Color32 = Color32::from_rgb(37, 99, 235);
}

pub fn ui(ui: &mut egui::Ui, state: &AppState, editor: &mut ChartEditorState) {
    // Templates with a filled size table can feed the preview.
    let candidates: Vec<(Uuid, String)> = state
        .store
        .templates()
        .iter()
        .filter(|t| !t.size_details.is_empty())
        .map(|t| (t.id, t.name.clone()))
        .collect();

    if candidates.is_empty() {
        ui.weak("세부 치수가 입력된 템플릿이 없어 미리보기를 계산할 수 없습니다.");
        return;
    }

    if editor
        .preview_template
        .is_none_or(|id| !candidates.iter().any(|(cid, _)| *cid == id))
    {
        editor.preview_template = Some(candidates[0].0);
    }

    ui.horizontal(|ui| {
        ui.label("치수 기준 템플릿");
        let selected_name = editor
            .preview_template
            .and_then(|id| candidates.iter().find(|(cid, _)| *cid == id))
            .map(|(_, name)| name.clone())
            .unwrap_or_default();
        ComboBox::from_id_salt("preview_template")
            .selected_text(selected_name)
            .show_ui(ui, |ui| {
                for (id, name) in &candidates {
                    if ui
                        .selectable_label(editor.preview_template == Some(*id), name)
                        .clicked()
                    {
                        editor.preview_template = Some(*id);
                    }
                }
            });

        ui.separator();
        ui.label("사이즈");
        ComboBox::from_id_salt("preview_size")
            .selected_text(editor.preview_size.label())
            .show_ui(ui, |ui| {
                for size in SizeRange::ALL {
                    if ui
                        .selectable_label(editor.preview_size == size, size.label())
                        .clicked()
                    {
                        editor.preview_size = size;
                    }
                }
            });
        ui.weak(format!("기준 사이즈: {}", BASE_SIZE.label()));
    });

    let Some(template) = editor
        .preview_template
        .and_then(|id| state.store.template(id))
    else {
        return;
    };
    let table = SizeTable::from_size_details(&template.size_details);
    let graded = grade_outline(&editor.outline, &table, editor.preview_size);
    let graded_positions: HashMap<Uuid, Vec2> =
        graded.iter().map(|g| (g.id, g.position)).collect();

    draw_preview(ui, editor, &graded_positions);

    widgets::section(ui, "조정된 좌표");
    egui::ScrollArea::vertical()
        .id_salt("graded_coords")
        .max_height(140.0)
        .show(ui, |ui| {
            for point in editor.outline.points() {
                let Some(graded_pos) = graded_positions.get(&point.id) else {
                    continue;
                };
                let number = editor.outline.point_number(point.id).unwrap_or(0);
                let moved = *graded_pos != point.position;
                let line = format!(
                    "점 {}: ({}, {}) → ({}, {})",
                    number,
                    point.position.x as i32,
                    point.position.y as i32,
                    graded_pos.x as i32,
                    graded_pos.y as i32
                );
                if moved {
                    ui.label(line);
                } else {
                    ui.weak(line);
                }
            }
        });
}

fn draw_preview(
    ui: &mut egui::Ui,
    editor: &ChartEditorState,
    graded_positions: &HashMap<Uuid, Vec2>,
) {
    let width = ui.available_width().clamp(320.0, 1100.0);
    let size = EVec2::new(width, width / 2.0);
    let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2.0, ui.visuals().extreme_bg_color);

    // Base outline as a ghost underneath.
    let base: HashMap<Uuid, Vec2> = editor
        .outline
        .points()
        .iter()
        .map(|p| (p.id, p.position))
        .collect();
    draw_shape(&painter, rect, editor, &base, preview_colors::BASE, 1.0);
    draw_shape(
        &painter,
        rect,
        editor,
        graded_positions,
        preview_colors::GRADED,
        2.0,
    );

    for (_, pos) in graded_positions {
        painter.circle_filled(to_screen(rect, *pos), 4.0, preview_colors::GRADED_POINT);
    }
}

fn to_screen(rect: Rect, grid_pos: Vec2) -> Pos2 {
    let canvas = grid_to_canvas(grid_pos, Vec2::new(rect.width(), rect.height()));
    Pos2::new(rect.min.x + canvas.x, rect.min.y + canvas.y)
}

/// Draw the outline's edges using the given point positions.
///
/// Curve control points are regenerated from the positions rather than graded,
/// so the curve follows its endpoints.
fn draw_shape(
    painter: &egui::Painter,
    rect: Rect,
    editor: &ChartEditorState,
    positions: &HashMap<Uuid, Vec2>,
    color: Color32,
    stroke_width: f32,
) {
    let stroke = Stroke::new(stroke_width, color);

    for edge in editor.outline.edges() {
        let (Some(&from), Some(&to)) = (positions.get(&edge.from), positions.get(&edge.to)) else {
            continue;
        };
        let from_pos = to_screen(rect, from);
        let to_pos = to_screen(rect, to);

        match edge.kind {
            EdgeKind::Straight => painter.line_segment([from_pos, to_pos], stroke),
            EdgeKind::Curve => {
                let control = Vec2::new(
                    (from.x + to.x) / 2.0,
                    (from.y.min(to.y) - knit_chart::CURVE_RISE).max(0.0),
                );
                painter.add(QuadraticBezierShape::from_points_stroke(
                    [from_pos, to_screen(rect, control), to_pos],
                    false,
                    Color32::TRANSPARENT,
                    stroke,
                ))
            }
        };
    }
}
