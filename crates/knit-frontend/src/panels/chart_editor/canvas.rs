//! Chart editor canvas
//!
//! Paints the outline on a 0..=1000 grid mapped into the widget rect and
//! handles clicks (add/select points) and drags (move points and curve control
//! handles). Drag state lives in the editor state and is cleared on release,
//! so no gesture can outlive the canvas.

use egui::epaint::QuadraticBezierShape;
use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2 as EVec2};
use glam::Vec2;

use knit_chart::{EdgeKind, GRID_MAX, canvas_to_grid, grid_to_canvas};

use crate::config::EditorConfig;
use crate::state::{ChartEditorState, DragTarget};

/// Colors for canvas rendering
mod canvas_colors {
    use egui::Color32;

    pub const GRID: Color32 = Color32::from_gray(221);
    pub const POINT: Color32 = Color32::from_rgb(59, 130, 246);
    pub const POINT_SELECTED: Color32 = Color32::from_rgb(249, 115, 22);
    pub const EDGE: Color32 = Color32::from_gray(153);
    pub const EDGE_MEASURED: Color32 = Color32::from_rgb(79, 70, 229);
    pub const CONTROL: Color32 = Color32::from_rgb(16, 185, 129);
    pub const CONTROL_GUIDE: Color32 = Color32::from_rgba_premultiplied(16, 185, 129, 60);
}

/// Pick radius around points and control handles, in screen pixels
const PICK_RADIUS_PX: f32 = 8.0;

/// Number of grid lines along each axis
const GRID_LINES: usize = 20;

pub fn ui(ui: &mut egui::Ui, editor: &mut ChartEditorState, config: &EditorConfig) {
    // 2:1 canvas, matching the grid's aspect in the persisted charts.
    let width = ui.available_width().clamp(320.0, 1100.0);
    let size = EVec2::new(width, width / 2.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 2.0, ui.visuals().extreme_bg_color);

    if config.show_grid {
        draw_grid(&painter, rect);
    }

    handle_input(editor, &response, rect);
    editor.clear_stale_selection();

    draw_outline(&painter, rect, editor, config);
}

fn to_screen(rect: Rect, grid_pos: Vec2) -> Pos2 {
    let canvas = grid_to_canvas(grid_pos, Vec2::new(rect.width(), rect.height()));
    Pos2::new(rect.min.x + canvas.x, rect.min.y + canvas.y)
}

fn to_grid(rect: Rect, screen_pos: Pos2) -> Vec2 {
    canvas_to_grid(
        Vec2::new(screen_pos.x - rect.min.x, screen_pos.y - rect.min.y),
        Vec2::new(rect.width(), rect.height()),
    )
}

/// Pick radius converted to grid units
fn pick_radius_grid(rect: Rect) -> f32 {
    PICK_RADIUS_PX / rect.width() * GRID_MAX
}

fn draw_grid(painter: &egui::Painter, rect: Rect) {
    let stroke = Stroke::new(1.0, canvas_colors::GRID);
    for i in 0..=GRID_LINES {
        let t = i as f32 / GRID_LINES as f32;
        let x = rect.min.x + rect.width() * t;
        let y = rect.min.y + rect.height() * t;
        painter.line_segment([Pos2::new(x, rect.min.y), Pos2::new(x, rect.max.y)], stroke);
        painter.line_segment([Pos2::new(rect.min.x, y), Pos2::new(rect.max.x, y)], stroke);
    }
}

fn handle_input(editor: &mut ChartEditorState, response: &egui::Response, rect: Rect) {
    let pointer = response.interact_pointer_pos();

    if response.drag_started()
        && let Some(pos) = pointer
    {
        let grid_pos = to_grid(rect, pos);
        let radius = pick_radius_grid(rect);

        // Control handles sit on top of everything, then points.
        if let Some(edge_id) = editor.outline.control_at(grid_pos, radius) {
            editor.drag = Some(DragTarget::Control(edge_id));
        } else if let Some(point_id) = editor.outline.point_at(grid_pos, radius) {
            editor.drag = Some(DragTarget::Point(point_id));
            editor.selected_point = Some(point_id);
        } else {
            editor.drag = None;
        }
    }

    if response.dragged()
        && let (Some(target), Some(pos)) = (editor.drag, pointer)
    {
        // Positions are clamped to the grid by the outline itself.
        let grid_pos = to_grid(rect, pos);
        match target {
            DragTarget::Point(id) => {
                let _ = editor.outline.move_point(id, grid_pos);
            }
            DragTarget::Control(edge_id) => {
                let _ = editor.outline.set_control_point(edge_id, grid_pos);
            }
        }
    }

    if response.drag_stopped() {
        editor.drag = None;
    }

    if response.clicked()
        && let Some(pos) = pointer
    {
        let grid_pos = to_grid(rect, pos);
        let radius = pick_radius_grid(rect);
        if let Some(point_id) = editor.outline.point_at(grid_pos, radius) {
            editor.selected_point = Some(point_id);
        } else if editor.outline.control_at(grid_pos, radius).is_none() {
            let id = editor.outline.add_point(grid_pos);
            editor.selected_point = Some(id);
        }
    }
}

fn draw_outline(
    painter: &egui::Painter,
    rect: Rect,
    editor: &ChartEditorState,
    config: &EditorConfig,
) {
    // Edges first, points on top.
    for edge in editor.outline.edges() {
        let (Some(from), Some(to)) = (
            editor.outline.point(edge.from),
            editor.outline.point(edge.to),
        ) else {
            continue;
        };

        let color = if edge.measurement_item.is_some() {
            canvas_colors::EDGE_MEASURED
        } else {
            canvas_colors::EDGE
        };
        let stroke = Stroke::new(2.0, color);
        let from_pos = to_screen(rect, from.position);
        let to_pos = to_screen(rect, to.position);

        match edge.kind {
            EdgeKind::Straight => {
                painter.line_segment([from_pos, to_pos], stroke);
            }
            EdgeKind::Curve => {
                let Some(control) = editor.outline.control_point(edge.id) else {
                    painter.line_segment([from_pos, to_pos], stroke);
                    continue;
                };
                let control_pos = to_screen(rect, control);
                painter.add(QuadraticBezierShape::from_points_stroke(
                    [from_pos, control_pos, to_pos],
                    false,
                    Color32::TRANSPARENT,
                    stroke,
                ));

                // Control handle with guide lines to the endpoints.
                let guide = Stroke::new(1.0, canvas_colors::CONTROL_GUIDE);
                painter.line_segment([from_pos, control_pos], guide);
                painter.line_segment([control_pos, to_pos], guide);
                painter.rect_filled(
                    Rect::from_center_size(control_pos, EVec2::splat(7.0)),
                    1.0,
                    canvas_colors::CONTROL,
                );
            }
        }
    }

    for point in editor.outline.points() {
        let pos = to_screen(rect, point.position);
        let selected = editor.selected_point == Some(point.id);

        if selected {
            painter.circle_stroke(pos, 8.0, Stroke::new(2.0, canvas_colors::POINT_SELECTED));
        }
        painter.circle_filled(pos, 5.0, canvas_colors::POINT);

        if config.show_point_labels
            && let Some(number) = editor.outline.point_number(point.id)
        {
            painter.text(
                pos + EVec2::new(0.0, -12.0),
                egui::Align2::CENTER_BOTTOM,
                format!(
                    "{}: ({}, {})",
                    number, point.position.x as i32, point.position.y as i32
                ),
                egui::FontId::proportional(11.0),
                painter.ctx().style().visuals.text_color(),
            );
        }
    }
}
