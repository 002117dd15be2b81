//! Chart geometry editor
//!
//! Three-step stepper: chart info, guideline authoring on the canvas, and the
//! size-graded preview. Steps advance only through the explicit buttons at the
//! bottom of each step.

mod canvas;
mod preview;

use egui::ComboBox;
use glam::Vec2;
use uuid::Uuid;

use knit_core::{MeasurementItem, MeasurementItemId};

use crate::app_state::{AppAction, AppState};
use crate::config::EditorConfig;
use crate::panels::widgets::{self, AlertKind};
use crate::state::{ChartEditorState, ChartsRoute, EditorStep};

/// Render the chart editor. Returns the next route when the user leaves it.
pub fn ui(
    ui: &mut egui::Ui,
    state: &mut AppState,
    editor: &mut ChartEditorState,
    config: &EditorConfig,
) -> Option<ChartsRoute> {
    let mut next = None;

    let titles: Vec<(&str, &str)> = EditorStep::ALL
        .iter()
        .map(|s| (s.title(), s.description()))
        .collect();
    widgets::stepper_header(ui, &titles, editor.step.index());

    match editor.step {
        EditorStep::Info => info_step(ui, editor, &mut next),
        EditorStep::Guideline => guideline_step(ui, editor, config, &mut next),
        EditorStep::Preview => preview_step(ui, state, editor, &mut next),
    }

    next
}

fn info_step(ui: &mut egui::Ui, editor: &mut ChartEditorState, next: &mut Option<ChartsRoute>) {
    ui.heading("차트 유형 정보");
    ui.label("명확한 차트 이름을 설정해 주세요. 상의류: \"넥라인 + 제작방식 + 부위명\" 방식으로 작성");
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("차트 이름");
        ui.add(
            egui::TextEdit::singleline(&mut editor.name)
                .hint_text("예: 라운드넥 탑다운 앞몸판")
                .desired_width(320.0),
        );
    });

    ui.horizontal(|ui| {
        let mut has_depth = editor.armhole_depth.is_some();
        if ui.checkbox(&mut has_depth, "진동 깊이 지정").changed() {
            editor.armhole_depth = has_depth.then_some(19.5);
        }
        if let Some(depth) = &mut editor.armhole_depth {
            ui.add(
                egui::DragValue::new(depth)
                    .range(0.0..=60.0)
                    .speed(0.1)
                    .suffix(" cm"),
            );
        }
    });

    widgets::alert(
        ui,
        AlertKind::Info,
        "안내",
        "여러 차트 유형(앞/뒤/소매)을 각각 등록하거나, 다른 제품(비의류)도 동일한 방식으로 추가할 수 있습니다.",
    );

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.button("취소").clicked() {
            *next = Some(ChartsRoute::List);
        }
        if ui.button("다음 단계").clicked() {
            editor.next_step();
        }
    });
}

fn guideline_step(
    ui: &mut egui::Ui,
    editor: &mut ChartEditorState,
    config: &EditorConfig,
    next: &mut Option<ChartsRoute>,
) {
    ui.heading("가이드라인 설정");
    ui.label("캔버스를 클릭하면 좌표(점)가 추가되고, 찍힌 순서대로 선이 자동으로 연결됩니다. 점은 드래그로 이동할 수 있습니다.");
    ui.add_space(4.0);

    canvas::ui(ui, editor, config);

    ui.horizontal(|ui| {
        // Manual coordinate entry, equivalent to a canvas click.
        ui.label("직접 입력");
        ui.add(
            egui::DragValue::new(&mut editor.manual_point.x)
                .range(0.0..=knit_chart::GRID_MAX)
                .prefix("x: "),
        );
        ui.add(
            egui::DragValue::new(&mut editor.manual_point.y)
                .range(0.0..=knit_chart::GRID_MAX)
                .prefix("y: "),
        );
        if ui.button("점 추가").clicked() {
            let id = editor.outline.add_point(editor.manual_point);
            editor.selected_point = Some(id);
        }

        if let Some(selected) = editor.selected_point
            && ui.button("선택된 점 삭제").clicked()
        {
            let _ = editor.outline.remove_point(selected);
            editor.clear_stale_selection();
        }
    });

    // A point itself can carry a body measurement, independent of its edges.
    if let Some(selected) = editor.selected_point
        && let Some(current) = editor.outline.point(selected).map(|p| p.measurement_item)
    {
        let number = editor.outline.point_number(selected).unwrap_or(0);
        ui.horizontal(|ui| {
            ui.label(format!("점 {number} 측정 항목"));
            ComboBox::from_id_salt("point_measurement")
                .selected_text(
                    current
                        .map(|m| m.label().to_string())
                        .unwrap_or_else(|| "없음".into()),
                )
                .show_ui(ui, |ui| {
                    if ui.selectable_label(current.is_none(), "없음").clicked() {
                        let _ = editor.outline.set_point_measurement(selected, None);
                    }
                    for item in MeasurementItem::catalog() {
                        if ui
                            .selectable_label(current == Some(item.id), item.id.label())
                            .clicked()
                        {
                            let _ = editor.outline.set_point_measurement(selected, Some(item.id));
                        }
                    }
                });
        });
    }

    ui.columns(2, |columns| {
        point_list_ui(&mut columns[0], editor);
        edge_table_ui(&mut columns[1], editor);
    });

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.button("뒤로가기").clicked() {
            editor.back_step();
        }
        if ui.button("취소").clicked() {
            *next = Some(ChartsRoute::List);
        }
        if ui.button("다음 단계").clicked() {
            editor.next_step();
        }
    });
}

fn point_list_ui(ui: &mut egui::Ui, editor: &mut ChartEditorState) {
    widgets::section(ui, "좌표 목록");

    if editor.outline.points().is_empty() {
        ui.weak("점이 없습니다.");
        return;
    }

    let points: Vec<(Uuid, Vec2)> = editor
        .outline
        .points()
        .iter()
        .map(|p| (p.id, p.position))
        .collect();

    let mut to_remove = None;
    egui::ScrollArea::vertical()
        .id_salt("point_list")
        .max_height(160.0)
        .show(ui, |ui| {
            for (idx, (id, pos)) in points.iter().enumerate() {
                ui.horizontal(|ui| {
                    let selected = editor.selected_point == Some(*id);
                    if ui
                        .selectable_label(
                            selected,
                            format!("점 {}: ({}, {})", idx + 1, pos.x as i32, pos.y as i32),
                        )
                        .clicked()
                    {
                        editor.selected_point = Some(*id);
                    }
                    if ui.small_button("삭제").clicked() {
                        to_remove = Some(*id);
                    }
                });
            }
        });

    if let Some(id) = to_remove {
        let _ = editor.outline.remove_point(id);
        editor.clear_stale_selection();
    }
}

fn edge_table_ui(ui: &mut egui::Ui, editor: &mut ChartEditorState) {
    widgets::section(ui, "연결선 및 측정 항목");

    if editor.outline.edges().is_empty() {
        ui.weak("지정된 연결이 없습니다.");
        return;
    }

    struct EdgeRow {
        id: Uuid,
        from_no: usize,
        to_no: usize,
        from_pos: Vec2,
        to_pos: Vec2,
        kind: knit_chart::EdgeKind,
        measurement: Option<MeasurementItemId>,
    }

    let rows: Vec<EdgeRow> = editor
        .outline
        .edges()
        .iter()
        .filter_map(|e| {
            let from = editor.outline.point(e.from)?;
            let to = editor.outline.point(e.to)?;
            Some(EdgeRow {
                id: e.id,
                from_no: editor.outline.point_number(e.from)?,
                to_no: editor.outline.point_number(e.to)?,
                from_pos: from.position,
                to_pos: to.position,
                kind: e.kind,
                measurement: e.measurement_item,
            })
        })
        .collect();

    let mut kind_change = None;
    let mut measurement_change = None;
    let mut removal = None;
    let mut reorder = None;

    egui::ScrollArea::vertical()
        .id_salt("edge_table")
        .max_height(220.0)
        .show(ui, |ui| {
            egui::Grid::new("edges_grid")
                .num_columns(5)
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("순서");
                    ui.strong("연결선");
                    ui.strong("선 유형");
                    ui.strong("측정 항목");
                    ui.strong("작업");
                    ui.end_row();

                    for (idx, row) in rows.iter().enumerate() {
                        ui.label(format!("{}", idx + 1));
                        ui.vertical(|ui| {
                            ui.label(format!("점 {} → 점 {}", row.from_no, row.to_no));
                            ui.weak(format!(
                                "({}, {}) → ({}, {})",
                                row.from_pos.x as i32,
                                row.from_pos.y as i32,
                                row.to_pos.x as i32,
                                row.to_pos.y as i32
                            ));
                        });
                        ui.horizontal(|ui| {
                            for kind in [knit_chart::EdgeKind::Straight, knit_chart::EdgeKind::Curve]
                            {
                                if ui
                                    .selectable_label(row.kind == kind, kind.label())
                                    .clicked()
                                {
                                    kind_change = Some((row.id, kind));
                                }
                            }
                        });
                        ComboBox::from_id_salt(("edge_measurement", row.id))
                            .selected_text(
                                row.measurement
                                    .map(|m| m.label().to_string())
                                    .unwrap_or_else(|| "측정 항목 선택".into()),
                            )
                            .show_ui(ui, |ui| {
                                if ui
                                    .selectable_label(row.measurement.is_none(), "없음")
                                    .clicked()
                                {
                                    measurement_change = Some((row.id, None));
                                }
                                for item in MeasurementItem::catalog() {
                                    if ui
                                        .selectable_label(
                                            row.measurement == Some(item.id),
                                            item.id.label(),
                                        )
                                        .clicked()
                                    {
                                        measurement_change = Some((row.id, Some(item.id)));
                                    }
                                }
                            });
                        ui.horizontal(|ui| {
                            if idx > 0 && ui.small_button("↑").clicked() {
                                reorder = Some((idx, idx - 1));
                            }
                            if idx + 1 < rows.len() && ui.small_button("↓").clicked() {
                                reorder = Some((idx, idx + 1));
                            }
                            if ui.small_button("제거").clicked() {
                                removal = Some(row.id);
                            }
                        });
                        ui.end_row();
                    }
                });
        });

    if let Some((id, kind)) = kind_change {
        let _ = editor.outline.set_edge_kind(id, kind);
    }
    if let Some((id, item)) = measurement_change {
        let _ = editor.outline.set_edge_measurement(id, item);
    }
    if let Some(id) = removal {
        let _ = editor.outline.remove_edge(id);
    }
    if let Some((from, to)) = reorder {
        editor.outline.reorder_edge(from, to);
    }
}

fn preview_step(
    ui: &mut egui::Ui,
    state: &mut AppState,
    editor: &mut ChartEditorState,
    next: &mut Option<ChartsRoute>,
) {
    ui.heading("사이즈 미리보기");
    preview::ui(ui, state, editor);

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.button("뒤로가기").clicked() {
            editor.back_step();
        }
        if ui.button("취소").clicked() {
            *next = Some(ChartsRoute::List);
        }
        if ui.button("완료하기").clicked() {
            state.queue_action(AppAction::SaveChart {
                chart: editor.to_chart(),
                is_edit: editor.chart_id.is_some(),
            });
        }
    });
}
