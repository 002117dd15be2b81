//! Chart types page: list and editor routing

use crate::app_state::{AppState, PendingDelete};
use crate::config::SharedConfig;
use crate::panels::{Panel, chart_editor};
use crate::state::{ChartEditorState, ChartsRoute};

/// Chart types panel
pub struct ChartsPanel {
    config: SharedConfig,
}

impl ChartsPanel {
    pub fn new(config: SharedConfig) -> Self {
        Self { config }
    }
}

impl Panel for ChartsPanel {
    fn name(&self) -> &str {
        "차트 유형 관리"
    }

    fn ui(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        let mut route = std::mem::take(&mut state.charts_route);

        match &mut route {
            ChartsRoute::List => {
                if let Some(next) = self.list_ui(ui, state) {
                    route = next;
                }
            }
            ChartsRoute::Editor(editor) => {
                let editor_config = self.config.read().config().editor.clone();
                if let Some(next) = chart_editor::ui(ui, state, editor, &editor_config) {
                    route = next;
                }
            }
        }

        state.charts_route = route;
    }
}

impl ChartsPanel {
    fn list_ui(&self, ui: &mut egui::Ui, state: &mut AppState) -> Option<ChartsRoute> {
        let mut next = None;
        let default_kind = self.config.read().config().editor.default_edge_kind;

        ui.horizontal(|ui| {
            ui.heading("차트 유형");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("새 차트 유형 추가").clicked() {
                    next = Some(ChartsRoute::Editor(ChartEditorState::new(default_kind)));
                }
            });
        });
        ui.separator();

        if state.charts.list().is_empty() {
            ui.weak("등록된 차트 유형이 없습니다.");
            return next;
        }

        let rows: Vec<(uuid::Uuid, String, usize, usize)> = state
            .charts
            .list()
            .iter()
            .map(|c| {
                (
                    c.id,
                    c.name.clone(),
                    c.outline.points().len(),
                    c.outline.edges().len(),
                )
            })
            .collect();

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("charts_table")
                .num_columns(4)
                .striped(true)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    ui.strong("차트 이름");
                    ui.strong("점");
                    ui.strong("연결선");
                    ui.strong("작업");
                    ui.end_row();

                    for (id, name, points, edges) in rows {
                        ui.label(&name);
                        ui.label(format!("{points}개"));
                        ui.label(format!("{edges}개"));
                        ui.horizontal(|ui| {
                            if ui.small_button("수정").clicked()
                                && let Some(chart) = state.charts.get(id)
                            {
                                next = Some(ChartsRoute::Editor(ChartEditorState::for_chart(
                                    chart,
                                    default_kind,
                                )));
                            }
                            if ui.small_button("삭제").clicked() {
                                state.pending_delete =
                                    Some(PendingDelete::Chart(id, name.clone()));
                            }
                        });
                        ui.end_row();
                    }
                });
        });

        next
    }
}
