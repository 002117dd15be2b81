//! Templates page: list, detail, form and size-detail routing

use uuid::Uuid;

use knit_core::Category;

use crate::app_state::{AppState, PendingDelete};
use crate::panels::{Panel, size_grid, template_form, widgets};
use crate::state::{SizeGridState, TemplateFormState, TemplatesRoute};

/// Templates panel
#[derive(Default)]
pub struct TemplatesPanel;

impl TemplatesPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Panel for TemplatesPanel {
    fn name(&self) -> &str {
        "템플릿 관리"
    }

    fn ui(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        let mut route = std::mem::take(&mut state.templates_route);

        match &mut route {
            TemplatesRoute::List => {
                if let Some(next) = list_ui(ui, state) {
                    route = next;
                }
            }
            TemplatesRoute::Detail(id) => {
                if let Some(next) = detail_ui(ui, state, *id) {
                    route = next;
                }
            }
            TemplatesRoute::New(form) => {
                if let Some(next) = template_form::ui(ui, state, form, false) {
                    route = next;
                }
            }
            TemplatesRoute::Edit(_, form) => {
                if let Some(next) = template_form::ui(ui, state, form, true) {
                    route = next;
                }
            }
            TemplatesRoute::SizeDetails(grid) => {
                if let Some(next) = size_grid::ui(ui, state, grid) {
                    route = next;
                }
            }
        }

        state.templates_route = route;
    }
}

fn list_ui(ui: &mut egui::Ui, state: &mut AppState) -> Option<TemplatesRoute> {
    let mut next = None;

    ui.horizontal(|ui| {
        ui.heading("템플릿");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("새 템플릿 추가").clicked() {
                next = Some(TemplatesRoute::New(TemplateFormState::new()));
            }
        });
    });
    ui.separator();

    if state.store.templates().is_empty() {
        ui.weak("등록된 템플릿이 없습니다.");
        return next;
    }

    struct Row {
        id: Uuid,
        name: String,
        tool: &'static str,
        pattern: &'static str,
        status: &'static str,
        category: String,
        modified: String,
    }

    let rows: Vec<Row> = state
        .store
        .templates()
        .iter()
        .map(|t| Row {
            id: t.id,
            name: t.name.clone(),
            tool: t.tool_type.label(),
            pattern: t.pattern_type.label(),
            status: t.publish_status.label(),
            category: t
                .category_ids
                .last()
                .map(|&id| Category::path_label(id))
                .unwrap_or_default(),
            modified: t.last_modified.clone(),
        })
        .collect();

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("templates_table")
            .num_columns(7)
            .striped(true)
            .spacing([20.0, 6.0])
            .show(ui, |ui| {
                ui.strong("템플릿 이름");
                ui.strong("도구");
                ui.strong("패턴 유형");
                ui.strong("공개 상태");
                ui.strong("카테고리");
                ui.strong("수정일");
                ui.strong("작업");
                ui.end_row();

                for row in rows {
                    ui.label(&row.name);
                    ui.label(row.tool);
                    ui.label(row.pattern);
                    ui.label(row.status);
                    ui.label(&row.category);
                    ui.label(if row.modified.is_empty() {
                        "-"
                    } else {
                        row.modified.as_str()
                    });
                    ui.horizontal(|ui| {
                        if ui.small_button("상세").clicked() {
                            next = Some(TemplatesRoute::Detail(row.id));
                        }
                        if ui.small_button("수정").clicked()
                            && let Some(template) = state.store.template(row.id)
                        {
                            next = Some(TemplatesRoute::Edit(
                                row.id,
                                TemplateFormState::for_template(template),
                            ));
                        }
                        if ui.small_button("세부 치수").clicked()
                            && let Some(grid) = open_size_grid(state, row.id)
                        {
                            next = Some(TemplatesRoute::SizeDetails(grid));
                        }
                        if ui.small_button("삭제").clicked() {
                            state.pending_delete =
                                Some(PendingDelete::Template(row.id, row.name.clone()));
                        }
                    });
                    ui.end_row();
                }
            });
    });

    next
}

/// Build the size grid for a template, if its rule still exists
fn open_size_grid(state: &AppState, template_id: Uuid) -> Option<SizeGridState> {
    let template = state.store.template(template_id)?;
    let rule = state.store.rule(template.measurement_rule_id?)?;
    Some(SizeGridState::new(template, rule))
}

fn detail_ui(ui: &mut egui::Ui, state: &mut AppState, id: Uuid) -> Option<TemplatesRoute> {
    let Some(template) = state.store.template(id).cloned() else {
        if widgets::not_found(ui, "템플릿") {
            return Some(TemplatesRoute::List);
        }
        return None;
    };

    let mut next = None;

    ui.horizontal(|ui| {
        ui.heading(&template.name);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("세부 치수").clicked()
                && let Some(grid) = open_size_grid(state, id)
            {
                next = Some(TemplatesRoute::SizeDetails(grid));
            }
            if ui.button("수정").clicked() {
                next = Some(TemplatesRoute::Edit(
                    id,
                    TemplateFormState::for_template(&template),
                ));
            }
            if ui.button("목록으로").clicked() {
                next = Some(TemplatesRoute::List);
            }
        });
    });
    ui.separator();

    widgets::section(ui, "기본 정보");
    egui::Grid::new("template_detail")
        .num_columns(2)
        .show(ui, |ui| {
            ui.label("도구 유형");
            ui.label(template.tool_type.label());
            ui.end_row();
            ui.label("패턴 유형");
            ui.label(template.pattern_type.label());
            ui.end_row();
            ui.label("공개 상태");
            ui.label(template.publish_status.label());
            ui.end_row();
            ui.label("카테고리");
            ui.label(
                template
                    .category_ids
                    .last()
                    .map(|&cid| Category::path_label(cid))
                    .unwrap_or_else(|| "-".into()),
            );
            ui.end_row();
            ui.label("제작 방식");
            ui.label(if template.construction_methods.is_empty() {
                "-".to_string()
            } else {
                template
                    .construction_methods
                    .iter()
                    .map(|m| m.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            });
            ui.end_row();
            ui.label("소매 유형");
            ui.label(template.sleeve_type.map(|s| s.label()).unwrap_or("-"));
            ui.end_row();
            ui.label("넥라인");
            ui.label(template.neckline_type.map(|n| n.label()).unwrap_or("-"));
            ui.end_row();
        });

    widgets::section(ui, "치수 규칙");
    match template
        .measurement_rule_id
        .and_then(|rid| state.store.rule(rid))
    {
        Some(rule) => {
            ui.label(&rule.name);
            ui.horizontal_wrapped(|ui| {
                for item in &rule.items {
                    let _ = ui.selectable_label(false, item.label());
                }
            });
        }
        None => {
            ui.weak("연결된 치수 규칙이 없습니다.");
        }
    }

    widgets::section(ui, "차트 유형");
    if template.chart_type_ids.is_empty() {
        ui.weak("연결된 차트 유형이 없습니다.");
    } else {
        for chart_id in &template.chart_type_ids {
            match state.charts.get(*chart_id) {
                Some(chart) => ui.label(format!("• {}", chart.name)),
                None => ui.weak("• (삭제된 차트)"),
            };
        }
    }

    widgets::section(ui, "세부 치수");
    let filled = template
        .size_details
        .iter()
        .filter(|d| d.measurements.values().any(|&v| v != 0.0))
        .count();
    ui.label(format!(
        "{}개 사이즈 구간 중 {}개 입력됨",
        knit_core::SizeRange::ALL.len(),
        filled
    ));

    next
}
