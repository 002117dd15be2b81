//! Measurement rules page: list, detail and form routing

use uuid::Uuid;

use knit_core::Category;

use crate::app_state::{AppState, PendingDelete};
use crate::panels::{Panel, rule_form, widgets};
use crate::state::{RuleFormState, RulesRoute};

/// Measurement rules panel
#[derive(Default)]
pub struct RulesPanel;

impl RulesPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Panel for RulesPanel {
    fn name(&self) -> &str {
        "치수 규칙 관리"
    }

    fn ui(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        let mut route = std::mem::take(&mut state.rules_route);

        match &mut route {
            RulesRoute::List => {
                if let Some(next) = list_ui(ui, state) {
                    route = next;
                }
            }
            RulesRoute::Detail(id) => {
                if let Some(next) = detail_ui(ui, state, *id) {
                    route = next;
                }
            }
            RulesRoute::New(form) => {
                if let Some(next) = rule_form::ui(ui, state, form, false) {
                    route = next;
                }
            }
            RulesRoute::Edit(_, form) => {
                if let Some(next) = rule_form::ui(ui, state, form, true) {
                    route = next;
                }
            }
        }

        state.rules_route = route;
    }
}

fn list_ui(ui: &mut egui::Ui, state: &mut AppState) -> Option<RulesRoute> {
    let mut next = None;

    ui.horizontal(|ui| {
        ui.heading("치수 규칙");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("새 규칙 추가").clicked() {
                next = Some(RulesRoute::New(RuleFormState::new()));
            }
        });
    });
    ui.separator();

    if state.store.rules().is_empty() {
        ui.weak("등록된 규칙이 없습니다.");
        return next;
    }

    let rows: Vec<(Uuid, String, String, String, usize)> = state
        .store
        .rules()
        .iter()
        .map(|rule| {
            (
                rule.id,
                rule.name.clone(),
                Category::path_label(rule.category_id),
                rule.sleeve_type.map(|s| s.label().to_string()).unwrap_or_default(),
                rule.items.len(),
            )
        })
        .collect();

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("rules_table")
            .num_columns(5)
            .striped(true)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.strong("규칙 이름");
                ui.strong("카테고리");
                ui.strong("소매 유형");
                ui.strong("측정 항목");
                ui.strong("작업");
                ui.end_row();

                for (id, name, path, sleeve, item_count) in rows {
                    ui.label(&name);
                    ui.label(&path);
                    ui.label(if sleeve.is_empty() { "-" } else { sleeve.as_str() });
                    ui.label(format!("{item_count}개"));
                    ui.horizontal(|ui| {
                        if ui.small_button("상세").clicked() {
                            next = Some(RulesRoute::Detail(id));
                        }
                        if ui.small_button("수정").clicked()
                            && let Some(rule) = state.store.rule(id)
                        {
                            next = Some(RulesRoute::Edit(id, RuleFormState::for_rule(rule)));
                        }
                        if ui.small_button("삭제").clicked() {
                            state.pending_delete = Some(PendingDelete::Rule(id, name.clone()));
                        }
                    });
                    ui.end_row();
                }
            });
    });

    next
}

fn detail_ui(ui: &mut egui::Ui, state: &mut AppState, id: Uuid) -> Option<RulesRoute> {
    let Some(rule) = state.store.rule(id).cloned() else {
        if widgets::not_found(ui, "치수 규칙") {
            return Some(RulesRoute::List);
        }
        return None;
    };

    let mut next = None;

    ui.horizontal(|ui| {
        ui.heading(&rule.name);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("수정").clicked() {
                next = Some(RulesRoute::Edit(id, RuleFormState::for_rule(&rule)));
            }
            if ui.button("목록으로").clicked() {
                next = Some(RulesRoute::List);
            }
        });
    });
    ui.separator();

    widgets::section(ui, "기본 정보");
    egui::Grid::new("rule_detail").num_columns(2).show(ui, |ui| {
        ui.label("카테고리");
        ui.label(Category::path_label(rule.category_id));
        ui.end_row();
        ui.label("소매 유형");
        ui.label(rule.sleeve_type.map(|s| s.label()).unwrap_or("-"));
        ui.end_row();
    });

    widgets::section(ui, &format!("측정 항목 ({}개)", rule.items.len()));
    ui.horizontal_wrapped(|ui| {
        for item in &rule.items {
            let _ = ui.selectable_label(false, item.label());
        }
    });

    let referencing = state.store.templates_referencing(id);
    if !referencing.is_empty() {
        widgets::section(ui, "이 규칙을 사용하는 템플릿");
        for template in referencing {
            ui.label(format!("• {}", template.name));
        }
    }

    next
}
