//! Template form
//!
//! The one hard validation gate in the tool lives here: a template cannot be
//! saved without a measurement rule reference. Selecting a rule also fixes the
//! category path and the sleeve type.

use egui::ComboBox;

use knit_core::{Category, ConstructionMethod, NecklineType, PatternType, PublishStatus, ToolType};

use crate::app_state::{AppAction, AppState};
use crate::panels::widgets::{self, AlertKind};
use crate::state::{TemplateFormState, TemplatesRoute};

/// Render the template form. Returns the next route when the user leaves it.
pub fn ui(
    ui: &mut egui::Ui,
    state: &mut AppState,
    form: &mut TemplateFormState,
    is_edit: bool,
) -> Option<TemplatesRoute> {
    let mut next = None;

    ui.heading(if is_edit { "템플릿 수정" } else { "새 템플릿" });
    ui.separator();

    widgets::section(ui, "기본 정보");
    ui.horizontal(|ui| {
        ui.label("템플릿 이름");
        ui.add(egui::TextEdit::singleline(&mut form.name).desired_width(280.0));
    });

    ui.horizontal(|ui| {
        ui.label("도구 유형");
        for tool in ToolType::ALL {
            ui.radio_value(&mut form.tool_type, tool, tool.label());
        }
        ui.separator();
        ui.label("패턴 유형");
        for pattern in PatternType::ALL {
            ui.radio_value(&mut form.pattern_type, pattern, pattern.label());
        }
    });

    ui.horizontal(|ui| {
        ui.label("공개 상태");
        ui.radio_value(&mut form.publish_status, PublishStatus::Public, "공개");
        ui.radio_value(&mut form.publish_status, PublishStatus::Private, "비공개");
    });

    rule_ui(ui, state, form);

    widgets::section(ui, "제작 방식");
    ui.horizontal_wrapped(|ui| {
        for method in ConstructionMethod::ALL {
            let mut checked = form.construction_methods.contains(&method);
            if ui.checkbox(&mut checked, method.label()).changed() {
                form.toggle_construction(method, checked);
            }
        }
    });

    widgets::section(ui, "넥라인");
    ui.horizontal(|ui| {
        if ui
            .selectable_label(form.neckline_type.is_none(), "없음")
            .clicked()
        {
            form.neckline_type = None;
        }
        for neckline in NecklineType::ALL {
            if ui
                .selectable_label(form.neckline_type == Some(neckline), neckline.label())
                .clicked()
            {
                form.neckline_type = Some(neckline);
            }
        }
    });

    charts_ui(ui, state, form);

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.button("취소").clicked() {
            next = Some(TemplatesRoute::List);
        }

        // Submission is blocked without a rule reference.
        let has_rule = form.measurement_rule_id.is_some();
        if ui.add_enabled(has_rule, egui::Button::new("저장")).clicked() {
            submit(state, form, is_edit);
        }
    });

    if form.measurement_rule_id.is_none() {
        widgets::alert(
            ui,
            AlertKind::Error,
            "치수 규칙 필요",
            "템플릿은 반드시 하나의 치수 규칙을 참조해야 합니다. 위에서 규칙을 선택해 주세요.",
        );
    }

    next
}

fn rule_ui(ui: &mut egui::Ui, state: &AppState, form: &mut TemplateFormState) {
    widgets::section(ui, "치수 규칙");

    let selected_label = form
        .measurement_rule_id
        .and_then(|id| state.store.rule(id))
        .map(|r| r.name.clone())
        .unwrap_or_else(|| "치수 규칙 선택".into());

    ui.horizontal(|ui| {
        ComboBox::from_id_salt("template_rule")
            .selected_text(selected_label)
            .width(240.0)
            .show_ui(ui, |ui| {
                for rule in state.store.rules() {
                    if ui
                        .selectable_label(form.measurement_rule_id == Some(rule.id), &rule.name)
                        .clicked()
                    {
                        form.measurement_rule_id = Some(rule.id);
                    }
                }
            });

        // The category path follows the rule and is not directly editable.
        if let Some(rule) = form.measurement_rule_id.and_then(|id| state.store.rule(id)) {
            ui.weak(Category::path_label(rule.category_id));
        }
    });

    if let Some(rule) = form.measurement_rule_id.and_then(|id| state.store.rule(id)) {
        ui.horizontal_wrapped(|ui| {
            ui.weak("필수 측정 항목:");
            for item in &rule.items {
                let _ = ui.selectable_label(false, item.label());
            }
        });
    }
}

fn charts_ui(ui: &mut egui::Ui, state: &AppState, form: &mut TemplateFormState) {
    widgets::section(ui, "차트 유형");

    if state.charts.list().is_empty() {
        ui.weak("등록된 차트 유형이 없습니다.");
        return;
    }

    ui.horizontal_wrapped(|ui| {
        for chart in state.charts.list() {
            let mut checked = form.chart_type_ids.contains(&chart.id);
            if ui.checkbox(&mut checked, &chart.name).changed() {
                form.toggle_chart(chart.id, checked);
            }
        }
    });
}

fn submit(state: &mut AppState, form: &TemplateFormState, is_edit: bool) {
    let Some(rule) = form
        .measurement_rule_id
        .and_then(|id| state.store.rule(id))
        .cloned()
    else {
        return;
    };

    let mut template = form.to_template(&rule);

    // Editing keeps the existing size table and thumbnail.
    if let Some(existing) = form.template_id.and_then(|id| state.store.template(id)) {
        template.size_details = existing.size_details.clone();
        template.thumbnail = existing.thumbnail.clone();
        template.last_modified = existing.last_modified.clone();
    }

    state.queue_action(AppAction::SaveTemplate { template, is_edit });
}
