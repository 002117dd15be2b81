//! Measurement rule form

use egui::ComboBox;

use knit_core::{Category, MeasurementItem, SleeveType};

use crate::app_state::{AppAction, AppState};
use crate::panels::widgets::{self, AlertKind};
use crate::state::{RuleFormState, RulesRoute};

/// Render the rule form. Returns the next route when the user leaves the form.
pub fn ui(
    ui: &mut egui::Ui,
    state: &mut AppState,
    form: &mut RuleFormState,
    is_edit: bool,
) -> Option<RulesRoute> {
    let mut next = None;

    ui.heading(if is_edit { "치수 규칙 수정" } else { "새 치수 규칙" });
    ui.separator();

    category_ui(ui, form);
    sleeve_ui(ui, form);

    ui.horizontal(|ui| {
        ui.label("규칙 이름");
        // Derived from category and sleeve type, not editable.
        let name = form.derived_name();
        ui.add_enabled(
            false,
            egui::TextEdit::singleline(&mut name.as_str()).desired_width(240.0),
        );
    });

    if form.duplicate_error {
        widgets::alert(
            ui,
            AlertKind::Error,
            "중복된 규칙",
            "동일한 카테고리와 소매 유형 조합의 규칙이 이미 존재합니다. 조합을 변경해 주세요.",
        );
    }

    items_ui(ui, form);

    if form.items_error {
        widgets::alert(
            ui,
            AlertKind::Error,
            "측정 항목 없음",
            "최소 한 개 이상의 측정 항목을 선택해 주세요.",
        );
    }

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.button("취소").clicked() {
            next = Some(RulesRoute::List);
        }

        // On success the action handler navigates away; on validation failure
        // the form shows its inline alert.
        let submittable = form.is_submittable();
        if ui
            .add_enabled(submittable, egui::Button::new("저장"))
            .clicked()
        {
            try_submit(state, form, is_edit, false);
        }
        if !is_edit
            && ui
                .add_enabled(submittable, egui::Button::new("저장 후 템플릿 생성"))
                .clicked()
        {
            try_submit(state, form, is_edit, true);
        }
    });

    next
}

fn category_ui(ui: &mut egui::Ui, form: &mut RuleFormState) {
    widgets::section(ui, "카테고리");

    let roots = Category::roots();
    let level2 = form
        .level1
        .and_then(|id| roots.iter().find(|c| c.id == id))
        .map(|c| c.children.clone())
        .unwrap_or_default();
    let level3 = form
        .level2
        .and_then(|id| level2.iter().find(|c| c.id == id))
        .map(|c| c.children.clone())
        .unwrap_or_default();

    ui.horizontal(|ui| {
        let level1_label = form
            .level1
            .and_then(Category::find)
            .map(|c| c.name.to_string())
            .unwrap_or_else(|| "대분류 선택".into());
        ComboBox::from_id_salt("rule_cat_1")
            .selected_text(level1_label)
            .show_ui(ui, |ui| {
                for cat in &roots {
                    if ui
                        .selectable_label(form.level1 == Some(cat.id), cat.name)
                        .clicked()
                    {
                        form.level1 = Some(cat.id);
                        form.level2 = None;
                        form.level3 = None;
                        form.duplicate_error = false;
                    }
                }
            });

        let level2_label = form
            .level2
            .and_then(Category::find)
            .map(|c| c.name.to_string())
            .unwrap_or_else(|| "중분류 선택".into());
        ComboBox::from_id_salt("rule_cat_2")
            .selected_text(level2_label)
            .show_ui(ui, |ui| {
                for cat in &level2 {
                    if ui
                        .selectable_label(form.level2 == Some(cat.id), cat.name)
                        .clicked()
                    {
                        form.level2 = Some(cat.id);
                        form.level3 = None;
                        form.duplicate_error = false;
                    }
                }
            });

        let level3_label = form
            .level3
            .and_then(Category::find)
            .map(|c| c.name.to_string())
            .unwrap_or_else(|| "소분류 선택".into());
        ComboBox::from_id_salt("rule_cat_3")
            .selected_text(level3_label)
            .show_ui(ui, |ui| {
                for cat in &level3 {
                    if ui
                        .selectable_label(form.level3 == Some(cat.id), cat.name)
                        .clicked()
                    {
                        form.level3 = Some(cat.id);
                        form.duplicate_error = false;
                    }
                }
            });
    });
}

fn sleeve_ui(ui: &mut egui::Ui, form: &mut RuleFormState) {
    widgets::section(ui, "소매 유형");

    ui.horizontal(|ui| {
        if ui
            .checkbox(&mut form.requires_sleeve, "소매 유형이 필요한 규칙")
            .changed()
        {
            form.duplicate_error = false;
        }

        if form.requires_sleeve {
            let label = form
                .sleeve_type
                .map(|s| s.label().to_string())
                .unwrap_or_else(|| "소매 유형 선택".into());
            ComboBox::from_id_salt("rule_sleeve")
                .selected_text(label)
                .show_ui(ui, |ui| {
                    for sleeve in SleeveType::ALL {
                        if ui
                            .selectable_label(form.sleeve_type == Some(sleeve), sleeve.label())
                            .clicked()
                        {
                            form.sleeve_type = Some(sleeve);
                            form.duplicate_error = false;
                        }
                    }
                });
        }
    });
}

fn items_ui(ui: &mut egui::Ui, form: &mut RuleFormState) {
    widgets::section(ui, &format!("측정 항목 ({}개 선택됨)", form.items.len()));

    // Catalog category tabs.
    ui.horizontal(|ui| {
        for category in MeasurementItem::categories() {
            if ui
                .selectable_label(form.active_tab == category, category)
                .clicked()
            {
                form.active_tab = category.to_string();
            }
        }
    });
    ui.add_space(4.0);

    let active = form.active_tab.clone();
    for section in MeasurementItem::sections(&active) {
        let section_items = MeasurementItem::in_section(&active, section);
        let all_selected = section_items.iter().all(|i| form.items.contains(&i.id));

        ui.horizontal(|ui| {
            ui.strong(section);
            let mut select_all = all_selected;
            if ui.checkbox(&mut select_all, "전체 선택").changed() {
                for item in &section_items {
                    form.toggle_item(item.id, select_all);
                }
            }
        });

        ui.horizontal_wrapped(|ui| {
            for item in &section_items {
                let mut checked = form.items.contains(&item.id);
                let response = ui.checkbox(&mut checked, item.id.label());
                if response.changed() {
                    form.toggle_item(item.id, checked);
                }
                response.on_hover_text(format!("{} ({})", item.description, item.unit));
            }
        });
        ui.add_space(4.0);
    }
}

/// Validate the form and queue the save
fn try_submit(
    state: &mut AppState,
    form: &mut RuleFormState,
    is_edit: bool,
    create_template: bool,
) {
    if form.items.is_empty() {
        form.items_error = true;
        return;
    }

    let Some(rule) = form.to_rule() else {
        return;
    };

    if state
        .store
        .is_duplicate_rule(rule.category_id, rule.sleeve_type, form.rule_id)
    {
        form.duplicate_error = true;
        return;
    }

    state.queue_action(AppAction::SaveRule {
        rule,
        is_edit,
        create_template,
    });
}
