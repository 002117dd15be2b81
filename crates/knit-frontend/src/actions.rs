//! Action handling
//!
//! Applies queued mutations to the stores and translates outcomes into
//! navigation, toasts and dialogs.

use tracing::{info, warn};

use knit_core::StoreError;

use crate::app_state::{AppAction, AppState, RuleConflict, ToastKind};
use crate::panels::AdminTab;
use crate::state::{ChartsRoute, RulesRoute, TemplateFormState, TemplatesRoute};

/// Handle one queued action
pub fn handle_action(state: &mut AppState, action: AppAction, now: f64) {
    match action {
        AppAction::SaveRule {
            rule,
            is_edit,
            create_template,
        } => {
            let rule_id = rule.id;
            let name = rule.derived_name();
            let result = if is_edit {
                state.store.update_rule(rule)
            } else {
                state.store.insert_rule(rule).map(|_| ())
            };

            match result {
                Ok(()) => {
                    state.push_toast(ToastKind::Success, format!("{name} 규칙을 저장했습니다"), now);
                    if create_template {
                        state.templates_route =
                            TemplatesRoute::New(TemplateFormState::for_rule(rule_id));
                        state.focus_tab = Some(AdminTab::Templates);
                    } else {
                        state.rules_route = RulesRoute::List;
                    }
                }
                Err(e) => {
                    // Forms pre-check duplicates; reaching here means the store
                    // and the form disagreed, so surface it loudly.
                    warn!("failed to save rule: {e}");
                    state.push_toast(ToastKind::Error, e.to_string(), now);
                }
            }
        }

        AppAction::DeleteRule(id) => match state.store.remove_rule(id) {
            Ok(rule) => {
                state.push_toast(ToastKind::Success, format!("{} 규칙을 삭제했습니다", rule.name), now);
                state.rules_route = RulesRoute::List;
            }
            Err(StoreError::RuleInUse { rule, templates }) => {
                state.rule_conflict = Some(RuleConflict { rule, templates });
            }
            Err(e) => {
                warn!("failed to delete rule: {e}");
                state.push_toast(ToastKind::Error, e.to_string(), now);
            }
        },

        AppAction::SaveTemplate { template, is_edit } => {
            let name = template.name.clone();
            let result = if is_edit {
                state.store.update_template(template)
            } else {
                state.store.insert_template(template).map(|_| ())
            };

            match result {
                Ok(()) => {
                    state.push_toast(
                        ToastKind::Success,
                        format!("{name} 템플릿을 저장했습니다"),
                        now,
                    );
                    state.templates_route = TemplatesRoute::List;
                }
                Err(e) => {
                    warn!("failed to save template: {e}");
                    state.push_toast(ToastKind::Error, e.to_string(), now);
                }
            }
        }

        AppAction::DeleteTemplate(id) => match state.store.remove_template(id) {
            Ok(template) => {
                state.push_toast(
                    ToastKind::Success,
                    format!("{} 템플릿을 삭제했습니다", template.name),
                    now,
                );
                state.templates_route = TemplatesRoute::List;
            }
            Err(e) => {
                warn!("failed to delete template: {e}");
                state.push_toast(ToastKind::Error, e.to_string(), now);
            }
        },

        AppAction::SaveSizeDetails {
            template_id,
            details,
        } => {
            let Some(mut template) = state.store.template(template_id).cloned() else {
                state.push_toast(ToastKind::Error, "템플릿을 찾을 수 없습니다", now);
                state.templates_route = TemplatesRoute::List;
                return;
            };
            template.size_details = details;
            match state.store.update_template(template) {
                Ok(()) => {
                    info!(%template_id, "saved size details");
                    state.push_toast(ToastKind::Success, "세부 치수를 저장했습니다", now);
                    state.templates_route = TemplatesRoute::Detail(template_id);
                }
                Err(e) => {
                    warn!("failed to save size details: {e}");
                    state.push_toast(ToastKind::Error, e.to_string(), now);
                }
            }
        }

        AppAction::SaveChart { chart, is_edit } => {
            let name = chart.name.clone();
            let result = if is_edit {
                state.charts.update(chart)
            } else {
                state.charts.insert(chart);
                Ok(())
            };

            match result {
                Ok(()) => {
                    state.push_toast(ToastKind::Success, format!("{name} 차트를 저장했습니다"), now);
                    state.charts_route = ChartsRoute::List;
                }
                Err(e) => {
                    warn!("failed to save chart: {e}");
                    state.push_toast(ToastKind::Error, e.to_string(), now);
                }
            }
        }

        AppAction::DeleteChart(id) => match state.charts.remove(id) {
            Ok(chart) => {
                state.push_toast(ToastKind::Success, format!("{} 차트를 삭제했습니다", chart.name), now);
                state.charts_route = ChartsRoute::List;
            }
            Err(e) => {
                warn!("failed to delete chart: {e}");
                state.push_toast(ToastKind::Error, e.to_string(), now);
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knit_core::{MeasurementItemId, MeasurementRule, SleeveType, Template};

    #[test]
    fn test_delete_rule_in_use_opens_conflict_dialog() {
        let mut state = AppState::new();
        let rule_id = state.store.rules()[0].id;
        assert!(!state.store.templates_referencing(rule_id).is_empty());

        handle_action(&mut state, AppAction::DeleteRule(rule_id), 0.0);

        let conflict = state.rule_conflict.as_ref().expect("conflict dialog set");
        assert_eq!(conflict.rule, "래글런형 스웨터");
        assert_eq!(conflict.templates, vec!["베이직 스웨터".to_string()]);
        // The rule survived.
        assert!(state.store.rule(rule_id).is_some());
    }

    #[test]
    fn test_save_rule_with_create_template_navigates() {
        let mut state = AppState::new();
        let rule = MeasurementRule::new(
            104,
            Some(SleeveType::Raglan),
            vec![MeasurementItemId::ChestWidth],
        );
        let rule_id = rule.id;

        handle_action(
            &mut state,
            AppAction::SaveRule {
                rule,
                is_edit: false,
                create_template: true,
            },
            0.0,
        );

        assert!(state.store.rule(rule_id).is_some());
        assert_eq!(state.focus_tab, Some(AdminTab::Templates));
        match &state.templates_route {
            TemplatesRoute::New(form) => assert_eq!(form.measurement_rule_id, Some(rule_id)),
            other => panic!("unexpected route: {other:?}"),
        }
    }

    #[test]
    fn test_save_template_without_rule_is_rejected() {
        let mut state = AppState::new();
        let before = state.store.templates().len();

        handle_action(
            &mut state,
            AppAction::SaveTemplate {
                template: Template::new("규칙 없는 템플릿"),
                is_edit: false,
            },
            0.0,
        );

        assert_eq!(state.store.templates().len(), before);
        assert!(matches!(state.toasts.last().map(|t| t.kind), Some(ToastKind::Error)));
    }

    #[test]
    fn test_save_size_details_round_trip() {
        let mut state = AppState::new();
        let template_id = state.store.templates()[1].id; // 비니, empty table
        let rule_id = state.store.templates()[1].measurement_rule_id.unwrap();
        let rule = state.store.rule(rule_id).unwrap().clone();
        let template = state.store.template(template_id).unwrap().clone();

        let mut grid = crate::state::SizeGridState::new(&template, &rule);
        grid.cells[0][6] = "55".into();

        handle_action(
            &mut state,
            AppAction::SaveSizeDetails {
                template_id,
                details: grid.to_size_details(),
            },
            0.0,
        );

        let saved = state.store.template(template_id).unwrap();
        assert_eq!(
            saved.measurement(knit_core::BASE_SIZE, MeasurementItemId::HeadCircumference),
            Some(55.0)
        );
        assert!(matches!(state.templates_route, TemplatesRoute::Detail(id) if id == template_id));
    }
}
