//! Application shell
//!
//! Menu bar, docked admin pages, modal dialogs and the toast overlay. Queued
//! actions are drained once per frame after the panels have run.

use egui_dock::{DockArea, DockState, Style};

use knit_chart::EdgeKind;

use crate::actions::handle_action;
use crate::app_state::{
    AppAction, AppState, PendingDelete, SharedAppState, ToastKind, create_shared_state,
};
use crate::config::{SharedConfig, UiTheme, create_shared_config};
use crate::fonts;
use crate::panels::{AdminTab, ChartsPanel, Panel, RulesPanel, TemplatesPanel, UsersPanel};

struct Panels {
    templates: TemplatesPanel,
    rules: RulesPanel,
    charts: ChartsPanel,
    users: UsersPanel,
}

/// The Knit Pattern Studio application
pub struct KnitStudioApp {
    app_state: SharedAppState,
    config: SharedConfig,
    dock_state: DockState<AdminTab>,
    panels: Panels,
    about_open: bool,
}

impl KnitStudioApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        fonts::configure_fonts(&cc.egui_ctx);

        let config = create_shared_config();

        Self {
            app_state: create_shared_state(),
            panels: Panels {
                templates: TemplatesPanel::new(),
                rules: RulesPanel::new(),
                charts: ChartsPanel::new(config.clone()),
                users: UsersPanel::new(),
            },
            config,
            dock_state: DockState::new(vec![
                AdminTab::Templates,
                AdminTab::Rules,
                AdminTab::Charts,
                AdminTab::Users,
            ]),
            about_open: false,
        }
    }

    fn apply_ui_config(&self, ctx: &egui::Context) {
        let config = self.config.read();
        let ui_config = &config.config().ui;
        match ui_config.theme {
            UiTheme::Light => ctx.set_visuals(egui::Visuals::light()),
            UiTheme::Dark => ctx.set_visuals(egui::Visuals::dark()),
        }
        ctx.set_zoom_factor(ui_config.zoom);
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("파일", |ui| {
                    if ui.button("종료").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        ui.close_menu();
                    }
                });

                ui.menu_button("보기", |ui| {
                    let mut config = self.config.write();
                    let app_config = config.config_mut();

                    ui.label("테마");
                    ui.radio_value(&mut app_config.ui.theme, UiTheme::Light, "라이트");
                    ui.radio_value(&mut app_config.ui.theme, UiTheme::Dark, "다크");
                    ui.separator();

                    ui.label("배율");
                    ui.add(egui::Slider::new(&mut app_config.ui.zoom, 0.75..=1.5));
                    ui.separator();

                    ui.checkbox(&mut app_config.editor.show_grid, "캔버스 격자 표시");
                    ui.checkbox(&mut app_config.editor.show_point_labels, "점 좌표 라벨 표시");

                    ui.label("기본 선 유형");
                    ui.radio_value(
                        &mut app_config.editor.default_edge_kind,
                        EdgeKind::Straight,
                        "직선",
                    );
                    ui.radio_value(
                        &mut app_config.editor.default_edge_kind,
                        EdgeKind::Curve,
                        "곡선",
                    );
                    ui.separator();

                    if ui.button("기본값으로 재설정").clicked() {
                        config.reset_to_defaults();
                        ui.close_menu();
                    }
                });

                ui.menu_button("도움말", |ui| {
                    if ui.button("정보").clicked() {
                        self.about_open = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }

    fn dialogs(&mut self, ctx: &egui::Context, state: &mut AppState) {
        // Delete confirmation.
        if let Some(pending) = state.pending_delete.clone() {
            let mut confirmed = false;
            let mut cancelled = false;

            egui::Window::new("삭제 확인")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(format!(
                        "'{}'을(를) 삭제하시겠습니까? 이 작업은 되돌릴 수 없습니다.",
                        pending.label()
                    ));
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.button("삭제").clicked() {
                            confirmed = true;
                        }
                        if ui.button("취소").clicked() {
                            cancelled = true;
                        }
                    });
                });

            if confirmed {
                match pending {
                    PendingDelete::Rule(id, _) => state.queue_action(AppAction::DeleteRule(id)),
                    PendingDelete::Template(id, _) => {
                        state.queue_action(AppAction::DeleteTemplate(id))
                    }
                    PendingDelete::Chart(id, _) => state.queue_action(AppAction::DeleteChart(id)),
                }
                state.pending_delete = None;
            } else if cancelled {
                state.pending_delete = None;
            }
        }

        // Rule deletion refused because templates still reference it.
        if let Some(conflict) = state.rule_conflict.clone() {
            let mut dismissed = false;

            egui::Window::new("규칙 삭제 불가")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(format!(
                        "'{}' 규칙은 아래 템플릿에서 사용 중이므로 삭제할 수 없습니다.",
                        conflict.rule
                    ));
                    ui.add_space(4.0);
                    for template in &conflict.templates {
                        ui.label(format!("• {template}"));
                    }
                    ui.add_space(4.0);
                    ui.weak("먼저 해당 템플릿의 규칙 연결을 해제하거나 템플릿을 삭제해 주세요.");
                    ui.add_space(8.0);
                    if ui.button("확인").clicked() {
                        dismissed = true;
                    }
                });

            if dismissed {
                state.rule_conflict = None;
            }
        }

        if self.about_open {
            let mut open = self.about_open;
            egui::Window::new("Knit Pattern Studio")
                .open(&mut open)
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label("니트 패턴 메타데이터 관리 도구");
                    ui.label(format!("버전 {}", env!("CARGO_PKG_VERSION")));
                });
            self.about_open = open;
        }
    }

    fn toasts(&self, ctx: &egui::Context, state: &mut AppState) {
        let now = ctx.input(|i| i.time);
        state.prune_toasts(now);

        if state.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in &state.toasts {
                    let color = match toast.kind {
                        ToastKind::Info => ui.visuals().widgets.active.bg_fill,
                        ToastKind::Success => egui::Color32::from_rgb(22, 130, 93),
                        ToastKind::Error => egui::Color32::from_rgb(180, 60, 60),
                    };
                    egui::Frame::popup(ui.style())
                        .fill(color)
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(&toast.message).color(egui::Color32::WHITE),
                            );
                        });
                }
            });
    }

    /// Switch the dock to a tab requested by an action handler
    fn focus_requested_tab(&mut self, state: &mut AppState) {
        if let Some(tab) = state.focus_tab.take()
            && let Some(location) = self.dock_state.find_tab(&tab)
        {
            self.dock_state.set_active_tab(location);
        }
    }
}

impl eframe::App for KnitStudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_ui_config(ctx);
        self.menu_bar(ctx);

        let app_state = self.app_state.clone();
        let mut guard = app_state.lock();
        let state = &mut *guard;

        self.focus_requested_tab(state);

        DockArea::new(&mut self.dock_state)
            .style(Style::from_egui(ctx.style().as_ref()))
            .show_close_buttons(false)
            .show(
                ctx,
                &mut AdminTabViewer {
                    state: &mut *state,
                    panels: &mut self.panels,
                },
            );

        self.dialogs(ctx, state);
        self.toasts(ctx, state);

        // Apply mutations queued during this frame.
        let now = ctx.input(|i| i.time);
        for action in state.take_actions() {
            handle_action(state, action, now);
        }

        // No-op unless a menu interaction marked the config dirty.
        if let Err(e) = self.config.write().save() {
            tracing::warn!("failed to save config: {e}");
        }
    }
}

struct AdminTabViewer<'a> {
    state: &'a mut AppState,
    panels: &'a mut Panels,
}

impl egui_dock::TabViewer for AdminTabViewer<'_> {
    type Tab = AdminTab;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        let name = match tab {
            AdminTab::Templates => self.panels.templates.name(),
            AdminTab::Rules => self.panels.rules.name(),
            AdminTab::Charts => self.panels.charts.name(),
            AdminTab::Users => self.panels.users.name(),
        };
        name.to_string().into()
    }

    fn ui(&mut self, ui: &mut egui::Ui, tab: &mut Self::Tab) {
        match tab {
            AdminTab::Templates => self.panels.templates.ui(ui, self.state),
            AdminTab::Rules => self.panels.rules.ui(ui, self.state),
            AdminTab::Charts => self.panels.charts.ui(ui, self.state),
            AdminTab::Users => self.panels.users.ui(ui, self.state),
        }
    }

    fn closeable(&mut self, _tab: &mut Self::Tab) -> bool {
        false
    }
}
