//! User directory panel (read-only)

use knit_core::User;

use crate::app_state::AppState;
use crate::panels::Panel;

/// Users panel
#[derive(Default)]
pub struct UsersPanel;

impl UsersPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Panel for UsersPanel {
    fn name(&self) -> &str {
        "사용자 관리"
    }

    fn ui(&mut self, ui: &mut egui::Ui, _state: &mut AppState) {
        ui.heading("사용자");
        ui.separator();

        egui::Grid::new("users_table")
            .num_columns(5)
            .striped(true)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.strong("이름");
                ui.strong("이메일");
                ui.strong("역할");
                ui.strong("상태");
                ui.strong("마지막 로그인");
                ui.end_row();

                for user in User::directory() {
                    ui.label(user.name);
                    ui.label(user.email);
                    ui.label(user.role);
                    ui.label(user.status);
                    ui.label(user.last_login);
                    ui.end_row();
                }
            });
    }
}
