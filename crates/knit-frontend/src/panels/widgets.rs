//! Small shared UI pieces

use egui::{Color32, RichText};

/// Inline alert severities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Error,
}

/// An inline alert panel with a title and body text
pub fn alert(ui: &mut egui::Ui, kind: AlertKind, title: &str, body: &str) {
    let (fill, accent) = match kind {
        AlertKind::Info => (ui.visuals().faint_bg_color, ui.visuals().strong_text_color()),
        AlertKind::Error => (
            Color32::from_rgba_unmultiplied(200, 60, 60, 24),
            Color32::from_rgb(200, 60, 60),
        ),
    };

    egui::Frame::group(ui.style())
        .fill(fill)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(title).strong().color(accent));
                ui.label(body);
            });
        });
}

/// Stepper header: numbered step titles with the current one highlighted
pub fn stepper_header(ui: &mut egui::Ui, titles: &[(&str, &str)], current: usize) {
    ui.horizontal(|ui| {
        for (idx, (title, description)) in titles.iter().enumerate() {
            if idx > 0 {
                ui.label(RichText::new("→").weak());
            }
            let active = idx == current;
            let text = format!("{}. {}", idx + 1, title);
            if active {
                ui.label(RichText::new(text).strong().underline());
            } else {
                ui.label(RichText::new(text).weak());
            }
            if active {
                ui.label(RichText::new(*description).weak().small());
            }
        }
    });
    ui.separator();
}

/// Full-page message for navigation to an entity that no longer exists
pub fn not_found(ui: &mut egui::Ui, what: &str) -> bool {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading(format!("{what}을(를) 찾을 수 없습니다"));
        ui.label("삭제되었거나 잘못된 링크입니다.");
        ui.add_space(12.0);
        ui.button("목록으로 돌아가기").clicked()
    })
    .inner
}

/// A section heading with a separator underneath
pub fn section(ui: &mut egui::Ui, title: &str) {
    ui.add_space(8.0);
    ui.label(RichText::new(title).strong());
    ui.separator();
}
