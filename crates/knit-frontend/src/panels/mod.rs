//! Admin page panels

mod chart_editor;
mod charts;
mod rule_form;
mod rules;
mod size_grid;
mod template_form;
mod templates;
mod users;
mod widgets;

pub use charts::ChartsPanel;
pub use rules::RulesPanel;
pub use templates::TemplatesPanel;
pub use users::UsersPanel;

use crate::app_state::AppState;

/// One admin page hosted as a dock tab
pub trait Panel {
    fn name(&self) -> &str;
    fn ui(&mut self, ui: &mut egui::Ui, state: &mut AppState);
}

/// The admin pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Templates,
    Rules,
    Charts,
    Users,
}
