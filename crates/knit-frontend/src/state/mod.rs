//! Frontend state types
//!
//! Per-page routes and the editing state behind each form. Stores live in
//! `AppState`; the types here only hold what the user is currently typing,
//! selecting or dragging.

mod chart_editor;
mod forms;
mod size_grid;

pub use chart_editor::{ChartEditorState, DragTarget, EditorStep};
pub use forms::{RuleFormState, TemplateFormState};
pub use size_grid::{SizeGridState, apply_paste_block, is_block_paste};

use uuid::Uuid;

/// Route of the measurement rules page
#[derive(Debug, Clone, Default)]
pub enum RulesRoute {
    #[default]
    List,
    New(RuleFormState),
    Edit(Uuid, RuleFormState),
    Detail(Uuid),
}

/// Route of the templates page
#[derive(Debug, Clone, Default)]
pub enum TemplatesRoute {
    #[default]
    List,
    New(TemplateFormState),
    Edit(Uuid, TemplateFormState),
    Detail(Uuid),
    SizeDetails(SizeGridState),
}

/// Route of the chart types page
#[derive(Debug, Clone, Default)]
pub enum ChartsRoute {
    #[default]
    List,
    Editor(ChartEditorState),
}
