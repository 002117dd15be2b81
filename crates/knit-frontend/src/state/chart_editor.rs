//! Chart editor state
//!
//! The stepper-driven geometry editor: name entry, guideline authoring on the
//! canvas, and the size-graded preview. Step transitions only happen through
//! explicit next/back actions.

use glam::Vec2;
use uuid::Uuid;

use knit_chart::{ChartOutline, ChartType, EdgeKind};
use knit_core::{BASE_SIZE, SizeRange};

/// Steps of the chart editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorStep {
    /// Chart name and metadata
    #[default]
    Info,
    /// Point and edge authoring on the canvas
    Guideline,
    /// Size-graded preview
    Preview,
}

impl EditorStep {
    pub const ALL: [EditorStep; 3] = [EditorStep::Info, EditorStep::Guideline, EditorStep::Preview];

    pub fn title(&self) -> &'static str {
        match self {
            EditorStep::Info => "차트 유형 정보",
            EditorStep::Guideline => "가이드라인 설정",
            EditorStep::Preview => "사이즈 미리보기",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EditorStep::Info => "차트 이름을 입력하세요.",
            EditorStep::Guideline => "캔버스를 클릭하여 점을 등록하세요.",
            EditorStep::Preview => "사이즈별 변형을 확인하세요.",
        }
    }

    pub fn next(&self) -> EditorStep {
        match self {
            EditorStep::Info => EditorStep::Guideline,
            EditorStep::Guideline | EditorStep::Preview => EditorStep::Preview,
        }
    }

    pub fn back(&self) -> EditorStep {
        match self {
            EditorStep::Info | EditorStep::Guideline => EditorStep::Info,
            EditorStep::Preview => EditorStep::Guideline,
        }
    }

    /// 0-based position for the stepper header
    pub fn index(&self) -> usize {
        match self {
            EditorStep::Info => 0,
            EditorStep::Guideline => 1,
            EditorStep::Preview => 2,
        }
    }
}

/// What is currently being dragged on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// A chart point
    Point(Uuid),
    /// The control handle of a curve edge
    Control(Uuid),
}

/// Chart editor state
#[derive(Debug, Clone)]
pub struct ChartEditorState {
    /// Chart being edited, `None` when creating a new one
    pub chart_id: Option<Uuid>,
    pub step: EditorStep,
    pub name: String,
    pub outline: ChartOutline,
    pub armhole_depth: Option<f32>,
    /// Point highlighted in the canvas and the point list
    pub selected_point: Option<Uuid>,
    /// Active drag gesture; cleared on pointer release
    pub drag: Option<DragTarget>,
    /// Manual coordinate entry fields
    pub manual_point: Vec2,
    /// Size bin shown in the preview step
    pub preview_size: SizeRange,
    /// Template whose size table feeds the preview
    pub preview_template: Option<Uuid>,
}

impl Default for ChartEditorState {
    fn default() -> Self {
        Self {
            chart_id: None,
            step: EditorStep::default(),
            name: String::new(),
            outline: ChartOutline::new(),
            armhole_depth: None,
            selected_point: None,
            drag: None,
            manual_point: Vec2::new(500.0, 500.0),
            preview_size: BASE_SIZE,
            preview_template: None,
        }
    }
}

impl ChartEditorState {
    /// Start a fresh editor for a new chart
    pub fn new(default_edge_kind: EdgeKind) -> Self {
        let mut state = Self::default();
        state.outline.default_edge_kind = default_edge_kind;
        state
    }

    /// Start the editor pre-filled with an existing chart
    pub fn for_chart(chart: &ChartType, default_edge_kind: EdgeKind) -> Self {
        let mut outline = chart.outline.clone();
        outline.default_edge_kind = default_edge_kind;
        Self {
            chart_id: Some(chart.id),
            name: chart.name.clone(),
            outline,
            armhole_depth: chart.armhole_depth,
            ..Self::default()
        }
    }

    /// Advance to the next step
    pub fn next_step(&mut self) {
        self.step = self.step.next();
        self.drag = None;
    }

    /// Go back one step
    pub fn back_step(&mut self) {
        self.step = self.step.back();
        self.drag = None;
    }

    /// Deselect and stop dragging a point that no longer exists
    pub fn clear_stale_selection(&mut self) {
        if let Some(id) = self.selected_point
            && self.outline.point(id).is_none()
        {
            self.selected_point = None;
        }
        if let Some(DragTarget::Point(id)) = self.drag
            && self.outline.point(id).is_none()
        {
            self.drag = None;
        }
    }

    /// The finished chart payload
    pub fn to_chart(&self) -> ChartType {
        let name = if self.name.trim().is_empty() {
            "새 차트".to_string()
        } else {
            self.name.trim().to_string()
        };

        let mut chart = ChartType::new(name, self.outline.clone());
        if let Some(id) = self.chart_id {
            chart.id = id;
        }
        chart.armhole_depth = self.armhole_depth;
        chart
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_transitions_are_linear() {
        let mut state = ChartEditorState::default();
        assert_eq!(state.step, EditorStep::Info);

        state.next_step();
        assert_eq!(state.step, EditorStep::Guideline);
        state.next_step();
        assert_eq!(state.step, EditorStep::Preview);
        state.next_step();
        assert_eq!(state.step, EditorStep::Preview);

        state.back_step();
        assert_eq!(state.step, EditorStep::Guideline);
        state.back_step();
        assert_eq!(state.step, EditorStep::Info);
        state.back_step();
        assert_eq!(state.step, EditorStep::Info);
    }

    #[test]
    fn test_to_chart_defaults_empty_name() {
        let state = ChartEditorState::default();
        assert_eq!(state.to_chart().name, "새 차트");

        let mut named = ChartEditorState::default();
        named.name = "  라운드넥 탑다운 앞몸판  ".into();
        assert_eq!(named.to_chart().name, "라운드넥 탑다운 앞몸판");
    }

    #[test]
    fn test_to_chart_keeps_id_when_editing() {
        let chart = ChartType::new("소매", ChartOutline::new());
        let state = ChartEditorState::for_chart(&chart, EdgeKind::Straight);
        assert_eq!(state.to_chart().id, chart.id);
    }

    #[test]
    fn test_clear_stale_selection() {
        let mut state = ChartEditorState::default();
        let id = state.outline.add_point(Vec2::new(100.0, 100.0));
        state.selected_point = Some(id);
        state.drag = Some(DragTarget::Point(id));

        state.outline.remove_point(id).unwrap();
        state.clear_stale_selection();

        assert_eq!(state.selected_point, None);
        assert_eq!(state.drag, None);
    }
}
