//! Template definitions
//!
//! A template is a reusable pattern definition: construction attributes, a
//! reference to the measurement rule that governs it, optional chart types, and
//! a per-size table of measurement values.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::measurement::MeasurementItemId;
use crate::size::SizeRange;

/// Needle kind the pattern is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolType {
    #[default]
    Knitting,
    Crochet,
}

impl ToolType {
    pub const ALL: [ToolType; 2] = [ToolType::Knitting, ToolType::Crochet];

    pub fn label(&self) -> &'static str {
        match self {
            ToolType::Knitting => "대바늘",
            ToolType::Crochet => "코바늘",
        }
    }
}

/// How the pattern instructions are expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    Narrative,
    Chart,
    #[default]
    Mixed,
}

impl PatternType {
    pub const ALL: [PatternType; 3] = [PatternType::Narrative, PatternType::Chart, PatternType::Mixed];

    pub fn label(&self) -> &'static str {
        match self {
            PatternType::Narrative => "서술형",
            PatternType::Chart => "차트형",
            PatternType::Mixed => "혼합형",
        }
    }
}

/// Listing visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishStatus {
    #[default]
    Public,
    Private,
}

impl PublishStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PublishStatus::Public => "공개",
            PublishStatus::Private => "비공개",
        }
    }
}

/// Garment construction direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionMethod {
    TopDown,
    BottomUp,
    Pieced,
    InTheRound,
}

impl ConstructionMethod {
    pub const ALL: [ConstructionMethod; 4] = [
        ConstructionMethod::TopDown,
        ConstructionMethod::BottomUp,
        ConstructionMethod::Pieced,
        ConstructionMethod::InTheRound,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ConstructionMethod::TopDown => "탑다운",
            ConstructionMethod::BottomUp => "바텀업",
            ConstructionMethod::Pieced => "조각잇기형",
            ConstructionMethod::InTheRound => "원통형",
        }
    }
}

/// Sleeve construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleeveType {
    Raglan,
    SetIn,
    Yoke,
    SaddleShoulder,
    DropShoulder,
    Vest,
}

impl SleeveType {
    pub const ALL: [SleeveType; 6] = [
        SleeveType::Raglan,
        SleeveType::SetIn,
        SleeveType::Yoke,
        SleeveType::SaddleShoulder,
        SleeveType::DropShoulder,
        SleeveType::Vest,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SleeveType::Raglan => "래글런형",
            SleeveType::SetIn => "셋인형",
            SleeveType::Yoke => "요크형",
            SleeveType::SaddleShoulder => "새들숄더형",
            SleeveType::DropShoulder => "드롭숄더형",
            SleeveType::Vest => "베스트형",
        }
    }
}

/// Neckline shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NecklineType {
    Round,
    VNeck,
    Square,
}

impl NecklineType {
    pub const ALL: [NecklineType; 3] = [NecklineType::Round, NecklineType::VNeck, NecklineType::Square];

    pub fn label(&self) -> &'static str {
        match self {
            NecklineType::Round => "라운드넥",
            NecklineType::VNeck => "브이넥",
            NecklineType::Square => "스퀘어넥",
        }
    }
}

/// Measurement values for one size bin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeDetail {
    pub size_range: SizeRange,
    pub measurements: HashMap<MeasurementItemId, f32>,
}

impl SizeDetail {
    pub fn empty(size_range: SizeRange) -> Self {
        Self {
            size_range,
            measurements: HashMap::new(),
        }
    }
}

/// A reusable pattern definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: Uuid,
    pub name: String,
    pub tool_type: ToolType,
    pub pattern_type: PatternType,
    pub publish_status: PublishStatus,
    pub thumbnail: String,
    /// Last modification date, "YYYY-MM-DD"
    pub last_modified: String,
    /// `[major, mid, minor]` category path, derived from the measurement rule
    pub category_ids: Vec<u32>,
    pub construction_methods: Vec<ConstructionMethod>,
    pub sleeve_type: Option<SleeveType>,
    pub neckline_type: Option<NecklineType>,
    /// Chart geometries attached to this template
    pub chart_type_ids: Vec<Uuid>,
    /// The rule governing which measurements this template requires.
    /// Saving a template without one is rejected by the store.
    pub measurement_rule_id: Option<Uuid>,
    /// One row per size bin; absent bins mean "not yet filled in"
    pub size_details: Vec<SizeDetail>,
}

impl Template {
    /// Create an empty template shell
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            tool_type: ToolType::default(),
            pattern_type: PatternType::default(),
            publish_status: PublishStatus::default(),
            thumbnail: String::new(),
            last_modified: String::new(),
            category_ids: Vec::new(),
            construction_methods: Vec::new(),
            sleeve_type: None,
            neckline_type: None,
            chart_type_ids: Vec::new(),
            measurement_rule_id: None,
            size_details: Vec::new(),
        }
    }

    /// Value of one measurement in one size bin, if present
    pub fn measurement(&self, size: SizeRange, item: MeasurementItemId) -> Option<f32> {
        self.size_details
            .iter()
            .find(|d| d.size_range == size)
            .and_then(|d| d.measurements.get(&item).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_labels() {
        assert_eq!(ToolType::Knitting.label(), "대바늘");
        assert_eq!(PatternType::Mixed.label(), "혼합형");
        assert_eq!(SleeveType::Raglan.label(), "래글런형");
        assert_eq!(NecklineType::Round.label(), "라운드넥");
        assert_eq!(ConstructionMethod::TopDown.label(), "탑다운");
    }

    #[test]
    fn test_measurement_lookup() {
        let mut template = Template::new("베이직 스웨터");
        let mut detail = SizeDetail::empty(SizeRange::S74_79);
        detail
            .measurements
            .insert(MeasurementItemId::ChestWidth, 45.0);
        template.size_details.push(detail);

        assert_eq!(
            template.measurement(SizeRange::S74_79, MeasurementItemId::ChestWidth),
            Some(45.0)
        );
        assert_eq!(
            template.measurement(SizeRange::S74_79, MeasurementItemId::NeckWidth),
            None
        );
        assert_eq!(
            template.measurement(SizeRange::S80_84, MeasurementItemId::ChestWidth),
            None
        );
    }
}
