//! Measurement catalog
//!
//! The closed set of body measurements a rule can require and a chart edge can be
//! bound to. Each entry carries an explicit scaling axis so downstream grading
//! never has to guess from display names.

use serde::{Deserialize, Serialize};

/// Identifier for a measurement catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementItemId {
    ShoulderSlope,
    BackNeckDepth,
    FrontNeckDepth,
    ArmholeLength,
    SideLength,
    NeckWidth,
    ShoulderWidth,
    ChestWidth,
    SleeveLength,
    SleeveWidth,
    WristWidth,
    SleeveRibbingLength,
    NeckRibbingLength,
    HemRibbingLength,
    HeadCircumference,
}

impl MeasurementItemId {
    /// Every catalog id, in display order
    pub const ALL: [MeasurementItemId; 15] = [
        MeasurementItemId::ShoulderSlope,
        MeasurementItemId::BackNeckDepth,
        MeasurementItemId::FrontNeckDepth,
        MeasurementItemId::ArmholeLength,
        MeasurementItemId::SideLength,
        MeasurementItemId::NeckWidth,
        MeasurementItemId::ShoulderWidth,
        MeasurementItemId::ChestWidth,
        MeasurementItemId::SleeveLength,
        MeasurementItemId::SleeveWidth,
        MeasurementItemId::WristWidth,
        MeasurementItemId::SleeveRibbingLength,
        MeasurementItemId::NeckRibbingLength,
        MeasurementItemId::HemRibbingLength,
        MeasurementItemId::HeadCircumference,
    ];

    /// Korean display name
    pub fn label(&self) -> &'static str {
        match self {
            MeasurementItemId::ShoulderSlope => "어깨처짐",
            MeasurementItemId::BackNeckDepth => "뒷목깊이",
            MeasurementItemId::FrontNeckDepth => "앞목깊이",
            MeasurementItemId::ArmholeLength => "진동길이",
            MeasurementItemId::SideLength => "옆길이",
            MeasurementItemId::NeckWidth => "목너비",
            MeasurementItemId::ShoulderWidth => "어깨너비",
            MeasurementItemId::ChestWidth => "가슴너비",
            MeasurementItemId::SleeveLength => "소매 길이",
            MeasurementItemId::SleeveWidth => "소매 너비",
            MeasurementItemId::WristWidth => "손목 너비",
            MeasurementItemId::SleeveRibbingLength => "소매 고무단 길이",
            MeasurementItemId::NeckRibbingLength => "목 고무단 길이",
            MeasurementItemId::HemRibbingLength => "아랫단 고무단 길이",
            MeasurementItemId::HeadCircumference => "머리둘레",
        }
    }
}

/// Axis a measurement scales along when grading chart geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleAxis {
    /// Horizontal only (widths, neck openings)
    X,
    /// Vertical only (lengths, depths)
    Y,
    /// Circumferences and anything without a dominant direction
    #[default]
    Both,
}

/// A measurement catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeasurementItem {
    pub id: MeasurementItemId,
    /// Catalog group used for form tabs ("상의", "소품류", ...)
    pub category: &'static str,
    /// Sub-group within the category ("몸판", "소매", ...)
    pub section: &'static str,
    pub unit: &'static str,
    pub axis: ScaleAxis,
    pub description: &'static str,
}

impl MeasurementItem {
    /// The full static catalog, in display order
    pub fn catalog() -> &'static [MeasurementItem] {
        use MeasurementItemId::*;
        use ScaleAxis::*;

        const CATALOG: &[MeasurementItem] = &[
            MeasurementItem {
                id: ShoulderSlope,
                category: "상의",
                section: "몸판",
                unit: "cm",
                axis: Y,
                description: "어깨 끝점에서 어깨선까지 내려오는 높이",
            },
            MeasurementItem {
                id: BackNeckDepth,
                category: "상의",
                section: "몸판",
                unit: "cm",
                axis: Y,
                description: "뒷목점에서 네크라인 최저점까지의 깊이",
            },
            MeasurementItem {
                id: FrontNeckDepth,
                category: "상의",
                section: "몸판",
                unit: "cm",
                axis: Y,
                description: "앞목점에서 네크라인 최저점까지의 깊이",
            },
            MeasurementItem {
                id: ArmholeLength,
                category: "상의",
                section: "몸판",
                unit: "cm",
                axis: Y,
                description: "어깨선에서 겨드랑이까지의 길이",
            },
            MeasurementItem {
                id: SideLength,
                category: "상의",
                section: "몸판",
                unit: "cm",
                axis: Y,
                description: "겨드랑이에서 밑단까지의 길이",
            },
            MeasurementItem {
                id: NeckWidth,
                category: "상의",
                section: "몸판",
                unit: "cm",
                axis: X,
                description: "네크라인의 가로 너비",
            },
            MeasurementItem {
                id: ShoulderWidth,
                category: "상의",
                section: "몸판",
                unit: "cm",
                axis: X,
                description: "어깨 끝점 사이의 너비",
            },
            MeasurementItem {
                id: ChestWidth,
                category: "상의",
                section: "몸판",
                unit: "cm",
                axis: X,
                description: "가슴의 가로 너비",
            },
            MeasurementItem {
                id: SleeveLength,
                category: "상의",
                section: "소매",
                unit: "cm",
                axis: Y,
                description: "어깨 끝점에서 소매 끝까지의 길이",
            },
            MeasurementItem {
                id: SleeveWidth,
                category: "상의",
                section: "소매",
                unit: "cm",
                axis: X,
                description: "소매 상단의 너비",
            },
            MeasurementItem {
                id: WristWidth,
                category: "상의",
                section: "소매",
                unit: "cm",
                axis: X,
                description: "소매 끝단의 너비",
            },
            MeasurementItem {
                id: SleeveRibbingLength,
                category: "상의",
                section: "고무단",
                unit: "cm",
                axis: Y,
                description: "소매 고무단의 길이",
            },
            MeasurementItem {
                id: NeckRibbingLength,
                category: "상의",
                section: "고무단",
                unit: "cm",
                axis: Y,
                description: "목 고무단의 길이",
            },
            MeasurementItem {
                id: HemRibbingLength,
                category: "상의",
                section: "고무단",
                unit: "cm",
                axis: Y,
                description: "아랫단 고무단의 길이",
            },
            MeasurementItem {
                id: HeadCircumference,
                category: "소품류",
                section: "기본",
                unit: "cm",
                axis: Both,
                description: "머리의 둘레",
            },
        ];

        CATALOG
    }

    /// Look up a catalog entry by id
    pub fn find(id: MeasurementItemId) -> &'static MeasurementItem {
        // Every id has exactly one catalog row.
        MeasurementItem::catalog()
            .iter()
            .find(|item| item.id == id)
            .expect("catalog covers every MeasurementItemId")
    }

    /// Catalog categories in display order, deduplicated
    pub fn categories() -> Vec<&'static str> {
        let mut out: Vec<&'static str> = Vec::new();
        for item in MeasurementItem::catalog() {
            if !out.contains(&item.category) {
                out.push(item.category);
            }
        }
        out
    }

    /// Sections of a category in display order, deduplicated
    pub fn sections(category: &str) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = Vec::new();
        for item in MeasurementItem::catalog() {
            if item.category == category && !out.contains(&item.section) {
                out.push(item.section);
            }
        }
        out
    }

    /// Items of one (category, section) group in catalog order
    pub fn in_section(category: &str, section: &str) -> Vec<&'static MeasurementItem> {
        MeasurementItem::catalog()
            .iter()
            .filter(|item| item.category == category && item.section == section)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_all_ids() {
        for id in MeasurementItemId::ALL {
            assert_eq!(MeasurementItem::find(id).id, id);
        }
        assert_eq!(MeasurementItem::catalog().len(), MeasurementItemId::ALL.len());
    }

    #[test]
    fn test_axis_assignments() {
        assert_eq!(MeasurementItem::find(MeasurementItemId::NeckWidth).axis, ScaleAxis::X);
        assert_eq!(MeasurementItem::find(MeasurementItemId::SleeveLength).axis, ScaleAxis::Y);
        assert_eq!(
            MeasurementItem::find(MeasurementItemId::HeadCircumference).axis,
            ScaleAxis::Both
        );
    }

    #[test]
    fn test_groupings() {
        let categories = MeasurementItem::categories();
        assert_eq!(categories, vec!["상의", "소품류"]);

        let sections = MeasurementItem::sections("상의");
        assert_eq!(sections, vec!["몸판", "소매", "고무단"]);

        let sleeve = MeasurementItem::in_section("상의", "소매");
        assert_eq!(sleeve.len(), 3);
        assert!(sleeve.iter().all(|i| i.section == "소매"));
    }

    #[test]
    fn test_labels() {
        assert_eq!(MeasurementItemId::ShoulderWidth.label(), "어깨너비");
        assert_eq!(MeasurementItemId::HemRibbingLength.label(), "아랫단 고무단 길이");
    }
}
