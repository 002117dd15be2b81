//! Seed data for a fresh store
//!
//! Mirrors the hand-maintained sample set the tool ships with: two measurement
//! rules and two templates, one of which carries a fully filled size table.

use std::collections::HashMap;

use crate::measurement::MeasurementItemId;
use crate::rule::MeasurementRule;
use crate::size::SizeRange;
use crate::store::AdminStore;
use crate::template::{
    ConstructionMethod, NecklineType, PatternType, PublishStatus, SizeDetail, SleeveType, Template,
    ToolType,
};

/// Per-item values across all 18 size bins, in `SizeRange::ALL` order
const SWEATER_TABLE: &[(MeasurementItemId, [f32; 18])] = &[
    (
        MeasurementItemId::ShoulderSlope,
        [
            0.6, 0.9, 1.2, 1.5, 1.8, 2.1, 2.4, 2.4, 2.4, 2.4, 2.4, 2.4, 2.4, 2.4, 2.4, 2.4, 2.0,
            2.0,
        ],
    ),
    (
        MeasurementItemId::BackNeckDepth,
        [
            1.2, 1.5, 1.8, 1.8, 2.1, 2.1, 2.4, 2.4, 2.4, 2.4, 2.4, 2.4, 2.4, 2.4, 2.4, 2.4, 2.0,
            2.0,
        ],
    ),
    (
        MeasurementItemId::FrontNeckDepth,
        [
            1.8, 1.8, 1.8, 2.1, 2.1, 2.1, 2.4, 2.4, 2.4, 2.4, 2.4, 2.4, 2.4, 2.4, 2.4, 2.4, 2.0,
            2.0,
        ],
    ),
    (
        MeasurementItemId::ArmholeLength,
        [
            13.0, 14.5, 15.5, 16.5, 17.5, 18.5, 19.5, 20.5, 22.0, 23.0, 25.0, 26.0, 27.0, 28.0,
            30.0, 30.0, 2.0, 2.0,
        ],
    ),
    (
        MeasurementItemId::SideLength,
        [
            22.0, 23.0, 23.5, 24.0, 24.5, 25.0, 26.0, 23.6, 27.0, 28.0, 29.0, 30.0, 31.0, 32.0,
            33.1, 33.1, 5.0, 5.0,
        ],
    ),
    (
        MeasurementItemId::NeckWidth,
        [
            15.0, 15.5, 16.0, 16.0, 16.5, 17.0, 17.0, 16.0, 18.0, 19.0, 19.0, 20.0, 20.0, 20.0,
            21.0, 21.7, 2.0, 2.0,
        ],
    ),
    (
        MeasurementItemId::ShoulderWidth,
        [
            30.0, 32.0, 34.0, 36.0, 38.0, 40.0, 42.0, 42.0, 45.0, 47.0, 50.0, 52.0, 55.0, 57.0,
            60.0, 62.0, 3.0, 3.0,
        ],
    ),
    (
        MeasurementItemId::ChestWidth,
        [
            32.0, 34.0, 36.0, 38.0, 40.0, 42.0, 45.0, 52.0, 50.0, 54.0, 57.0, 60.0, 63.0, 65.0,
            68.0, 68.0, 3.0, 3.0,
        ],
    ),
    (
        MeasurementItemId::SleeveLength,
        [
            40.0, 45.0, 50.0, 55.0, 57.0, 59.0, 60.0, 61.0, 61.5, 62.0, 62.5, 63.0, 63.0, 63.5,
            63.5, 63.5, 5.0, 5.0,
        ],
    ),
    (
        MeasurementItemId::SleeveWidth,
        [
            12.0, 13.0, 14.0, 15.0, 15.0, 15.5, 16.0, 16.0, 16.5, 17.0, 18.0, 19.0, 19.0, 20.0,
            20.7, 20.7, 3.0, 3.0,
        ],
    ),
    (
        MeasurementItemId::WristWidth,
        [
            6.0, 6.0, 6.0, 6.0, 7.0, 7.0, 8.0, 9.5, 9.5, 10.0, 10.0, 10.0, 10.5, 10.5, 11.0, 11.0,
            2.0, 2.0,
        ],
    ),
    (
        MeasurementItemId::SleeveRibbingLength,
        [
            3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 4.0, 4.0, 4.0, 4.0, 4.0, 5.0, 6.0, 6.0, 3.0,
            3.0,
        ],
    ),
    (
        MeasurementItemId::NeckRibbingLength,
        [
            1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 2.0, 2.0, 2.0, 2.5, 2.5, 3.0, 3.2, 3.2, 2.0,
            2.0,
        ],
    ),
    (
        MeasurementItemId::HemRibbingLength,
        [
            3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 4.0, 5.0, 5.0, 5.0, 5.0, 6.0, 6.0, 6.5, 6.5, 2.0,
            2.0,
        ],
    ),
];

/// Size table of the sample sweater template, one row per size bin
pub fn sweater_size_details() -> Vec<SizeDetail> {
    SizeRange::ALL
        .iter()
        .enumerate()
        .map(|(col, &size_range)| {
            let mut measurements = HashMap::new();
            for (item, values) in SWEATER_TABLE {
                measurements.insert(*item, values[col]);
            }
            SizeDetail {
                size_range,
                measurements,
            }
        })
        .collect()
}

/// A store pre-populated with the sample rules and templates
pub fn sample_store() -> AdminStore {
    let mut store = AdminStore::new();

    let raglan = MeasurementRule::new(
        103,
        Some(SleeveType::Raglan),
        vec![
            MeasurementItemId::ShoulderWidth,
            MeasurementItemId::ChestWidth,
            MeasurementItemId::SleeveLength,
            MeasurementItemId::SleeveWidth,
            MeasurementItemId::WristWidth,
            MeasurementItemId::NeckWidth,
        ],
    );
    let raglan_id = raglan.id;

    let set_in = MeasurementRule::new(
        103,
        Some(SleeveType::SetIn),
        vec![
            MeasurementItemId::ShoulderWidth,
            MeasurementItemId::ChestWidth,
            MeasurementItemId::SleeveLength,
            MeasurementItemId::SleeveWidth,
            MeasurementItemId::ArmholeLength,
        ],
    );

    let beanie_rule = MeasurementRule::new(301, None, vec![MeasurementItemId::HeadCircumference]);
    let beanie_rule_id = beanie_rule.id;

    // Seeding is infallible: the rules are distinct by construction.
    for rule in [raglan, set_in, beanie_rule] {
        store.insert_rule(rule).expect("sample rules are unique");
    }

    let mut sweater = Template::new("베이직 스웨터");
    sweater.tool_type = ToolType::Knitting;
    sweater.pattern_type = PatternType::Mixed;
    sweater.publish_status = PublishStatus::Public;
    sweater.thumbnail = "/thumbnails/sweater.jpg".into();
    sweater.last_modified = "2024-04-10".into();
    sweater.construction_methods = vec![ConstructionMethod::TopDown];
    sweater.sleeve_type = Some(SleeveType::Raglan);
    sweater.neckline_type = Some(NecklineType::Round);
    sweater.measurement_rule_id = Some(raglan_id);
    sweater.size_details = sweater_size_details();

    let mut beanie = Template::new("비니");
    beanie.tool_type = ToolType::Crochet;
    beanie.pattern_type = PatternType::Narrative;
    beanie.publish_status = PublishStatus::Public;
    beanie.thumbnail = "/thumbnails/beanie.jpg".into();
    beanie.last_modified = "2024-04-09".into();
    beanie.measurement_rule_id = Some(beanie_rule_id);

    for template in [sweater, beanie] {
        store
            .insert_template(template)
            .expect("sample templates reference seeded rules");
    }

    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::BASE_SIZE;

    #[test]
    fn test_sample_store_contents() {
        let store = sample_store();
        assert_eq!(store.rules().len(), 3);
        assert_eq!(store.templates().len(), 2);

        let sweater = &store.templates()[0];
        assert_eq!(sweater.name, "베이직 스웨터");
        assert_eq!(sweater.category_ids, vec![1, 10, 103]);
        assert_eq!(sweater.size_details.len(), 18);
    }

    #[test]
    fn test_sweater_table_base_values() {
        let details = sweater_size_details();
        let base = details
            .iter()
            .find(|d| d.size_range == BASE_SIZE)
            .unwrap();
        assert_eq!(base.measurements[&MeasurementItemId::ChestWidth], 45.0);
        assert_eq!(base.measurements[&MeasurementItemId::SleeveLength], 60.0);
    }
}
