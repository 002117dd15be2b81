//! Measurement rules
//!
//! A rule names the set of measurements required for one (category, sleeve type)
//! combination. The pair is unique across all rules and the rule name is always
//! derived from it, never taken from user input.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::category::Category;
use crate::measurement::MeasurementItemId;
use crate::template::SleeveType;

/// Required measurement set for a (category, sleeve type) combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRule {
    pub id: Uuid,
    pub category_id: u32,
    pub sleeve_type: Option<SleeveType>,
    /// Derived display name; recomputed on every store write
    pub name: String,
    pub items: Vec<MeasurementItemId>,
}

impl MeasurementRule {
    pub fn new(
        category_id: u32,
        sleeve_type: Option<SleeveType>,
        items: Vec<MeasurementItemId>,
    ) -> Self {
        let mut rule = Self {
            id: Uuid::new_v4(),
            category_id,
            sleeve_type,
            name: String::new(),
            items,
        };
        rule.name = rule.derived_name();
        rule
    }

    /// "{sleeve type} {category name}", or the bare category name
    pub fn derived_name(&self) -> String {
        let category_name = Category::find(self.category_id)
            .map(|c| c.name.to_string())
            .unwrap_or_default();

        match self.sleeve_type {
            Some(sleeve) => format!("{} {}", sleeve.label(), category_name),
            None => category_name,
        }
    }

    /// Whether this rule claims the given (category, sleeve type) pair
    pub fn matches(&self, category_id: u32, sleeve_type: Option<SleeveType>) -> bool {
        self.category_id == category_id && self.sleeve_type == sleeve_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_name_with_sleeve() {
        let rule = MeasurementRule::new(
            103,
            Some(SleeveType::Raglan),
            vec![MeasurementItemId::ShoulderWidth],
        );
        assert_eq!(rule.name, "래글런형 스웨터");
    }

    #[test]
    fn test_derived_name_without_sleeve() {
        let rule = MeasurementRule::new(301, None, vec![MeasurementItemId::HeadCircumference]);
        assert_eq!(rule.name, "비니");
    }

    #[test]
    fn test_matches_is_exact() {
        let rule = MeasurementRule::new(103, Some(SleeveType::Raglan), vec![]);
        assert!(rule.matches(103, Some(SleeveType::Raglan)));
        assert!(!rule.matches(103, Some(SleeveType::SetIn)));
        assert!(!rule.matches(103, None));
        assert!(!rule.matches(104, Some(SleeveType::Raglan)));
    }
}
