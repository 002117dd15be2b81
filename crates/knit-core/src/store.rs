//! In-memory admin store
//!
//! CRUD layer over measurement rules and templates. Referential integrity is
//! enforced here rather than in the UI: a rule cannot be deleted while templates
//! reference it, and a template cannot be saved without a valid rule reference.
//! The in-memory backing is an implementation detail; callers only see the CRUD
//! surface.

use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::category::Category;
use crate::rule::MeasurementRule;
use crate::template::{SleeveType, Template};

/// Store-level failures
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("측정 규칙을 찾을 수 없습니다: {0}")]
    RuleNotFound(Uuid),

    #[error("템플릿을 찾을 수 없습니다: {0}")]
    TemplateNotFound(Uuid),

    #[error("동일한 카테고리와 소매 유형의 규칙이 이미 존재합니다: {name}")]
    DuplicateRule { name: String },

    #[error("템플릿을 저장하려면 치수 규칙을 먼저 선택해야 합니다")]
    MissingRule,

    #[error("{rule} 규칙을 사용 중인 템플릿이 {}개 있습니다", .templates.len())]
    RuleInUse { rule: String, templates: Vec<String> },
}

/// In-memory store for rules and templates
#[derive(Debug, Clone, Default)]
pub struct AdminStore {
    rules: Vec<MeasurementRule>,
    templates: Vec<Template>,
}

impl AdminStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ============== Measurement Rules ==============

    /// All rules in insertion order
    pub fn rules(&self) -> &[MeasurementRule] {
        &self.rules
    }

    /// Get a rule by id
    pub fn rule(&self, id: Uuid) -> Option<&MeasurementRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// The unique rule claiming (category, sleeve type), if any.
    ///
    /// The sleeve match is exact: `None` only matches rules without a sleeve type.
    pub fn find_rule(
        &self,
        category_id: u32,
        sleeve_type: Option<SleeveType>,
    ) -> Option<&MeasurementRule> {
        self.rules
            .iter()
            .find(|r| r.matches(category_id, sleeve_type))
    }

    /// Whether a rule other than `exclude` already claims (category, sleeve type)
    pub fn is_duplicate_rule(
        &self,
        category_id: u32,
        sleeve_type: Option<SleeveType>,
        exclude: Option<Uuid>,
    ) -> bool {
        self.rules
            .iter()
            .any(|r| r.matches(category_id, sleeve_type) && Some(r.id) != exclude)
    }

    /// Insert a new rule. The name is recomputed from category and sleeve type.
    pub fn insert_rule(&mut self, mut rule: MeasurementRule) -> Result<Uuid, StoreError> {
        if self.is_duplicate_rule(rule.category_id, rule.sleeve_type, None) {
            return Err(StoreError::DuplicateRule {
                name: rule.derived_name(),
            });
        }

        rule.name = rule.derived_name();
        let id = rule.id;
        info!(rule = %rule.name, %id, "inserted measurement rule");
        self.rules.push(rule);
        Ok(id)
    }

    /// Replace an existing rule. Duplicate check excludes the rule itself.
    pub fn update_rule(&mut self, mut rule: MeasurementRule) -> Result<(), StoreError> {
        if self.is_duplicate_rule(rule.category_id, rule.sleeve_type, Some(rule.id)) {
            return Err(StoreError::DuplicateRule {
                name: rule.derived_name(),
            });
        }

        let slot = self
            .rules
            .iter_mut()
            .find(|r| r.id == rule.id)
            .ok_or(StoreError::RuleNotFound(rule.id))?;

        rule.name = rule.derived_name();
        info!(rule = %rule.name, id = %rule.id, "updated measurement rule");
        *slot = rule;
        Ok(())
    }

    /// Delete a rule. Refused while any template references it.
    pub fn remove_rule(&mut self, id: Uuid) -> Result<MeasurementRule, StoreError> {
        let rule = self.rule(id).ok_or(StoreError::RuleNotFound(id))?.clone();

        let referencing: Vec<String> = self
            .templates_referencing(id)
            .iter()
            .map(|t| t.name.clone())
            .collect();
        if !referencing.is_empty() {
            return Err(StoreError::RuleInUse {
                rule: rule.name,
                templates: referencing,
            });
        }

        self.rules.retain(|r| r.id != id);
        info!(rule = %rule.name, %id, "removed measurement rule");
        Ok(rule)
    }

    // ============== Templates ==============

    /// All templates in insertion order
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Get a template by id
    pub fn template(&self, id: Uuid) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Templates referencing a rule
    pub fn templates_referencing(&self, rule_id: Uuid) -> Vec<&Template> {
        self.templates
            .iter()
            .filter(|t| t.measurement_rule_id == Some(rule_id))
            .collect()
    }

    /// Insert a template. Requires a valid measurement rule reference; the
    /// category path is derived from the rule's category.
    pub fn insert_template(&mut self, mut template: Template) -> Result<Uuid, StoreError> {
        self.apply_rule_reference(&mut template)?;

        let id = template.id;
        info!(template = %template.name, %id, "inserted template");
        self.templates.push(template);
        Ok(id)
    }

    /// Replace an existing template, re-validating the rule reference.
    pub fn update_template(&mut self, mut template: Template) -> Result<(), StoreError> {
        self.apply_rule_reference(&mut template)?;

        let slot = self
            .templates
            .iter_mut()
            .find(|t| t.id == template.id)
            .ok_or(StoreError::TemplateNotFound(template.id))?;

        info!(template = %template.name, id = %template.id, "updated template");
        *slot = template;
        Ok(())
    }

    /// Delete a template
    pub fn remove_template(&mut self, id: Uuid) -> Result<Template, StoreError> {
        let idx = self
            .templates
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::TemplateNotFound(id))?;

        let template = self.templates.remove(idx);
        info!(template = %template.name, %id, "removed template");
        Ok(template)
    }

    fn apply_rule_reference(&self, template: &mut Template) -> Result<(), StoreError> {
        let rule_id = template.measurement_rule_id.ok_or(StoreError::MissingRule)?;
        let rule = self.rule(rule_id).ok_or(StoreError::RuleNotFound(rule_id))?;
        template.category_ids = Category::path_ids(rule.category_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::MeasurementItemId;

    fn raglan_rule() -> MeasurementRule {
        MeasurementRule::new(
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
        )
    }

    #[test]
    fn test_find_rule_exact_match() {
        let mut store = AdminStore::new();
        let id = store.insert_rule(raglan_rule()).unwrap();

        let found = store.find_rule(103, Some(SleeveType::Raglan)).unwrap();
        assert_eq!(found.id, id);

        assert!(store.find_rule(103, Some(SleeveType::SetIn)).is_none());
        assert!(store.find_rule(103, None).is_none());
        assert!(store.find_rule(104, Some(SleeveType::Raglan)).is_none());
    }

    #[test]
    fn test_find_rule_without_sleeve_matches_only_sleeveless() {
        let mut store = AdminStore::new();
        store.insert_rule(raglan_rule()).unwrap();
        let beanie = store
            .insert_rule(MeasurementRule::new(
                301,
                None,
                vec![MeasurementItemId::HeadCircumference],
            ))
            .unwrap();

        assert_eq!(store.find_rule(301, None).unwrap().id, beanie);
        assert!(store.find_rule(301, Some(SleeveType::Raglan)).is_none());
    }

    #[test]
    fn test_duplicate_rule_rejected() {
        let mut store = AdminStore::new();
        store.insert_rule(raglan_rule()).unwrap();

        let err = store.insert_rule(raglan_rule()).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateRule { .. }));
    }

    #[test]
    fn test_duplicate_check_excludes_self_on_update() {
        let mut store = AdminStore::new();
        let id = store.insert_rule(raglan_rule()).unwrap();

        // Re-saving the same rule unchanged is not a duplicate.
        let mut rule = store.rule(id).unwrap().clone();
        rule.items.push(MeasurementItemId::ArmholeLength);
        store.update_rule(rule).unwrap();

        assert!(store.is_duplicate_rule(103, Some(SleeveType::Raglan), None));
        assert!(!store.is_duplicate_rule(103, Some(SleeveType::Raglan), Some(id)));
    }

    #[test]
    fn test_duplicate_check_covers_both_absent_sleeves() {
        let mut store = AdminStore::new();
        store
            .insert_rule(MeasurementRule::new(
                301,
                None,
                vec![MeasurementItemId::HeadCircumference],
            ))
            .unwrap();

        assert!(store.is_duplicate_rule(301, None, None));
        let err = store
            .insert_rule(MeasurementRule::new(
                301,
                None,
                vec![MeasurementItemId::HeadCircumference],
            ))
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateRule { .. }));
    }

    #[test]
    fn test_rule_name_recomputed_on_write() {
        let mut store = AdminStore::new();
        let mut rule = raglan_rule();
        rule.name = "손으로 바꾼 이름".into();
        let id = store.insert_rule(rule).unwrap();

        assert_eq!(store.rule(id).unwrap().name, "래글런형 스웨터");
    }

    #[test]
    fn test_template_requires_rule() {
        let mut store = AdminStore::new();

        let template = Template::new("베이직 스웨터");
        assert_eq!(store.insert_template(template), Err(StoreError::MissingRule));

        let mut template = Template::new("베이직 스웨터");
        template.measurement_rule_id = Some(Uuid::new_v4());
        assert!(matches!(
            store.insert_template(template),
            Err(StoreError::RuleNotFound(_))
        ));
    }

    #[test]
    fn test_template_category_path_derived_from_rule() {
        let mut store = AdminStore::new();
        let rule_id = store.insert_rule(raglan_rule()).unwrap();

        let mut template = Template::new("베이직 스웨터");
        template.measurement_rule_id = Some(rule_id);
        template.category_ids = vec![999]; // overwritten on save
        let id = store.insert_template(template).unwrap();

        assert_eq!(store.template(id).unwrap().category_ids, vec![1, 10, 103]);
    }

    #[test]
    fn test_rule_in_use_blocks_delete() {
        let mut store = AdminStore::new();
        let rule_id = store.insert_rule(raglan_rule()).unwrap();

        let mut template = Template::new("베이직 스웨터");
        template.measurement_rule_id = Some(rule_id);
        store.insert_template(template).unwrap();

        let err = store.remove_rule(rule_id).unwrap_err();
        match err {
            StoreError::RuleInUse { rule, templates } => {
                assert_eq!(rule, "래글런형 스웨터");
                assert_eq!(templates, vec!["베이직 스웨터".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        // Removing the template unblocks the rule.
        let template_id = store.templates()[0].id;
        store.remove_template(template_id).unwrap();
        store.remove_rule(rule_id).unwrap();
        assert!(store.rules().is_empty());
    }

    #[test]
    fn test_end_to_end_rule_then_template_then_duplicate() {
        let mut store = AdminStore::new();

        // Create the raglan sweater rule with six items.
        let rule_id = store.insert_rule(raglan_rule()).unwrap();
        let rule = store.rule(rule_id).unwrap();
        assert_eq!(rule.name, "래글런형 스웨터");
        assert_eq!(rule.items.len(), 6);

        // A template referencing it picks up the category path.
        let mut template = Template::new("베이직 스웨터");
        template.measurement_rule_id = Some(rule_id);
        let template_id = store.insert_template(template).unwrap();
        assert_eq!(
            store.template(template_id).unwrap().category_ids,
            vec![1, 10, 103]
        );

        // A second rule for the same (category, sleeve) pair is rejected.
        let err = store.insert_rule(raglan_rule()).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateRule { .. }));
    }
}
