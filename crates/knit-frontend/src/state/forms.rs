//! Rule and template form state

use uuid::Uuid;

use knit_core::{
    Category, ConstructionMethod, MeasurementItemId, MeasurementRule, NecklineType, PatternType,
    PublishStatus, SleeveType, Template, ToolType,
};

/// Measurement rule form state
#[derive(Debug, Clone)]
pub struct RuleFormState {
    pub rule_id: Option<Uuid>,
    /// Cascading category selection, major to minor
    pub level1: Option<u32>,
    pub level2: Option<u32>,
    pub level3: Option<u32>,
    pub requires_sleeve: bool,
    pub sleeve_type: Option<SleeveType>,
    pub items: Vec<MeasurementItemId>,
    /// Catalog category tab currently shown
    pub active_tab: String,
    /// Set when submit hit the uniqueness constraint
    pub duplicate_error: bool,
    /// Set when submit was attempted with no items selected
    pub items_error: bool,
}

impl Default for RuleFormState {
    fn default() -> Self {
        Self {
            rule_id: None,
            level1: None,
            level2: None,
            level3: None,
            requires_sleeve: false,
            sleeve_type: None,
            items: Vec::new(),
            active_tab: "상의".to_string(),
            duplicate_error: false,
            items_error: false,
        }
    }
}

impl RuleFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the form from an existing rule
    pub fn for_rule(rule: &MeasurementRule) -> Self {
        let ancestors = Category::ancestors(rule.category_id);
        Self {
            rule_id: Some(rule.id),
            level1: ancestors.first().map(|c| c.id),
            level2: ancestors.get(1).map(|c| c.id),
            level3: Some(rule.category_id),
            requires_sleeve: rule.sleeve_type.is_some(),
            sleeve_type: rule.sleeve_type,
            items: rule.items.clone(),
            ..Self::default()
        }
    }

    /// Sleeve type as it will be stored (absent unless required)
    pub fn effective_sleeve(&self) -> Option<SleeveType> {
        if self.requires_sleeve {
            self.sleeve_type
        } else {
            None
        }
    }

    /// Live preview of the derived rule name
    pub fn derived_name(&self) -> String {
        let Some(category_id) = self.level3 else {
            return String::new();
        };
        let category_name = Category::find(category_id)
            .map(|c| c.name.to_string())
            .unwrap_or_default();
        match self.effective_sleeve() {
            Some(sleeve) => format!("{} {}", sleeve.label(), category_name),
            None => category_name,
        }
    }

    /// Whether the form can be submitted at all
    pub fn is_submittable(&self) -> bool {
        self.level3.is_some() && (!self.requires_sleeve || self.sleeve_type.is_some())
    }

    pub fn toggle_item(&mut self, item: MeasurementItemId, selected: bool) {
        if selected {
            if !self.items.contains(&item) {
                self.items.push(item);
            }
        } else {
            self.items.retain(|&i| i != item);
        }
        self.items_error = false;
    }

    /// Build the rule this form describes
    pub fn to_rule(&self) -> Option<MeasurementRule> {
        let category_id = self.level3?;
        let mut rule =
            MeasurementRule::new(category_id, self.effective_sleeve(), self.items.clone());
        if let Some(id) = self.rule_id {
            rule.id = id;
        }
        Some(rule)
    }
}

/// Template form state
#[derive(Debug, Clone)]
pub struct TemplateFormState {
    pub template_id: Option<Uuid>,
    pub name: String,
    pub tool_type: ToolType,
    pub pattern_type: PatternType,
    pub publish_status: PublishStatus,
    pub construction_methods: Vec<ConstructionMethod>,
    pub neckline_type: Option<NecklineType>,
    /// The rule reference gating submission
    pub measurement_rule_id: Option<Uuid>,
    pub chart_type_ids: Vec<Uuid>,
}

impl Default for TemplateFormState {
    fn default() -> Self {
        Self {
            template_id: None,
            name: String::new(),
            tool_type: ToolType::default(),
            pattern_type: PatternType::default(),
            publish_status: PublishStatus::default(),
            construction_methods: Vec::new(),
            neckline_type: None,
            measurement_rule_id: None,
            chart_type_ids: Vec::new(),
        }
    }
}

impl TemplateFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A form pre-bound to a rule ("save and create template" from the rule form)
    pub fn for_rule(rule_id: Uuid) -> Self {
        Self {
            measurement_rule_id: Some(rule_id),
            ..Self::default()
        }
    }

    /// Pre-fill from an existing template
    pub fn for_template(template: &Template) -> Self {
        Self {
            template_id: Some(template.id),
            name: template.name.clone(),
            tool_type: template.tool_type,
            pattern_type: template.pattern_type,
            publish_status: template.publish_status,
            construction_methods: template.construction_methods.clone(),
            neckline_type: template.neckline_type,
            measurement_rule_id: template.measurement_rule_id,
            chart_type_ids: template.chart_type_ids.clone(),
        }
    }

    pub fn toggle_construction(&mut self, method: ConstructionMethod, selected: bool) {
        if selected {
            if !self.construction_methods.contains(&method) {
                self.construction_methods.push(method);
            }
        } else {
            self.construction_methods.retain(|&m| m != method);
        }
    }

    pub fn toggle_chart(&mut self, chart_id: Uuid, selected: bool) {
        if selected {
            if !self.chart_type_ids.contains(&chart_id) {
                self.chart_type_ids.push(chart_id);
            }
        } else {
            self.chart_type_ids.retain(|&c| c != chart_id);
        }
    }

    /// Build the template this form describes. The sleeve type and category
    /// path follow the referenced rule; existing size details are carried over
    /// by the caller when editing.
    pub fn to_template(&self, rule: &MeasurementRule) -> Template {
        let mut template = Template::new(if self.name.trim().is_empty() {
            "새 템플릿".to_string()
        } else {
            self.name.trim().to_string()
        });
        if let Some(id) = self.template_id {
            template.id = id;
        }
        template.tool_type = self.tool_type;
        template.pattern_type = self.pattern_type;
        template.publish_status = self.publish_status;
        template.construction_methods = self.construction_methods.clone();
        template.sleeve_type = rule.sleeve_type;
        template.neckline_type = self.neckline_type;
        template.chart_type_ids = self.chart_type_ids.clone();
        template.measurement_rule_id = Some(rule.id);
        template
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_form_derived_name_tracks_selection() {
        let mut form = RuleFormState::new();
        assert_eq!(form.derived_name(), "");

        form.level3 = Some(103);
        assert_eq!(form.derived_name(), "스웨터");

        form.requires_sleeve = true;
        form.sleeve_type = Some(SleeveType::Raglan);
        assert_eq!(form.derived_name(), "래글런형 스웨터");

        // Unchecking the sleeve requirement drops it from the name even if a
        // sleeve value is still selected underneath.
        form.requires_sleeve = false;
        assert_eq!(form.derived_name(), "스웨터");
    }

    #[test]
    fn test_rule_form_round_trip() {
        let rule = MeasurementRule::new(
            103,
            Some(SleeveType::SetIn),
            vec![MeasurementItemId::ChestWidth, MeasurementItemId::SleeveWidth],
        );
        let form = RuleFormState::for_rule(&rule);
        assert_eq!(form.level1, Some(1));
        assert_eq!(form.level2, Some(10));
        assert_eq!(form.level3, Some(103));
        assert!(form.requires_sleeve);

        let rebuilt = form.to_rule().unwrap();
        assert_eq!(rebuilt.id, rule.id);
        assert_eq!(rebuilt.items, rule.items);
        assert_eq!(rebuilt.name, "셋인형 스웨터");
    }

    #[test]
    fn test_rule_form_submittability() {
        let mut form = RuleFormState::new();
        assert!(!form.is_submittable());
        form.level3 = Some(103);
        assert!(form.is_submittable());
        form.requires_sleeve = true;
        assert!(!form.is_submittable());
        form.sleeve_type = Some(SleeveType::Raglan);
        assert!(form.is_submittable());
    }

    #[test]
    fn test_toggle_item_dedups() {
        let mut form = RuleFormState::new();
        form.toggle_item(MeasurementItemId::ChestWidth, true);
        form.toggle_item(MeasurementItemId::ChestWidth, true);
        assert_eq!(form.items.len(), 1);
        form.toggle_item(MeasurementItemId::ChestWidth, false);
        assert!(form.items.is_empty());
    }

    #[test]
    fn test_template_form_takes_sleeve_from_rule() {
        let rule = MeasurementRule::new(103, Some(SleeveType::Raglan), vec![]);
        let mut form = TemplateFormState::new();
        form.name = "베이직 스웨터".into();
        form.measurement_rule_id = Some(rule.id);

        let template = form.to_template(&rule);
        assert_eq!(template.sleeve_type, Some(SleeveType::Raglan));
        assert_eq!(template.measurement_rule_id, Some(rule.id));
        assert_eq!(template.name, "베이직 스웨터");
    }
}
