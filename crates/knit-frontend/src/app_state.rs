//! Shared application state

use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use knit_chart::{ChartType, ChartTypeStore};
use knit_core::{AdminStore, MeasurementRule, SizeDetail, Template, samples};

use crate::panels::AdminTab;
use crate::state::{ChartsRoute, RulesRoute, TemplatesRoute};

/// Shared application state type
pub type SharedAppState = Arc<Mutex<AppState>>;

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// A transient notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    /// `egui` time after which the toast disappears
    pub expires_at: f64,
}

/// Seconds a toast stays visible
const TOAST_SECONDS: f64 = 4.0;

/// An entity delete awaiting user confirmation
#[derive(Debug, Clone)]
pub enum PendingDelete {
    Rule(Uuid, String),
    Template(Uuid, String),
    Chart(Uuid, String),
}

impl PendingDelete {
    pub fn label(&self) -> &str {
        match self {
            PendingDelete::Rule(_, name)
            | PendingDelete::Template(_, name)
            | PendingDelete::Chart(_, name) => name,
        }
    }
}

/// A refused rule deletion, shown as a blocking dialog
#[derive(Debug, Clone)]
pub struct RuleConflict {
    pub rule: String,
    pub templates: Vec<String>,
}

/// Deferred mutations queued from inside panel UI closures and drained once
/// per frame
#[derive(Debug, Clone)]
pub enum AppAction {
    SaveRule {
        rule: MeasurementRule,
        is_edit: bool,
        create_template: bool,
    },
    DeleteRule(Uuid),
    SaveTemplate {
        template: Template,
        is_edit: bool,
    },
    DeleteTemplate(Uuid),
    SaveSizeDetails {
        template_id: Uuid,
        details: Vec<SizeDetail>,
    },
    SaveChart {
        chart: ChartType,
        is_edit: bool,
    },
    DeleteChart(Uuid),
}

/// Application state
pub struct AppState {
    pub store: AdminStore,
    pub charts: ChartTypeStore,

    pub rules_route: RulesRoute,
    pub templates_route: TemplatesRoute,
    pub charts_route: ChartsRoute,

    /// Tab the dock should focus on the next frame
    pub focus_tab: Option<AdminTab>,
    pub pending_delete: Option<PendingDelete>,
    pub rule_conflict: Option<RuleConflict>,
    pub toasts: Vec<Toast>,

    pending_actions: Vec<AppAction>,
}

impl AppState {
    /// Fresh state seeded with the sample data set
    pub fn new() -> Self {
        Self {
            store: samples::sample_store(),
            charts: ChartTypeStore::with_samples(),
            rules_route: RulesRoute::default(),
            templates_route: TemplatesRoute::default(),
            charts_route: ChartsRoute::default(),
            focus_tab: None,
            pending_delete: None,
            rule_conflict: None,
            toasts: Vec::new(),
            pending_actions: Vec::new(),
        }
    }

    /// Queue an action for processing at the end of the frame
    pub fn queue_action(&mut self, action: AppAction) {
        self.pending_actions.push(action);
    }

    /// Take all queued actions
    pub fn take_actions(&mut self) -> Vec<AppAction> {
        std::mem::take(&mut self.pending_actions)
    }

    /// Show a toast for a few seconds
    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>, now: f64) {
        self.toasts.push(Toast {
            message: message.into(),
            kind,
            expires_at: now + TOAST_SECONDS,
        });
    }

    /// Drop expired toasts
    pub fn prune_toasts(&mut self, now: f64) {
        self.toasts.retain(|t| t.expires_at > now);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a new shared application state
pub fn create_shared_state() -> SharedAppState {
    Arc::new(Mutex::new(AppState::new()))
}
