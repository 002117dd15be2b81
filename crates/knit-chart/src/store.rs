//! Chart type records and their store
//!
//! A chart type is the persisted output of the geometry editor: a named outline
//! plus optional construction metadata. Templates reference chart types by id.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::outline::ChartOutline;

/// Chart store failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChartStoreError {
    #[error("차트 유형을 찾을 수 없습니다: {0}")]
    NotFound(Uuid),
}

/// A persisted chart geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartType {
    pub id: Uuid,
    pub name: String,
    pub outline: ChartOutline,
    /// Armhole depth in cm, set for sleeve charts
    pub armhole_depth: Option<f32>,
}

impl ChartType {
    pub fn new(name: impl Into<String>, outline: ChartOutline) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            outline,
            armhole_depth: None,
        }
    }
}

/// In-memory store of chart types
#[derive(Debug, Clone, Default)]
pub struct ChartTypeStore {
    charts: Vec<ChartType>,
}

impl ChartTypeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the sample chart names
    pub fn with_samples() -> Self {
        let mut store = Self::new();
        for name in ["앞 몸판", "뒤 몸판", "소매", "카라", "포켓", "후드"] {
            store.insert(ChartType::new(name, ChartOutline::new()));
        }
        store
    }

    pub fn list(&self) -> &[ChartType] {
        &self.charts
    }

    pub fn get(&self, id: Uuid) -> Option<&ChartType> {
        self.charts.iter().find(|c| c.id == id)
    }

    pub fn insert(&mut self, chart: ChartType) -> Uuid {
        let id = chart.id;
        info!(chart = %chart.name, %id, "inserted chart type");
        self.charts.push(chart);
        id
    }

    pub fn update(&mut self, chart: ChartType) -> Result<(), ChartStoreError> {
        let slot = self
            .charts
            .iter_mut()
            .find(|c| c.id == chart.id)
            .ok_or(ChartStoreError::NotFound(chart.id))?;
        info!(chart = %chart.name, id = %chart.id, "updated chart type");
        *slot = chart;
        Ok(())
    }

    pub fn remove(&mut self, id: Uuid) -> Result<ChartType, ChartStoreError> {
        let idx = self
            .charts
            .iter()
            .position(|c| c.id == id)
            .ok_or(ChartStoreError::NotFound(id))?;
        let chart = self.charts.remove(idx);
        info!(chart = %chart.name, %id, "removed chart type");
        Ok(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_crud_round_trip() {
        let mut store = ChartTypeStore::new();

        let mut outline = ChartOutline::new();
        outline.add_point(Vec2::new(0.0, 0.0));
        outline.add_point(Vec2::new(500.0, 0.0));

        let id = store.insert(ChartType::new("앞 몸판", outline));
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.get(id).unwrap().name, "앞 몸판");

        let mut updated = store.get(id).unwrap().clone();
        updated.name = "뒤 몸판".into();
        updated.armhole_depth = Some(19.5);
        store.update(updated).unwrap();
        assert_eq!(store.get(id).unwrap().name, "뒤 몸판");
        assert_eq!(store.get(id).unwrap().armhole_depth, Some(19.5));

        store.remove(id).unwrap();
        assert!(store.get(id).is_none());
        assert_eq!(store.remove(id), Err(ChartStoreError::NotFound(id)));
    }

    #[test]
    fn test_samples() {
        let store = ChartTypeStore::with_samples();
        assert_eq!(store.list().len(), 6);
        assert_eq!(store.list()[0].name, "앞 몸판");
    }

    #[test]
    fn test_chart_json_payload_shape() {
        let mut outline = ChartOutline::new();
        outline.add_point(Vec2::new(0.0, 0.0));
        outline.add_point(Vec2::new(500.0, 0.0));
        let chart = ChartType::new("앞 몸판", outline);

        let json = serde_json::to_value(&chart).unwrap();
        assert!(json.get("id").is_some());
        assert_eq!(json["name"], "앞 몸판");
        assert!(json["outline"]["points"].is_array());
        assert!(json["outline"]["draw_order"].is_array());
        assert!(json["outline"]["edges"].is_array());
        assert!(json["armhole_depth"].is_null());

        let back: ChartType = serde_json::from_value(json).unwrap();
        assert_eq!(back, chart);
    }
}
