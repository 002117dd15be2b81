//! Knit Pattern Studio Frontend
//!
//! egui-based admin dashboard for knitting pattern metadata: measurement rules,
//! templates, per-size measurement tables and chart geometries.

mod actions;
mod app;
mod app_state;
mod config;
mod fonts;
mod panels;
mod state;

pub use app::KnitStudioApp;
