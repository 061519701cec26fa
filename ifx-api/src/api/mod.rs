//! HTTP API handlers for ifx-api

pub mod buildinfo;
pub mod check;
pub mod health;
pub mod presets;
pub mod ui;

pub use buildinfo::get_build_info;
pub use check::{check_interval, CheckError};
pub use health::health_routes;
pub use presets::get_interval_config;
pub use ui::serve_index;
