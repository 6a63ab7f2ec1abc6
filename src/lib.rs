pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{local::LocalStorage, ReportConfig};
pub use core::{engine::ReportEngine, pipeline::ReportPipeline};
pub use domain::model::{CountryFilter, ReportShape};
pub use utils::error::{ReportError, Result};
