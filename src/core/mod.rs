pub mod engine;
pub mod pipeline;
pub mod reference;

pub use crate::domain::model::{Branch, ExtractResult, ReportRow};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
