use crate::domain::model::{CountryFilter, ExtractResult, ReportRow, ReportShape};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn branches_path(&self) -> &str;
    fn reference_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn country_filter(&self) -> CountryFilter;
    fn report_shape(&self) -> ReportShape;
}

/// The whole run is one linear pass through these three stages.
pub trait Pipeline {
    fn extract(&self) -> Result<ExtractResult>;
    fn transform(&self, data: ExtractResult) -> Result<Vec<ReportRow>>;
    fn load(&self, rows: Vec<ReportRow>) -> Result<String>;
}
