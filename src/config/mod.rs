pub mod local;

use crate::domain::model::{CountryFilter, ReportShape};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};

/// Fixed input/output file names. The shipped binary always uses these;
/// the fields on [`ReportConfig`] exist so library callers and tests can
/// point the pipeline elsewhere.
pub const BRANCHES_FILE: &str = "branches.json";
pub const REFERENCE_FILE: &str = "corporate.csv";
pub const OUTPUT_FILE: &str = "results.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub branches_path: String,
    pub reference_path: String,
    pub output_path: String,
    pub country_filter: CountryFilter,
    pub report_shape: ReportShape,
    pub verbose: bool,
}

impl Default for ReportConfig {
    /// The richest observed variant: full column set, allow-list filter.
    fn default() -> Self {
        Self {
            branches_path: BRANCHES_FILE.to_string(),
            reference_path: REFERENCE_FILE.to_string(),
            output_path: OUTPUT_FILE.to_string(),
            country_filter: CountryFilter::Allow,
            report_shape: ReportShape::Full,
            verbose: false,
        }
    }
}

impl ConfigProvider for ReportConfig {
    fn branches_path(&self) -> &str {
        &self.branches_path
    }

    fn reference_path(&self) -> &str {
        &self.reference_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn country_filter(&self) -> CountryFilter {
        self.country_filter
    }

    fn report_shape(&self) -> ReportShape {
        self.report_shape
    }
}

impl Validate for ReportConfig {
    fn validate(&self) -> Result<()> {
        validate_path("branches_path", &self.branches_path)?;
        validate_path("output_path", &self.output_path)?;

        // The reference file only matters when a country filter consults it.
        if self.country_filter != CountryFilter::Off {
            validate_path("reference_path", &self.reference_path)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ReportConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.branches_path, "branches.json");
        assert_eq!(config.reference_path, "corporate.csv");
        assert_eq!(config.output_path, "results.csv");
    }

    #[test]
    fn reference_path_ignored_when_filter_off() {
        let config = ReportConfig {
            reference_path: String::new(),
            country_filter: CountryFilter::Off,
            ..ReportConfig::default()
        };
        assert!(config.validate().is_ok());

        let config = ReportConfig {
            country_filter: CountryFilter::Allow,
            ..config
        };
        assert!(config.validate().is_err());
    }
}
