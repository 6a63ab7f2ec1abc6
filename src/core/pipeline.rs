use crate::core::reference::parse_reference_set;
use crate::core::{ConfigProvider, ExtractResult, Pipeline, ReportRow, Storage};
use crate::domain::model::{BranchType, BranchesDocument, CountryFilter, ReportShape};
use crate::utils::error::{ReportError, Result};

pub struct ReportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ReportPipeline<S, C> {
    fn extract(&self) -> Result<ExtractResult> {
        tracing::debug!("Reading branch list from {}", self.config.branches_path());
        let data = self.storage.read_file(self.config.branches_path())?;
        let document: BranchesDocument = serde_json::from_slice(&data)?;
        tracing::debug!("Decoded {} branch records", document.branches.len());

        let reference = match self.config.country_filter() {
            CountryFilter::Off => None,
            CountryFilter::Allow | CountryFilter::Deny => {
                tracing::debug!(
                    "Reading reference country list from {}",
                    self.config.reference_path()
                );
                let raw = self.storage.read_file(self.config.reference_path())?;
                let set = parse_reference_set(&raw)?;
                tracing::debug!("Loaded {} reference countries", set.len());
                Some(set)
            }
        };

        Ok(ExtractResult {
            branches: document.branches,
            reference,
        })
    }

    fn transform(&self, data: ExtractResult) -> Result<Vec<ReportRow>> {
        let filter = self.config.country_filter();
        let reference = data.reference.as_ref();

        let mut rows = Vec::new();
        for branch in &data.branches {
            let country = branch.country_code();

            // Allow-list test runs before the eligibility predicate: a
            // branch outside the listed countries is never considered.
            if filter == CountryFilter::Allow
                && !reference.is_some_and(|set| set.contains(country))
            {
                continue;
            }

            let is_corporate = branch.corporate();
            let is_agency = branch.agency();

            // Discard iff corporate and not agency.
            if is_corporate && !is_agency {
                continue;
            }

            // Deny-list test runs after the predicate.
            if filter == CountryFilter::Deny
                && reference.is_some_and(|set| set.contains(country))
            {
                continue;
            }

            rows.push(ReportRow {
                branch_id: branch.branch_id,
                name: branch.name.clone(),
                country: country.to_string(),
                branch_type: BranchType::label_for(branch.branch_type),
                is_corporate,
                is_agency,
            });
        }

        rows.sort_by(|a, b| {
            a.country
                .cmp(&b.country)
                .then(a.branch_id.cmp(&b.branch_id))
        });

        tracing::debug!("Kept {} of {} branches", rows.len(), data.branches.len());
        Ok(rows)
    }

    fn load(&self, rows: Vec<ReportRow>) -> Result<String> {
        let shape = self.config.report_shape();

        // Render the whole report in memory first, then write it in one
        // call: the output file is either fully written or not created.
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(shape.header())?;
        for row in &rows {
            writer.write_record(record_fields(shape, row))?;
        }
        let data = writer
            .into_inner()
            .map_err(|e| ReportError::IoError(e.into_error()))?;

        tracing::debug!(
            "Writing {} report rows to {}",
            rows.len(),
            self.config.output_path()
        );
        self.storage.write_file(self.config.output_path(), &data)?;

        Ok(self.config.output_path().to_string())
    }
}

fn record_fields(shape: ReportShape, row: &ReportRow) -> Vec<String> {
    let name = row.name.clone().unwrap_or_default();
    match shape {
        ReportShape::Minimal => vec![row.branch_id.to_string(), row.country.clone()],
        ReportShape::Standard => vec![row.branch_id.to_string(), name, row.country.clone()],
        ReportShape::Full => vec![
            row.branch_id.to_string(),
            name,
            row.country.clone(),
            row.branch_type.to_string(),
            row.corporate_label().to_string(),
            row.agency_label().to_string(),
        ],
    }
}
