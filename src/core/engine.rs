use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Run the report pipeline front to back. Any stage failure aborts the
    /// whole run; the error names the stage that failed.
    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting branch report generation");

        let data = self
            .pipeline
            .extract()
            .map_err(|e| e.at_stage("extract"))?;
        tracing::info!("Extracted {} branch records", data.branches.len());

        let rows = self
            .pipeline
            .transform(data)
            .map_err(|e| e.at_stage("transform"))?;
        tracing::info!("Transformed into {} report rows", rows.len());

        let output_path = self.pipeline.load(rows).map_err(|e| e.at_stage("load"))?;
        tracing::info!("Report written to {}", output_path);

        Ok(output_path)
    }
}
