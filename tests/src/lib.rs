//! Shared helpers for the pipeline integration tests.

use calx::config::PipelineConfig;
use calx::{Pipeline, PipelineError};

/// Run the pipeline quietly and render each record as `text = outcome`.
pub fn rendered_records(source: &str) -> Result<Vec<String>, PipelineError> {
    let pipeline = Pipeline::new(PipelineConfig::default().with_show_stages(false));
    let analysis = pipeline.run(source)?;
    Ok(analysis.records.iter().map(|r| r.to_string()).collect())
}

/// Run the pipeline with stage reports and return everything written.
pub fn stage_output(source: &str) -> (String, Result<usize, PipelineError>) {
    let mut out = Vec::new();
    let result = Pipeline::default()
        .run_with_sink(source, &mut out)
        .map(|analysis| analysis.records.len());
    (String::from_utf8_lossy(&out).into_owned(), result)
}
