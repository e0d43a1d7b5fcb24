use crate::artifacts::os::windows::prefetch::parser::grab_prefetch;
use crate::error::CollectError;
use crate::output::formats::csv::csv_format;
use log::{error, info, LevelFilter};
use simplelog::{Config, SimpleLogger};

/// Outcome of one collection run
#[derive(Debug)]
pub struct CollectionStatus {
    pub parsed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub output_file: String,
}

/// Parse all prefetch files under `input_dir` and write the records to a csv file in `output_dir`
pub fn collect_prefetch(input_dir: &str, output_dir: &str) -> Result<CollectionStatus, CollectError> {
    let _ = SimpleLogger::init(LevelFilter::Warn, Config::default());

    let batch_result = grab_prefetch(input_dir);
    let batch = match batch_result {
        Ok(result) => result,
        Err(err) => {
            error!("[core] Failed to collect prefetch files at {input_dir}: {err:?}");
            return Err(CollectError::BadDirectory);
        }
    };

    let output_result = csv_format(&batch.entries, output_dir);
    let output_file = match output_result {
        Ok(result) => result,
        Err(err) => {
            error!("[core] Failed to output prefetch data: {err:?}");
            return Err(CollectError::Output);
        }
    };

    info!("[core] Parsed {} prefetch files", batch.entries.len());
    Ok(CollectionStatus {
        parsed: batch.entries.len(),
        skipped: batch.skipped,
        errors: batch.errors,
        output_file,
    })
}
