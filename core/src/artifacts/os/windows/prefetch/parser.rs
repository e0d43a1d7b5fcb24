/**
 * Windows `Prefetch` files track execution of applications on Windows Workstations
 * `Prefetch` is disabled on Windows Servers and may be disabled on systems with SSDs
 *
 * References:
 *  `https://github.com/libyal/libscca/blob/main/documentation/Windows%20Prefetch%20File%20(PF)%20format.asciidoc`
 */
use super::{error::PrefetchError, pf::parse_prefetch};
use crate::filesystem::files::{file_extension, list_files, read_file};
use common::windows::Prefetch;
use log::error;

/// Decoded records plus counts of files that were excluded or failed
#[derive(Debug)]
pub(crate) struct PrefetchBatch {
    pub(crate) entries: Vec<Prefetch>,
    pub(crate) skipped: usize,
    pub(crate) errors: usize,
}

/// Parse all prefetch files under the provided directory
pub(crate) fn grab_prefetch(path: &str) -> Result<PrefetchBatch, PrefetchError> {
    read_directory(path)
}

/// Read all files at provided path and parse any prefetch files found
fn read_directory(path: &str) -> Result<PrefetchBatch, PrefetchError> {
    let dir_results = list_files(path);
    let read_dir = match dir_results {
        Ok(result) => result,
        Err(err) => {
            error!("[prefetch] Failed to get prefetch files {path}, error: {err:?}");
            return Err(PrefetchError::ReadDirectory);
        }
    };

    let mut batch = PrefetchBatch {
        entries: Vec::new(),
        skipped: 0,
        errors: 0,
    };

    for pf_file in read_dir {
        // Skip non-prefetch files
        if file_extension(&pf_file) != "pf" {
            continue;
        }

        let prefetch_results = read_prefetch(&pf_file);
        match prefetch_results {
            Ok(result) => batch.entries.push(result),
            Err(PrefetchError::NotPrefetchFile) => {
                // Wrong signature. Excluded from the output without comment
                batch.skipped += 1;
            }
            Err(err) => {
                error!("[prefetch] Failed to get prefetch for {pf_file}, error: {err:?}");
                batch.errors += 1;
            }
        }
    }

    Ok(batch)
}

/// Read and parse the prefetch file
fn read_prefetch(path: &str) -> Result<Prefetch, PrefetchError> {
    let buffer_results = read_file(path);
    let buffer = match buffer_results {
        Ok(result) => result,
        Err(err) => {
            error!("[prefetch] Failed to read prefetch file {path}, error: {err:?}");
            return Err(PrefetchError::ReadFile);
        }
    };

    parse_prefetch(&buffer, path)
}
