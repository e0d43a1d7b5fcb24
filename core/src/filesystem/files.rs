use super::{directory::is_directory, error::FileSystemError};
use log::{error, warn};
use std::fs::{metadata, read};
use std::path::Path;
use walkdir::WalkDir;

/// Get a list of all files under a provided directory. Walks the full tree below the starting point
pub(crate) fn list_files(path: &str) -> Result<Vec<String>, FileSystemError> {
    if !is_directory(path) {
        return Err(FileSystemError::NotDirectory);
    }

    let start_walk = WalkDir::new(path).same_file_system(true);
    let mut files: Vec<String> = Vec::new();

    for entries in start_walk {
        let entry = match entries {
            Ok(result) => result,
            Err(err) => {
                warn!("[core] Failed to get directory entry: {err:?}");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        files.push(entry.path().display().to_string());
    }

    Ok(files)
}

/// Check if path is a file
pub(crate) fn is_file(path: &str) -> bool {
    let file = Path::new(path);
    if file.is_file() {
        return true;
    }
    false
}

/// Read a file that is less than 2GB in size
pub(crate) fn read_file(path: &str) -> Result<Vec<u8>, FileSystemError> {
    if file_too_large(path) {
        return Err(FileSystemError::LargeFile);
    }

    // Verify provided path is a file
    if !is_file(path) {
        return Err(FileSystemError::NotFile);
    }

    let read_result = read(path);
    match read_result {
        Ok(result) => Ok(result),
        Err(err) => {
            error!("[core] Failed to read file {path}: {err:?}");
            Err(FileSystemError::ReadFile)
        }
    }
}

/// Check if file is larger than 2GB
fn file_too_large(path: &str) -> bool {
    let max_size = 2147483648;
    get_file_size(path) > max_size
}

/// Get the file size
fn get_file_size(path: &str) -> u64 {
    let meta_result = metadata(path);
    match meta_result {
        Ok(result) => result.len(),
        Err(err) => {
            warn!("[core] Failed to get file size for {path}: {err:?}");
            0
        }
    }
}

/// Get the file extension for a provided path. Returns empty string if none exists
pub(crate) fn file_extension(path: &str) -> String {
    let file = Path::new(path);
    let extension_osstr = file.extension();

    let extension = match extension_osstr {
        Some(result) => result.to_str().unwrap_or(""),
        _ => "",
    };
    extension.to_string()
}

/// Get the filename from provided path
pub(crate) fn get_filename(path: &str) -> String {
    if !path.contains(['/', '\\']) {
        return path.to_string();
    }

    let entry_opt = if path.contains('/') {
        path.rsplit_once('/')
    } else {
        path.rsplit_once('\\')
    };

    match entry_opt {
        Some((_, filename)) => filename.to_string(),
        None => {
            warn!("[core] Failed to get filename from: {path}");
            path.to_string()
        }
    }
}
