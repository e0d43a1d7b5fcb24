use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Prefetch {
    pub executable_name: String,
    pub run_count: u32,
    pub last_run_time: String,
    pub volume_creation_time: String,
    pub file_reference: u64,
    pub volume_serial_number: u32,
    pub accessed_files: Vec<String>,
}
