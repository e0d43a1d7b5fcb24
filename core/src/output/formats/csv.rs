use crate::output::error::FormatError;
use common::windows::Prefetch;
use csv::{Writer, WriterBuilder};
use log::error;
use std::fs::{create_dir_all, write};

/// Output prefetch records as csv. Returns the path of the written file
pub(crate) fn csv_format(entries: &[Prefetch], output_dir: &str) -> Result<String, FormatError> {
    let result = create_dir_all(output_dir);
    match result {
        Ok(_) => {}
        Err(err) => {
            error!("[output] Failed to create output directory {output_dir}: {err:?}");
            return Err(FormatError::CreateDirectory);
        }
    }

    let writer_result = csv_writer(entries);
    let writer = match writer_result {
        Ok(result) => result,
        Err(err) => {
            error!("[output] Could not create csv writer: {err:?}");
            return Err(FormatError::Output);
        }
    };

    let output_file = format!("{output_dir}/prefetch_data.csv");
    let output_result = write(&output_file, writer.into_inner().unwrap_or_default());
    match output_result {
        Ok(_) => Ok(output_file),
        Err(err) => {
            error!("[output] Failed to write {output_file}: {err:?}");
            Err(FormatError::Output)
        }
    }
}

/// Write prefetch records into a csv buffer
/// Column order is part of the output contract, so the header is written explicitly
fn csv_writer(entries: &[Prefetch]) -> Result<Writer<Vec<u8>>, csv::Error> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    let header = [
        "Executable Name",
        "Run Count",
        "Last Run Time",
        "Volume Creation Time",
        "File Reference",
        "Volume Serial Number",
        "Accessed Files",
    ];
    writer.write_record(header)?;

    for entry in entries {
        writer.write_record([
            entry.executable_name.clone(),
            entry.run_count.to_string(),
            entry.last_run_time.clone(),
            entry.volume_creation_time.clone(),
            entry.file_reference.to_string(),
            entry.volume_serial_number.to_string(),
            serde_json::to_string(&entry.accessed_files).unwrap_or_default(),
        ])?;
    }

    Ok(writer)
}

#[cfg(test)]
mod tests {
    use super::{csv_format, csv_writer};
    use common::windows::Prefetch;
    use std::fs::read_to_string;

    fn test_entry() -> Prefetch {
        Prefetch {
            executable_name: String::from("CMD.EXE-AC113AA8.pf"),
            run_count: 80,
            last_run_time: String::from("2020-05-24 01:31:21"),
            volume_creation_time: String::from("2019-12-17 04:53:01"),
            file_reference: 281474976712345,
            volume_serial_number: 2061362823,
            accessed_files: vec![
                String::from("\\DEVICE\\HARDDISKVOLUME2\\WINDOWS\\SYSTEM32\\CMD.EXE"),
                String::from("\\DEVICE\\HARDDISKVOLUME2\\WINDOWS\\SYSTEM32\\NTDLL.DLL"),
            ],
        }
    }

    #[test]
    fn test_csv_writer() {
        let entries = vec![test_entry()];
        let writer = csv_writer(&entries).unwrap();

        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let mut lines = output.lines();

        assert_eq!(
            lines.next().unwrap(),
            "Executable Name,Run Count,Last Run Time,Volume Creation Time,File Reference,Volume Serial Number,Accessed Files"
        );

        let row = lines.next().unwrap();
        assert!(row.starts_with("CMD.EXE-AC113AA8.pf,80,2020-05-24 01:31:21,2019-12-17 04:53:01,281474976712345,2061362823,"));
        assert!(row.contains("NTDLL.DLL"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_csv_writer_no_entries() {
        let writer = csv_writer(&[]).unwrap();
        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        // Header only
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_csv_format() {
        let mut test_location = std::env::temp_dir();
        test_location.push(format!("pfdump_csv_{}", std::process::id()));

        let entries = vec![test_entry()];
        let output_file = csv_format(&entries, &test_location.display().to_string()).unwrap();

        assert!(output_file.ends_with("prefetch_data.csv"));
        let output = read_to_string(&output_file).unwrap();
        assert!(output.starts_with("Executable Name,"));
        assert!(output.contains("CMD.EXE-AC113AA8.pf"));
    }
}
