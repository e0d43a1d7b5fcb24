use crate::utils::{
    nom_helper::{nom_data, nom_unsigned_four_bytes, Endian},
    strings::extract_utf16_string,
};

/// Get all the accessed files. Each entry is a four byte length followed by that many bytes of UTF16 text
pub(crate) fn get_accessed_files(data: &[u8]) -> Vec<String> {
    let mut filenames: Vec<String> = Vec::new();
    let mut input = data;

    let length_size = 4;
    while input.len() >= length_size {
        let length_result = nom_unsigned_four_bytes(input, Endian::Le);
        let (remaining, filename_size) = match length_result {
            Ok(result) => result,
            Err(_err) => break,
        };

        // An entry claiming more bytes than remain is clamped to what is left
        let take_size = if filename_size as usize > remaining.len() {
            remaining.len() as u64
        } else {
            filename_size as u64
        };

        let filename_result = nom_data(remaining, take_size);
        let (remaining, filename_data) = match filename_result {
            Ok(result) => result,
            Err(_err) => break,
        };

        filenames.push(extract_utf16_string(filename_data));
        input = remaining;
    }

    filenames
}

#[cfg(test)]
mod tests {
    use super::get_accessed_files;

    fn filename_entry(name: &str) -> Vec<u8> {
        let mut encoded: Vec<u8> = Vec::new();
        for wide_char in name.encode_utf16() {
            encoded.extend_from_slice(&wide_char.to_le_bytes());
        }

        let mut entry = (encoded.len() as u32).to_le_bytes().to_vec();
        entry.append(&mut encoded);
        entry
    }

    #[test]
    fn test_get_accessed_files() {
        let mut test_data = filename_entry("\\DEVICE\\HARDDISKVOLUME2\\WINDOWS\\SYSTEM32\\NTDLL.DLL");
        test_data.append(&mut filename_entry(
            "\\DEVICE\\HARDDISKVOLUME2\\WINDOWS\\SYSTEM32\\CMD.EXE",
        ));

        let results = get_accessed_files(&test_data);
        assert_eq!(results.len(), 2);
        assert_eq!(
            results[0],
            "\\DEVICE\\HARDDISKVOLUME2\\WINDOWS\\SYSTEM32\\NTDLL.DLL"
        );
        assert_eq!(
            results[1],
            "\\DEVICE\\HARDDISKVOLUME2\\WINDOWS\\SYSTEM32\\CMD.EXE"
        );
    }

    #[test]
    fn test_get_accessed_files_preserves_duplicates() {
        let mut test_data = filename_entry("\\WINDOWS\\SYSTEM32\\NTDLL.DLL");
        test_data.append(&mut filename_entry("\\WINDOWS\\SYSTEM32\\NTDLL.DLL"));

        let results = get_accessed_files(&test_data);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], results[1]);
    }

    #[test]
    fn test_get_accessed_files_empty_buffer() {
        let results = get_accessed_files(&[]);
        assert!(results.is_empty());
    }

    #[test]
    fn test_get_accessed_files_zero_length_entry() {
        // A zero length entry still occupies a slot in the list
        let test_data = 0u32.to_le_bytes().to_vec();
        let results = get_accessed_files(&test_data);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0], "");
    }

    #[test]
    fn test_get_accessed_files_length_matches_remaining() {
        let test_data = filename_entry("CMD");
        let results = get_accessed_files(&test_data);
        assert_eq!(results, vec!["CMD"]);
    }

    #[test]
    fn test_get_accessed_files_length_exceeds_remaining() {
        let mut test_data = 100u32.to_le_bytes().to_vec();
        for wide_char in "CMD".encode_utf16() {
            test_data.extend_from_slice(&wide_char.to_le_bytes());
        }

        let results = get_accessed_files(&test_data);
        assert_eq!(results, vec!["CMD"]);
    }

    #[test]
    fn test_get_accessed_files_trailing_bytes_discarded() {
        let mut test_data = filename_entry("CMD");
        test_data.extend_from_slice(&[1, 2]);

        let results = get_accessed_files(&test_data);
        assert_eq!(results, vec!["CMD"]);
    }

    #[test]
    fn test_get_accessed_files_strips_trailing_nulls() {
        let test_data = filename_entry("CMD\0");
        let results = get_accessed_files(&test_data);
        assert_eq!(results, vec!["CMD"]);
    }
}
