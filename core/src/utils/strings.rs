/// Get a UTF16 little endian string from provided bytes data. Invalid code units are replaced rather than dropped
pub(crate) fn extract_utf16_string(data: &[u8]) -> String {
    let mut utf16_data: Vec<u16> = Vec::new();
    let wide_char_size = 2;
    // An odd trailing byte cannot form a UTF16 code unit and is discarded
    for wide_char in data.chunks_exact(wide_char_size) {
        utf16_data.push(u16::from_le_bytes([wide_char[0], wide_char[1]]));
    }

    let value = String::from_utf16_lossy(&utf16_data);
    value.trim_end_matches('\0').to_string()
}

#[cfg(test)]
mod tests {
    use crate::utils::strings::extract_utf16_string;

    #[test]
    fn test_extract_utf16_string() {
        let test = [84, 0, 69, 0, 77, 0, 80, 0];
        let result = extract_utf16_string(&test);
        assert_eq!(result, "TEMP");
    }

    #[test]
    fn test_extract_utf16_string_trailing_nulls() {
        let test = [67, 0, 77, 0, 68, 0, 0, 0, 0, 0];
        let result = extract_utf16_string(&test);
        assert_eq!(result, "CMD");
    }

    #[test]
    fn test_extract_utf16_string_invalid_code_unit() {
        // Unpaired high surrogate becomes the replacement character
        let test = [0, 216, 65, 0];
        let result = extract_utf16_string(&test);
        assert_eq!(result, "\u{fffd}A");
    }

    #[test]
    fn test_extract_utf16_string_empty() {
        let result = extract_utf16_string(&[]);
        assert_eq!(result, "");
    }

    #[test]
    fn test_extract_utf16_string_odd_byte() {
        let test = [84, 0, 69];
        let result = extract_utf16_string(&test);
        assert_eq!(result, "T");
    }
}
