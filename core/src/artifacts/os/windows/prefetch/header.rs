use crate::utils::nom_helper::{nom_data, nom_unsigned_eight_bytes, nom_unsigned_four_bytes, Endian};

#[derive(Debug)]
pub(crate) struct Header {
    pub(crate) signature: u32,
    pub(crate) version: u32,
    pub(crate) run_count: u32,
    pub(crate) last_run_time: u64,
    pub(crate) _reserved: u64,
    pub(crate) _reserved2: Vec<u8>,
    pub(crate) _reserved3: Vec<u8>,
}

impl Header {
    /// Check for the prefetch signature (SCCA)
    pub(crate) fn is_prefetch(data: &[u8]) -> nom::IResult<&[u8], bool> {
        let (input, signature) = nom_unsigned_four_bytes(data, Endian::Le)?;
        let prefetch_sig = 0x41434353; // SCCA
        if signature == prefetch_sig {
            return Ok((input, true));
        }
        Ok((input, false))
    }

    /// Parse the fixed prefetch header. Reserved regions are kept as named fields rather than skipped
    pub(crate) fn parse_header(data: &[u8]) -> nom::IResult<&[u8], Header> {
        let (input, signature) = nom_unsigned_four_bytes(data, Endian::Le)?;
        let (input, version) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, reserved) = nom_unsigned_eight_bytes(input, Endian::Le)?;
        let (input, run_count) = nom_unsigned_four_bytes(input, Endian::Le)?;

        let reserved_region = 16;
        let (input, reserved2) = nom_data(input, reserved_region)?;
        let (input, last_run_time) = nom_unsigned_eight_bytes(input, Endian::Le)?;

        // Remainder of the 84 byte header region before the volume descriptor
        let reserved_region2 = 40;
        let (input, reserved3) = nom_data(input, reserved_region2)?;

        let header = Header {
            signature,
            version,
            run_count,
            last_run_time,
            _reserved: reserved,
            _reserved2: reserved2.to_vec(),
            _reserved3: reserved3.to_vec(),
        };

        Ok((input, header))
    }
}
