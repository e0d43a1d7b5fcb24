use crate::utils::nom_helper::{nom_data, nom_unsigned_eight_bytes, nom_unsigned_four_bytes, Endian};

/// Locates the volume data block within the file. Follows the fixed header at offset 84
#[derive(Debug)]
pub(crate) struct VolumeDescriptor {
    pub(crate) volume_info_offset: u32,
    pub(crate) volume_info_size: u32,
    pub(crate) _reserved: u32,
    pub(crate) _reserved2: u32,
    pub(crate) _reserved3: u32,
}

#[derive(Debug)]
pub(crate) struct VolumeInfo {
    pub(crate) volume_creation: u64,
    pub(crate) file_reference: u64,
    pub(crate) volume_serial: u32,
    /// Offset of the accessed filename stream, from the start of the file
    pub(crate) filename_offset: u32,
    pub(crate) filename_size: u32,
}

impl VolumeDescriptor {
    /// Parse the 20 byte volume descriptor that follows the fixed header
    pub(crate) fn parse_descriptor(data: &[u8]) -> nom::IResult<&[u8], VolumeDescriptor> {
        let header_size = 84;
        let (input, _) = nom_data(data, header_size)?;

        let (input, volume_info_offset) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, reserved) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, volume_info_size) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, reserved2) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, reserved3) = nom_unsigned_four_bytes(input, Endian::Le)?;

        let descriptor = VolumeDescriptor {
            volume_info_offset,
            volume_info_size,
            _reserved: reserved,
            _reserved2: reserved2,
            _reserved3: reserved3,
        };

        Ok((input, descriptor))
    }
}

impl VolumeInfo {
    /// Parse the volume data block located by the descriptor. Field offsets are relative to the block start,
    /// except the filename offset which is from the start of the file
    pub(crate) fn parse_volume<'a>(
        data: &'a [u8],
        descriptor: &VolumeDescriptor,
    ) -> nom::IResult<&'a [u8], VolumeInfo> {
        let (block_start, _) = nom_data(data, descriptor.volume_info_offset as u64)?;
        let (_, block) = nom_data(block_start, descriptor.volume_info_size as u64)?;

        let (input, volume_creation) = nom_unsigned_eight_bytes(block, Endian::Le)?;
        let (input, file_reference) = nom_unsigned_eight_bytes(input, Endian::Le)?;
        let (input, volume_serial) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, filename_offset) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, filename_size) = nom_unsigned_four_bytes(input, Endian::Le)?;

        let volume = VolumeInfo {
            volume_creation,
            file_reference,
            volume_serial,
            filename_offset,
            filename_size,
        };

        Ok((input, volume))
    }
}
