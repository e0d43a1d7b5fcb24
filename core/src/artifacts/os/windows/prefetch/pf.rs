use super::{
    error::PrefetchError,
    filenames::get_accessed_files,
    header::Header,
    volume::{VolumeDescriptor, VolumeInfo},
};
use crate::filesystem::files::get_filename;
use crate::utils::{
    nom_helper::nom_data,
    time::{filetime_to_unixepoch, unixepoch_to_datetime},
};
use common::windows::Prefetch;
use log::error;

/// Parse prefetch data and return the decoded record or error
pub(crate) fn parse_prefetch(data: &[u8], path: &str) -> Result<Prefetch, PrefetchError> {
    // The signature check needs a full header region behind it
    let min_header_size = 84;
    if data.len() < min_header_size {
        return Err(PrefetchError::TruncatedHeader);
    }

    let sig_results = Header::is_prefetch(data);
    let is_prefetch = match sig_results {
        Ok((_, result)) => result,
        Err(err) => {
            error!("[prefetch] Failed to check prefetch signature: {err:?}");
            return Err(PrefetchError::TruncatedHeader);
        }
    };
    if !is_prefetch {
        // Expected outcome for non-prefetch input. The caller excludes the file quietly
        return Err(PrefetchError::NotPrefetchFile);
    }

    let header_results = Header::parse_header(data);
    let header = match header_results {
        Ok((_, result)) => result,
        Err(err) => {
            error!("[prefetch] Failed to parse header: {err:?}");
            return Err(PrefetchError::TruncatedHeader);
        }
    };

    let descriptor_results = VolumeDescriptor::parse_descriptor(data);
    let descriptor = match descriptor_results {
        Ok((_, result)) => result,
        Err(err) => {
            error!("[prefetch] Failed to parse volume descriptor: {err:?}");
            return Err(PrefetchError::TruncatedHeader);
        }
    };

    let volume_results = VolumeInfo::parse_volume(data, &descriptor);
    let volume = match volume_results {
        Ok((_, result)) => result,
        Err(err) => {
            error!("[prefetch] Failed to parse volume info: {err:?}");
            return Err(PrefetchError::TruncatedVolumeInfo);
        }
    };

    let filenames_results = accessed_filenames_data(data, &volume);
    let filenames_data = match filenames_results {
        Ok((_, result)) => result,
        Err(err) => {
            error!("[prefetch] Failed to get accessed filename data: {err:?}");
            return Err(PrefetchError::TruncatedFilenames);
        }
    };

    let prefetch = Prefetch {
        executable_name: get_filename(path),
        run_count: header.run_count,
        last_run_time: unixepoch_to_datetime(filetime_to_unixepoch(&header.last_run_time)),
        volume_creation_time: unixepoch_to_datetime(filetime_to_unixepoch(
            &volume.volume_creation,
        )),
        file_reference: volume.file_reference,
        volume_serial_number: volume.volume_serial,
        accessed_files: get_accessed_files(filenames_data),
    };

    Ok(prefetch)
}

/// Slice the accessed filename stream out of the file data. Offset and size are from the start of the file
fn accessed_filenames_data<'a>(
    data: &'a [u8],
    volume: &VolumeInfo,
) -> nom::IResult<&'a [u8], &'a [u8]> {
    let (list_start, _) = nom_data(data, volume.filename_offset as u64)?;
    let (input, list_data) = nom_data(list_start, volume.filename_size as u64)?;

    Ok((input, list_data))
}
