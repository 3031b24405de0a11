//! # Codec Adapters
//!
//! File persistence shared by every container.
//!
//! Available encodings:
//! - `binary` - raw in-memory records, build-specific
//! - `text` - comma-separated lines, portable
//!
//! `write` and `read` pick one by [`Encoding`]. Reading always clears the
//! destination first; if decoding fails it stays empty.

pub mod binary;
mod records;
pub mod text;

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::core::config::Encoding;
use crate::ports::{GeoError, GeoResult, RecordContainer};

/// Write every record of `container` to `path`, replacing the file
pub fn write<C: RecordContainer>(
    container: &C,
    path: impl AsRef<Path>,
    encoding: Encoding,
) -> GeoResult<()> {
    let path = path.as_ref();
    let records = container.records();

    match encoding {
        Encoding::Binary => {
            fs::write(path, binary::encode(&records)).map_err(|e| GeoError::io(path, e))?;
        }
        Encoding::Text => {
            let file = File::create(path).map_err(|e| GeoError::io(path, e))?;
            let mut writer = BufWriter::new(file);
            text::encode(&records, &mut writer).map_err(|e| GeoError::io(path, e))?;
            writer.flush().map_err(|e| GeoError::io(path, e))?;
        }
    }

    debug!(
        path = %path.display(),
        encoding = encoding.as_str(),
        records = records.len(),
        "wrote container"
    );
    Ok(())
}

/// Replace the contents of `container` with the records stored at `path`
pub fn read<C: RecordContainer>(
    container: &mut C,
    path: impl AsRef<Path>,
    encoding: Encoding,
) -> GeoResult<()> {
    let path = path.as_ref();
    container.clear_records();

    let records = match encoding {
        Encoding::Binary => {
            let bytes = fs::read(path).map_err(|e| GeoError::io(path, e))?;
            binary::decode(&bytes)
        }
        Encoding::Text => {
            let file = File::open(path).map_err(|e| GeoError::io(path, e))?;
            text::decode(BufReader::new(file), path)?
        }
    };

    debug!(
        path = %path.display(),
        encoding = encoding.as_str(),
        records = records.len(),
        "read container"
    );
    container.extend_records(records);
    Ok(())
}
