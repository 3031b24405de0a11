//! # Binary Encoding
//!
//! Records are concatenated in their in-memory form. No header, no footer,
//! no delimiter: the record count is `byte_len / Record::SIZE`.
//!
//! The format is not portable: scalar width, padding, and byte
//! order are whatever this build uses. A file written by an `f32` build and
//! read by an `f64` build decodes to a different count of garbage records.

use tracing::debug;

use crate::ports::Record;

/// Encode records into one contiguous buffer
pub fn encode<R: Record>(records: &[R]) -> Vec<u8> {
    let mut bytes = vec![0u8; records.len() * R::SIZE];
    for (chunk, record) in bytes.chunks_exact_mut(R::SIZE).zip(records) {
        record.encode(chunk);
    }
    bytes
}

/// Decode every whole record in `bytes`
///
/// A trailing fragment shorter than one record is ignored.
pub fn decode<R: Record>(bytes: &[u8]) -> Vec<R> {
    let count = bytes.len() / R::SIZE;
    let trailing = bytes.len() % R::SIZE;
    if trailing != 0 {
        debug!(
            trailing,
            record_size = R::SIZE,
            "ignoring trailing bytes that do not form a whole record"
        );
    }

    let mut records = Vec::with_capacity(count);
    records.extend(bytes.chunks_exact(R::SIZE).map(R::decode));
    records
}
