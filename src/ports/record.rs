//! # Record Port
//!
//! What a container element must provide to be persisted, and what a
//! container must provide to be written and read as a whole.
//!
//! Implemented by `Point`, `RefPoint` (records) and by `PointSet`,
//! `RefPointSet` (containers).

use std::io;

/// A fixed-size element of a persistable container
pub trait Record: Copy {
    /// Bytes per binary record, padding included
    const SIZE: usize;

    /// Fields per text line
    const FIELDS: usize;

    /// Write the in-memory representation into `out`
    ///
    /// `out` is exactly `SIZE` zeroed bytes.
    fn encode(&self, out: &mut [u8]);

    /// Rebuild a record from exactly `SIZE` bytes
    ///
    /// Bytes from a build with a different layout decode to garbage; there
    /// is no way to tell.
    fn decode(bytes: &[u8]) -> Self;

    /// Write the comma-separated fields, without a line terminator
    fn write_text<W: io::Write>(&self, w: &mut W) -> io::Result<()>;

    /// Parse `FIELDS` already-split fields
    ///
    /// The error is a human-readable reason.
    fn parse_text(fields: &[&str]) -> Result<Self, String>;
}

/// A bulk container of records
pub trait RecordContainer {
    type Record: Record;

    /// Snapshot of every record, in container order
    fn records(&self) -> Vec<Self::Record>;

    /// Remove every record
    fn clear_records(&mut self);

    /// Append decoded records
    fn extend_records(&mut self, records: Vec<Self::Record>);
}
