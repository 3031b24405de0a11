//! # Text Encoding
//!
//! One `\n`-terminated line per record, fields separated by commas, no
//! quoting. Blank lines are skipped on read; surrounding whitespace
//! (including a `\r` from CRLF files) is trimmed from every field.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::ports::{GeoError, GeoResult, Record};

/// Write one line per record
pub fn encode<R: Record, W: Write>(records: &[R], w: &mut W) -> io::Result<()> {
    for record in records {
        record.write_text(w)?;
        w.write_all(b"\n")?;
    }
    Ok(())
}

/// Parse every non-blank line
///
/// `path` is only used to label I/O errors. The first malformed line fails
/// the whole read.
pub fn decode<R: Record, B: BufRead>(reader: B, path: &Path) -> GeoResult<Vec<R>> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| GeoError::io(path, e))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != R::FIELDS {
            return Err(GeoError::Parse {
                line: index + 1,
                reason: format!("expected {} fields, found {}", R::FIELDS, fields.len()),
            });
        }

        let record = R::parse_text(&fields).map_err(|reason| GeoError::Parse {
            line: index + 1,
            reason,
        })?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Id, Point2, Point3, RefPoint2};

    fn decode_str<R: Record>(text: &str) -> GeoResult<Vec<R>> {
        decode(text.as_bytes(), Path::new("<memory>"))
    }

    #[test]
    fn test_encode_lines() {
        let refs = vec![
            RefPoint2::new(Id::new(0), [1.0_f64, 2.0]),
            RefPoint2::new(Id::new(1), [3.0, 4.0]),
        ];
        let mut out = Vec::new();
        encode(&refs, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0,1,2\n1,3,4\n");
    }

    #[test]
    fn test_decode_skips_blank_lines() {
        let points: Vec<Point3<f32>> = decode_str("1,2,3\n\n   \n4,5,6\n").unwrap();
        assert_eq!(
            points,
            vec![Point3::from_xyz(1.0, 2.0, 3.0), Point3::from_xyz(4.0, 5.0, 6.0)]
        );
    }

    #[test]
    fn test_decode_handles_crlf_and_spaces() {
        let points: Vec<Point2<f64>> = decode_str("1.5, 2\r\n 3 ,4\r\n").unwrap();
        assert_eq!(
            points,
            vec![Point2::from_xy(1.5, 2.0), Point2::from_xy(3.0, 4.0)]
        );
    }

    #[test]
    fn test_decode_without_trailing_newline() {
        let refs: Vec<RefPoint2<f32>> = decode_str("3,1,1").unwrap();
        assert_eq!(refs, vec![RefPoint2::new(Id::new(3), [1.0, 1.0])]);
    }

    #[test]
    fn test_decode_rejects_non_numeric() {
        let result: GeoResult<Vec<Point2<f64>>> = decode_str("1,2\n3,abc\n");
        match result {
            Err(GeoError::Parse { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("abc"));
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_rejects_wrong_field_count() {
        let result: GeoResult<Vec<RefPoint2<f64>>> = decode_str("0,1,2,3\n");
        assert!(matches!(result, Err(GeoError::Parse { line: 1, .. })));

        let result: GeoResult<Vec<Point3<f64>>> = decode_str("1,2\n");
        assert!(matches!(result, Err(GeoError::Parse { line: 1, .. })));
    }

    #[test]
    fn test_decode_rejects_negative_id() {
        let result: GeoResult<Vec<RefPoint2<f64>>> = decode_str("-1,0,0\n");
        assert!(matches!(result, Err(GeoError::Parse { .. })));
    }
}
