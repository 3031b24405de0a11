//! Record implementations for points and reference points.
//!
//! Binary layout is the `repr(C)` layout of the struct in native byte order:
//!
//! ```text
//! Point<T, N>     [c0][c1]..[cN-1]                  size_of::<Point<T, N>>()
//! RefPoint<T, N>  [id:u32][pad][c0]..[cN-1][pad]    size_of::<RefPoint<T, N>>()
//! ```
//!
//! Padding is written as zeros and ignored on read.

use std::io;
use std::mem::{align_of, size_of};

use crate::core::{Id, Point, RefPoint, Scalar};
use crate::ports::Record;

/// Byte offset of the coordinates inside a `repr(C)` `RefPoint<T, N>`
fn coords_offset<T>() -> usize {
    Id::SIZE.next_multiple_of(align_of::<T>())
}

fn encode_coords<T: Scalar>(coords: &[T], out: &mut [u8]) {
    for (chunk, &c) in out.chunks_exact_mut(T::SIZE).zip(coords) {
        c.write_ne(chunk);
    }
}

fn decode_coords<T: Scalar, const N: usize>(bytes: &[u8]) -> [T; N] {
    let mut coords = [T::zero(); N];
    for (c, chunk) in coords.iter_mut().zip(bytes.chunks_exact(T::SIZE)) {
        *c = T::read_ne(chunk);
    }
    coords
}

fn write_coords<T: Scalar, W: io::Write>(coords: &[T], w: &mut W) -> io::Result<()> {
    for (i, c) in coords.iter().enumerate() {
        if i > 0 {
            w.write_all(b",")?;
        }
        write!(w, "{}", c)?;
    }
    Ok(())
}

fn parse_coords<T: Scalar, const N: usize>(fields: &[&str]) -> Result<[T; N], String> {
    let mut coords = [T::zero(); N];
    for (c, field) in coords.iter_mut().zip(fields) {
        *c = T::parse_field(field).map_err(|e| format!("invalid coordinate {:?}: {}", field, e))?;
    }
    Ok(coords)
}

impl<T: Scalar, const N: usize> Record for Point<T, N> {
    const SIZE: usize = size_of::<Self>();
    const FIELDS: usize = N;

    fn encode(&self, out: &mut [u8]) {
        encode_coords(self.coords(), out);
    }

    fn decode(bytes: &[u8]) -> Self {
        Point::new(decode_coords(bytes))
    }

    fn write_text<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        write_coords(self.coords(), w)
    }

    fn parse_text(fields: &[&str]) -> Result<Self, String> {
        parse_coords(fields).map(Point::new)
    }
}

impl<T: Scalar, const N: usize> Record for RefPoint<T, N> {
    const SIZE: usize = size_of::<Self>();
    const FIELDS: usize = N + 1;

    fn encode(&self, out: &mut [u8]) {
        out[..Id::SIZE].copy_from_slice(&self.id().to_ne_bytes());
        encode_coords(self.coords(), &mut out[coords_offset::<T>()..]);
    }

    fn decode(bytes: &[u8]) -> Self {
        let mut id = [0u8; Id::SIZE];
        id.copy_from_slice(&bytes[..Id::SIZE]);
        RefPoint::new(
            Id::from_ne_bytes(id),
            decode_coords(&bytes[coords_offset::<T>()..]),
        )
    }

    fn write_text<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "{},", self.id())?;
        write_coords(self.coords(), w)
    }

    fn parse_text(fields: &[&str]) -> Result<Self, String> {
        let id = fields[0]
            .parse::<Id>()
            .map_err(|e| format!("invalid id {:?}: {}", fields[0], e))?;
        parse_coords(&fields[1..]).map(|coords| RefPoint::new(id, coords))
    }
}
