//! Implements the decoder and encoder of a simplified flexible polyline
//! format, which represents a route as a short ASCII string.
//!
//! The format handled here is two-dimensional and has a fixed precision of
//! five decimal digits. The first [`HEADER_LEN`] characters form a header
//! that is skipped without being interpreted. Each point follows as a pair of
//! zig-zag encoded, variable-length deltas (latitude, then longitude).
//!
//! # Example
//!
//!     let points = flexpolyline_io::decode("BFAoz5xJ67i1B").unwrap();
//!     assert_eq!(points.len(), 1);
//!     assert!((points[0].lat - 50.10228).abs() < 1e-9);
//!     assert!((points[0].lng - 8.69821).abs() < 1e-9);
//!
use quick_error::quick_error;

mod dec;
mod enc;
mod varint;

pub use self::{
    dec::{decode, decode_raw, PointDecoder},
    enc::PointEncoder,
    varint::{
        char_value, decode_signed, decode_unsigned, encode_signed, encode_unsigned, MAX_VARINT_LEN,
    },
};

/// The 64-symbol alphabet. The index of a character is its 6-bit value.
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// The number of leading characters skipped by the decoder.
pub const HEADER_LEN: usize = 3;

/// The header written by [`PointEncoder`]: format version 1, precision 5, no
/// third dimension, padded to `HEADER_LEN`.
pub const HEADER: &str = "BFA";

/// The number of fractional decimal digits carried by coordinates.
pub const PRECISION: u32 = 5;

/// Converts a scaled integer coordinate to degrees.
pub const SCALE: f64 = 1e-5;

/// A point in the scaled integer space coordinates are accumulated in.
/// One unit equals [`SCALE`] degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RawPoint {
    pub lat: i64,
    pub lng: i64,
}

/// A point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl RawPoint {
    pub fn new(lat: i64, lng: i64) -> Self {
        Self { lat, lng }
    }

    pub fn to_lat_lng(self) -> LatLng {
        LatLng {
            lat: self.lat as f64 * SCALE,
            lng: self.lng as f64 * SCALE,
        }
    }
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Round to the nearest representable `RawPoint`.
    pub fn to_raw(self) -> RawPoint {
        let scale = 10f64.powi(PRECISION as i32);
        RawPoint {
            lat: (self.lat * scale).round() as i64,
            lng: (self.lng * scale).round() as i64,
        }
    }
}

impl From<RawPoint> for LatLng {
    fn from(x: RawPoint) -> Self {
        x.to_lat_lng()
    }
}

quick_error! {
    /// A malformed polyline. `offset` is the byte offset in the input
    /// where the problem was detected.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum DecodeError {
        /// Found a character outside of `ALPHABET`.
        InvalidChar { byte: u8, offset: usize } {
            display("invalid character {:?} at offset {}", *byte as char, offset)
        }
        /// The input ended in the middle of a variable-length integer.
        Truncated { offset: usize } {
            display("truncated integer at offset {}", offset)
        }
        /// A latitude delta is not followed by a longitude delta.
        UnpairedDelta { offset: usize } {
            display("latitude delta at offset {} has no longitude", offset)
        }
        /// A variable-length integer does not fit in 64 bits.
        Overflow { offset: usize } {
            display("integer at offset {} is too long", offset)
        }
    }
}

impl DecodeError {
    /// Get the byte offset where the error was detected.
    pub fn offset(&self) -> usize {
        match *self {
            DecodeError::InvalidChar { offset, .. }
            | DecodeError::Truncated { offset }
            | DecodeError::UnpairedDelta { offset }
            | DecodeError::Overflow { offset } => offset,
        }
    }
}
