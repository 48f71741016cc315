//! Decoder
use std::iter::FusedIterator;

use crate::{varint::decode_signed, DecodeError, LatLng, RawPoint, HEADER_LEN};

/// An iterator over the points of an encoded polyline.
///
/// The header is skipped without being examined. When the input turns out to
/// be malformed, the iterator yields a single `Err(_)` and then stops.
#[derive(Debug, Clone)]
pub struct PointDecoder<'a> {
    data: &'a [u8],
    /// The offset of the next unread character
    cursor: usize,
    /// The accumulated coordinate
    point: RawPoint,
    failed: bool,
}

impl<'a> PointDecoder<'a> {
    pub fn new(polyline: &'a str) -> Self {
        Self::from_bytes(polyline.as_bytes())
    }

    pub fn from_bytes(data: &'a [u8]) -> Self {
        Self {
            data,
            cursor: HEADER_LEN,
            point: RawPoint::default(),
            failed: false,
        }
    }

    /// Get the offset of the next unread character.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn next_point(&mut self) -> Result<RawPoint, DecodeError> {
        let (d_lat, cursor) = decode_signed(self.data, self.cursor)?;
        if cursor >= self.data.len() {
            return Err(DecodeError::UnpairedDelta {
                offset: self.cursor,
            });
        }
        let (d_lng, cursor) = decode_signed(self.data, cursor)?;

        self.cursor = cursor;
        self.point.lat = self.point.lat.wrapping_add(d_lat);
        self.point.lng = self.point.lng.wrapping_add(d_lng);

        Ok(self.point)
    }
}

impl<'a> Iterator for PointDecoder<'a> {
    type Item = Result<RawPoint, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor >= self.data.len() {
            return None;
        }

        let result = self.next_point();
        if let Err(e) = &result {
            log::debug!("Malformed polyline: {}", e);
            self.failed = true;
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            // Every point occupies at least two characters
            let rest = self.data.len().saturating_sub(self.cursor);
            (0, Some((rest + 1) / 2))
        }
    }
}

impl<'a> FusedIterator for PointDecoder<'a> {}

/// Decode a polyline into points in the scaled integer space.
pub fn decode_raw(polyline: &str) -> Result<Vec<RawPoint>, DecodeError> {
    PointDecoder::new(polyline).collect()
}

/// Decode a polyline into points in degrees.
///
/// A string consisting only of a header (or shorter than one) decodes to an
/// empty `Vec`.
pub fn decode(polyline: &str) -> Result<Vec<LatLng>, DecodeError> {
    let points = PointDecoder::new(polyline)
        .map(|p| p.map(RawPoint::to_lat_lng))
        .collect::<Result<Vec<_>, _>>()?;

    log::trace!("Decoded {} point(s) from {} bytes", points.len(), polyline.len());

    Ok(points)
}
