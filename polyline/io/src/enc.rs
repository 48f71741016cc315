//! Encoder
use crate::{varint::encode_signed, LatLng, RawPoint, HEADER};

/// Encodes a sequence of points as a polyline.
///
/// The output starts with [`HEADER`] and can be read back by
/// [`PointDecoder`](crate::PointDecoder).
#[derive(Debug, Clone)]
pub struct PointEncoder {
    data: String,
    /// The last point pushed, to which the next delta is relative
    last: RawPoint,
}

impl Default for PointEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PointEncoder {
    /// Construct a `PointEncoder`
    pub fn new() -> Self {
        Self {
            data: HEADER.to_owned(),
            last: RawPoint::default(),
        }
    }

    /// Take the encoded data, resetting `self`.
    pub fn take_string(&mut self) -> String {
        std::mem::replace(self, Self::new()).data
    }

    pub fn push_raw(&mut self, point: RawPoint) {
        let d_lat = point.lat.wrapping_sub(self.last.lat);
        let d_lng = point.lng.wrapping_sub(self.last.lng);
        self.last = point;

        self.data.extend(encode_signed(d_lat).iter().map(|&c| c as char));
        self.data.extend(encode_signed(d_lng).iter().map(|&c| c as char));
    }

    /// Push a point in degrees. It's rounded to the nearest representable
    /// value.
    pub fn push(&mut self, point: LatLng) {
        self.push_raw(point.to_raw());
    }
}

impl Extend<RawPoint> for PointEncoder {
    fn extend<T: IntoIterator<Item = RawPoint>>(&mut self, iter: T) {
        for point in iter {
            self.push_raw(point);
        }
    }
}

impl Extend<LatLng> for PointEncoder {
    fn extend<T: IntoIterator<Item = LatLng>>(&mut self, iter: T) {
        for point in iter {
            self.push(point);
        }
    }
}

impl std::iter::FromIterator<RawPoint> for PointEncoder {
    fn from_iter<T: IntoIterator<Item = RawPoint>>(iter: T) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl std::iter::FromIterator<LatLng> for PointEncoder {
    fn from_iter<T: IntoIterator<Item = LatLng>>(iter: T) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}
