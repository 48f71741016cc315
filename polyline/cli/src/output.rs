//! Printing decoded routes
use flexpolyline_io::{decode, LatLng};
use miniserde::{json, Serialize};
use std::io::{self, Write};

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `lat,lng` per line. Routes are separated by an empty line.
    Text,
    /// A JSON array of `{"latitude", "longitude"}` objects per line.
    Json,
}

/// The coordinate shape consumed by the map view.
#[derive(Serialize)]
struct Coordinate {
    latitude: f64,
    longitude: f64,
}

/// Round to the nearest value printed with five decimal digits.
fn round5(x: f64) -> f64 {
    (x * 1e5).round() / 1e5
}

pub fn write_route(out: &mut impl Write, format: Format, points: &[LatLng]) -> io::Result<()> {
    match format {
        Format::Text => {
            for p in points {
                writeln!(out, "{:.5},{:.5}", p.lat, p.lng)?;
            }
        }
        Format::Json => {
            let coords: Vec<_> = points
                .iter()
                .map(|p| Coordinate {
                    latitude: round5(p.lat),
                    longitude: round5(p.lng),
                })
                .collect();
            writeln!(out, "{}", json::to_string(&coords))?;
        }
    }
    Ok(())
}

/// Decode and print every route. A route that fails to decode is reported
/// to `err` and none of its points are printed.
///
/// Returns `false` if any of the routes failed to decode.
pub fn write_routes(
    out: &mut impl Write,
    err: &mut impl Write,
    format: Format,
    polylines: &[String],
) -> io::Result<bool> {
    let mut num_printed = 0;
    let mut all_ok = true;

    for (i, polyline) in polylines.iter().enumerate() {
        match decode(polyline) {
            Ok(points) => {
                log::debug!("Route #{}: {} point(s)", i, points.len());
                if num_printed > 0 && format == Format::Text {
                    writeln!(out)?;
                }
                write_route(out, format, &points)?;
                num_printed += 1;
            }
            Err(e) => {
                log::warn!("Route #{} could not be decoded: {:?}", i, e);
                writeln!(err, "route unavailable: {}", Error::from(e))?;
                all_ok = false;
            }
        }
    }

    Ok(all_ok)
}
