//! Extracts polylines from routing service responses
use miniserde::{json, Deserialize};

use crate::Error;

/// The subset of a routing response we care about. Unknown fields are
/// ignored.
#[derive(Debug, Deserialize)]
struct Response {
    routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
struct Route {
    sections: Vec<Section>,
}

#[derive(Debug, Deserialize)]
struct Section {
    /// Absent unless the polyline was requested
    polyline: Option<String>,
}

/// Get the polylines of all sections of all routes, in order.
pub fn section_polylines(text: &str) -> Result<Vec<String>, Error> {
    let response: Response = json::from_str(text)?;

    let polylines: Vec<String> = response
        .routes
        .into_iter()
        .flat_map(|route| route.sections)
        .filter_map(|section| section.polyline)
        .collect();

    log::debug!("Found {} section polyline(s)", polylines.len());

    if polylines.is_empty() {
        Err(Error::NoRoute)
    } else {
        Ok(polylines)
    }
}

/// Split the input into polylines.
///
/// If `route_json` is `true`, `text` is a routing response. Otherwise, each
/// non-empty line is a polyline.
pub fn polylines_from_text(text: &str, route_json: bool) -> Result<Vec<String>, Error> {
    if route_json {
        section_polylines(text)
    } else {
        Ok(text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response() {
        let text = r#"{
            "routes": [
                {
                    "id": "b3b8b6a4",
                    "sections": [
                        {"id": "s1", "type": "vehicle", "polyline": "BFAoz5xJ67i1B"},
                        {"id": "s2", "type": "vehicle"},
                        {"id": "s3", "type": "vehicle", "polyline": "BFACB"}
                    ]
                }
            ]
        }"#;

        assert_eq!(
            section_polylines(text).unwrap(),
            vec!["BFAoz5xJ67i1B", "BFACB"]
        );
    }

    #[test]
    fn no_route() {
        let text = r#"{"notices": [{"title": "Route calculation failed"}], "routes": []}"#;
        match section_polylines(text) {
            Err(Error::NoRoute) => {}
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn malformed_response() {
        match section_polylines("{\"routes\": ") {
            Err(Error::Json(_)) => {}
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn lines() {
        assert_eq!(
            polylines_from_text("BFACB\n\n  BFA  \r\n", false).unwrap(),
            vec!["BFACB", "BFA"]
        );
    }
}
