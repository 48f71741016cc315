//! Command-line argument parsing
use std::{path::PathBuf, str::FromStr};
use structopt::StructOpt;

use crate::output::Format;

/// Decodes flexible polylines returned by a routing service into coordinates.
#[derive(Debug, StructOpt)]
#[structopt(name = "routedecode")]
pub struct Opt {
    /// Encoded polylines (or route responses if `--route-json` is given).
    /// Defaults to reading from `-i` or the standard input.
    #[structopt(name = "POLYLINE")]
    pub polylines: Vec<String>,

    /// A path to the input file. Without `--route-json`, each non-empty line
    /// is decoded as a polyline.
    #[structopt(short = "i", parse(from_os_str))]
    pub input: Option<PathBuf>,

    /// Treat the input as a JSON routing response and decode the polyline of
    /// every section of every route.
    #[structopt(long = "route-json")]
    pub route_json: bool,

    /// The output format: `text` or `json`.
    #[structopt(short = "f", long = "format", default_value = "text")]
    pub format: Format,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            _ => Err(format!("unknown format '{}'", s)),
        }
    }
}
