use flexpolyline_io::DecodeError;
use quick_error::quick_error;
use std::{
    fs,
    io::{self, prelude::*},
};
use structopt::StructOpt;

mod args;
mod output;
mod route;

quick_error! {
    #[derive(Debug)]
    pub enum Error {
        Io(err: io::Error) {
            from()
            display("I/O error: {}", err)
        }
        Json(err: miniserde::Error) {
            from()
            display("malformed route response: {}", err)
        }
        /// The route response doesn't include any polylines.
        NoRoute {
            display("the route response contains no polyline")
        }
        Decode(err: DecodeError) {
            from()
            display("{}", err)
        }
    }
}

fn main() {
    env_logger::init();

    let opt = args::Opt::from_args();
    log::debug!("{:?}", opt);

    match run(&opt) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` if some of the routes couldn't be decoded.
fn run(opt: &args::Opt) -> Result<bool, Error> {
    let polylines = if opt.polylines.is_empty() {
        let text = if let Some(path) = &opt.input {
            log::info!("Reading {:?}", path);
            fs::read_to_string(path)?
        } else {
            log::info!("Reading the standard input");
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        };
        route::polylines_from_text(&text, opt.route_json)?
    } else if opt.route_json {
        let mut polylines = Vec::new();
        for text in opt.polylines.iter() {
            polylines.extend(route::section_polylines(text)?);
        }
        polylines
    } else {
        opt.polylines.clone()
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    let all_ok = output::write_routes(
        &mut stdout.lock(),
        &mut stderr.lock(),
        opt.format,
        &polylines,
    )?;

    Ok(all_ok)
}
