// font-probe/demos/analyze-font.rs
//
// Copyright © 2026 The font-probe Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use clap::{Arg, ArgMatches, Command};
use colored::Colorize;
use font_probe::analyzer::{self, AnalysisOptions};
use font_probe::ladder::SizeLadder;
use std::process;

fn get_args() -> ArgMatches {
    let font_path_arg = Arg::new("FONT-PATH")
        .help("Path to the TTF/OTF font to analyze")
        .required(true)
        .index(1);
    let epsilon_arg = Arg::new("epsilon")
        .help("Advance difference below which the font counts as monospaced, in pixels")
        .short('e')
        .long("epsilon")
        .value_names(&["PIXELS"]);
    let sizes_arg = Arg::new("sizes")
        .help("Pixel sizes to probe instead of the default ladder")
        .short('s')
        .long("sizes")
        .value_delimiter(',')
        .value_names(&["PX,PX,..."]);
    Command::new("analyze-font")
        .version("0.1")
        .about("Measures a font's real ink extents and recommends render sizes")
        .arg(font_path_arg)
        .arg(epsilon_arg)
        .arg(sizes_arg)
        .get_matches()
}

fn main() {
    env_logger::init();

    let matches = get_args();

    let font_path = matches
        .get_one::<String>("FONT-PATH")
        .map(|s| s.as_str())
        .unwrap();

    let mut options = AnalysisOptions::new();
    if let Some(epsilon) = matches.get_one::<String>("epsilon") {
        match epsilon.parse() {
            Ok(epsilon) => {
                options.monospace_epsilon(epsilon);
            }
            Err(_) => {
                eprintln!("{} invalid epsilon: {}", "error:".red().bold(), epsilon);
                process::exit(2);
            }
        }
    }
    if let Some(sizes) = matches.get_many::<String>("sizes") {
        let sizes: Result<Vec<u32>, _> = sizes.map(|size| size.parse()).collect();
        match sizes {
            Ok(sizes) => {
                options.ladder(SizeLadder::new(sizes));
            }
            Err(_) => {
                eprintln!("{} sizes must be positive integers", "error:".red().bold());
                process::exit(2);
            }
        }
    }

    println!("Analyzing {}...", font_path);
    println!("{}", "=".repeat(70));
    println!();

    let report = match analyzer::analyze_path(font_path, &options) {
        Ok(report) => report,
        Err(error) => {
            eprintln!("{} {}: {}", "error:".red().bold(), font_path, error);
            process::exit(1);
        }
    };

    println!("{}", report);
    println!();
    println!("{}", "=".repeat(70));
}
