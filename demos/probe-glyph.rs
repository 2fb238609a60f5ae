// font-probe/demos/probe-glyph.rs
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
use font_probe::canvas::Canvas;
use font_probe::font::Font;
use pathfinder_geometry::rect::RectI;
use pathfinder_geometry::vector::Vector2I;
use std::process;

fn get_args() -> ArgMatches {
    let font_path_arg = Arg::new("FONT-PATH")
        .help("Path to the TTF/OTF font")
        .required(true)
        .index(1);
    let glyph_arg = Arg::new("GLYPH")
        .help("Character to probe")
        .default_value("g")
        .index(2);
    let size_arg = Arg::new("SIZE")
        .help("Pixel size to probe at")
        .default_value("32")
        .index(3);
    Command::new("probe-glyph")
        .version("0.1")
        .about("Renders one glyph the way the analyzer sees it and prints its ink box")
        .arg(font_path_arg)
        .arg(glyph_arg)
        .arg(size_arg)
        .get_matches()
}

fn main() {
    env_logger::init();

    let matches = get_args();

    let font_path = matches
        .get_one::<String>("FONT-PATH")
        .map(|s| s.as_str())
        .unwrap();
    let character = matches
        .get_one::<String>("GLYPH")
        .map(|s| s.as_str())
        .unwrap()
        .chars()
        .next()
        .unwrap();
    let size: u32 = matches
        .get_one::<String>("SIZE")
        .map(|s| s.as_str())
        .unwrap()
        .parse()
        .unwrap();

    let font = match Font::from_path(font_path, 0) {
        Ok(font) => font,
        Err(error) => {
            eprintln!("{} {}: {}", "error:".red().bold(), font_path, error);
            process::exit(1);
        }
    };
    let glyph_id = match font.glyph_for_char(character) {
        Some(glyph_id) => glyph_id,
        None => {
            eprintln!("{} no glyph for {:?}", "error:".red().bold(), character);
            process::exit(1);
        }
    };

    let side = size as i32 * 4;
    let origin = Vector2I::new(side / 4, side / 2);
    let mut canvas = Canvas::new(Vector2I::splat(side));
    if let Err(error) = font.rasterize_glyph(&mut canvas, glyph_id, size as f32, origin) {
        eprintln!("{} {}", "error:".red().bold(), error);
        process::exit(1);
    }

    let bounds = match canvas.ink_bounds() {
        Some(bounds) => bounds,
        None => {
            println!("glyph {}: no ink", glyph_id);
            return;
        }
    };
    let ink_box = RectI::new(bounds.origin() - origin, bounds.size());

    println!(
        "glyph {}: ink box left={} top={} right={} bottom={} ({}x{} px)",
        glyph_id,
        ink_box.min_x(),
        ink_box.min_y(),
        ink_box.max_x(),
        ink_box.max_y(),
        ink_box.width(),
        ink_box.height()
    );
    for y in bounds.min_y()..bounds.max_y() {
        let mut line = String::new();
        let row_start = y as usize * canvas.stride;
        for x in bounds.min_x()..bounds.max_x() {
            let shade = shade(canvas.pixels[row_start + x as usize]);
            line.push(shade);
            line.push(shade);
        }
        println!("{}", line);
    }
}

fn shade(value: u8) -> char {
    if value == 0 {
        ' '
    } else {
        '█'
    }
}
