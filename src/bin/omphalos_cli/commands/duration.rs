// ABOUTME: Duration subcommands: seconds to compact text and back

use super::print_json;
use anyhow::Result;
use omphalos::duration::{format_duration, parse_duration};

pub fn format(seconds: f64) {
    println!("{}", format_duration(seconds));
}

pub fn parse(text: &str) -> Result<()> {
    print_json(&parse_duration(text)?)
}
