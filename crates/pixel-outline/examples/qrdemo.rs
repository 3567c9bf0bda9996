//! Example: trace a small module pattern and print the event stream.
//!
//! Builds a bitmap from an ASCII pattern (`X` = set cell, row by row), dumps
//! the bit and label grids, then prints every contour event in emission
//! order: black silhouettes first, then enclosed holes.
//!
//! Run from the workspace root:
//!   cargo run -p pixel-outline --example qrdemo
//!   cargo run -p pixel-outline --example qrdemo -- --pattern my_pattern.txt

use anyhow::{Context, Result, bail};
use clap::Parser;
use pixel_outline::{ContourSink, OutlineTracer};

const DEFAULT_PATTERN: &str = "  XXX \n  X X \n  X X \n  XXX \n   X  \n    XX";

#[derive(Parser, Debug)]
#[command(about = "Trace an ASCII module pattern into even-odd contours")]
struct Args {
    /// Path to a pattern file; 'X' marks a set cell. Defaults to a built-in
    /// 6x6 demo pattern with one enclosed hole.
    #[arg(long)]
    pattern: Option<String>,
}

struct PrintSink;

impl ContourSink for PrintSink {
    fn begin(&mut self, x: i32, y: i32, area: i32) {
        println!("BEGIN: {x} {y}  {area}");
    }

    fn line_to(&mut self, x: i32, y: i32) {
        println!("LINETO: {x} {y}");
    }

    fn end(&mut self) {
        println!("END");
    }
}

fn tracer_from_pattern(pattern: &str) -> Result<OutlineTracer> {
    let rows: Vec<&str> = pattern.lines().filter(|l| !l.is_empty()).collect();
    if rows.is_empty() {
        bail!("pattern has no rows");
    }

    let width = rows
        .iter()
        .map(|r| r.chars().count())
        .max()
        .unwrap_or_default() as i32;
    let height = rows.len() as i32;

    let mut tracer =
        OutlineTracer::new(width, height).context("building tracer from pattern dimensions")?;
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            if ch == 'X' {
                tracer
                    .set(x as i32, y as i32)
                    .context("setting pattern cell")?;
            }
        }
    }
    Ok(tracer)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let pattern = match &args.pattern {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?
        }
        None => DEFAULT_PATTERN.to_owned(),
    };

    let mut tracer = tracer_from_pattern(&pattern)?;
    print!("{}", tracer.render_debug());
    tracer.trace(&mut PrintSink);
    Ok(())
}
