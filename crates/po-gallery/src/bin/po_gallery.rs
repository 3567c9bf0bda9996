use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use po_trace::{Contour, OutlineTracer, PathCollector};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "po_gallery")]
#[command(about = "Trace monochrome bitmaps into even-odd vector contours")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Trace the input and write an SVG with fill-rule="evenodd".
    #[command(name = "svg")]
    Svg(SvgArgs),
    /// Print the bit grid, the label grid, and the contour list.
    #[command(name = "dump")]
    Dump(DumpArgs),
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    /// Input file: a PNG (thresholded to black/white) or an ASCII pattern
    /// (.txt, 'X' marks a set cell).
    #[arg(long, required = true)]
    input: PathBuf,

    /// Luma below this counts as a set (black) cell.
    #[arg(long, default_value_t = 128)]
    threshold: u8,

    /// Swap set and unset cells after thresholding.
    #[arg(long, default_value_t = false)]
    invert: bool,
}

#[derive(Args, Debug, Clone)]
struct SvgArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Output SVG path (default: <input stem>.svg next to the input).
    #[arg(long)]
    out: Option<PathBuf>,

    /// SVG units per grid cell.
    #[arg(long, default_value_t = 1)]
    scale: u32,

    /// Also write the contour list as JSON to this path.
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct DumpArgs {
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Serialize)]
struct ContourDto {
    area: i32,
    points: Vec<[i32; 2]>,
}

fn load_tracer(args: &CommonArgs) -> Result<OutlineTracer> {
    let is_text = args
        .input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));

    if is_text {
        let pattern = fs::read_to_string(&args.input)
            .with_context(|| format!("reading {}", args.input.display()))?;
        tracer_from_pattern(&pattern, args.invert)
    } else {
        tracer_from_image(&args.input, args.threshold, args.invert)
    }
}

fn tracer_from_pattern(pattern: &str, invert: bool) -> Result<OutlineTracer> {
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

    let mut tracer = OutlineTracer::new(width, height).context("building tracer")?;
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            if (ch == 'X') != invert {
                tracer
                    .set(x as i32, y as i32)
                    .context("setting pattern cell")?;
            }
        }
    }
    Ok(tracer)
}

fn tracer_from_image(path: &Path, threshold: u8, invert: bool) -> Result<OutlineTracer> {
    let gray = image::ImageReader::open(path)
        .with_context(|| format!("opening {}", path.display()))?
        .decode()
        .with_context(|| format!("decoding {}", path.display()))?
        .into_luma8();

    let width = i32::try_from(gray.width()).context("image width exceeds i32")?;
    let height = i32::try_from(gray.height()).context("image height exceeds i32")?;

    let mut tracer = OutlineTracer::new(width, height).context("building tracer")?;
    for (x, y, px) in gray.enumerate_pixels() {
        if (px.0[0] < threshold) != invert {
            tracer.set(x as i32, y as i32).context("setting cell")?;
        }
    }
    Ok(tracer)
}

fn svg_document(contours: &[Contour], width: i32, height: i32, scale: u32) -> String {
    let s = scale as i64;
    let mut d = String::new();
    for contour in contours {
        for (i, &(x, y)) in contour.points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{cmd}{} {} ", x as i64 * s, y as i64 * s);
        }
        d.push_str("Z ");
    }

    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\">\n  \
         <path fill-rule=\"evenodd\" fill=\"black\" d=\"{d}\"/>\n</svg>\n",
        w = width as i64 * s,
        h = height as i64 * s,
        d = d.trim_end(),
    )
}

fn run_svg(args: &SvgArgs) -> Result<()> {
    let mut tracer = load_tracer(&args.common)?;
    let mut sink = PathCollector::new();
    tracer.trace(&mut sink);
    let contours = sink.contours();

    let out_path = args.out.clone().unwrap_or_else(|| {
        let stem = args
            .common
            .input
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        args.common
            .input
            .parent()
            .unwrap_or(Path::new("."))
            .join(format!("{stem}.svg"))
    });

    let svg = svg_document(contours, tracer.width(), tracer.height(), args.scale);
    fs::write(&out_path, svg).with_context(|| format!("writing {}", out_path.display()))?;
    println!(
        "{}: {} contours -> {}",
        args.common.input.display(),
        contours.len(),
        out_path.display()
    );

    if let Some(json_path) = &args.json {
        let dtos: Vec<ContourDto> = contours
            .iter()
            .map(|c| ContourDto {
                area: c.area,
                points: c.points.iter().map(|&(x, y)| [x, y]).collect(),
            })
            .collect();
        let file = fs::File::create(json_path)
            .with_context(|| format!("creating {}", json_path.display()))?;
        serde_json::to_writer_pretty(file, &dtos)
            .with_context(|| format!("writing JSON to {}", json_path.display()))?;
        println!("contours written to {}", json_path.display());
    }

    Ok(())
}

fn run_dump(args: &DumpArgs) -> Result<()> {
    let mut tracer = load_tracer(&args.common)?;
    print!("{}", tracer.render_debug());

    let mut sink = PathCollector::new();
    tracer.trace(&mut sink);
    for contour in sink.contours() {
        println!("area {}: {:?}", contour.area, contour.points);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match &cli.cmd {
        Command::Svg(args) => run_svg(args),
        Command::Dump(args) => run_dump(args),
    }
}
