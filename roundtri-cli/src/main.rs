//! `roundtri` CLI: print or write the rounded-triangle outline.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use roundtri_geometry::types::{Point, RoundedTriangle, Scalar, TriangleSpec};
use roundtri_svg::{YAxis, render, rounded_triangle_path, snippet};

#[derive(Parser)]
#[command(version, about = "Rounded-corner isosceles triangle SVG path generator")]
struct Cli {
    /// Base half-width a (base vertices at (-a, 0) and (a, 0))
    #[arg(
        short = 'a',
        long = "half-width",
        default_value_t = 96.0,
        allow_negative_numbers = true
    )]
    half_width: Scalar,

    /// Height of the apex below the base
    #[arg(
        short = 'H',
        long = "height",
        default_value_t = 100.0,
        allow_negative_numbers = true
    )]
    height: Scalar,

    /// Corner radius (clamped to the largest that fits)
    #[arg(
        short = 'r',
        long = "radius",
        default_value_t = 12.0,
        allow_negative_numbers = true
    )]
    radius: Scalar,

    /// Sweep-flag convention for the emitted path: "down" (SVG screen
    /// coordinates) or "up" (vertical flip handled by the caller)
    #[arg(long = "y-axis", default_value = "down", value_parser = parse_y_axis)]
    y_axis: YAxis,

    /// Print only the path data
    #[arg(long)]
    path_only: bool,

    /// Write a standalone SVG document to FILE
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn parse_y_axis(s: &str) -> Result<YAxis, String> {
    match s.to_lowercase().as_str() {
        "down" => Ok(YAxis::Down),
        "up" => Ok(YAxis::Up),
        _ => Err(format!("unknown y-axis \"{s}\": expected \"down\" or \"up\"")),
    }
}

fn main() {
    let cli = Cli::parse();

    let spec = match TriangleSpec::new(cli.half_width, cli.height, cli.radius) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let (path_d, tri) = rounded_triangle_path(&spec, cli.y_axis);

    if tri.radius < spec.r() {
        eprintln!(
            "Warning: radius {} does not fit; clamped to {:.6}",
            spec.r(),
            tri.radius
        );
    }

    if cli.path_only {
        println!("{path_d}");
    } else {
        print_report(&spec, &tri, &path_d, cli.y_axis);
    }

    if let Some(ref file) = cli.output {
        write_svg(file, &spec);
    }
}

fn fmt_point(p: Point) -> String {
    format!("({:.6}, {:.6})", p.x, p.y)
}

fn print_report(spec: &TriangleSpec, tri: &RoundedTriangle, path_d: &str, axis: YAxis) {
    println!("triangle: a = {}, h = {}", spec.a(), spec.h());
    println!(
        "radius: requested {}, used {:.6} (max {:.6})",
        spec.r(),
        tri.radius,
        spec.max_radius()
    );
    println!(
        "offsets: base {:.6}, apex {:.6}",
        tri.base_offset, tri.apex_offset
    );
    println!("lateral edge: {:.6}", spec.lateral_len());
    println!();

    for (fillet, name) in [(&tri.left, "A"), (&tri.right, "B"), (&tri.apex, "C")] {
        println!(
            "corner {name} {}: entry {}, exit {}, center {}",
            fmt_point(fillet.vertex),
            fmt_point(fillet.entry),
            fmt_point(fillet.exit),
            fmt_point(fillet.center)
        );
    }
    println!();

    println!("path: {path_d}");
    println!();
    println!("{}", snippet(spec, axis));
}

fn write_svg(file: &Path, spec: &TriangleSpec) {
    let svg_str = render(spec).to_string();
    match fs::write(file, &svg_str) {
        Ok(()) => {
            eprintln!("Wrote {}", file.display());
        }
        Err(e) => {
            eprintln!("Error writing {}: {e}", file.display());
            process::exit(1);
        }
    }
}
