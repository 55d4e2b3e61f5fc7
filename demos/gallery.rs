//! Render the reference visibility scenes to SVG.
//!
//! Run with: cargo run --example gallery [output-dir]
//! Set RUST_LOG=debug to see the sweep statistics.

use sightfield::bounds::Aabb2;
use sightfield::io::SvgScene;
use sightfield::visibility::{visibility_polygon, VisibilityPolygon};
use sightfield::{Point2, Segment2, VisibilityError};
use std::fs;
use std::path::PathBuf;

/// A wall straight ahead of the observer.
fn wall() -> Vec<Segment2<f64>> {
    vec![Segment2::from_coords(5.0, -5.0, 5.0, 5.0)]
}

/// The observer shut in a box.
fn enclosed() -> Vec<Segment2<f64>> {
    Aabb2::new(Point2::new(-5.0, -5.0), Point2::new(5.0, 5.0))
        .edges()
        .to_vec()
}

/// Two short walls on either side.
fn corridor() -> Vec<Segment2<f64>> {
    vec![
        Segment2::from_coords(10.0, -2.0, 10.0, 2.0),
        Segment2::from_coords(-10.0, -2.0, -10.0, 2.0),
    ]
}

/// A room full of crates, built the way a tile map would feed its solid cells.
fn warehouse() -> Vec<Segment2<f64>> {
    let mut segments = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(160.0, 120.0))
        .edges()
        .to_vec();

    for (x, y) in [(30.0, 20.0), (70.0, 50.0), (110.0, 25.0), (40.0, 85.0), (120.0, 80.0)] {
        let crate_box = Aabb2::new(Point2::new(x, y), Point2::new(x + 15.0, y + 15.0));
        segments.extend(crate_box.edges());
    }
    segments
}

fn render(
    segments: &[Segment2<f64>],
    origin: Point2<f64>,
    radius: f64,
) -> Result<(VisibilityPolygon<f64>, String), VisibilityError> {
    let polygon = visibility_polygon(origin, radius, segments)?;
    let svg = SvgScene::new(segments).with_polygon(&polygon).to_svg();
    Ok((polygon, svg))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("gallery"));
    fs::create_dir_all(&out_dir)?;

    let scenes = [
        ("wall", wall(), Point2::origin(), 10.0),
        ("enclosed", enclosed(), Point2::origin(), 100.0),
        ("corridor", corridor(), Point2::origin(), 50.0),
        ("warehouse", warehouse(), Point2::new(60.0, 40.0), 400.0),
    ];

    for (name, segments, origin, radius) in scenes {
        let (polygon, svg) = render(&segments, origin, radius)?;
        let path = out_dir.join(format!("{name}.svg"));
        fs::write(&path, svg)?;
        println!(
            "{}: {} vertices, area {:.1} -> {}",
            name,
            polygon.len(),
            polygon.area(),
            path.display()
        );
    }

    Ok(())
}
