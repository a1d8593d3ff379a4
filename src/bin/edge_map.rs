use chart_trend::config::edge;
use chart_trend::edges::extract_edges;
use chart_trend::image::io::{load_raster_image, save_gray_u8, write_json_file};
use chart_trend::regions::{timeframe_regions, Region, Timeframe};
use chart_trend::segments::{find_segments, LineSegment};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = edge::load_config(Path::new(&config_path))?;

    let image = load_raster_image(&config.input)?;
    let edges = extract_edges(&image, &config.edges);

    let slices = timeframe_regions(edges.width(), edges.height())
        .into_iter()
        .map(|(timeframe, region)| SliceSegments {
            timeframe,
            region,
            segments: find_segments(&edges.region_view(&region), &config.hough),
        })
        .collect::<Vec<_>>();

    let summary = EdgeMapSummary {
        width: edges.width(),
        height: edges.height(),
        edge_pixels: edges.edge_count(),
        segment_count: slices.iter().map(|s| s.segments.len()).sum(),
        slices,
    };

    save_gray_u8(edges.as_gray(), &config.output.edge_map_image)?;
    write_json_file(&config.output.segments_json, &summary)?;

    println!(
        "Saved edge map to {} ({} edge pixels)",
        config.output.edge_map_image.display(),
        summary.edge_pixels
    );
    println!(
        "Saved {} line segments to {}",
        summary.segment_count,
        config.output.segments_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: edge_map <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SliceSegments {
    timeframe: Timeframe,
    region: Region,
    segments: Vec<LineSegment>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EdgeMapSummary {
    width: usize,
    height: usize,
    edge_pixels: usize,
    segment_count: usize,
    slices: Vec<SliceSegments>,
}
