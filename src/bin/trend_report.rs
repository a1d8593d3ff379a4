use chart_trend::config::report;
use chart_trend::image::io::{load_raster_image, save_gray_u8, write_json_file};
use chart_trend::report::render_text_report;
use chart_trend::TrendAnalyzer;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        eprintln!("Make sure the input is a clear PNG or JPEG image of a price chart.");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = report::load_config(Path::new(&config_path))?;

    let image = load_raster_image(&config.input)?;
    let analyzer = TrendAnalyzer::new(config.analyzer);
    let (edges, report) = analyzer.analyze_image_with_report(&image);

    write_json_file(&config.output.report_json, &report)?;
    if let Some(path) = &config.output.edge_map_image {
        save_gray_u8(edges.as_gray(), path)?;
        println!("Saved edge map to {}", path.display());
    }

    println!("{}", render_text_report(&report.trends));
    println!(
        "Saved analysis of {}x{} image to {} ({:.1} ms)",
        report.input.width,
        report.input.height,
        config.output.report_json.display(),
        report.timing.total_ms
    );

    Ok(())
}

fn usage() -> String {
    "Usage: trend_report <config.json>".to_string()
}
