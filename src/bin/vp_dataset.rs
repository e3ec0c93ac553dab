use std::env;
use std::path::Path;
use vp_dataset::config::dataset;
use vp_dataset::dataset::{discover_pairs, run_batch, DatasetLayout};
use vp_dataset::image::io::write_json_file;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = dataset::load_config(Path::new(&config_path))?;
    let opts = config.batch.resolve();

    let layout = DatasetLayout::new(&config.output_dir);
    layout.create_dirs()?;

    let pairs = discover_pairs(&config.images_dir, &config.labels_dir, &opts)?;
    if pairs.is_empty() {
        return Err(format!(
            "No image/label pairs found in {} and {}",
            config.images_dir.display(),
            config.labels_dir.display()
        ));
    }
    println!("Processing {} image/label pairs...", pairs.len());

    let report = run_batch(&pairs, &layout, &opts)?;
    if let Some(path) = &config.report_json {
        write_json_file(path, &report)?;
        println!("Saved batch report to {}", path.display());
    }

    println!("Summary:");
    println!("- Rendered {} images", report.rendered);
    println!("- Skipped {} already rendered images", report.skipped);
    println!("- {} images without a usable vanishing point", report.no_vanishing_point);
    println!("- {} images failed", report.failed);
    println!("- Overlays saved to: {}", layout.overlays_dir().display());
    println!("- Grid-only images saved to: {}", layout.vp_only_dir().display());
    Ok(())
}

fn usage() -> String {
    "Usage: vp_dataset <config.json>".to_string()
}
