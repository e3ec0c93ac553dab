use std::env;
use std::path::Path;
use vp_dataset::config::organize;
use vp_dataset::dataset::{export_training_layout, DatasetLayout};
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
    let config = organize::load_config(Path::new(&config_path))?;

    let processed = DatasetLayout::new(&config.processed_dir);
    let report = export_training_layout(
        &processed,
        &config.source_extensions(),
        &config.train_dir,
        config.captions_dir.as_deref(),
        config.clear_existing,
    )?;
    if let Some(path) = &config.report_json {
        write_json_file(path, &report)?;
    }

    println!(
        "Exported {} pairs into {} ({} with captions)",
        report.exported,
        config.train_dir.display(),
        report.captions
    );
    if report.missing_control > 0 {
        println!(
            "Skipped {} source images without a grid-only render",
            report.missing_control
        );
    }
    Ok(())
}

fn usage() -> String {
    "Usage: vp_organize <config.json>".to_string()
}
