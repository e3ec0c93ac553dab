use super::{process_pair, BatchOptions, DatasetLayout, ImageOutcome, ImagePair};
use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReport {
    pub id: u64,
    pub stem: String,
    pub outcome: ImageOutcome,
}

/// Aggregated outcome of a batch run, in pair order.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub total: usize,
    pub rendered: usize,
    pub skipped: usize,
    pub no_vanishing_point: usize,
    pub failed: usize,
    pub elapsed_ms: f64,
    pub entries: Vec<ImageReport>,
}

impl BatchReport {
    pub fn from_entries(entries: Vec<ImageReport>, elapsed_ms: f64) -> Self {
        let mut report = Self {
            total: entries.len(),
            elapsed_ms,
            ..Self::default()
        };
        for entry in &entries {
            match entry.outcome {
                ImageOutcome::Rendered { .. } => report.rendered += 1,
                ImageOutcome::Skipped => report.skipped += 1,
                ImageOutcome::NoVanishingPoint { .. } => report.no_vanishing_point += 1,
                ImageOutcome::Failed { .. } => report.failed += 1,
            }
        }
        report.entries = entries;
        report
    }
}

/// Processes all pairs in parallel. Per-image failures are recorded in the
/// report; only a thread-pool setup failure aborts.
pub fn run_batch(
    pairs: &[ImagePair],
    layout: &DatasetLayout,
    opts: &BatchOptions,
) -> Result<BatchReport, String> {
    let start = Instant::now();
    let work = || -> Vec<ImageReport> {
        pairs
            .par_iter()
            .map(|pair| {
                let outcome = process_pair(pair, layout, opts).unwrap_or_else(|err| {
                    warn!("{}: {err}", pair.stem);
                    ImageOutcome::Failed {
                        error: err.to_string(),
                    }
                });
                ImageReport {
                    id: pair.id,
                    stem: pair.stem.clone(),
                    outcome,
                }
            })
            .collect()
    };

    let entries = match opts.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| format!("Failed to build thread pool: {e}"))?
            .install(work),
        None => work(),
    };

    let report = BatchReport::from_entries(entries, start.elapsed().as_secs_f64() * 1000.0);
    info!(
        "Batch done: {} pairs, {} rendered, {} skipped, {} without vanishing point, {} failed ({:.1} ms)",
        report.total,
        report.rendered,
        report.skipped,
        report.no_vanishing_point,
        report.failed,
        report.elapsed_ms
    );
    Ok(report)
}
