// CSV ingestion — reads interaction exports into raw records.
//
// Rows are loaded verbatim as string field maps and enqueued in file
// order; nothing is validated here. The engine's process phase decides
// what is usable.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use tracing::info;

use crate::analytics::engine::EngagementEngine;
use crate::structures::queue::RawRecord;

/// Read `path` and enqueue every row onto the engine's staging queue.
/// Returns the number of rows enqueued.
pub fn load_csv(engine: &mut EngagementEngine, path: &Path) -> Result<usize> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut reader = csv::Reader::from_reader(file);

    let spinner = ProgressBar::new_spinner();
    let mut rows = 0usize;

    for result in reader.deserialize::<RawRecord>() {
        let record = result.with_context(|| format!("reading row {} of {}", rows + 1, path.display()))?;
        engine.enqueue_record(record);
        rows += 1;
        if rows % 1000 == 0 {
            spinner.set_message(format!("{rows} rows loaded"));
            spinner.tick();
        }
    }
    spinner.finish_and_clear();

    info!(rows, path = %path.display(), "CSV load complete");
    Ok(rows)
}
