//! The stats page on a terminal: counters plus the weekly activity
//! chart, optionally re-rendered on the app's poll interval.

#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // sparkline buckets are 0..=7

use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use flowtrack_core::views::stats::{self, StatsSnapshot, StatsView};
use serde::Serialize;

use crate::commands::common::{ensure_page_access, open_store};
use crate::error::CliError;

const WATCH_TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Serialize)]
struct StatsReport {
    completed_tasks: usize,
    active_tasks: usize,
    total_notes: usize,
}

impl From<StatsSnapshot> for StatsReport {
    fn from(snapshot: StatsSnapshot) -> Self {
        Self {
            completed_tasks: snapshot.tasks.completed,
            active_tasks: snapshot.tasks.active,
            total_notes: snapshot.notes.total,
        }
    }
}

pub fn run_stats(json: bool, watch: bool, data_dir: &Path) -> Result<(), CliError> {
    let store = open_store(data_dir)?;
    ensure_page_access(&store, "stats")?;

    let mut view = StatsView::new(&store);
    print_snapshot(view.refresh(Instant::now()), json)?;

    if !watch {
        return Ok(());
    }
    loop {
        thread::sleep(WATCH_TICK);
        if let Some(snapshot) = view.poll(Instant::now()) {
            println!();
            print_snapshot(snapshot, json)?;
        }
    }
}

fn print_snapshot(snapshot: StatsSnapshot, json: bool) -> Result<(), CliError> {
    if json {
        let report = StatsReport::from(snapshot);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Completed tasks  {}", snapshot.tasks.completed);
    println!("Active tasks     {}", snapshot.tasks.active);
    println!("Notes            {}", snapshot.notes.total);
    println!("This week        {}", sparkline(&stats::activity_bars()));
    Ok(())
}

/// Render percentage bar heights as a block-character sparkline.
fn sparkline(percents: &[f32]) -> String {
    const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    percents
        .iter()
        .map(|percent| {
            let bucket = ((percent / 100.0) * 7.0).round() as usize;
            BLOCKS[bucket.min(BLOCKS.len() - 1)]
        })
        .collect()
}
