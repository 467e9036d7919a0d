use crate::classify::{StateEvent, classify};
use crate::cli::classify::LineRecord;
use crate::cli::watch::constants::{HIDE_CURSOR, LOOP_IDLE_SLEEP, SHOW_CURSOR};
use crate::cli::watch::pretty::{render_line, render_message, render_status};
use crate::cli::watch::render::{redraw, render_stats};
use crate::cli::watch::stats_aggregation::StatsAggregator;
use crate::conf::DashboardConfig;
use crate::ingest::{IngestError, SourceSpec};
use crate::logging::LogMode;
use crate::state::Dashboard;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

pub fn run_watch(mode: LogMode, config: &DashboardConfig, source: &SourceSpec) -> Result<()> {
    tracing::info!(source = %source.describe(), mode = ?mode, "watching device stream");

    match mode {
        LogMode::Raw => run_raw(source),
        LogMode::Pretty => run_pretty(source, config),
        LogMode::Stats => run_stats(source, config),
        LogMode::Json => run_json(source),
    }
}

fn run_raw(source: &SourceSpec) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in source.open()? {
        writeln!(out, "{}", line?)?;
    }
    Ok(())
}

fn run_json(source: &SourceSpec) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in source.open()? {
        let line = line?;
        let classification = classify(&line);
        let record = LineRecord::new(&line, &classification);
        writeln!(out, "{}", serde_json::to_string(&record)?)?;
    }
    Ok(())
}

fn run_pretty(source: &SourceSpec, config: &DashboardConfig) -> Result<()> {
    let width = config.display.key_id_width;
    let lines = source.open()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut dashboard = Dashboard::new();
    dashboard.connect();
    writeln!(out, "{}", render_status(dashboard.device(), width).bold())?;

    let result = pump_pretty(lines, &mut dashboard, &mut out, width);

    dashboard.disconnect();
    writeln!(out, "{}", render_status(dashboard.device(), width).bold())?;

    result
}

pub(crate) fn pump_pretty(
    lines: impl Iterator<Item = Result<String, IngestError>>,
    dashboard: &mut Dashboard,
    out: &mut impl Write,
    width: usize,
) -> Result<()> {
    for line in lines {
        let line = line?;
        let outcome = dashboard.ingest(&line);

        writeln!(out, "{}", render_line(&line, outcome.classification.category))?;

        let appended = outcome
            .classification
            .events
            .iter()
            .filter(|e| matches!(e, StateEvent::ConversationAppend { .. }))
            .count();
        for message in dashboard.conversation().tail(appended) {
            writeln!(out, "{}", render_message(message))?;
        }

        if outcome.device_changed {
            writeln!(out, "{}", render_status(dashboard.device(), width).bold())?;
        }
    }
    Ok(())
}

/// Messages from the reader thread to the render loop.
enum Feed {
    Opened,
    Line(String),
    Failed(IngestError),
}

fn run_stats(source: &SourceSpec, config: &DashboardConfig) -> Result<()> {
    // Channel from reader thread -> render loop.
    let (tx, rx) = mpsc::channel::<Feed>();

    // Reader thread: source -> normalize -> send(line)
    let source = source.clone();
    let reader_handle = thread::spawn(move || {
        let lines = match source.open() {
            Ok(lines) => lines,
            Err(e) => {
                let _ = tx.send(Feed::Failed(e));
                return;
            }
        };

        if tx.send(Feed::Opened).is_err() {
            return;
        }

        for line in lines {
            let feed = match line {
                Ok(line) => Feed::Line(line),
                Err(e) => Feed::Failed(e),
            };
            let failed = matches!(feed, Feed::Failed(_));

            // If receiver is gone, stop early.
            if tx.send(feed).is_err() || failed {
                break;
            }
        }
        // tx is dropped here, which will disconnect rx.
    });

    ctrlc::set_handler(|| {
        print!("{SHOW_CURSOR}");
        let _ = io::stdout().flush();
        std::process::exit(130);
    })?;

    print!("{HIDE_CURSOR}");
    let _ = io::stdout().flush();

    let render_tick = config.stats.render_tick();
    let mut dashboard = Dashboard::new();
    let mut agg = StatsAggregator::new(config.stats.window());
    let mut last_render: Option<Instant> = None;
    let mut failure = None;

    // Stats render loop
    loop {
        let mut disconnected = false;

        // Drain lines
        loop {
            match rx.try_recv() {
                Ok(Feed::Opened) => {
                    dashboard.connect();
                }
                Ok(Feed::Line(line)) => {
                    let outcome = dashboard.ingest(&line);
                    agg.push(&outcome.classification);
                }
                Ok(Feed::Failed(e)) => {
                    failure = Some(e);
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        if disconnected && dashboard.device().connected {
            dashboard.disconnect();
        }

        if disconnected || last_render.is_none_or(|at| at.elapsed() >= render_tick) {
            let snap = agg.snapshot();
            redraw(&render_stats(&snap, &dashboard, &config.display));
            last_render = Some(Instant::now());
        }

        if disconnected {
            break;
        }

        thread::sleep(LOOP_IDLE_SLEEP);
    }

    // Restore cursor
    print!("{SHOW_CURSOR}");
    let _ = io::stdout().flush();

    // Join reader thread (best effort)
    let _ = reader_handle.join();

    match failure {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
