use crate::classify::{Classification, ConsoleCategory};
use std::collections::{BTreeMap, VecDeque};
use std::time::{Duration, Instant};

struct WindowEvent {
    inserted_at: Instant, // for eviction
    category: ConsoleCategory,
    events: usize,
}

/// Sliding-window line counters for the stats board.
pub struct StatsAggregator {
    window: Duration,
    started_at: Instant,
    events: VecDeque<WindowEvent>,
    total_lines: u64,
    total_events: u64,
}

impl StatsAggregator {
    pub fn new(window: Duration) -> Self {
        Self::starting_at(window, Instant::now())
    }

    pub(crate) fn starting_at(window: Duration, started_at: Instant) -> Self {
        Self {
            window,
            started_at,
            events: VecDeque::new(),
            total_lines: 0,
            total_events: 0,
        }
    }

    pub fn push(&mut self, classification: &Classification) {
        self.push_at(
            Instant::now(),
            classification.category,
            classification.events.len(),
        );
    }

    pub(crate) fn push_at(&mut self, now: Instant, category: ConsoleCategory, events: usize) {
        self.events.push_back(WindowEvent {
            inserted_at: now,
            category,
            events,
        });
        self.total_lines += 1;
        self.total_events += events as u64;

        self.evict_window(now);
    }

    fn evict_window(&mut self, now: Instant) {
        while let Some(ev) = self.events.front() {
            if now.duration_since(ev.inserted_at) > self.window {
                self.events.pop_front();
            } else {
                break;
            }
        }
    }

    pub fn snapshot(&mut self) -> StatsSnapshot {
        self.snapshot_at(Instant::now())
    }

    pub(crate) fn snapshot_at(&mut self, now: Instant) -> StatsSnapshot {
        self.evict_window(now);

        let mut category_counts: BTreeMap<ConsoleCategory, u64> = BTreeMap::new();
        let mut window_events = 0;

        for ev in &self.events {
            *category_counts.entry(ev.category).or_insert(0) += 1;
            window_events += ev.events as u64;
        }

        // Until a full window has elapsed, divide by the time actually observed. Clamp to 0.1s
        // so the first lines do not report absurd rates.
        let observed = now.saturating_duration_since(self.started_at).min(self.window);
        let denom = observed.as_secs_f64().clamp(0.1, self.window.as_secs_f64().max(0.1));

        StatsSnapshot {
            window_seconds: self.window.as_secs().max(1),
            lines_per_sec: self.events.len() as f64 / denom,
            window_lines: self.events.len() as u64,
            window_events,
            category_counts,
            total_lines: self.total_lines,
            total_events: self.total_events,
        }
    }
}

pub struct StatsSnapshot {
    pub window_seconds: u64,

    pub lines_per_sec: f64,
    pub window_lines: u64,
    pub window_events: u64,

    /// Only categories seen in the window, in console order.
    pub category_counts: BTreeMap<ConsoleCategory, u64>,

    pub total_lines: u64,
    pub total_events: u64,
}
