//! Cosmetic telemetry feed and station clock for the console shell.
//!
//! Entries are synthesized on a timer and carry no meaning beyond set
//! dressing; nothing downstream parses them.

use bevy::prelude::*;
use rand::Rng;
use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

/// Maximum entries retained in the feed.
pub const FEED_LIMIT: usize = 20;

/// Seconds between synthesized entries.
const FEED_INTERVAL: f32 = 3.0;

/// Seconds between clock refreshes.
const CLOCK_INTERVAL: f32 = 0.1;

const EVENT_NAMES: &[&str] = &[
    "ORBITAL_STABILIZATION",
    "SPECTRAL_ANALYSIS",
    "GRAVITY_WELL_DETECTION",
    "CORE_SYNC_PROTOCOL",
    "THERMAL_REGULATION",
    "DATA_LINK_ESTABLISHED",
];

/// Severity tag shown next to each feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Stable,
    Warning,
}

impl EntryStatus {
    pub fn label(self) -> &'static str {
        match self {
            EntryStatus::Stable => "STABLE",
            EntryStatus::Warning => "WARNING",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryEntry {
    pub timestamp: String,
    pub event: &'static str,
    pub value: String,
    pub status: EntryStatus,
}

/// Rolling feed of synthesized entries, newest first.
#[derive(Resource)]
pub struct TelemetryFeed {
    pub entries: VecDeque<TelemetryEntry>,
    timer: Timer,
}

impl Default for TelemetryFeed {
    fn default() -> Self {
        Self {
            entries: VecDeque::with_capacity(FEED_LIMIT),
            timer: Timer::from_seconds(FEED_INTERVAL, TimerMode::Repeating),
        }
    }
}

impl TelemetryFeed {
    /// Push an entry at the front, evicting the oldest past [`FEED_LIMIT`].
    pub fn push(&mut self, entry: TelemetryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(FEED_LIMIT);
    }
}

/// Station clock string, refreshed on a short timer rather than every frame.
#[derive(Resource)]
pub struct StationClock {
    pub display: String,
    timer: Timer,
}

impl Default for StationClock {
    fn default() -> Self {
        Self {
            display: String::from("--:--:--"),
            timer: Timer::from_seconds(CLOCK_INTERVAL, TimerMode::Repeating),
        }
    }
}

/// Format seconds-since-midnight as HH:MM:SS.
pub fn format_clock(seconds_of_day: u64) -> String {
    let hours = seconds_of_day / 3600;
    let minutes = (seconds_of_day % 3600) / 60;
    let seconds = seconds_of_day % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

fn synthesize_entry(rng: &mut impl Rng, timestamp: String) -> TelemetryEntry {
    let event = EVENT_NAMES[rng.gen_range(0..EVENT_NAMES.len())];
    let magnitude: f32 = rng.gen_range(0.0..100.0);
    let unit = if rng.gen_bool(0.5) { "%" } else { "KM/s" };
    let status = if rng.gen_bool(0.1) {
        EntryStatus::Warning
    } else {
        EntryStatus::Stable
    };
    TelemetryEntry {
        timestamp,
        event,
        value: format!("{magnitude:.2} {unit}"),
        status,
    }
}

fn seconds_of_day() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() % 86_400)
        .unwrap_or(0)
}

pub fn tick_telemetry(time: Res<Time>, mut feed: ResMut<TelemetryFeed>) {
    if !feed.timer.tick(time.delta()).just_finished() {
        return;
    }
    let timestamp = format_clock(seconds_of_day());
    let entry = synthesize_entry(&mut rand::thread_rng(), timestamp);
    feed.push(entry);
}

pub fn tick_clock(time: Res<Time>, mut clock: ResMut<StationClock>) {
    if !clock.timer.tick(time.delta()).just_finished() {
        return;
    }
    clock.display = format_clock(seconds_of_day());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formats_boundaries() {
        assert_eq!(format_clock(0), "00:00:00");
        assert_eq!(format_clock(3_661), "01:01:01");
        assert_eq!(format_clock(86_399), "23:59:59");
    }

    #[test]
    fn feed_evicts_past_limit() {
        let mut feed = TelemetryFeed::default();
        for i in 0..FEED_LIMIT + 5 {
            feed.push(TelemetryEntry {
                timestamp: format!("{i}"),
                event: "ORBITAL_STABILIZATION",
                value: String::from("1.00 %"),
                status: EntryStatus::Stable,
            });
        }
        assert_eq!(feed.entries.len(), FEED_LIMIT);
        // Newest first.
        assert_eq!(feed.entries[0].timestamp, format!("{}", FEED_LIMIT + 4));
    }

    #[test]
    fn synthesized_entries_are_well_formed() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let entry = synthesize_entry(&mut rng, String::from("00:00:00"));
            assert!(EVENT_NAMES.contains(&entry.event));
            assert!(entry.value.ends_with('%') || entry.value.ends_with("KM/s"));
        }
    }
}
