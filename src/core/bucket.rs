//! Day bucketing and interval pairing.
//!
//! Raw punches are grouped by local calendar day, sorted, and paired into
//! in/out intervals. Tagged events pair by their direction tag; legacy rows
//! without tags fall back to index parity: even index = arrival, odd index
//! = departure.

use crate::models::clock_event::ClockEvent;
use crate::models::direction::Direction;
use chrono_tz::Tz;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Interval {
    pub start: ClockEvent,
    pub end: ClockEvent,
}

impl Interval {
    pub fn seconds(&self) -> i64 {
        (self.end.at - self.start.at).num_seconds()
    }

    pub fn minutes(&self) -> i64 {
        (self.seconds() as f64 / 60.0).round() as i64
    }
}

/// One local calendar day's worth of punches, sorted ascending by instant.
#[derive(Debug, Clone)]
pub struct DayBucket {
    pub day: chrono::NaiveDate,
    pub events: Vec<ClockEvent>,
}

impl DayBucket {
    /// First punch of the day, used for lateness/earliness/status even when
    /// the day has an odd event count.
    pub fn first_event(&self) -> Option<&ClockEvent> {
        self.events.first()
    }

    pub fn last_event(&self) -> Option<&ClockEvent> {
        self.events.last()
    }

    /// Pair punches into in/out intervals.
    ///
    /// When every event carries a direction tag, each `In` opens an interval
    /// and the next `Out` closes it (a missed punch therefore desynchronizes
    /// only its own interval, not the rest of the day). Untagged days pair by
    /// position. A trailing unpaired event is dropped here; it still counts
    /// for the arrival-based metrics through `first_event`.
    pub fn intervals(&self) -> Vec<Interval> {
        if self.events.iter().all(|e| e.direction.is_some()) {
            return self.intervals_by_tag();
        }

        // Parity fallback for legacy rows: even index = in, odd index = out.
        self.events
            .chunks_exact(2)
            .map(|pair| Interval {
                start: pair[0].clone(),
                end: pair[1].clone(),
            })
            .collect()
    }

    fn intervals_by_tag(&self) -> Vec<Interval> {
        let mut out = Vec::new();
        let mut open: Option<&ClockEvent> = None;

        for ev in &self.events {
            match ev.direction {
                Some(Direction::In) => {
                    // A second In while one is open replaces it: the first
                    // one lost its Out and cannot form an interval.
                    open = Some(ev);
                }
                Some(Direction::Out) => {
                    if let Some(start) = open.take() {
                        out.push(Interval {
                            start: start.clone(),
                            end: ev.clone(),
                        });
                    }
                    // Out without a matching In is ignored.
                }
                None => unreachable!("checked by caller"),
            }
        }

        out
    }
}

/// Group `events` by local calendar date in `tz`.
///
/// Input order is irrelevant: events are re-sorted inside each bucket, and
/// the BTreeMap guarantees ascending day keys. Days with no events simply
/// produce no bucket.
pub fn bucket_events(events: &[ClockEvent], tz: Tz) -> Vec<DayBucket> {
    let mut by_day: BTreeMap<chrono::NaiveDate, Vec<ClockEvent>> = BTreeMap::new();

    for ev in events {
        by_day.entry(ev.local_date(tz)).or_default().push(ev.clone());
    }

    by_day
        .into_iter()
        .map(|(day, mut evs)| {
            evs.sort_by_key(|e| e.at);
            DayBucket { day, events: evs }
        })
        .collect()
}
