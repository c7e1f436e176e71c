//! Clock-in/clock-out pairing.
//!
//! A timestamp series alternates clock-in and clock-out times. Consecutive,
//! non-overlapping pairs (0&1, 2&3, ...) form spans. A clock-out earlier in the
//! day than its clock-in means the span crossed midnight, so one day is added.
//! A trailing clock-in without a clock-out is ignored.

use chrono::{Duration, NaiveTime};

/// Elapsed time between a clock-in and a clock-out, corrected for midnight rollover.
pub fn span_duration(start: NaiveTime, end: NaiveTime) -> Duration {
    let span = end.signed_duration_since(start);
    if span < Duration::zero() {
        span + Duration::days(1)
    } else {
        span
    }
}

/// Lazy iterator over the spans of a timestamp series.
///
/// Borrows the series, so it can be recreated any number of times.
#[derive(Debug, Clone)]
pub struct Spans<'a> {
    pairs: std::slice::ChunksExact<'a, NaiveTime>,
}

impl<'a> Spans<'a> {
    pub fn new(timestamps: &'a [NaiveTime]) -> Self {
        Self {
            pairs: timestamps.chunks_exact(2),
        }
    }
}

impl Iterator for Spans<'_> {
    type Item = Duration;

    fn next(&mut self) -> Option<Self::Item> {
        self.pairs.next().map(|pair| span_duration(pair[0], pair[1]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pairs.size_hint()
    }
}

impl ExactSizeIterator for Spans<'_> {}

pub trait SpanCalculator {
    fn spans(&self) -> Spans<'_>;
    fn total_duration(&self) -> Duration;
    /// Number of timestamps left over after pairing (0 or 1).
    fn unpaired(&self) -> usize;
}

impl SpanCalculator for [NaiveTime] {
    fn spans(&self) -> Spans<'_> {
        Spans::new(self)
    }

    fn total_duration(&self) -> Duration {
        self.spans().fold(Duration::zero(), |acc, span| acc + span)
    }

    fn unpaired(&self) -> usize {
        self.len() % 2
    }
}
