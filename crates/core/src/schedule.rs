//! Slot timetable generation.
//!
//! A company's bookable day is described by a [`SlotWindowConfig`]: an
//! opening time, a closing time, and a fixed slot duration. The window is
//! built once at process start from configuration and passed into
//! [`generate_slots`] explicitly, so generation stays pure and testable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};

/// A wall-clock time expressed as whole seconds since midnight.
///
/// Parsed from `H:MM` / `HH:MM` strings. The hour component is not bounded
/// above 23: `"26:00"` parses to 93600 seconds. Stored timetables rely on
/// that looseness, so it is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub fn from_seconds(seconds: u32) -> Self {
        Self(seconds)
    }

    pub fn as_seconds(self) -> u32 {
        self.0
    }

    /// Parses a `HH:MM` string into seconds since midnight.
    ///
    /// Exactly one `:` separator is required and both components must be
    /// non-negative integer literals; anything else is a
    /// [`BookingError::TimeFormat`].
    pub fn parse(text: &str) -> BookingResult<Self> {
        let (hours, minutes) = text
            .split_once(':')
            .ok_or_else(|| BookingError::TimeFormat(format!("expected HH:MM, got {text:?}")))?;

        if minutes.contains(':') {
            return Err(BookingError::TimeFormat(format!(
                "expected a single ':' separator, got {text:?}"
            )));
        }

        let hours: u32 = hours
            .parse()
            .map_err(|_| BookingError::TimeFormat(format!("invalid hour component in {text:?}")))?;
        let minutes: u32 = minutes.parse().map_err(|_| {
            BookingError::TimeFormat(format!("invalid minute component in {text:?}"))
        })?;

        // Hours are unbounded above 23, but the seconds value must still
        // fit in u32
        hours
            .checked_mul(3600)
            .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
            .map(Self)
            .ok_or_else(|| {
                BookingError::TimeFormat(format!("time value out of range in {text:?}"))
            })
    }

    /// Renders the time as `HH:MM`, zero-padding both fields.
    ///
    /// Uniform padding makes `parse` and `format` exact inverses for
    /// whole-minute values, which the slot `time` column depends on for
    /// lexicographic ordering.
    pub fn format(self) -> String {
        let hours = self.0 / 3600;
        let minutes = (self.0 / 60) % 60;
        format!("{hours:02}:{minutes:02}")
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// One company's bookable window: open/close times and slot duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotWindowConfig {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub duration_seconds: u32,
}

impl SlotWindowConfig {
    /// Builds a window, rejecting a zero duration.
    ///
    /// An empty or inverted window (`end <= start`) is accepted and simply
    /// generates no slots.
    pub fn new(start: TimeOfDay, end: TimeOfDay, duration_seconds: u32) -> BookingResult<Self> {
        if duration_seconds == 0 {
            return Err(BookingError::InvalidWindow(
                "slot duration must be positive".to_string(),
            ));
        }

        Ok(Self {
            start,
            end,
            duration_seconds,
        })
    }

    /// Number of whole slots that fit in the window.
    ///
    /// A trailing partial slot is truncated, never emitted.
    pub fn slot_count(&self) -> u32 {
        if self.end <= self.start {
            return 0;
        }
        (self.end.as_seconds() - self.start.as_seconds()) / self.duration_seconds
    }
}

/// Generates the ordered slot start times for a window.
///
/// Slot `i` starts at `start + i * duration_seconds`. The result is pure
/// data; persisting it is the caller's job, done once per batch rather than
/// inside this loop.
pub fn generate_slots(config: &SlotWindowConfig) -> Vec<TimeOfDay> {
    let count = config.slot_count();
    let mut slots = Vec::with_capacity(count as usize);

    let mut start = config.start.as_seconds();
    for _ in 0..count {
        slots.push(TimeOfDay::from_seconds(start));
        start += config.duration_seconds;
    }

    slots
}
