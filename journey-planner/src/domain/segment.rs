//! Segment type.

use std::fmt;

use chrono::Duration;

use super::{Line, Station};

/// A directed, timed hop between two adjacent stations on one line.
///
/// Segments are immutable. Two segments are equal when they join the same
/// stations in the same direction on the same line; the average journey time
/// is not part of their identity.
#[derive(Debug, Clone)]
pub struct Segment {
    from: Station,
    to: Station,
    line: Line,
    avg: u32,
}

impl Segment {
    /// Creates a segment taking `avg` minutes on average.
    pub fn new(from: Station, to: Station, line: Line, avg: u32) -> Self {
        Self {
            from,
            to,
            line,
            avg,
        }
    }

    /// Returns the departure station.
    pub fn from(&self) -> &Station {
        &self.from
    }

    /// Returns the arrival station.
    pub fn to(&self) -> &Station {
        &self.to
    }

    /// Returns the line this segment runs on.
    pub fn line(&self) -> &Line {
        &self.line
    }

    /// Average journey time in minutes.
    pub fn avg(&self) -> u32 {
        self.avg
    }

    /// Average journey time as a Duration.
    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.avg))
    }

    /// Returns true if the segment leaves and arrives at the same station.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.line == other.line
    }
}

impl Eq for Segment {}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {} by {}", self.from, self.to, self.line)
    }
}
