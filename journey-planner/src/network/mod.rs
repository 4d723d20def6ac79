//! The subway map: a directed multigraph of segments.
//!
//! The map itself never changes once built. Network conditions live on the
//! [`Station`] and [`Line`] handles it shares with its callers, so closing a
//! station or suspending a line through any handle is seen by the next query.

mod error;
pub mod fixture;
pub mod spec;

use std::collections::HashMap;

use crate::domain::{Line, Segment, Station};

pub use error::NetworkError;

/// An ordered collection of segments.
///
/// No connectivity invariant is enforced: a map may be disconnected, and
/// self-loop segments are accepted (though no route will ever use one).
#[derive(Debug, Clone, Default)]
pub struct SubwayMap {
    segments: Vec<Segment>,

    /// Map from station to indices into `segments` of the segments leaving it.
    /// Indices are in map order.
    departures: HashMap<Station, Vec<usize>>,

    /// One handle per station name: declared first, then first-seen.
    stations: Vec<Station>,

    /// One handle per line name: declared first, then first-seen.
    lines: Vec<Line>,
}

impl SubwayMap {
    /// Create a map from segments, keeping their order.
    pub fn new(segments: Vec<Segment>) -> Self {
        let mut departures: HashMap<Station, Vec<usize>> = HashMap::new();
        let mut stations: Vec<Station> = Vec::new();
        let mut lines: Vec<Line> = Vec::new();

        for (idx, segment) in segments.iter().enumerate() {
            departures
                .entry(segment.from().clone())
                .or_default()
                .push(idx);

            for station in [segment.from(), segment.to()] {
                if !stations.contains(station) {
                    stations.push(station.clone());
                }
            }
            if !lines.contains(segment.line()) {
                lines.push(segment.line().clone());
            }
        }

        Self {
            segments,
            departures,
            stations,
            lines,
        }
    }

    /// Create a map that also knows stations and lines no segment uses.
    ///
    /// Declared handles are listed first, in the given order, followed by any
    /// others the segments mention. A declared name that a segment also uses
    /// should be the same handle the segment holds.
    pub fn with_declared(
        stations: Vec<Station>,
        lines: Vec<Line>,
        segments: Vec<Segment>,
    ) -> Self {
        let mut map = Self::new(segments);
        map.stations = merge_declared(stations, &map.stations);
        map.lines = merge_declared(lines, &map.lines);
        map
    }

    /// Returns all segments in map order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns every known station: declared ones, then those first seen in a
    /// segment.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Returns every known line, in the same order as [`SubwayMap::stations`].
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Look up a station by exact name.
    pub fn station(&self, name: &str) -> Result<&Station, NetworkError> {
        self.stations
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| NetworkError::UnknownStation(name.to_string()))
    }

    /// Look up a line by exact name (without the " Line" suffix).
    pub fn line(&self, name: &str) -> Result<&Line, NetworkError> {
        self.lines
            .iter()
            .find(|l| l.name() == name)
            .ok_or_else(|| NetworkError::UnknownLine(name.to_string()))
    }

    /// Segments leaving `station` on lines that are not currently suspended.
    ///
    /// Suspension is checked on every call, so the result tracks the live
    /// state of the lines.
    pub fn departures_from<'a>(&'a self, station: &Station) -> impl Iterator<Item = &'a Segment> {
        self.departures
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&idx| &self.segments[idx])
            .filter(|segment| !segment.line().is_suspended())
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the map has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

fn merge_declared<T: PartialEq + Clone>(mut declared: Vec<T>, seen: &[T]) -> Vec<T> {
    for item in seen {
        if !declared.contains(item) {
            declared.push(item.clone());
        }
    }
    declared
}
