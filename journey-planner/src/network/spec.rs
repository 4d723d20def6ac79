//! JSON network descriptions.
//!
//! A description lists the lines and stations once, then the segments by
//! name:
//!
//! ```json
//! {
//!   "lines": [{ "name": "Northern" }, { "name": "Victoria", "suspended": true }],
//!   "stations": [{ "name": "Camden Town" }, { "name": "Euston", "closed": true }],
//!   "segments": [{ "from": "Camden Town", "to": "Euston", "line": "Northern", "avg": 3 }]
//! }
//! ```
//!
//! Every segment endpoint and line must be declared. Times are whole minutes
//! and cannot be negative. Declarations no segment uses are kept, so a
//! description survives a round trip through [`NetworkSpec::from_map`].

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Line, Segment, Station};

use super::{NetworkError, SubwayMap};

/// A line declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSpec {
    pub name: String,
    #[serde(default)]
    pub suspended: bool,
}

/// A station declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationSpec {
    pub name: String,
    #[serde(default)]
    pub closed: bool,
}

/// A segment, referring to its stations and line by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentSpec {
    pub from: String,
    pub to: String,
    pub line: String,
    /// Average journey time in minutes
    pub avg: u32,
}

/// A complete network description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSpec {
    #[serde(default)]
    pub lines: Vec<LineSpec>,
    #[serde(default)]
    pub stations: Vec<StationSpec>,
    #[serde(default)]
    pub segments: Vec<SegmentSpec>,
}

impl NetworkSpec {
    /// Snapshot a map, including the current closure and suspension flags.
    pub fn from_map(map: &SubwayMap) -> Self {
        Self {
            lines: map
                .lines()
                .iter()
                .map(|line| LineSpec {
                    name: line.name().to_string(),
                    suspended: line.is_suspended(),
                })
                .collect(),
            stations: map
                .stations()
                .iter()
                .map(|station| StationSpec {
                    name: station.name().to_string(),
                    closed: station.is_closed(),
                })
                .collect(),
            segments: map
                .segments()
                .iter()
                .map(|segment| SegmentSpec {
                    from: segment.from().name().to_string(),
                    to: segment.to().name().to_string(),
                    line: segment.line().name().to_string(),
                    avg: segment.avg(),
                })
                .collect(),
        }
    }
}

impl SubwayMap {
    /// Build a map from a description.
    ///
    /// Each declared name gets exactly one handle, shared by every segment
    /// that mentions it. The map lists stations and lines in declaration
    /// order, including those no segment uses.
    pub fn from_spec(spec: &NetworkSpec) -> Result<Self, NetworkError> {
        let mut lines: HashMap<&str, Line> = HashMap::new();
        let mut declared_lines = Vec::with_capacity(spec.lines.len());
        for decl in &spec.lines {
            match lines.entry(decl.name.as_str()) {
                Entry::Occupied(_) => return Err(NetworkError::DuplicateLine(decl.name.clone())),
                Entry::Vacant(slot) => {
                    let line = Line::new(decl.name.clone());
                    if decl.suspended {
                        line.suspend();
                    }
                    declared_lines.push(line.clone());
                    slot.insert(line);
                }
            }
        }

        let mut stations: HashMap<&str, Station> = HashMap::new();
        let mut declared_stations = Vec::with_capacity(spec.stations.len());
        for decl in &spec.stations {
            match stations.entry(decl.name.as_str()) {
                Entry::Occupied(_) => {
                    return Err(NetworkError::DuplicateStation(decl.name.clone()));
                }
                Entry::Vacant(slot) => {
                    let station = Station::new(decl.name.clone());
                    if decl.closed {
                        station.close();
                    }
                    declared_stations.push(station.clone());
                    slot.insert(station);
                }
            }
        }

        let station = |name: &str| {
            stations
                .get(name)
                .cloned()
                .ok_or_else(|| NetworkError::UnknownStation(name.to_string()))
        };

        let segments = spec
            .segments
            .iter()
            .map(|seg| -> Result<Segment, NetworkError> {
                let line = lines
                    .get(seg.line.as_str())
                    .cloned()
                    .ok_or_else(|| NetworkError::UnknownLine(seg.line.clone()))?;
                Ok(Segment::new(station(&seg.from)?, station(&seg.to)?, line, seg.avg))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            lines = lines.len(),
            stations = stations.len(),
            segments = segments.len(),
            "Built network from description"
        );

        Ok(SubwayMap::with_declared(declared_stations, declared_lines, segments))
    }

    /// Build a map from a JSON description.
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        let spec: NetworkSpec = serde_json::from_str(json)?;
        Self::from_spec(&spec)
    }

    /// Load a map from a JSON description file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
