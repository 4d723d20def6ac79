//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Line, Route, Run, Station};
use crate::planner::Optimise;

/// Request to plan routes between two stations.
#[derive(Debug, Deserialize)]
pub struct RoutesRequest {
    /// Origin station name
    pub from: String,

    /// Destination station name
    pub to: String,

    /// What to minimise (defaults to the configured optimisation)
    pub optimise: Option<Optimise>,

    /// Maximum number of routes to return (capped by configuration)
    pub limit: Option<usize>,
}

/// A run of the route on a single line.
#[derive(Debug, Serialize)]
pub struct LegResult {
    /// Boarding station
    pub from: String,

    /// Alighting station
    pub to: String,

    /// Line display name (e.g. "Victoria Line")
    pub line: String,

    /// Minutes on this line
    pub duration_mins: i64,

    /// Number of segments travelled
    pub stops: usize,
}

impl LegResult {
    pub fn from_run(run: &Run<'_>) -> Self {
        Self {
            from: run.from.name().to_string(),
            to: run.to.name().to_string(),
            line: run.line.to_string(),
            duration_mins: run.total_duration().num_minutes(),
            stops: run.segments.len(),
        }
    }
}

/// A route option.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Origin station name
    pub origin: String,

    /// Destination station name
    pub destination: String,

    /// Total duration in minutes
    pub duration_mins: i64,

    /// Number of changes
    pub changes: usize,

    /// Printable summary
    pub summary: String,

    /// One entry per line travelled
    pub legs: Vec<LegResult>,
}

impl RouteResult {
    pub fn from_route(route: &Route) -> Self {
        Self {
            origin: route.origin().name().to_string(),
            destination: route.destination().name().to_string(),
            duration_mins: route.total_duration().num_minutes(),
            changes: route.num_changes(),
            summary: route.summarize(),
            legs: route.runs().map(|run| LegResult::from_run(&run)).collect(),
        }
    }
}

/// Response for a route query.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    /// Optimisation the routes are ranked by
    pub optimise: Optimise,

    /// Routes, best first
    pub routes: Vec<RouteResult>,
}

/// A station and its current state.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StationResult {
    pub name: String,
    pub closed: bool,
}

impl StationResult {
    pub fn from_station(station: &Station) -> Self {
        Self {
            name: station.name().to_string(),
            closed: station.is_closed(),
        }
    }
}

/// A line and its current state.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LineResult {
    pub name: String,
    pub suspended: bool,
}

impl LineResult {
    pub fn from_line(line: &Line) -> Self {
        Self {
            name: line.name().to_string(),
            suspended: line.is_suspended(),
        }
    }
}

/// Response listing stations.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationResult>,
}

/// Response listing lines.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<LineResult>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Segment;

    #[test]
    fn route_result_groups_runs() {
        let northern = Line::new("Northern");
        let victoria = Line::new("Victoria");
        let camden = Station::new("Camden Town");
        let euston = Station::new("Euston");
        let warren = Station::new("Warren Street");
        let oxford = Station::new("Oxford Circus");

        let route = Route::new(vec![
            Segment::new(camden, euston.clone(), northern, 3),
            Segment::new(euston, warren.clone(), victoria.clone(), 3),
            Segment::new(warren, oxford, victoria, 3),
        ])
        .unwrap();

        let result = RouteResult::from_route(&route);
        assert_eq!(result.origin, "Camden Town");
        assert_eq!(result.destination, "Oxford Circus");
        assert_eq!(result.duration_mins, 9);
        assert_eq!(result.changes, 1);
        assert_eq!(result.legs.len(), 2);
        assert_eq!(result.legs[1].line, "Victoria Line");
        assert_eq!(result.legs[1].duration_mins, 6);
        assert_eq!(result.legs[1].stops, 2);
    }

    #[test]
    fn stationary_route_result() {
        let result = RouteResult::from_route(&Route::stationary(Station::new("Bank")));
        assert_eq!(result.duration_mins, 0);
        assert_eq!(result.changes, 0);
        assert!(result.legs.is_empty());
        assert_eq!(result.summary, "Bank to Bank - 0 minutes, 0 changes");
    }

    #[test]
    fn routes_request_parses_optimise() {
        let req: RoutesRequest =
            serde_json::from_str(r#"{"from": "A", "to": "B", "optimise": "changes"}"#).unwrap();
        assert_eq!(req.optimise, Some(Optimise::Changes));
        assert_eq!(req.limit, None);
    }

    #[test]
    fn station_result_serializes() {
        let station = Station::new("Bank");
        station.close();
        let json = serde_json::to_value(StationResult::from_station(&station)).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Bank", "closed": true}));
    }
}
