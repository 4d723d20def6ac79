//! Sample network.
//!
//! A small corner of the London Underground around South Kensington and
//! Green Park, used by the demo entry point and by tests.

use crate::domain::{Line, Segment, Station};

use super::SubwayMap;

/// Build the sample London Underground map.
///
/// Times are approximate average minutes between adjacent stations.
///
/// ```
/// use journey_planner::network::fixture::london_underground;
///
/// let map = london_underground();
/// let from = map.station("South Kensington").unwrap();
/// let to = map.station("Oxford Circus").unwrap();
///
/// let routes = map.routes_from(from, to);
/// assert_eq!(routes[0].duration(), 10);
/// ```
pub fn london_underground() -> SubwayMap {
    let piccadilly = Line::new("Piccadilly");
    let victoria_line = Line::new("Victoria");
    let district = Line::new("District");

    let south_kensington = Station::new("South Kensington");
    let knightsbridge = Station::new("Knightsbridge");
    let hyde_park_corner = Station::new("Hyde Park Corner");
    let green_park = Station::new("Green Park");
    let oxford_circus = Station::new("Oxford Circus");
    let victoria = Station::new("Victoria");
    let sloane_square = Station::new("Sloane Square");

    let seg = |from: &Station, to: &Station, line: &Line, avg: u32| {
        Segment::new(from.clone(), to.clone(), line.clone(), avg)
    };

    SubwayMap::new(vec![
        seg(&south_kensington, &knightsbridge, &piccadilly, 3),
        seg(&knightsbridge, &hyde_park_corner, &piccadilly, 4),
        seg(&hyde_park_corner, &green_park, &piccadilly, 2),
        seg(&green_park, &oxford_circus, &victoria_line, 1),
        seg(&green_park, &victoria, &victoria_line, 1),
        seg(&victoria, &green_park, &victoria_line, 1),
        seg(&victoria, &sloane_square, &district, 6),
        seg(&sloane_square, &south_kensington, &district, 3),
        seg(&south_kensington, &sloane_square, &district, 6),
        seg(&sloane_square, &victoria, &district, 6),
    ])
}
