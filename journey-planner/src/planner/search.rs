//! Depth-first route search.
//!
//! Enumerates every simple directed walk from an origin to a destination,
//! drops those that change lines at a closed station, and orders the rest
//! by a cost function.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::domain::{Route, Segment, Station};
use crate::network::SubwayMap;

use super::rank::{Optimise, rank_routes};

/// DFS state during search.
struct Search<'a> {
    map: &'a SubwayMap,
    destination: &'a Station,

    /// Stations already departed from on the current path.
    visited: HashSet<&'a Station>,

    /// Segments on the current path.
    path: Vec<&'a Segment>,

    /// Complete paths found so far, in discovery order.
    found: Vec<Vec<&'a Segment>>,
}

impl<'a> Search<'a> {
    fn new(map: &'a SubwayMap, destination: &'a Station) -> Self {
        Self {
            map,
            destination,
            visited: HashSet::new(),
            path: Vec::new(),
            found: Vec::new(),
        }
    }

    /// Explore every walk onward from `current`.
    ///
    /// Reaching the destination ends the walk: no path continues through it.
    fn explore(&mut self, current: &'a Station) {
        if current == self.destination {
            self.found.push(self.path.clone());
            return;
        }

        // Marked before filtering, so a self-loop at `current` is never taken.
        self.visited.insert(current);

        let map = self.map;
        for segment in map.departures_from(current) {
            if self.visited.contains(segment.to()) {
                continue;
            }
            self.path.push(segment);
            self.explore(segment.to());
            self.path.pop();
        }

        self.visited.remove(current);
    }
}

/// Returns the first station where the route changes line while closed.
///
/// Only interior stations are checked: the destination may be closed.
pub(crate) fn closed_interchange(route: &Route) -> Option<&Station> {
    route
        .segments()
        .windows(2)
        .find(|pair| pair[0].to().is_closed() && pair[0].line() != pair[1].line())
        .map(|pair| pair[0].to())
}

impl SubwayMap {
    /// Find all routes from `origin` to `destination`, quickest first.
    ///
    /// Equivalent to [`routes_from_by`](Self::routes_from_by) with
    /// [`Route::duration`] as the cost.
    pub fn routes_from(&self, origin: &Station, destination: &Station) -> Vec<Route> {
        self.routes_from_by(origin, destination, Route::duration)
    }

    /// Find all routes, ordered by a named optimisation.
    pub fn routes_optimised(
        &self,
        origin: &Station,
        destination: &Station,
        optimise: Optimise,
    ) -> Vec<Route> {
        self.routes_from_by(origin, destination, |route| optimise.cost(route))
    }

    /// Find all routes from `origin` to `destination`, ordered by `cost`.
    ///
    /// Routes never depart from the same station twice and never use a
    /// suspended line. A route that changes lines at a closed station is
    /// discarded; passing through a closed station on one line, or ending
    /// there, is allowed. Routes with equal cost keep their discovery order.
    ///
    /// Returns an empty list if no route exists, including when either
    /// station is not on the map. If `origin == destination` the only route
    /// is the zero-length one.
    ///
    /// The number of candidate routes grows exponentially with the density
    /// of the map; this is intended for small networks.
    pub fn routes_from_by<K, F>(&self, origin: &Station, destination: &Station, cost: F) -> Vec<Route>
    where
        K: Ord,
        F: Fn(&Route) -> K,
    {
        let mut search = Search::new(self, destination);
        search.explore(origin);

        let candidates = search.found.len();
        let routes: Vec<Route> = search
            .found
            .into_iter()
            .map(|path| Route::from_parts(origin.clone(), path.into_iter().cloned().collect()))
            .filter(|route| match closed_interchange(route) {
                Some(station) => {
                    trace!(
                        station = %station,
                        segments = route.segments().len(),
                        "Discarding route: interchange at closed station"
                    );
                    false
                }
                None => true,
            })
            .collect();

        debug!(
            origin = %origin,
            destination = %destination,
            candidates,
            kept = routes.len(),
            "Route search complete"
        );

        rank_routes(routes, cost)
    }
}
