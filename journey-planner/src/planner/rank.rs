//! Route ranking.
//!
//! Orders routes by a cost function. The sort is stable, so routes with
//! equal cost stay in the order the search found them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::Route;

/// Error returned when parsing an unknown optimisation name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown optimisation {0:?}: expected \"duration\" or \"changes\"")]
pub struct UnknownOptimise(String);

/// What a traveller wants to minimise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Optimise {
    /// Total journey time
    #[default]
    Duration,
    /// Number of line changes
    Changes,
}

impl Optimise {
    /// The cost of a route under this optimisation. Lower is better.
    pub fn cost(self, route: &Route) -> u64 {
        match self {
            Optimise::Duration => u64::from(route.duration()),
            Optimise::Changes => route.num_changes() as u64,
        }
    }
}

impl FromStr for Optimise {
    type Err = UnknownOptimise;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "duration" => Ok(Optimise::Duration),
            "changes" => Ok(Optimise::Changes),
            other => Err(UnknownOptimise(other.to_string())),
        }
    }
}

impl fmt::Display for Optimise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optimise::Duration => f.write_str("duration"),
            Optimise::Changes => f.write_str("changes"),
        }
    }
}

/// Rank routes by ascending cost.
///
/// Returns routes sorted best-first. Ties keep their input order.
pub fn rank_routes<K, F>(mut routes: Vec<Route>, cost: F) -> Vec<Route>
where
    K: Ord,
    F: Fn(&Route) -> K,
{
    routes.sort_by_key(|route| cost(route));
    routes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Line, Segment, Station};

    fn route(hops: &[(&str, &str, &str, u32)]) -> Route {
        Route::new(
            hops.iter()
                .map(|&(from, to, line, avg)| {
                    Segment::new(Station::new(from), Station::new(to), Line::new(line), avg)
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn parse_optimise() {
        assert_eq!("duration".parse::<Optimise>(), Ok(Optimise::Duration));
        assert_eq!("changes".parse::<Optimise>(), Ok(Optimise::Changes));
        assert!("Duration".parse::<Optimise>().is_err());
        assert_eq!(
            "fastest".parse::<Optimise>().unwrap_err().to_string(),
            "unknown optimisation \"fastest\": expected \"duration\" or \"changes\""
        );
    }

    #[test]
    fn display_matches_parse() {
        for optimise in [Optimise::Duration, Optimise::Changes] {
            assert_eq!(optimise.to_string().parse::<Optimise>(), Ok(optimise));
        }
    }

    #[test]
    fn serde_names() {
        assert_eq!(serde_json::to_string(&Optimise::Changes).unwrap(), "\"changes\"");
        let parsed: Optimise = serde_json::from_str("\"duration\"").unwrap();
        assert_eq!(parsed, Optimise::Duration);
    }

    #[test]
    fn cost() {
        let r = route(&[("A", "B", "X", 4), ("B", "C", "Y", 5)]);
        assert_eq!(Optimise::Duration.cost(&r), 9);
        assert_eq!(Optimise::Changes.cost(&r), 1);
    }

    #[test]
    fn rank_by_duration() {
        let slow = route(&[("A", "B", "X", 10)]);
        let fast = route(&[("A", "C", "X", 2), ("C", "B", "Y", 3)]);

        let ranked = rank_routes(vec![slow.clone(), fast.clone()], Route::duration);
        assert_eq!(ranked, vec![fast, slow]);
    }

    #[test]
    fn rank_by_changes() {
        let direct = route(&[("A", "B", "X", 10)]);
        let change = route(&[("A", "C", "X", 2), ("C", "B", "Y", 3)]);

        let ranked = rank_routes(vec![change.clone(), direct.clone()], Route::num_changes);
        assert_eq!(ranked, vec![direct, change]);
    }

    #[test]
    fn ties_keep_input_order() {
        let first = route(&[("A", "B", "X", 5)]);
        let second = route(&[("A", "C", "Y", 2), ("C", "B", "Y", 3)]);

        let ranked = rank_routes(vec![first.clone(), second.clone()], Route::duration);
        assert_eq!(ranked, vec![first.clone(), second.clone()]);

        let ranked = rank_routes(vec![second.clone(), first.clone()], Route::duration);
        assert_eq!(ranked, vec![second, first]);
    }
}
