//! Route types.
//!
//! A `Route` is a contiguous walk through the network from an origin
//! station, made of zero or more segments. Everything else about it
//! (duration, changes, the printed summary) is derived from the segments.

use std::collections::HashSet;
use std::fmt;

use chrono::Duration;

use super::{DomainError, Line, Segment, Station};

/// A maximal run of consecutive segments on the same line.
///
/// Runs are what a traveller sees: "Highgate to Euston by Northern Line"
/// rather than every calling point in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    /// Station where the run starts
    pub from: &'a Station,
    /// Station where the run ends
    pub to: &'a Station,
    /// Line the run is on
    pub line: &'a Line,
    /// Segments making up the run, in order
    pub segments: &'a [Segment],
}

impl Run<'_> {
    /// Total minutes spent on this run.
    pub fn duration(&self) -> u32 {
        self.segments.iter().map(Segment::avg).sum()
    }

    /// Time spent on this run as a Duration.
    pub fn total_duration(&self) -> Duration {
        self.segments
            .iter()
            .map(Segment::duration)
            .fold(Duration::zero(), |acc, d| acc + d)
    }
}

/// A route from an origin to a destination.
///
/// # Invariants
///
/// - Consecutive segments connect (`to` of one is `from` of the next)
/// - The first segment, if any, departs from `origin`
///
/// A route with no segments is the zero-length route that starts and ends
/// at its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    origin: Station,
    segments: Vec<Segment>,
}

impl Route {
    /// Constructs a route from a non-empty list of connecting segments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - Segments list is empty (use [`Route::stationary`] instead)
    /// - Segments don't connect
    ///
    /// # Examples
    ///
    /// ```
    /// use journey_planner::domain::{Line, Route, Segment, Station};
    ///
    /// let northern = Line::new("Northern");
    /// let tufnell_park = Station::new("Tufnell Park");
    /// let archway = Station::new("Archway");
    /// let highgate = Station::new("Highgate");
    ///
    /// let route = Route::new(vec![
    ///     Segment::new(tufnell_park, archway.clone(), northern.clone(), 3),
    ///     Segment::new(archway, highgate, northern, 3),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(route.duration(), 6);
    /// assert_eq!(route.num_changes(), 0);
    /// ```
    pub fn new(segments: Vec<Segment>) -> Result<Self, DomainError> {
        let origin = match segments.first() {
            Some(first) => first.from().clone(),
            None => return Err(DomainError::EmptyRoute),
        };

        for window in segments.windows(2) {
            if window[0].to() != window[1].from() {
                return Err(DomainError::Discontiguous {
                    expected: window[0].to().clone(),
                    found: window[1].from().clone(),
                });
            }
        }

        Ok(Route { origin, segments })
    }

    /// The zero-length route at `at`.
    pub fn stationary(at: Station) -> Self {
        Route {
            origin: at,
            segments: Vec::new(),
        }
    }

    /// Builds a route from segments already known to connect from `origin`.
    pub(crate) fn from_parts(origin: Station, segments: Vec<Segment>) -> Self {
        debug_assert!(segments.first().is_none_or(|s| s.from() == &origin));
        debug_assert!(segments.windows(2).all(|w| w[0].to() == w[1].from()));
        Route { origin, segments }
    }

    /// Returns the station the route starts from.
    pub fn origin(&self) -> &Station {
        &self.origin
    }

    /// Returns the station the route ends at.
    pub fn destination(&self) -> &Station {
        self.segments.last().map_or(&self.origin, Segment::to)
    }

    /// Returns all segments in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns true for the zero-length route.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total journey time in minutes.
    pub fn duration(&self) -> u32 {
        self.segments.iter().map(Segment::avg).sum()
    }

    /// Total journey time as a Duration.
    pub fn total_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.duration()))
    }

    /// Returns the number of changes: distinct lines used, minus one.
    ///
    /// Returning to a line used earlier in the route does not count as a
    /// further change.
    pub fn num_changes(&self) -> usize {
        let lines: HashSet<&Line> = self.segments.iter().map(Segment::line).collect();
        lines.len().saturating_sub(1)
    }

    /// Returns the route grouped into runs on a single line.
    pub fn runs(&self) -> impl Iterator<Item = Run<'_>> {
        self.segments
            .chunk_by(|a, b| a.line() == b.line())
            .map(|chunk| Run {
                from: chunk[0].from(),
                to: chunk[chunk.len() - 1].to(),
                line: chunk[0].line(),
                segments: chunk,
            })
    }

    /// Human-readable summary: a headline followed by one line per run.
    ///
    /// ```text
    /// Camden Town to Bond Street - 11 minutes, 2 changes
    ///  - Camden Town to Euston by Northern Line
    ///  - Euston to Oxford Circus by Victoria Line
    ///  - Oxford Circus to Bond Street by Central Line
    /// ```
    pub fn summarize(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {} - {} minutes, {} changes",
            self.origin(),
            self.destination(),
            self.duration(),
            self.num_changes()
        )?;
        for run in self.runs() {
            write!(f, "\n - {} to {} by {}", run.from, run.to, run.line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Underground {
        northern: Line,
        victoria: Line,
        central: Line,
        highgate: Station,
        archway: Station,
        tufnell_park: Station,
        kentish_town: Station,
        camden: Station,
        euston: Station,
        warren_street: Station,
        oxford_circus: Station,
        bond_street: Station,
    }

    impl Underground {
        fn new() -> Self {
            Self {
                northern: Line::new("Northern"),
                victoria: Line::new("Victoria"),
                central: Line::new("Central"),
                highgate: Station::new("Highgate"),
                archway: Station::new("Archway"),
                tufnell_park: Station::new("Tufnell Park"),
                kentish_town: Station::new("Kentish Town"),
                camden: Station::new("Camden Town"),
                euston: Station::new("Euston"),
                warren_street: Station::new("Warren Street"),
                oxford_circus: Station::new("Oxford Circus"),
                bond_street: Station::new("Bond Street"),
            }
        }

        fn seg(&self, from: &Station, to: &Station, line: &Line, avg: u32) -> Segment {
            Segment::new(from.clone(), to.clone(), line.clone(), avg)
        }

        fn tufnell_park_to_highgate(&self) -> Route {
            Route::new(vec![
                self.seg(&self.tufnell_park, &self.archway, &self.northern, 3),
                self.seg(&self.archway, &self.highgate, &self.northern, 3),
            ])
            .unwrap()
        }

        fn highgate_to_oxford_circus(&self) -> Route {
            Route::new(vec![
                self.seg(&self.highgate, &self.archway, &self.northern, 3),
                self.seg(&self.archway, &self.kentish_town, &self.northern, 3),
                self.seg(&self.kentish_town, &self.camden, &self.northern, 3),
                self.seg(&self.camden, &self.euston, &self.northern, 3),
                self.seg(&self.euston, &self.warren_street, &self.victoria, 3),
                self.seg(&self.warren_street, &self.oxford_circus, &self.victoria, 3),
            ])
            .unwrap()
        }

        fn camden_to_bond_street(&self) -> Route {
            Route::new(vec![
                self.seg(&self.camden, &self.euston, &self.northern, 3),
                self.seg(&self.euston, &self.warren_street, &self.victoria, 3),
                self.seg(&self.warren_street, &self.oxford_circus, &self.victoria, 3),
                self.seg(&self.oxford_circus, &self.bond_street, &self.central, 2),
            ])
            .unwrap()
        }
    }

    #[test]
    fn empty_segments_rejected() {
        assert!(matches!(Route::new(vec![]), Err(DomainError::EmptyRoute)));
    }

    #[test]
    fn discontiguous_segments_rejected() {
        let u = Underground::new();
        let result = Route::new(vec![
            u.seg(&u.highgate, &u.archway, &u.northern, 3),
            u.seg(&u.camden, &u.euston, &u.northern, 3),
        ]);
        match result {
            Err(DomainError::Discontiguous { expected, found }) => {
                assert_eq!(expected, u.archway);
                assert_eq!(found, u.camden);
            }
            other => panic!("expected Discontiguous, got {other:?}"),
        }
    }

    #[test]
    fn stationary_route() {
        let u = Underground::new();
        let route = Route::stationary(u.euston.clone());
        assert!(route.is_empty());
        assert_eq!(route.origin(), &u.euston);
        assert_eq!(route.destination(), &u.euston);
        assert_eq!(route.duration(), 0);
        assert_eq!(route.num_changes(), 0);
        assert_eq!(route.runs().count(), 0);
        assert_eq!(route.summarize(), "Euston to Euston - 0 minutes, 0 changes");
    }

    #[test]
    fn can_calculate_number_of_changes() {
        let u = Underground::new();
        assert_eq!(u.tufnell_park_to_highgate().num_changes(), 0);
        assert_eq!(u.highgate_to_oxford_circus().num_changes(), 1);
        assert_eq!(u.camden_to_bond_street().num_changes(), 2);
    }

    #[test]
    fn single_segment_has_no_changes() {
        let u = Underground::new();
        let route = Route::new(vec![u.seg(&u.euston, &u.warren_street, &u.victoria, 3)]).unwrap();
        assert_eq!(route.num_changes(), 0);
    }

    #[test]
    fn returning_to_a_line_is_not_an_extra_change() {
        let u = Underground::new();
        let route = Route::new(vec![
            u.seg(&u.camden, &u.euston, &u.northern, 3),
            u.seg(&u.euston, &u.warren_street, &u.victoria, 3),
            u.seg(&u.warren_street, &u.oxford_circus, &u.northern, 3),
        ])
        .unwrap();
        assert_eq!(route.num_changes(), 1);
        assert_eq!(route.runs().count(), 3);
    }

    #[test]
    fn can_calculate_total_duration() {
        let u = Underground::new();
        assert_eq!(u.tufnell_park_to_highgate().duration(), 6);
        assert_eq!(u.highgate_to_oxford_circus().duration(), 18);
        assert_eq!(u.camden_to_bond_street().duration(), 11);
        assert_eq!(
            u.camden_to_bond_street().total_duration(),
            Duration::minutes(11)
        );
    }

    #[test]
    fn endpoints() {
        let u = Underground::new();
        let route = u.camden_to_bond_street();
        assert_eq!(route.origin(), &u.camden);
        assert_eq!(route.destination(), &u.bond_street);
    }

    #[test]
    fn runs_merge_consecutive_segments() {
        let u = Underground::new();
        let route = u.highgate_to_oxford_circus();
        let runs: Vec<_> = route.runs().collect();

        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].from, &u.highgate);
        assert_eq!(runs[0].to, &u.euston);
        assert_eq!(runs[0].line, &u.northern);
        assert_eq!(runs[0].segments.len(), 4);
        assert_eq!(runs[0].duration(), 12);
        assert_eq!(runs[1].from, &u.euston);
        assert_eq!(runs[1].to, &u.oxford_circus);
        assert_eq!(runs[1].duration(), 6);
        assert_eq!(runs[1].total_duration(), Duration::minutes(6));
    }

    #[test]
    fn summary_omits_calling_points() {
        let u = Underground::new();
        assert_eq!(
            u.tufnell_park_to_highgate().summarize(),
            "Tufnell Park to Highgate - 6 minutes, 0 changes\n \
             - Tufnell Park to Highgate by Northern Line"
        );
    }

    #[test]
    fn summary_shows_changes() {
        let u = Underground::new();
        assert_eq!(
            u.highgate_to_oxford_circus().summarize(),
            [
                "Highgate to Oxford Circus - 18 minutes, 1 changes",
                " - Highgate to Euston by Northern Line",
                " - Euston to Oxford Circus by Victoria Line",
            ]
            .join("\n")
        );
        assert_eq!(
            u.camden_to_bond_street().summarize(),
            [
                "Camden Town to Bond Street - 11 minutes, 2 changes",
                " - Camden Town to Euston by Northern Line",
                " - Euston to Oxford Circus by Victoria Line",
                " - Oxford Circus to Bond Street by Central Line",
            ]
            .join("\n")
        );
    }
}
