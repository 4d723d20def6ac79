//! Line type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug)]
struct LineState {
    name: String,
    suspended: AtomicBool,
}

/// A named line, e.g. the Victoria Line.
///
/// Like [`Station`](super::Station), `Line` is a shared handle whose clones
/// observe one `suspended` flag. Identity is the name alone.
///
/// # Examples
///
/// ```
/// use journey_planner::domain::Line;
///
/// let victoria = Line::new("Victoria");
/// assert_eq!(victoria.to_string(), "Victoria Line");
///
/// victoria.suspend();
/// assert_eq!(victoria, Line::new("Victoria"));
/// ```
#[derive(Clone)]
pub struct Line(Arc<LineState>);

impl Line {
    /// Create a running (not suspended) line.
    pub fn new(name: impl Into<String>) -> Self {
        Line(Arc::new(LineState {
            name: name.into(),
            suspended: AtomicBool::new(false),
        }))
    }

    /// Returns the bare line name, without the " Line" suffix.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Returns true if services on this line are currently suspended.
    pub fn is_suspended(&self) -> bool {
        self.0.suspended.load(Ordering::Relaxed)
    }

    /// Suspend the line. Its segments are ignored by route searches.
    pub fn suspend(&self) {
        self.0.suspended.store(true, Ordering::Relaxed);
    }

    /// Resume services on the line.
    pub fn resume(&self) {
        self.0.suspended.store(false, Ordering::Relaxed);
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.0.name == other.0.name
    }
}

impl Eq for Line {}

impl Hash for Line {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.name.hash(state);
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_suspended() {
            write!(f, "Line({}, suspended)", self.name())
        } else {
            write!(f, "Line({})", self.name())
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Line", self.name())
    }
}
