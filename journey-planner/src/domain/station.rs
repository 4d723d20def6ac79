//! Station type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug)]
struct StationState {
    name: String,
    closed: AtomicBool,
}

/// A named stop on the network.
///
/// `Station` is a shared handle: cloning it is cheap and every clone sees the
/// same `closed` flag. Equality and hashing use the name only, so a closed
/// and an open handle with the same name compare equal.
///
/// # Examples
///
/// ```
/// use journey_planner::domain::Station;
///
/// let green_park = Station::new("Green Park");
/// let handle = green_park.clone();
///
/// green_park.close();
/// assert!(handle.is_closed());
///
/// // Closed state does not affect identity
/// assert_eq!(handle, Station::new("Green Park"));
/// assert_ne!(handle, Station::new("green park"));
/// ```
#[derive(Clone)]
pub struct Station(Arc<StationState>);

impl Station {
    /// Create an open station.
    pub fn new(name: impl Into<String>) -> Self {
        Station(Arc::new(StationState {
            name: name.into(),
            closed: AtomicBool::new(false),
        }))
    }

    /// Returns the station name.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Returns true if the station is currently closed.
    ///
    /// A closed station can still be passed through or arrived at, but
    /// cannot be used to change lines.
    pub fn is_closed(&self) -> bool {
        self.0.closed.load(Ordering::Relaxed)
    }

    /// Close the station to interchanges.
    pub fn close(&self) {
        self.0.closed.store(true, Ordering::Relaxed);
    }

    /// Reopen the station.
    pub fn open(&self) {
        self.0.closed.store(false, Ordering::Relaxed);
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.0.name == other.0.name
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.name.hash(state);
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_closed() {
            write!(f, "Station({}, closed)", self.name())
        } else {
            write!(f, "Station({})", self.name())
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
