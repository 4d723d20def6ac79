//! Search configuration for the journey planner.

use super::rank::Optimise;

/// Configuration for presenting search results.
///
/// The route search itself always returns every valid route; these settings
/// are applied by the CLI and the web layer when showing them.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Ranking used when a request doesn't name one.
    pub optimise: Optimise,

    /// Maximum number of routes to show.
    pub max_results: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(optimise: Optimise, max_results: usize) -> Self {
        Self {
            optimise,
            max_results,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            optimise: Optimise::Duration,
            max_results: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.optimise, Optimise::Duration);
        assert_eq!(config.max_results, 10);
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(Optimise::Changes, 3);

        assert_eq!(config.optimise, Optimise::Changes);
        assert_eq!(config.max_results, 3);
    }
}
