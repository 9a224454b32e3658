//! Error types.

/// Invalid engine configuration, detected before a run starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("genome_size must be at least 1")]
    EmptyGenome,
    #[error("population_size must be at least 2")]
    EmptyPopulation,
    #[error("population_size must be even, got {0}")]
    OddPopulation(usize),
    #[error("max_generations must be at least 1")]
    ZeroGenerations,
    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },
    #[error("unknown strategy code {0}")]
    UnknownStrategy(u8),
    #[error("unknown selection strategy `{0}`")]
    UnknownSelection(String),
    #[error("unknown scaling strategy `{0}`")]
    UnknownScaling(String),
}

/// A run aborted before completing its configured generations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// A scaled selection weight was negative or NaN.
    #[error("scaled fitness at index {index} is {value}, expected a non-negative number")]
    InvalidWeight { index: usize, value: f64 },
    #[error("cannot rank an empty score vector")]
    EmptyScores,
    /// No population has been measured, so there is no best individual.
    #[error("no population has been measured yet")]
    Unmeasured,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GaError::Unmeasured.to_string(),
            "no population has been measured yet"
        );
        assert_eq!(
            GaError::from(ConfigError::OddPopulation(3)).to_string(),
            "invalid configuration: population_size must be even, got 3"
        );
    }
}
