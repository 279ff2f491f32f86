//! Generator configuration.

/// Settings for a seeded [`PrimGenerator`](crate::PrimGenerator).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Seed for the generator's ChaCha8 stream. Default: 0.
    pub seed: u64,
}
