//! Encoder configuration

/// Configuration for [`SatEncoder`](crate::SatEncoder)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Copy the backend's statistics map into the statistics record
    ///
    /// Default: true
    pub collect_solver_statistics: bool,

    /// Share identical comparator encodings in the bit-blaster
    ///
    /// Many transition constraints compare the same level variable against
    /// the same generator value. With sharing enabled, each distinct
    /// comparison is encoded once and reused.
    ///
    /// Default: true
    pub share_comparators: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            collect_solver_statistics: true,
            share_comparators: true,
        }
    }
}

impl EncoderConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that keeps the CNF exactly as a naive encoding would
    /// produce it (useful when comparing DIMACS output across runs)
    ///
    /// - No comparator sharing
    /// - No solver statistics
    pub fn plain() -> Self {
        Self {
            collect_solver_statistics: false,
            share_comparators: false,
        }
    }

    pub fn with_solver_statistics(mut self, enabled: bool) -> Self {
        self.collect_solver_statistics = enabled;
        self
    }

    pub fn with_comparator_sharing(mut self, enabled: bool) -> Self {
        self.share_comparators = enabled;
        self
    }
}
