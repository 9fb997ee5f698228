//! Chunk pruning configuration.

/// Configuration for chunk-level pruning.
///
/// Disabling pruning never changes scan results, only how much per-element
/// work the scan does.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PruningConfig {
    /// Consult chunk bounds at all. When false every chunk is checked
    /// element by element.
    pub enabled: bool,
    /// Accept chunks whose bounds prove every present value matches without
    /// evaluating them.
    pub accept_whole_chunks: bool,
}

impl Default for PruningConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            accept_whole_chunks: true,
        }
    }
}

impl PruningConfig {
    /// Baseline configuration that always scans every element.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            accept_whole_chunks: false,
        }
    }

    /// Keeps skipping but evaluates chunks that would otherwise be accepted
    /// wholesale.
    #[must_use]
    pub fn skip_only() -> Self {
        Self {
            enabled: true,
            accept_whole_chunks: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        let config = PruningConfig::default();
        assert!(config.enabled && config.accept_whole_chunks);
        assert_eq!(
            PruningConfig::disabled(),
            PruningConfig {
                enabled: false,
                accept_whole_chunks: false
            }
        );
        assert!(!PruningConfig::skip_only().accept_whole_chunks);
    }
}
