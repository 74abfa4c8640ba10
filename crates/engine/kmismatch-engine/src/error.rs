use thiserror::Error;

/// Errors that can occur while assembling a k-mismatch query.
///
/// Conditions that are programmer errors inside the kernel itself (an
/// out-of-range suffix index, a container pushed past its declared
/// capacity) panic rather than flowing through this type; see the
/// module docs. `EngineError` only covers conditions a caller can
/// reasonably trigger by passing bad top-level input.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The pattern or text contains the sentinel byte reserved for
    /// internal suffix-tree construction.
    #[error("input contains the reserved sentinel byte 0x00 at offset {position}")]
    SentinelCollision {
        /// Byte offset of the offending sentinel byte.
        position: usize,
    },
}

/// A specialized Result type for engine construction.
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Creates a new SentinelCollision error.
    pub(crate) fn sentinel_collision(position: usize) -> Self {
        Self::SentinelCollision { position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::sentinel_collision(3);
        assert_eq!(
            err.to_string(),
            "input contains the reserved sentinel byte 0x00 at offset 3"
        );
    }
}
