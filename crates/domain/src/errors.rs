//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
///
/// Each variant's display text is the exact plain-text range description
/// the HTTP contract returns on a 400.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum DomainError {
    /// Explicit status code outside 100-599
    #[error("Status code must be between 100-599")]
    StatusCodeOutOfRange(i64),

    /// Failure rate outside 0-100
    #[error("Failure rate must be between 0 and 100")]
    FailureRateOutOfRange(i64),

    /// Delay duration outside 0-30 seconds
    #[error("Delay must be between 0 and 30 seconds")]
    DelayOutOfRange(f64),

    /// Memory allocation outside 0-100 MB
    #[error("Memory allocation must be between 0-100 MB")]
    MemoryOutOfRange(i64),

    /// CPU burn duration outside 0-10 seconds
    #[error("CPU time must be between 0-10 seconds")]
    CpuTimeOutOfRange(f64),

    /// Chain depth outside 0-5
    #[error("Chain depth must be between 0-5")]
    ChainDepthOutOfRange(i64),

    /// Response size outside 0-25600 KB
    #[error("Size must be between 0-25600 KB (0-25MB)")]
    SizeOutOfRange(i64),

    /// Stream duration outside 0-30 seconds
    #[error("Stream time must be between 0-30 seconds")]
    StreamTimeOutOfRange(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_error_message() {
        let err = DomainError::StatusCodeOutOfRange(600);
        assert_eq!(err.to_string(), "Status code must be between 100-599");
    }

    #[test]
    fn failure_rate_error_message() {
        let err = DomainError::FailureRateOutOfRange(101);
        assert_eq!(err.to_string(), "Failure rate must be between 0 and 100");
    }

    #[test]
    fn delay_error_message() {
        let err = DomainError::DelayOutOfRange(31.0);
        assert_eq!(err.to_string(), "Delay must be between 0 and 30 seconds");
    }

    #[test]
    fn memory_error_message() {
        let err = DomainError::MemoryOutOfRange(101);
        assert_eq!(err.to_string(), "Memory allocation must be between 0-100 MB");
    }

    #[test]
    fn cpu_time_error_message() {
        let err = DomainError::CpuTimeOutOfRange(-1.0);
        assert_eq!(err.to_string(), "CPU time must be between 0-10 seconds");
    }

    #[test]
    fn chain_depth_error_message() {
        let err = DomainError::ChainDepthOutOfRange(6);
        assert_eq!(err.to_string(), "Chain depth must be between 0-5");
    }

    #[test]
    fn size_error_message() {
        let err = DomainError::SizeOutOfRange(25601);
        assert_eq!(err.to_string(), "Size must be between 0-25600 KB (0-25MB)");
    }

    #[test]
    fn stream_time_error_message() {
        let err = DomainError::StreamTimeOutOfRange(30.5);
        assert_eq!(err.to_string(), "Stream time must be between 0-30 seconds");
    }

    #[test]
    fn errors_carry_the_offending_value() {
        let debug = format!("{:?}", DomainError::ChainDepthOutOfRange(9));
        assert!(debug.contains('9'));
    }
}
