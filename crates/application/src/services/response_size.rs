//! Response size generator - Bodies of exact requested byte size

use bytes::Bytes;
use domain::Kilobytes;

use crate::error::ApplicationError;

/// Fill byte for generated bodies
const FILL_BYTE: u8 = b'x';

/// Service generating response bodies of exact size
///
/// Deterministic: same `kb` in, same bytes out. No state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseSize;

impl ResponseSize {
    /// Create a new response size generator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generate a body of exactly `kb x 1024` filler bytes
    ///
    /// # Errors
    ///
    /// Returns a validation error if `kb` is outside 0-25600.
    pub fn generate(&self, kb: i64) -> Result<Bytes, ApplicationError> {
        let size = Kilobytes::new(kb)?;
        Ok(Bytes::from(vec![FILL_BYTE; size.as_bytes()]))
    }
}
