//! Status selector - Random or explicit status codes

use std::fmt;
use std::sync::Arc;

use domain::ExplicitCode;

use crate::{error::ApplicationError, ports::RandomSource};

/// The fixed closed set `/` and status randomization draw from
pub const RANDOM_STATUS_SET: [u16; 12] = [
    200, 201, 202, 301, 302, 400, 401, 403, 404, 500, 502, 503,
];

/// Service choosing HTTP status codes, randomly or explicitly
pub struct StatusSelector {
    random: Arc<dyn RandomSource>,
}

impl fmt::Debug for StatusSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusSelector").finish_non_exhaustive()
    }
}

impl StatusSelector {
    /// Create a new status selector
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Draw one status uniformly from [`RANDOM_STATUS_SET`]
    pub fn random_status(&self) -> u16 {
        #[allow(clippy::cast_possible_truncation)]
        let index = self.random.draw(RANDOM_STATUS_SET.len() as u32) as usize;
        RANDOM_STATUS_SET[index]
    }

    /// Validate an explicit status request and build its response body
    ///
    /// # Errors
    ///
    /// Returns a validation error if `code` is outside 100-599.
    pub fn explicit_status(code: i64) -> Result<(ExplicitCode, String), ApplicationError> {
        let code = ExplicitCode::new(code)?;
        let body = format!("Returned status code {code}");
        Ok((code, body))
    }
}
