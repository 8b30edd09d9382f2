//! Stream emitter - Timed lazy chunk sequences
//!
//! Produces the finite, non-restartable chunk sequence behind
//! `/stream/{seconds}`: `"Chunk {i}\n"` for i in 1..=floor(seconds x 2),
//! one chunk per 0.5 s tick. The stream is lazy; dropping it (client
//! disconnect) stops emission without error.

use std::time::Duration;

use bytes::Bytes;
use domain::StreamSeconds;
use futures::stream::{self, Stream};

use crate::error::ApplicationError;

/// Fixed gap between chunks
const CHUNK_INTERVAL: Duration = Duration::from_millis(500);

/// Service emitting timed chunk streams
#[derive(Debug, Clone, Copy)]
pub struct StreamEmitter {
    chunk_interval: Duration,
}

impl Default for StreamEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamEmitter {
    /// Create a new stream emitter with the fixed 0.5 s cadence
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chunk_interval: CHUNK_INTERVAL,
        }
    }

    /// Override the inter-chunk gap (tests)
    #[must_use]
    pub const fn with_chunk_interval(mut self, chunk_interval: Duration) -> Self {
        self.chunk_interval = chunk_interval;
        self
    }

    /// Validate the window and build the chunk stream
    ///
    /// # Errors
    ///
    /// Returns a validation error if `seconds` is outside 0-30; no stream
    /// is constructed in that case.
    pub fn stream(
        &self,
        seconds: f64,
    ) -> Result<impl Stream<Item = Bytes> + Send + 'static, ApplicationError> {
        let window = StreamSeconds::new(seconds)?;
        Ok(self.emit(window))
    }

    /// Emit `window.chunk_count()` chunks at the configured cadence
    ///
    /// Each chunk is yielded immediately and followed by one full gap, so
    /// the sequence spans `chunk_count x interval` and the stream ends one
    /// gap after the final chunk, matching the wall-clock window the
    /// chunk count was derived from.
    pub fn emit(&self, window: StreamSeconds) -> impl Stream<Item = Bytes> + Send + 'static {
        let total = window.chunk_count();
        let interval = self.chunk_interval;

        stream::unfold(1u64, move |index| async move {
            // The gap trails the previous chunk; the first chunk is
            // emitted immediately.
            if index > 1 {
                tokio::time::sleep(interval).await;
            }
            if index > total {
                return None;
            }
            Some((Bytes::from(format!("Chunk {index}\n")), index + 1))
        })
    }
}
