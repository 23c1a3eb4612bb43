//! Collect Stream use case
//!
//! Drives a stream of [`CompletionChunk`]s through a [`ChunkAccumulator`]
//! until the terminal chunk arrives, the producer hangs up, or the run
//! context ends.

use crate::context::{ContextError, RunContext};
use ensemble_domain::{ChunkAccumulator, CompletionChunk, StreamError};
use futures::{Stream, StreamExt};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can end a stream collection early
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectStreamError {
    #[error("Stream collection cancelled")]
    Cancelled,

    #[error("Stream deadline exceeded")]
    DeadlineExceeded,

    #[error(transparent)]
    Stream(#[from] StreamError),
}

impl From<ContextError> for CollectStreamError {
    fn from(err: ContextError) -> Self {
        match err {
            ContextError::Cancelled => CollectStreamError::Cancelled,
            ContextError::DeadlineExceeded => CollectStreamError::DeadlineExceeded,
        }
    }
}

/// Text assembled from a chunk stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedStream {
    pub text: String,
    /// `None` when the producer hung up before a terminal chunk
    pub finish_reason: Option<String>,
    /// Number of chunks consumed
    pub chunks: usize,
}

impl CollectedStream {
    pub fn is_complete(&self) -> bool {
        self.finish_reason.is_some()
    }
}

/// Consume `stream` until it completes.
///
/// Reading stops at the first terminal chunk; anything the producer sends
/// after that is left unread.
pub async fn collect_chunks<S>(
    ctx: &RunContext,
    stream: S,
) -> Result<CollectedStream, CollectStreamError>
where
    S: Stream<Item = CompletionChunk> + Unpin,
{
    collect_chunks_with(ctx, stream, |_| {}).await
}

/// Like [`collect_chunks`], calling `on_delta` with each text fragment as
/// it arrives.
pub async fn collect_chunks_with<S, F>(
    ctx: &RunContext,
    mut stream: S,
    mut on_delta: F,
) -> Result<CollectedStream, CollectStreamError>
where
    S: Stream<Item = CompletionChunk> + Unpin,
    F: FnMut(&str),
{
    ctx.check()?;
    let mut accumulator = ChunkAccumulator::new();

    loop {
        let next = tokio::select! {
            biased;
            reason = ctx.done() => {
                warn!("Stream collection stopped after {} chunks: {}", accumulator.chunk_count(), reason);
                return Err(reason.into());
            }
            next = stream.next() => next,
        };

        let Some(chunk) = next else {
            debug!("Stream ended without a terminal chunk");
            break;
        };

        let state = accumulator.push(&chunk)?;
        if !chunk.content().is_empty() {
            on_delta(chunk.content());
        }
        if state.is_terminal() {
            debug!(
                "Stream {} complete after {} chunks",
                chunk.id,
                accumulator.chunk_count()
            );
            break;
        }
    }

    Ok(CollectedStream {
        finish_reason: accumulator.finish_reason().map(str::to_string),
        chunks: accumulator.chunk_count(),
        text: accumulator.into_text(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc;
    use futures::stream;
    use std::time::Duration;

    fn delta(text: &str) -> CompletionChunk {
        CompletionChunk::new("chatcmpl-7", "gpt-4o-mini", text, None)
    }

    fn last(text: &str) -> CompletionChunk {
        CompletionChunk::new("chatcmpl-7", "gpt-4o-mini", text, Some("stop".to_string()))
    }

    #[tokio::test]
    async fn test_collects_until_terminal_chunk() {
        let chunks = stream::iter(vec![delta("Hel"), delta("lo"), last(" world"), delta("ignored")]);
        let mut seen = Vec::new();

        let collected = collect_chunks_with(&RunContext::new(), chunks, |d| seen.push(d.to_string()))
            .await
            .unwrap();

        assert_eq!(collected.text, "Hello world");
        assert_eq!(collected.finish_reason.as_deref(), Some("stop"));
        assert_eq!(collected.chunks, 3);
        assert!(collected.is_complete());
        assert_eq!(seen, vec!["Hel", "lo", " world"]);
    }

    #[tokio::test]
    async fn test_stream_ending_early_returns_partial_text() {
        let chunks = stream::iter(vec![delta("partial")]);
        let collected = collect_chunks(&RunContext::new(), chunks).await.unwrap();

        assert_eq!(collected.text, "partial");
        assert!(!collected.is_complete());
        assert_eq!(collected.chunks, 1);
    }

    #[tokio::test]
    async fn test_cancelled_context_stops_collection() {
        let (tx, rx) = mpsc::unbounded();
        tx.unbounded_send(delta("first")).unwrap();

        let ctx = RunContext::new();
        let canceller = ctx.clone();
        tokio::spawn(async move {
            tokio::task::yield_now().await;
            canceller.cancel();
        });

        let err = collect_chunks(&ctx, rx).await.unwrap_err();
        assert_eq!(err, CollectStreamError::Cancelled);
        drop(tx);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_stops_collection() {
        let (_tx, rx) = mpsc::unbounded::<CompletionChunk>();
        let ctx = RunContext::new().with_timeout(Duration::from_millis(100));

        let err = collect_chunks(&ctx, rx).await.unwrap_err();
        assert_eq!(err, CollectStreamError::DeadlineExceeded);
    }

    #[tokio::test]
    async fn test_already_cancelled_context_reads_nothing() {
        let ctx = RunContext::new();
        ctx.cancel();
        let err = collect_chunks(&ctx, stream::iter(vec![last("x")]))
            .await
            .unwrap_err();
        assert_eq!(err, CollectStreamError::Cancelled);
    }
}
