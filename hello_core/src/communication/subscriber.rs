//! Zenoh subscriber for one topic

use super::traits::SampleReader;
use crate::error::{HelloError, HelloResult};
use crate::messages::Topic;
use std::marker::PhantomData;
use std::time::Duration;
use zenoh::handlers::FifoChannelHandler;
use zenoh::sample::Sample;

/// Typed wrapper around a declared Zenoh subscriber
pub struct Subscriber<T> {
    pub(super) inner: zenoh::pubsub::Subscriber<FifoChannelHandler<Sample>>,
    pub(super) key_expr: String,
    pub(super) _phantom: PhantomData<T>,
}

impl<T: Topic> Subscriber<T> {
    /// Wait up to `timeout` for one sample, then drain whatever else is queued
    pub async fn take_timeout(&mut self, timeout: Duration) -> HelloResult<Vec<T>> {
        let first = match tokio::time::timeout(timeout, self.inner.recv_async()).await {
            Err(_elapsed) => return Ok(Vec::new()),
            Ok(Ok(sample)) => sample,
            Ok(Err(e)) => return Err(HelloError::subscribe(&self.key_expr, e)),
        };

        let mut taken = Vec::new();
        self.decode_into(&first, &mut taken);
        while let Ok(Some(sample)) = self.inner.try_recv() {
            self.decode_into(&sample, &mut taken);
        }
        Ok(taken)
    }

    /// Samples that are not valid `T` are dropped with a warning
    fn decode_into(&self, sample: &Sample, out: &mut Vec<T>) {
        let bytes = sample.payload().to_bytes();
        match serde_json::from_slice::<T>(&bytes) {
            Ok(value) => out.push(value),
            Err(e) => tracing::warn!(
                "Dropping undecodable {} sample on '{}': {}",
                T::TYPE_NAME,
                sample.key_expr(),
                e
            ),
        }
    }

    pub fn key_expr(&self) -> &str {
        &self.key_expr
    }

    pub async fn undeclare(self) -> HelloResult<()> {
        let key_expr = self.key_expr;
        self.inner
            .undeclare()
            .await
            .map_err(|e| HelloError::subscribe(&key_expr, format!("undeclare failed: {}", e)))
    }
}

impl<T: Topic> SampleReader<T> for Subscriber<T> {
    fn key_expr(&self) -> &str {
        &self.key_expr
    }

    async fn take_timeout(&mut self, timeout: Duration) -> HelloResult<Vec<T>> {
        Subscriber::take_timeout(self, timeout).await
    }
}

impl<T> std::fmt::Debug for Subscriber<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscriber").field("key_expr", &self.key_expr).finish()
    }
}
