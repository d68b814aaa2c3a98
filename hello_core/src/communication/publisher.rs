//! Zenoh publisher for one topic

use super::traits::SampleWriter;
use crate::error::{HelloError, HelloResult};
use crate::messages::Topic;
use std::marker::PhantomData;

/// Typed wrapper around a declared Zenoh publisher
pub struct Publisher<T> {
    pub(super) inner: zenoh::pubsub::Publisher<'static>,
    pub(super) key_expr: String,
    pub(super) _phantom: PhantomData<T>,
}

impl<T: Topic> Publisher<T> {
    /// Serialize `sample` and put it on the bus
    pub async fn write(&self, sample: &T) -> HelloResult<()> {
        let payload = serde_json::to_vec(sample)?;
        self.inner
            .put(payload)
            .await
            .map_err(|e| HelloError::publish(&self.key_expr, e))
    }

    pub fn key_expr(&self) -> &str {
        &self.key_expr
    }

    /// Release the publisher before the session goes away
    pub async fn undeclare(self) -> HelloResult<()> {
        let key_expr = self.key_expr;
        self.inner
            .undeclare()
            .await
            .map_err(|e| HelloError::publish(&key_expr, format!("undeclare failed: {}", e)))
    }
}

impl<T: Topic> SampleWriter<T> for Publisher<T> {
    fn key_expr(&self) -> &str {
        &self.key_expr
    }

    async fn write(&self, sample: &T) -> HelloResult<()> {
        Publisher::write(self, sample).await
    }
}

impl<T> std::fmt::Debug for Publisher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Publisher").field("key_expr", &self.key_expr).finish()
    }
}
