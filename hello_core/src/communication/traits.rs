//! Seams between the sample loops and the middleware
//!
//! The loops in [`crate::app`] only need to write or take samples, so they are
//! generic over these traits. The Zenoh-backed [`super::Publisher`] and
//! [`super::Subscriber`] implement them; tests use in-memory doubles.

use crate::error::HelloResult;
use std::time::Duration;

#[allow(async_fn_in_trait)]
pub trait SampleWriter<T> {
    /// Key expression the samples are written on
    fn key_expr(&self) -> &str;

    /// Hand one sample to the middleware
    async fn write(&self, sample: &T) -> HelloResult<()>;
}

#[allow(async_fn_in_trait)]
pub trait SampleReader<T> {
    fn key_expr(&self) -> &str;

    /// Wait up to `timeout` for data, then take everything available.
    /// Returns an empty vector when nothing arrived in time.
    async fn take_timeout(&mut self, timeout: Duration) -> HelloResult<Vec<T>>;
}
