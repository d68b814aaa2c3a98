//! In-memory writers and readers for exercising the sample loops

use crate::communication::{SampleReader, SampleWriter};
use crate::error::{HelloError, HelloResult};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

pub(crate) struct RecordingWriter<T> {
    pub written: RefCell<Vec<T>>,
    pub fail_after: Option<usize>,
}

impl<T> Default for RecordingWriter<T> {
    fn default() -> Self {
        Self {
            written: RefCell::new(Vec::new()),
            fail_after: None,
        }
    }
}

impl<T: Clone> SampleWriter<T> for RecordingWriter<T> {
    fn key_expr(&self) -> &str {
        "domain/0/test"
    }

    async fn write(&self, sample: &T) -> HelloResult<()> {
        let mut written = self.written.borrow_mut();
        if self.fail_after == Some(written.len()) {
            return Err(HelloError::publish("domain/0/test", "session closed"));
        }
        written.push(sample.clone());
        Ok(())
    }
}

/// Hands out one scripted batch per call, then idles until the timeout
pub(crate) struct ScriptedReader<T> {
    pub batches: VecDeque<Vec<T>>,
}

impl<T> ScriptedReader<T> {
    pub fn new(batches: Vec<Vec<T>>) -> Self {
        Self {
            batches: batches.into(),
        }
    }
}

impl<T> SampleReader<T> for ScriptedReader<T> {
    fn key_expr(&self) -> &str {
        "domain/0/test"
    }

    async fn take_timeout(&mut self, timeout: Duration) -> HelloResult<Vec<T>> {
        match self.batches.pop_front() {
            Some(batch) => Ok(batch),
            None => {
                tokio::time::sleep(timeout).await;
                Ok(Vec::new())
            }
        }
    }
}
