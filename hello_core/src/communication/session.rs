//! Zenoh session management

use super::{key_expr, Publisher, Subscriber};
use crate::config::BusConfig;
use crate::error::{HelloError, HelloResult};
use crate::messages::Topic;
use std::marker::PhantomData;

/// One middleware session; every entity of a program is declared on it
pub struct BusSession {
    session: zenoh::Session,
}

impl BusSession {
    /// Open a session with settings built from `config`
    pub async fn open(config: &BusConfig) -> HelloResult<Self> {
        let zenoh_config = config.to_zenoh_config()?;
        Self::with_config(zenoh_config).await
    }

    /// Open a session with a ready-made middleware configuration
    pub async fn with_config(config: zenoh::Config) -> HelloResult<Self> {
        let session = zenoh::open(config)
            .await
            .map_err(|e| HelloError::session(format!("Failed to open Zenoh session: {}", e)))?;

        tracing::info!("Opened Zenoh session {}", session.zid());
        Ok(Self { session })
    }

    /// Declare a publisher for `T`'s topic in `domain_id`
    pub async fn declare_publisher<T: Topic>(&self, domain_id: u32) -> HelloResult<Publisher<T>> {
        let key_expr = key_expr(domain_id, T::NAME);
        let inner = self
            .session
            .declare_publisher(key_expr.clone())
            .await
            .map_err(|e| HelloError::publish(&key_expr, format!("declare failed: {}", e)))?;

        tracing::debug!("Declared publisher on '{}'", key_expr);
        Ok(Publisher {
            inner,
            key_expr,
            _phantom: PhantomData,
        })
    }

    /// Declare a subscriber for `T`'s topic in `domain_id`
    pub async fn declare_subscriber<T: Topic>(&self, domain_id: u32) -> HelloResult<Subscriber<T>> {
        let key_expr = key_expr(domain_id, T::NAME);
        let inner = self
            .session
            .declare_subscriber(key_expr.clone())
            .await
            .map_err(|e| HelloError::subscribe(&key_expr, format!("declare failed: {}", e)))?;

        tracing::debug!("Declared subscriber on '{}'", key_expr);
        Ok(Subscriber {
            inner,
            key_expr,
            _phantom: PhantomData,
        })
    }

    /// Close the session. Entities still declared on it are released too.
    pub async fn close(self) -> HelloResult<()> {
        self.session
            .close()
            .await
            .map_err(|e| HelloError::session(format!("Failed to close Zenoh session: {}", e)))?;
        tracing::info!("Closed Zenoh session");
        Ok(())
    }

    /// Get the underlying Zenoh session
    pub fn inner(&self) -> &zenoh::Session {
        &self.session
    }
}
