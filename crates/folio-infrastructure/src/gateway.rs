//! Mock form submission gateway.
//!
//! The portfolio page has no real backend; form submission is
//! simulated with a delay and an occasional injected failure. The
//! simulation sits behind the [`SubmitGateway`] trait so the workflow
//! depends on the seam, not the mock, and stays entirely outside the
//! synchronous core.

use crate::config::GatewayConfig;
use async_trait::async_trait;
use folio_core::contact::ContactMessage;
use folio_core::error::{FolioError, Result};
use rand::Rng;
use std::time::Duration;
use tracing::debug;

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// User-facing confirmation message
    pub message: String,
}

/// Asynchronous collaborator that delivers a contact message.
#[async_trait]
pub trait SubmitGateway: Send + Sync {
    /// Validates and delivers `message`.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::Validation` for a malformed message, or an
    /// error from the (possibly simulated) transport.
    async fn submit(&self, message: &ContactMessage) -> Result<SubmitReceipt>;
}

/// Simulated gateway with configurable delay and failure rate.
#[derive(Debug, Clone)]
pub struct MockSubmitGateway {
    delay: Duration,
    failure_rate: f64,
}

impl MockSubmitGateway {
    /// Creates a gateway with the given delay and failure probability
    /// (clamped to [0, 1]).
    pub fn new(delay: Duration, failure_rate: f64) -> Self {
        Self {
            delay,
            failure_rate: failure_rate.clamp(0.0, 1.0),
        }
    }

    /// Creates a gateway from configuration.
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(Duration::from_millis(config.delay_ms), config.failure_rate)
    }
}

#[async_trait]
impl SubmitGateway for MockSubmitGateway {
    async fn submit(&self, message: &ContactMessage) -> Result<SubmitReceipt> {
        message.validate()?;

        tokio::time::sleep(self.delay).await;

        if rand::thread_rng().r#gen::<f64>() < self.failure_rate {
            debug!("simulated submission failure");
            return Err(FolioError::internal("Server error. Please try again."));
        }

        debug!(name = %message.name, "simulated submission delivered");
        Ok(SubmitReceipt {
            message: "Message sent successfully!".to_string(),
        })
    }
}
