//! Outbound email boundary for appointment confirmations.
//!
//! Delivery itself is an external collaborator; the core only depends on
//! this one-call contract and treats failures as non-fatal.

use async_trait::async_trait;

#[async_trait]
pub trait AppointmentMailer: Send + Sync {
    async fn send_confirmation(&self, recipient: &str, name: &str) -> anyhow::Result<()>;
}

/// Default adapter: records the outbound mail in the log. Swapped for a real
/// transport at deployment without touching the service layer.
pub struct LogMailer;

#[async_trait]
impl AppointmentMailer for LogMailer {
    async fn send_confirmation(&self, recipient: &str, name: &str) -> anyhow::Result<()> {
        tracing::info!(recipient, name, "appointment confirmation queued");
        Ok(())
    }
}
