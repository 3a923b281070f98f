//! Consultation lead capture
//!
//! The contact form has no real backend: submission is simulated with a
//! fixed delay. The service seam keeps that swappable for a real one.

pub mod simulated;

pub use simulated::SimulatedLeadClient;

use crate::models::{Lead, LeadReceipt};
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait LeadService: Send + Sync {
    async fn submit(&self, lead: &Lead) -> Result<LeadReceipt>;
}
