//! AI service integration for itinerary generation
//!
//! Provides the service seam between the app and the external generative
//! model, a Gemini-backed implementation, and an in-memory mock.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiItineraryClient;
pub use mock::MockItineraryClient;

use crate::models::Itinerary;
use crate::Result;
use async_trait::async_trait;

/// Turns a free-text travel query into a validated [`Itinerary`].
///
/// Implementations are stateless and reentrant: each call issues one
/// independent outbound request, and concurrent callers never interfere.
/// Keeping at most one request in flight per user is the caller's job.
#[async_trait]
pub trait ItineraryService: Send + Sync {
    async fn generate_itinerary(&self, query: &str) -> Result<Itinerary>;
}
