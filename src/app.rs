//! Application facade wiring the itinerary, lead, and catalog services.

use crate::ai::{GeminiItineraryClient, ItineraryService};
use crate::cities::CityCatalog;
use crate::leads::{LeadService, SimulatedLeadClient};
use crate::models::{City, Config, Itinerary, Lead, LeadReceipt};
use crate::{Error, Result};
use std::path::Path;
use tracing::info;

/// Coordinates itinerary generation, lead capture, and the city catalog.
pub struct App {
    itinerary: Box<dyn ItineraryService>,
    leads: Box<dyn LeadService>,
    cities: CityCatalog,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub itinerary: Box<dyn ItineraryService>,
    pub leads: Box<dyn LeadService>,
    pub cities: CityCatalog,
}

impl App {
    /// Build an app from concrete service dependencies.
    ///
    /// This is primarily useful for integration tests and local harnesses
    /// that need to inject mocks.
    pub fn with_services(services: AppServices) -> Self {
        Self {
            itinerary: services.itinerary,
            leads: services.leads,
            cities: services.cities,
        }
    }

    /// Construct an app from environment configuration (`Config::from_env`).
    pub fn new() -> Result<Self> {
        let config = Config::from_env()?;

        info!("Itinerary provider: Gemini (model: {})", config.model);
        let itinerary = Box::new(GeminiItineraryClient::new_with_client(
            config.gemini_api_key,
            config.model,
            reqwest::Client::new(),
        ));

        let leads = Box::new(SimulatedLeadClient::new());
        let cities = CityCatalog::from_file(Path::new("data/cities.json"))?;

        Ok(Self::with_services(AppServices {
            itinerary,
            leads,
            cities,
        }))
    }

    /// Generate an itinerary for a free-text travel query.
    ///
    /// Empty or whitespace-only queries are rejected here, before the
    /// adapter is invoked.
    pub async fn plan(&self, query: &str) -> Result<Itinerary> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::EmptyQuery);
        }

        info!("Generating itinerary for query: {}", query);
        self.itinerary.generate_itinerary(query).await
    }

    /// Submit a consultation lead.
    pub async fn request_consultation(&self, lead: &Lead) -> Result<LeadReceipt> {
        self.leads.submit(lead).await
    }

    /// Featured cities in display order.
    pub fn cities(&self) -> &[City] {
        self.cities.cities()
    }
}
