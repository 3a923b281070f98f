pub mod client;
pub mod itinerary;
pub mod types;

pub use itinerary::GeminiItineraryClient;
