use super::ItineraryService;
use crate::models::{DayPlan, Itinerary};
use crate::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// In-memory itinerary service for tests and dry runs.
///
/// Queued responses are served in order and cycle when exhausted.
#[derive(Clone)]
pub struct MockItineraryClient {
    responses: Arc<Mutex<Vec<Itinerary>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockItineraryClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_itinerary_response(self, response: Itinerary) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockItineraryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItineraryService for MockItineraryClient {
    async fn generate_itinerary(&self, query: &str) -> Result<Itinerary> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response echoing the query
            Ok(Itinerary {
                title: format!("{} 여행", query),
                days: vec![DayPlan {
                    day: 1,
                    activity: "도착과 동네 산책".to_string(),
                    description: format!("{} 일정의 첫날, 숙소 주변을 가볍게 둘러봅니다", query),
                }],
                tips: vec!["편한 신발을 준비하세요".to_string()],
            })
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}
