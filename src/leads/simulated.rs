use super::LeadService;
use crate::models::{Lead, LeadReceipt};
use crate::{Error, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Lead client that accepts submissions after a fixed artificial delay.
///
/// Submissions are kept in memory so callers (and tests) can inspect what
/// was captured.
#[derive(Clone)]
pub struct SimulatedLeadClient {
    delay: Duration,
    submissions: Arc<Mutex<Vec<Lead>>>,
}

impl SimulatedLeadClient {
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            submissions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn submissions(&self) -> Vec<Lead> {
        self.submissions.lock().unwrap().clone()
    }

    fn validate(lead: &Lead) -> Result<()> {
        for (field, value) in [
            ("name", &lead.name),
            ("phone", &lead.phone),
            ("email", &lead.email),
        ] {
            if value.trim().is_empty() {
                return Err(Error::InvalidLead(format!("{} must not be empty", field)));
            }
        }
        Ok(())
    }
}

impl Default for SimulatedLeadClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LeadService for SimulatedLeadClient {
    async fn submit(&self, lead: &Lead) -> Result<LeadReceipt> {
        Self::validate(lead)?;

        tokio::time::sleep(self.delay).await;

        let receipt = LeadReceipt {
            id: Uuid::new_v4(),
            name: lead.name.clone(),
            received_at: Utc::now(),
        };

        self.submissions.lock().unwrap().push(lead.clone());
        tracing::info!("Accepted consultation lead {} for {}", receipt.id, lead.name);

        Ok(receipt)
    }
}
