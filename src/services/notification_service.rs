use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct DeliveryReceipt {
    pub id: Uuid,
    pub recipient: String,
    pub filename: String,
    pub size_bytes: usize,
    pub simulated: bool,
    pub queued_at: DateTime<Utc>,
}

/// Acknowledges report emails without sending anything. There is no SMTP
/// transport behind it.
#[derive(Clone, Debug, Default)]
pub struct NotificationService;

impl NotificationService {
    pub fn new() -> Self {
        Self
    }

    pub fn send_report(&self, recipient: &str, filename: &str, attachment: &[u8]) -> Result<DeliveryReceipt> {
        if recipient.trim().is_empty() {
            return Err(Error::BadRequest("Recipient address is empty".to_string()));
        }

        let receipt = DeliveryReceipt {
            id: Uuid::new_v4(),
            recipient: recipient.to_string(),
            filename: filename.to_string(),
            size_bytes: attachment.len(),
            simulated: true,
            queued_at: Utc::now(),
        };

        tracing::info!(
            receipt_id = %receipt.id,
            recipient = %receipt.recipient,
            filename = %receipt.filename,
            size_bytes = receipt.size_bytes,
            "Simulated report email; nothing was delivered"
        );
        Ok(receipt)
    }
}
