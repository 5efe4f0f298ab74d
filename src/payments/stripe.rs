use reqwest::Client;
use serde::Deserialize;

use crate::error::{AppError, Result};

const PAYMENT_CURRENCY: &str = "usd";

#[derive(Debug, Clone, Deserialize)]
pub struct StripePaymentIntent {
    pub id: String,
    pub client_secret: String,
    pub amount: i64,
    pub currency: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeErrorBody,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    message: Option<String>,
}

/// Payment gateway client. Only creates card payment intents; card
/// confirmation happens client-side with the returned secret.
#[derive(Debug, Clone)]
pub struct StripeClient {
    client: Client,
    secret_key: String,
    api_base: String,
}

impl StripeClient {
    pub fn new(secret_key: &str, api_base: &str) -> Self {
        Self {
            client: Client::new(),
            secret_key: secret_key.to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Create a payment intent for `amount` minor units (cents).
    pub async fn create_payment_intent(&self, amount: i64) -> Result<StripePaymentIntent> {
        let params = [
            ("amount", amount.to_string()),
            ("currency", PAYMENT_CURRENCY.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .client
            .post(format!("{}/v1/payment_intents", self.api_base))
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<StripeErrorResponse>(&error_text)
                .ok()
                .and_then(|e| e.error.message)
                .unwrap_or(error_text);
            return Err(AppError::Internal(format!(
                "Stripe API error ({}): {}",
                status, message
            )));
        }

        let intent: StripePaymentIntent = response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse Stripe response: {}", e)))?;

        tracing::info!("Created payment intent {} for {} {}", intent.id, intent.amount, intent.currency);

        Ok(intent)
    }
}
