use axum::extract::State;

use crate::db::{AppState, queries};
use crate::envelope::Envelope;
use crate::error::Result;
use crate::extractors::{Json, Path};
use crate::models::{CreateIntent, CreatePayment, IntentSecret, Payment, PaymentReceipt};
use crate::util::to_minor_units;

/// Record a payment and clear the cart items it settles.
pub async fn record_payment(
    State(state): State<AppState>,
    Json(input): Json<CreatePayment>,
) -> Result<Envelope<PaymentReceipt>> {
    let mut conn = state.db.get()?;
    let receipt = queries::settle_payment(&mut conn, &input)?;

    tracing::info!(
        "Payment {} from {} settled {} cart item(s)",
        receipt.payment.id,
        receipt.payment.email,
        receipt.deleted_count
    );

    Ok(Envelope::created("payment recorded", receipt))
}

pub async fn list_payments(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Envelope<Vec<Payment>>> {
    let conn = state.db.get()?;
    let payments = queries::list_payments(&conn, &email)?;
    Ok(Envelope::ok("payments retrieved", payments))
}

/// Create a gateway payment intent and hand its client secret to the browser.
pub async fn create_confirm_intent(
    State(state): State<AppState>,
    Json(input): Json<CreateIntent>,
) -> Result<Envelope<IntentSecret>> {
    let amount = to_minor_units(input.price);
    let intent = state.stripe.create_payment_intent(amount).await?;
    Ok(Envelope::ok(
        "payment intent created",
        IntentSecret {
            client_secret: intent.client_secret,
        },
    ))
}
