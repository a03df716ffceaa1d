//! Payment endpoints, including the processor-proxy intent flow.

use parkside_core::payment::{ConfirmPayment, NewPaymentIntent, Payment, PaymentIntent};

use crate::error::ApiResult;
use crate::http::PortalClient;

/// `GET /tenant/payments` -- the tenant's payment history and dues.
pub async fn list(client: &PortalClient) -> ApiResult<Vec<Payment>> {
    client.get("/tenant/payments").await
}

/// `POST /payments/create-intent` -- open a payment intent with the
/// third-party processor for a pending payment.
pub async fn create_intent(
    client: &PortalClient,
    input: &NewPaymentIntent,
) -> ApiResult<PaymentIntent> {
    client.post("/payments/create-intent", input).await
}

/// `POST /payments/confirm` -- tell the backend the widget finished, so it
/// reconciles the intent and updates the payment row.
pub async fn confirm(client: &PortalClient, input: &ConfirmPayment) -> ApiResult<Payment> {
    client.post("/payments/confirm", input).await
}
