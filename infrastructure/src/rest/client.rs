//! HTTP client for the booking REST service.
//!
//! The server reports failures as a bare HTTP status with no structured
//! error taxonomy, so every non-2xx response maps to the same generic
//! [`ApiError::Status`] — the caller cannot distinguish a validation
//! problem from a server fault beyond the code itself. No retries; a failed
//! mutation is simply not applied.

use super::types::{Booking, BookingDraft, Customer, DailyStats, Service, StaffMember};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

/// Errors from the booking REST boundary
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed with status {0}")]
    Status(u16),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Client for the booking CRUD service
pub struct BookingApi {
    base_url: String,
    client: reqwest::Client,
}

impl BookingApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// `GET /bookings`, optionally filtered to one day (YYYY-MM-DD)
    pub async fn bookings(&self, date: Option<&str>) -> Result<Vec<Booking>, ApiError> {
        let mut request = self.client.get(self.url("/bookings"));
        if let Some(date) = date {
            request = request.query(&[("date", date)]);
        }
        Self::read_json(request.send().await?).await
    }

    /// `POST /bookings`
    pub async fn create_booking(&self, draft: &BookingDraft) -> Result<Booking, ApiError> {
        self.send_json(self.client.post(self.url("/bookings")), draft)
            .await
    }

    /// `PUT /bookings/{id}`
    pub async fn update_booking(&self, id: u64, draft: &BookingDraft) -> Result<Booking, ApiError> {
        self.send_json(self.client.put(self.url(&format!("/bookings/{id}"))), draft)
            .await
    }

    /// `DELETE /bookings/{id}`
    pub async fn delete_booking(&self, id: u64) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/bookings/{id}")))
            .send()
            .await?;
        Self::check_status(&response)?;
        Ok(())
    }

    /// `GET /customers`
    pub async fn customers(&self) -> Result<Vec<Customer>, ApiError> {
        Self::read_json(self.client.get(self.url("/customers")).send().await?).await
    }

    /// `GET /services`
    pub async fn services(&self) -> Result<Vec<Service>, ApiError> {
        Self::read_json(self.client.get(self.url("/services")).send().await?).await
    }

    /// `GET /staff`
    pub async fn staff(&self) -> Result<Vec<StaffMember>, ApiError> {
        Self::read_json(self.client.get(self.url("/staff")).send().await?).await
    }

    /// `GET /stats/daily`, defaulting to today on the server side
    pub async fn daily_stats(&self, date: Option<&str>) -> Result<DailyStats, ApiError> {
        let mut request = self.client.get(self.url("/stats/daily"));
        if let Some(date) = date {
            request = request.query(&[("date", date)]);
        }
        Self::read_json(request.send().await?).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        body: &B,
    ) -> Result<T, ApiError> {
        Self::read_json(request.json(body).send().await?).await
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        Self::check_status(&response)?;
        debug!(url = %response.url(), "booking api response");
        Ok(response.json().await?)
    }

    fn check_status(response: &reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let api = BookingApi::new("http://localhost:5000/api/");
        assert_eq!(api.url("/bookings"), "http://localhost:5000/api/bookings");
    }

    #[test]
    fn test_status_error_display() {
        let error = ApiError::Status(422);
        assert_eq!(error.to_string(), "Request failed with status 422");
    }
}
