//! Spreadsheet web-app client for form submissions.
//!
//! Club applications, experience reservations, and newsletter signups are
//! forwarded to an external spreadsheet endpoint. The forward is a one-way
//! notification: the response body is never read, a network failure is
//! logged and swallowed, and the shopper still sees a confirmation. The
//! spreadsheet is not authoritative for anything, so at-most-once with no
//! confirmation is the intended contract - keep it that way.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::instrument;

use crate::config::SheetsConfig;

/// A flat form payload: a discriminator plus free-form fields.
///
/// Observed `form_type` values are `early_member`, `experience_reservation`,
/// and `newsletter`; the spreadsheet routes rows on the discriminator, so
/// new form types need no changes here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSubmission {
    /// Which form produced this submission.
    #[serde(rename = "formType")]
    pub form_type: String,
    /// The remaining form fields, passed through untouched.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// One-way client for the spreadsheet web-app endpoint.
#[derive(Clone)]
pub struct SheetsClient {
    client: reqwest::Client,
    endpoint: SecretString,
}

impl SheetsClient {
    /// Create a new client, or `None` when no endpoint is configured.
    #[must_use]
    pub fn from_config(config: &SheetsConfig) -> Option<Self> {
        config.webapp_url.clone().map(|endpoint| Self {
            client: reqwest::Client::new(),
            endpoint,
        })
    }

    /// Create a client for the given web-app endpoint.
    #[must_use]
    pub fn new(endpoint: SecretString) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Forward a submission to the spreadsheet.
    ///
    /// Never fails from the caller's perspective: transport errors and
    /// non-success statuses are logged and dropped.
    #[instrument(skip(self, form), fields(form_type = %form.form_type))]
    pub async fn submit(&self, form: &FormSubmission) {
        let result = self
            .client
            .post(self.endpoint.expose_secret())
            .json(form)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                tracing::debug!("Form submission forwarded");
            }
            Ok(response) => {
                tracing::warn!(
                    status = %response.status(),
                    "Spreadsheet endpoint rejected form submission"
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to forward form submission");
            }
        }
    }
}
