//! HTTP client for the external sentiment-classification service.
//!
//! Every response passes through [`coerce`] before it becomes an
//! [`AnalysisRecord`], so single and batch results are defaulted the same way.

use crate::errors::RequestError;
use crate::models::{
    AnalysisRecord, BulkPredictRequest, BulkPredictResponse, DEFAULT_NEGATIVE, DEFAULT_NEUTRAL,
    DEFAULT_POSITIVE, Label, PredictRequest, PredictResponse,
};
use chrono::Local;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ClassificationClient {
    http: Client,
    base_url: String,
}

impl ClassificationClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, RequestError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn classify_one(&self, text: &str) -> Result<AnalysisRecord, RequestError> {
        let url = format!("{}/predict", self.base_url);
        debug!("classifying single review via {url}");

        let response = self
            .http
            .post(&url)
            .json(&PredictRequest { review: text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status(status.as_u16()));
        }

        let payload: PredictResponse = response.json().await?;
        coerce(payload, text)
    }

    pub async fn classify_batch(&self, texts: &[String]) -> Result<Vec<AnalysisRecord>, RequestError> {
        let url = format!("{}/bulk-predict", self.base_url);
        debug!("classifying {} reviews via {url}", texts.len());

        let response = self
            .http
            .post(&url)
            .json(&BulkPredictRequest { reviews: texts })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status(status.as_u16()));
        }

        let payload: BulkPredictResponse = response.json().await?;
        if payload.results.len() != texts.len() {
            return Err(RequestError::ResultCount {
                expected: texts.len(),
                actual: payload.results.len(),
            });
        }

        payload
            .results
            .into_iter()
            .zip(texts)
            .map(|(result, text)| coerce(result, text))
            .collect()
    }
}

/// Turns a lenient service payload into a complete record. Missing
/// probabilities take the fixed defaults; a missing timestamp is stamped now.
pub fn coerce(payload: PredictResponse, submitted: &str) -> Result<AnalysisRecord, RequestError> {
    let label: Label = payload.label.parse()?;

    Ok(AnalysisRecord {
        review: payload.review.unwrap_or_else(|| submitted.to_string()),
        label,
        positive: payload.positive.unwrap_or(DEFAULT_POSITIVE),
        negative: payload.negative.unwrap_or(DEFAULT_NEGATIVE),
        neutral: payload.neutral.unwrap_or(DEFAULT_NEUTRAL),
        timestamp: payload.timestamp.unwrap_or_else(local_timestamp),
    })
}

fn local_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> PredictResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn coerce_keeps_complete_payload() {
        let record = coerce(
            payload(
                r#"{"review":"Great","label":"Positive","positive":0.9,"negative":0.05,"neutral":0.05,"timestamp":"2026-01-05 10:00:00"}"#,
            ),
            "Great",
        )
        .unwrap();
        assert_eq!(record.label, Label::Positive);
        assert_eq!(record.positive, 0.9);
        assert_eq!(record.timestamp, "2026-01-05 10:00:00");
    }

    #[test]
    fn coerce_defaults_missing_fields() {
        let record = coerce(payload(r#"{"label":"negative"}"#), "Late delivery").unwrap();
        assert_eq!(record.label, Label::Negative);
        assert_eq!(record.review, "Late delivery");
        assert_eq!(record.positive, DEFAULT_POSITIVE);
        assert_eq!(record.negative, DEFAULT_NEGATIVE);
        assert_eq!(record.neutral, DEFAULT_NEUTRAL);
        assert_eq!(record.timestamp.len(), "2026-01-05 10:00:00".len());
    }

    #[test]
    fn coerce_rejects_unknown_label() {
        let err = coerce(payload(r#"{"label":"sarcastic"}"#), "Sure").unwrap_err();
        assert!(matches!(err, RequestError::Label(_)));
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let client = ClassificationClient::new("http://127.0.0.1:5000/", None).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");
    }
}
