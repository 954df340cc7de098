use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Probabilities substituted when the classifier omits a field.
pub const DEFAULT_POSITIVE: f64 = 0.33;
pub const DEFAULT_NEGATIVE: f64 = 0.33;
pub const DEFAULT_NEUTRAL: f64 = 0.34;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Positive,
    Negative,
    Neutral,
}

impl Label {
    pub const ALL: [Label; 3] = [Label::Positive, Label::Negative, Label::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Positive => "Positive",
            Label::Negative => "Negative",
            Label::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel(pub String);

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sentiment label '{}'", self.0)
    }
}

impl std::error::Error for UnknownLabel {}

impl FromStr for Label {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Label::Positive),
            "negative" => Ok(Label::Negative),
            "neutral" => Ok(Label::Neutral),
            _ => Err(UnknownLabel(value.to_string())),
        }
    }
}

/// One completed classification. Never modified after it enters the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub review: String,
    pub label: Label,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub timestamp: String,
}

impl AnalysisRecord {
    pub fn probability(&self, label: Label) -> f64 {
        match label {
            Label::Positive => self.positive,
            Label::Negative => self.negative,
            Label::Neutral => self.neutral,
        }
    }

    /// Highest of the three probabilities.
    pub fn confidence(&self) -> f64 {
        self.positive.max(self.negative).max(self.neutral)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Single,
    Bulk,
    Insights,
    Analytics,
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(ViewMode::Single),
            "bulk" => Ok(ViewMode::Bulk),
            "insights" => Ok(ViewMode::Insights),
            "analytics" => Ok(ViewMode::Analytics),
            other => Err(format!(
                "tab must be one of 'single', 'bulk', 'insights', 'analytics' (got '{other}')"
            )),
        }
    }
}

// Outbound wire shapes for the classification service.

#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub review: &'a str,
}

#[derive(Debug, Serialize)]
pub struct BulkPredictRequest<'a> {
    pub reviews: &'a [String],
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub review: Option<String>,
    pub label: String,
    #[serde(default)]
    pub positive: Option<f64>,
    #[serde(default)]
    pub negative: Option<f64>,
    #[serde(default)]
    pub neutral: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BulkPredictResponse {
    pub results: Vec<PredictResponse>,
}

// Inbound dashboard API bodies.

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub review: String,
}

#[derive(Debug, Deserialize)]
pub struct BulkAnalyzeRequest {
    pub reviews: String,
}

#[derive(Debug, Deserialize)]
pub struct TabRequest {
    pub tab: String,
}

// Aggregate views.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentCounts {
    pub fn get(&self, label: Label) -> usize {
        match label {
            Label::Positive => self.positive,
            Label::Negative => self.negative,
            Label::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub name: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfidenceBucket {
    pub range: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub index: usize,
    pub positive: i64,
    pub negative: i64,
    pub neutral: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RadarProfile {
    pub positive: i64,
    pub negative: i64,
    pub neutral: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilitySlice {
    pub name: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightSummary {
    pub total: usize,
    pub satisfaction_percent: i64,
    pub focus: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_reviews: usize,
    pub counts: SentimentCounts,
    pub breakdown: Vec<LabelCount>,
    pub confidence: Vec<ConfidenceBucket>,
    pub trend: Vec<TrendPoint>,
    pub radar: Option<RadarProfile>,
    pub insights: Option<InsightSummary>,
    pub recent: Vec<AnalysisRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentResult {
    pub record: AnalysisRecord,
    pub confidence: f64,
    pub breakdown: Vec<ProbabilitySlice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
    pub mode: ViewMode,
    pub review_input: String,
    pub bulk_input: String,
    pub loading: bool,
    pub error: Option<String>,
    pub current: Option<CurrentResult>,
    pub stats: DashboardStats,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub count: usize,
    pub history: Vec<AnalysisRecord>,
}

/// Downloadable report document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportReport {
    pub total_reviews: usize,
    pub sentiment: SentimentCounts,
    pub timestamp: String,
    pub reviews: Vec<AnalysisRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_parses_case_insensitively() {
        assert_eq!("Positive".parse::<Label>(), Ok(Label::Positive));
        assert_eq!("NEGATIVE".parse::<Label>(), Ok(Label::Negative));
        assert_eq!(" neutral ".parse::<Label>(), Ok(Label::Neutral));
        assert!("mixed".parse::<Label>().is_err());
    }

    #[test]
    fn counts_serialize_with_label_keys() {
        let counts = SentimentCounts {
            positive: 2,
            negative: 1,
            neutral: 0,
        };
        let value = serde_json::to_value(counts).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "Positive": 2, "Negative": 1, "Neutral": 0 })
        );
    }

    #[test]
    fn predict_response_tolerates_missing_probabilities() {
        let parsed: PredictResponse =
            serde_json::from_str(r#"{"label":"positive","positive":0.7,"neutral":null}"#).unwrap();
        assert_eq!(parsed.positive, Some(0.7));
        assert_eq!(parsed.negative, None);
        assert_eq!(parsed.neutral, None);
        assert_eq!(parsed.timestamp, None);
    }

    #[test]
    fn view_mode_rejects_unknown_tab() {
        assert_eq!("Analytics".parse::<ViewMode>(), Ok(ViewMode::Analytics));
        assert!("settings".parse::<ViewMode>().is_err());
    }
}
