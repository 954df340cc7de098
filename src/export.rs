use crate::log::ResultLog;
use crate::models::ExportReport;
use crate::stats::sentiment_counts;
use chrono::{DateTime, SecondsFormat, Utc};

pub fn build_report(log: &ResultLog, exported_at: DateTime<Utc>) -> ExportReport {
    ExportReport {
        total_reviews: log.len(),
        sentiment: sentiment_counts(log),
        timestamp: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        reviews: log.records().to_vec(),
    }
}

pub fn report_file_name(exported_at: DateTime<Utc>) -> String {
    format!("sentiment-report-{}.json", exported_at.timestamp_millis())
}

pub fn render_report(report: &ExportReport) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec_pretty(report)
}
