use crate::log::ResultLog;
use crate::models::{
    AnalysisRecord, ConfidenceBucket, DashboardStats, InsightSummary, Label, LabelCount,
    ProbabilitySlice, RadarProfile, SentimentCounts, TrendPoint,
};

pub const TREND_WINDOW: usize = 10;
pub const RECENT_WINDOW: usize = 10;

const BUCKETS: [(&str, f64); 5] = [
    ("0-20%", 20.0),
    ("21-40%", 40.0),
    ("41-60%", 60.0),
    ("61-80%", 80.0),
    ("81-100%", f64::INFINITY),
];

pub fn build_dashboard(log: &ResultLog) -> DashboardStats {
    let counts = sentiment_counts(log);
    DashboardStats {
        total_reviews: log.len(),
        counts,
        breakdown: breakdown_of(counts),
        confidence: confidence_histogram(log),
        trend: trend_series(log, TREND_WINDOW),
        radar: radar_profile(log),
        insights: insight_summary(log),
        recent: recent_activity(log, RECENT_WINDOW),
    }
}

pub fn sentiment_counts(log: &ResultLog) -> SentimentCounts {
    let mut counts = SentimentCounts::default();
    for record in log.iter() {
        match record.label {
            Label::Positive => counts.positive += 1,
            Label::Negative => counts.negative += 1,
            Label::Neutral => counts.neutral += 1,
        }
    }
    counts
}

/// Count per label in chart order.
pub fn sentiment_breakdown(log: &ResultLog) -> Vec<LabelCount> {
    breakdown_of(sentiment_counts(log))
}

fn breakdown_of(counts: SentimentCounts) -> Vec<LabelCount> {
    Label::ALL
        .iter()
        .map(|label| LabelCount {
            name: label.as_str(),
            count: counts.get(*label),
        })
        .collect()
}

/// Buckets the top probability of every record; a value on a boundary lands
/// in the lower bucket.
pub fn confidence_histogram(log: &ResultLog) -> Vec<ConfidenceBucket> {
    let mut buckets: Vec<ConfidenceBucket> = BUCKETS
        .iter()
        .map(|(range, _)| ConfidenceBucket {
            range: *range,
            count: 0,
        })
        .collect();

    for record in log.iter() {
        let top = record.confidence() * 100.0;
        let slot = BUCKETS
            .iter()
            .position(|(_, upper)| top <= *upper)
            .unwrap_or(BUCKETS.len() - 1);
        buckets[slot].count += 1;
    }

    buckets
}

/// The `window` most recent records, oldest first, as integer percentages.
pub fn trend_series(log: &ResultLog, window: usize) -> Vec<TrendPoint> {
    let take = window.min(log.len());
    log.records()[..take]
        .iter()
        .rev()
        .enumerate()
        .map(|(idx, record)| TrendPoint {
            index: idx + 1,
            positive: percent(record.positive),
            negative: percent(record.negative),
            neutral: percent(record.neutral),
        })
        .collect()
}

pub fn radar_profile(log: &ResultLog) -> Option<RadarProfile> {
    if log.is_empty() {
        return None;
    }

    let total = log.len() as f64;
    let (positive, negative, neutral) = log.iter().fold((0.0, 0.0, 0.0), |acc, record| {
        (
            acc.0 + record.positive,
            acc.1 + record.negative,
            acc.2 + record.neutral,
        )
    });

    Some(RadarProfile {
        positive: percent(positive / total),
        negative: percent(negative / total),
        neutral: percent(neutral / total),
    })
}

/// Pie/bar dataset for a single result.
pub fn probability_breakdown(record: &AnalysisRecord) -> Vec<ProbabilitySlice> {
    Label::ALL
        .iter()
        .map(|label| ProbabilitySlice {
            name: label.as_str(),
            value: record.probability(*label),
        })
        .collect()
}

pub fn insight_summary(log: &ResultLog) -> Option<InsightSummary> {
    if log.is_empty() {
        return None;
    }

    let counts = sentiment_counts(log);
    let focus = if counts.negative > 0 {
        "Address negative feedback"
    } else {
        "Maintain quality"
    };

    Some(InsightSummary {
        total: log.len(),
        satisfaction_percent: percent(counts.positive as f64 / log.len() as f64),
        focus,
    })
}

pub fn recent_activity(log: &ResultLog, window: usize) -> Vec<AnalysisRecord> {
    log.iter().take(window).cloned().collect()
}

fn percent(fraction: f64) -> i64 {
    (fraction * 100.0).round() as i64
}
