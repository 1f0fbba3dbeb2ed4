//! Mood-trend aggregation.
//!
//! Turns a filtered entry set into a plottable time series. The aggregator is
//! agnostic to the charting technology: it emits one point per entry, in the
//! order the query layer produced them, with no smoothing and no interpolation
//! for days without entries.

use crate::db::entries::JournalEntry;
use crate::sentiment::Sentiment;
use chrono::NaiveDate;

/// One plottable point in a mood trend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    /// Entry date (x axis).
    pub date: NaiveDate,
    /// Numeric mood score (y axis): Positive +1, Neutral 0, Negative -1.
    pub score: i32,
    /// The label the score was mapped from, for tooltips.
    pub sentiment: Sentiment,
    /// The entry's tags, for tooltips.
    pub tags: Vec<String>,
}

/// A time-ordered mood series over one owner's filtered entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodTrend {
    pub points: Vec<TrendPoint>,
}

/// Builds a mood trend from an ordered entry set.
///
/// Returns `None` when there are no entries - the explicit insufficient-data
/// signal, so presentation layers show a message instead of an empty chart.
pub fn mood_trend(entries: &[JournalEntry]) -> Option<MoodTrend> {
    if entries.is_empty() {
        return None;
    }

    let points = entries
        .iter()
        .map(|entry| TrendPoint {
            date: entry.created_date,
            score: entry.sentiment.score(),
            sentiment: entry.sentiment,
            tags: entry.tags.clone(),
        })
        .collect();

    Some(MoodTrend { points })
}
