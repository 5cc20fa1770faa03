//! Wire shape of the timeline API response.

use serde::Deserialize;

use crate::domain::WeatherMetrics;

/// Top-level response envelope: `{ "data": { "timelines": [...] } }`.
#[derive(Debug, Deserialize)]
pub struct TimelineResponse {
    /// Payload wrapper.
    pub data: TimelineData,
}

/// Payload wrapper holding the requested timelines.
#[derive(Debug, Deserialize)]
pub struct TimelineData {
    /// One timeline per requested timestep.
    pub timelines: Vec<Timeline>,
}

/// A single timeline of intervals.
#[derive(Debug, Deserialize)]
pub struct Timeline {
    /// Chronological intervals within this timeline.
    pub intervals: Vec<Interval>,
}

/// One interval with its metric values.
#[derive(Debug, Deserialize)]
pub struct Interval {
    /// The metric values for this interval.
    pub values: WeatherMetrics,
}

impl TimelineResponse {
    /// Extracts the first interval's values from the first timeline,
    /// or `None` when either list is empty.
    #[must_use]
    pub fn into_first_values(self) -> Option<WeatherMetrics> {
        self.data
            .timelines
            .into_iter()
            .next()?
            .intervals
            .into_iter()
            .next()
            .map(|interval| interval.values)
    }
}
