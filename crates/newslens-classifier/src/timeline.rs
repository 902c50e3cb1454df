//! Per-day topic counts for the trends timeline.

use chrono::{Days, NaiveDate};
use newslens_core::Article;

use crate::classifier::TextClassifier;
use crate::types::TopicTimelinePoint;

/// Days covered by the timeline, ending with (and including) `today`.
pub const TIMELINE_DAYS: u64 = 7;

impl TextClassifier {
    /// Count, for each of the last [`TIMELINE_DAYS`] UTC days and each
    /// requested topic, the articles published that day whose headline text
    /// matches the topic.
    ///
    /// Points are ordered by date, then by the order of `topics`. Articles
    /// published outside the window are ignored. Days with no articles still
    /// produce zero-count points.
    #[must_use]
    pub fn topic_timeline(
        &self,
        articles: &[Article],
        topics: &[&str],
        today: NaiveDate,
    ) -> Vec<TopicTimelinePoint> {
        if topics.is_empty() {
            return Vec::new();
        }

        let days: Vec<NaiveDate> = (0..TIMELINE_DAYS)
            .rev()
            .filter_map(|back| today.checked_sub_days(Days::new(back)))
            .collect();

        let Some(&first_day) = days.first() else {
            return Vec::new();
        };

        let classified: Vec<(NaiveDate, Vec<&str>)> = articles
            .iter()
            .filter(|a| {
                let day = a.published_on();
                day >= first_day && day <= today
            })
            .map(|a| (a.published_on(), self.extract_topics(&a.headline_text())))
            .collect();

        let mut points = Vec::with_capacity(days.len() * topics.len());
        for day in days {
            for &topic in topics {
                let count = classified
                    .iter()
                    .filter(|(d, matched)| *d == day && matched.contains(&topic))
                    .count();
                points.push(TopicTimelinePoint {
                    date: day,
                    topic: topic.to_string(),
                    count,
                });
            }
        }
        points
    }
}
