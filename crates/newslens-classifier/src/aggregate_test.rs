use chrono::{TimeZone, Utc};

use super::*;

fn article(title: &str, source: &str) -> Article {
    Article::new(
        title,
        source,
        Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap(),
    )
}

fn corpus() -> Vec<Article> {
    vec![
        // politics
        article("Senate debate continues", "Reuters"),
        // health, +1
        article("Vaccine breakthrough", "AP"),
        // politics + health
        article("Senate backs vaccine plan", "Reuters"),
        // no topic
        article("Local bakery opens", "Gazette"),
    ]
}

#[test]
fn aggregated_sentiment_empty_input() {
    let c = TextClassifier::builtin();
    assert_eq!(c.aggregated_sentiment(&[]), SentimentData::default());
}

#[test]
fn aggregated_sentiment_counts_sum_to_article_count() {
    let c = TextClassifier::builtin();
    let articles = vec![
        article("Great success for the best team", "A"),
        article("Crisis deepens as losses mount amid fear", "A"),
        article("Weather update", "B"),
        article("Good", "B"),
        article("", "C"),
    ];
    let data = c.aggregated_sentiment(&articles);
    assert_eq!(data.total(), articles.len());
    assert_eq!(
        data,
        SentimentData {
            positive: 1,
            neutral: 3,
            negative: 1
        }
    );
}

#[test]
fn aggregated_sentiment_reads_content() {
    let c = TextClassifier::builtin();
    let articles = vec![article("Quiet day", "A").with_content("great great news")];
    let data = c.aggregated_sentiment(&articles);
    assert_eq!(data.positive, 1);
}

#[test]
fn source_distribution_orders_by_count_then_first_seen() {
    let names = ["A", "B", "C", "A", "C", "B", "A", "A", "B", "C", "A"];
    let articles: Vec<Article> = names.iter().map(|s| article("x", s)).collect();
    let dist = source_distribution(&articles);
    let got: Vec<(&str, usize)> = dist
        .iter()
        .map(|d| (d.source_name.as_str(), d.article_count))
        .collect();
    assert_eq!(got, vec![("A", 5), ("B", 3), ("C", 3)]);
}

#[test]
fn source_distribution_tie_order_is_not_alphabetical() {
    let names = ["C", "A", "B", "B", "C", "A"];
    let articles: Vec<Article> = names.iter().map(|s| article("x", s)).collect();
    let dist = source_distribution(&articles);
    let got: Vec<&str> = dist.iter().map(|d| d.source_name.as_str()).collect();
    assert_eq!(got, vec!["C", "A", "B"]);
}

#[test]
fn source_distribution_truncates_to_top_ten() {
    let mut articles = Vec::new();
    for i in 0..12 {
        for _ in 0..=i {
            articles.push(article("x", &format!("source-{i}")));
        }
    }
    let dist = source_distribution(&articles);
    assert_eq!(dist.len(), TOP_SOURCES);
    assert_eq!(dist[0].source_name, "source-11");
    assert_eq!(dist[0].article_count, 12);
    assert_eq!(dist[9].source_name, "source-2");
}

#[test]
fn source_distribution_skips_empty_names() {
    let articles = vec![article("x", ""), article("y", "A"), article("z", "")];
    let dist = source_distribution(&articles);
    assert_eq!(
        dist,
        vec![SourceDistribution {
            source_name: "A".to_string(),
            article_count: 1
        }]
    );
}

#[test]
fn source_distribution_groups_by_exact_name() {
    let articles = vec![
        article("x", "CNN"),
        article("y", "cnn"),
        article("z", "CNN"),
    ];
    let dist = source_distribution(&articles);
    assert_eq!(dist.len(), 2);
    assert_eq!(dist[0].source_name, "CNN");
    assert_eq!(dist[0].article_count, 2);
}

#[test]
fn trending_topics_empty_input() {
    assert!(TextClassifier::builtin().trending_topics(&[]).is_empty());
}

#[test]
fn trending_topics_counts_and_means() {
    let c = TextClassifier::builtin();
    let trends = c.trending_topics(&corpus());
    assert_eq!(
        trends,
        vec![
            TopicTrend {
                topic: "politics".to_string(),
                article_count: 2,
                mean_sentiment: 0.0
            },
            TopicTrend {
                topic: "health".to_string(),
                article_count: 2,
                mean_sentiment: 0.1
            },
        ]
    );
}

#[test]
fn trending_topics_sorted_by_descending_count() {
    let c = TextClassifier::builtin();
    let mut articles = corpus();
    articles.push(article("Hospital funding", "AP"));
    let trends = c.trending_topics(&articles);
    assert_eq!(trends[0].topic, "health");
    assert_eq!(trends[0].article_count, 3);
    assert_eq!(trends[1].topic, "politics");
}

#[test]
fn trending_topics_uses_content() {
    let c = TextClassifier::builtin();
    let articles =
        vec![article("Quiet day", "A").with_content("the movie premiere was great")];
    let trends = c.trending_topics(&articles);
    assert_eq!(trends.len(), 1);
    assert_eq!(trends[0].topic, "entertainment");
    assert_eq!(trends[0].mean_sentiment, 0.2);
}

#[test]
fn category_distribution_follows_vocabulary_order() {
    let c = TextClassifier::builtin();
    let dist = c.category_distribution(&corpus());
    let got: Vec<(&str, usize)> = dist
        .iter()
        .map(|d| (d.category.as_str(), d.article_count))
        .collect();
    assert_eq!(
        got,
        vec![
            ("politics", 2),
            ("technology", 0),
            ("health", 2),
            ("economy", 0),
            ("climate", 0),
            ("sports", 0),
            ("entertainment", 0),
            ("other", 1),
        ]
    );
    // the politics + health article counts twice
    let total: usize = dist.iter().map(|d| d.article_count).sum();
    assert_eq!(total, 5);
    assert!(total > corpus().len());
}

#[test]
fn category_distribution_empty_text_counts_as_other() {
    let c = TextClassifier::builtin();
    let dist = c.category_distribution(&[article("", "A")]);
    for entry in &dist {
        let expected = usize::from(entry.category == "other");
        assert_eq!(entry.article_count, expected, "category {}", entry.category);
    }
}

#[test]
fn category_distribution_empty_input_has_all_categories() {
    let dist = TextClassifier::builtin().category_distribution(&[]);
    assert_eq!(dist.len(), 8);
    assert!(dist.iter().all(|d| d.article_count == 0));
}

#[test]
fn aggregators_are_idempotent() {
    let c = TextClassifier::builtin();
    let articles = corpus();
    assert_eq!(
        c.aggregated_sentiment(&articles),
        c.aggregated_sentiment(&articles)
    );
    assert_eq!(c.trending_topics(&articles), c.trending_topics(&articles));
    assert_eq!(
        c.category_distribution(&articles),
        c.category_distribution(&articles)
    );
    assert_eq!(source_distribution(&articles), source_distribution(&articles));
}

#[test]
fn filter_headlines_all_keeps_everything() {
    let c = TextClassifier::builtin();
    let articles = corpus();
    assert_eq!(c.filter_headlines(&articles, HeadlineFilter::All).len(), 4);
}

#[test]
fn filter_headlines_ignores_content() {
    let c = TextClassifier::builtin();
    let articles = vec![
        article("Quiet day", "A").with_content("great great great"),
        article("Great gains", "B").with_description("markets boost"),
        article("Crash", "C").with_description("crisis"),
    ];

    let positive = c.filter_headlines(
        &articles,
        HeadlineFilter::Bucket(SentimentBucket::Positive),
    );
    let titles: Vec<&str> = positive.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Great gains"]);

    let neutral = c.filter_headlines(
        &articles,
        HeadlineFilter::Bucket(SentimentBucket::Neutral),
    );
    assert_eq!(neutral.len(), 1);
    assert_eq!(neutral[0].title, "Quiet day");

    let negative = c.filter_headlines(
        &articles,
        HeadlineFilter::Bucket(SentimentBucket::Negative),
    );
    assert_eq!(negative.len(), 1);
    assert_eq!(negative[0].title, "Crash");
}

#[test]
fn ordered_tally_ranks_stably() {
    let mut tally = OrderedTally::new();
    for key in ["x", "y", "y", "z", "x"] {
        tally.add(key);
    }
    assert_eq!(tally.into_ranked(), vec![("x", 2), ("y", 2), ("z", 1)]);
}
