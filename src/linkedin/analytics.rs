//! Engagement analytics derived from posts and articles.

use crate::types::{
    Analytics, Article, DistributionSlice, EngagementPoint, Post, PostPerformance,
};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Number of recent items shown in the per-post performance chart
pub const PERFORMANCE_ITEMS: usize = 10;

const LABEL_CHARS: usize = 20;

/// Shared view over a post or an article
struct Item<'a> {
    label_source: &'a str,
    created: DateTime<Utc>,
    likes: u64,
    comments: u64,
    shares: u64,
}

impl<'a> From<&'a Post> for Item<'a> {
    fn from(post: &'a Post) -> Self {
        Self {
            label_source: &post.text,
            created: post.created,
            likes: post.likes,
            comments: post.comments,
            shares: post.shares,
        }
    }
}

impl<'a> From<&'a Article> for Item<'a> {
    fn from(article: &'a Article) -> Self {
        let label_source = if article.title.is_empty() {
            &article.text
        } else {
            &article.title
        };
        Self {
            label_source,
            created: article.created,
            likes: article.likes,
            comments: article.comments,
            shares: article.shares,
        }
    }
}

/// Aggregate a snapshot; `None` when there is nothing to aggregate
pub fn compute(posts: &[Post], articles: &[Article]) -> Option<Analytics> {
    let mut items: Vec<Item<'_>> = posts
        .iter()
        .map(Item::from)
        .chain(articles.iter().map(Item::from))
        .collect();

    if items.is_empty() {
        return None;
    }

    let total_likes = items.iter().map(|i| i.likes).sum();
    let total_comments = items.iter().map(|i| i.comments).sum();
    let total_shares = items.iter().map(|i| i.shares).sum();

    let mut by_day: BTreeMap<String, (u64, u64, u64)> = BTreeMap::new();
    for item in &items {
        let entry = by_day
            .entry(item.created.format("%Y-%m-%d").to_string())
            .or_default();
        entry.0 += item.likes;
        entry.1 += item.comments;
        entry.2 += item.shares;
    }
    let engagement_over_time = by_day
        .into_iter()
        .map(|(date, (likes, comments, shares))| EngagementPoint {
            date,
            likes,
            comments,
            shares,
        })
        .collect();

    // Newest first
    items.sort_by(|a, b| b.created.cmp(&a.created));
    let post_performance = items
        .iter()
        .take(PERFORMANCE_ITEMS)
        .map(|item| PostPerformance {
            post: label(item.label_source),
            likes: item.likes,
            comments: item.comments,
            shares: item.shares,
        })
        .collect();

    Some(Analytics {
        total_posts: items.len() as u64,
        total_likes,
        total_comments,
        total_shares,
        engagement_over_time,
        post_performance,
        engagement_distribution: vec![
            DistributionSlice {
                name: "Likes".to_string(),
                value: total_likes,
            },
            DistributionSlice {
                name: "Comments".to_string(),
                value: total_comments,
            },
            DistributionSlice {
                name: "Shares".to_string(),
                value: total_shares,
            },
        ],
    })
}

fn label(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(LABEL_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn post(id: &str, text: &str, day: u32, hour: u32, likes: u64) -> Post {
        Post {
            id: id.to_string(),
            text: text.to_string(),
            created: Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap(),
            likes,
            comments: 2,
            shares: 1,
            url: None,
        }
    }

    #[test]
    fn test_no_items_yields_none() {
        assert!(compute(&[], &[]).is_none());
    }

    #[test]
    fn test_totals_include_articles() {
        let posts = vec![post("1", "short", 1, 9, 10), post("2", "other", 2, 9, 5)];
        let articles = vec![Article {
            id: "a1".to_string(),
            title: "An article".to_string(),
            text: String::new(),
            created: Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap(),
            likes: 7,
            comments: 0,
            shares: 3,
            url: None,
        }];

        let analytics = compute(&posts, &articles).unwrap();

        assert_eq!(analytics.total_posts, 3);
        assert_eq!(analytics.total_likes, 22);
        assert_eq!(analytics.total_comments, 4);
        assert_eq!(analytics.total_shares, 5);
        assert_eq!(analytics.engagement_distribution[0].name, "Likes");
        assert_eq!(analytics.engagement_distribution[0].value, 22);
        assert_eq!(analytics.engagement_distribution[2].value, 5);
    }

    #[test]
    fn test_engagement_grouped_by_day_ascending() {
        let posts = vec![
            post("1", "late", 5, 8, 1),
            post("2", "early", 1, 8, 2),
            post("3", "same day", 5, 20, 4),
        ];

        let analytics = compute(&posts, &[]).unwrap();
        let days: Vec<&str> = analytics
            .engagement_over_time
            .iter()
            .map(|p| p.date.as_str())
            .collect();

        assert_eq!(days, vec!["2024-03-01", "2024-03-05"]);
        assert_eq!(analytics.engagement_over_time[1].likes, 5);
        assert_eq!(analytics.engagement_over_time[1].comments, 4);
    }

    #[test]
    fn test_performance_keeps_most_recent_and_truncates_labels() {
        let posts: Vec<Post> = (1..=12)
            .map(|day| {
                post(
                    &day.to_string(),
                    "A fairly long post body that needs truncating",
                    day,
                    9,
                    day as u64,
                )
            })
            .collect();

        let analytics = compute(&posts, &[]).unwrap();

        assert_eq!(analytics.post_performance.len(), PERFORMANCE_ITEMS);
        assert_eq!(analytics.post_performance[0].likes, 12, "newest first");
        assert_eq!(analytics.post_performance[0].post, "A fairly long post b...");
    }

    #[test]
    fn test_short_label_not_truncated() {
        assert_eq!(label("exactly twenty chars"), "exactly twenty chars");
        assert_eq!(label("héllo"), "héllo");
    }
}
