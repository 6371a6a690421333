//! Search query strings for the `q` parameter.

use chrono::NaiveDate;

use repobot_types::repo::{SearchQuery, TrendingPeriod};

/// `{name} in:name [language:{lang}] [user:{author}]`
pub fn repository_query(query: &SearchQuery) -> String {
    let mut q = format!("{} in:name", query.repo_name());
    if !query.language().is_empty() {
        q.push_str(" language:");
        q.push_str(query.language());
    }
    if !query.author().is_empty() {
        q.push_str(" user:");
        q.push_str(query.author());
    }
    q
}

/// `created:>{YYYY-MM-DD} [{topic}]`
pub fn trending_query(period: TrendingPeriod, topic: &str, today: NaiveDate) -> String {
    let since = period.created_after(today).format("%Y-%m-%d");
    let topic = topic.trim();
    if topic.is_empty() {
        format!("created:>{since}")
    } else {
        format!("created:>{since} {topic}")
    }
}
