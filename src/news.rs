//! Community news feed.
//!
//! Articles come from a static table standing in for real news APIs. The
//! fetch path filters for audience relevance and sorts most-recent first,
//! the same pipeline a live integration would run.

/// A news article shown in the home carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsArticle {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub source: &'static str,
    /// Relative display timestamp (e.g. "2 hours ago")
    pub timestamp: &'static str,
    pub url: &'static str,
    pub category: &'static str,
}

/// Keywords marking an article as relevant to the community audience.
const RELEVANT_KEYWORDS: &[&str] = &[
    "H1B",
    "H-1B",
    "OPT",
    "F-1",
    "visa",
    "immigration",
    "Indian",
    "India",
    "USCIS",
    "green card",
    "Indian community",
    "Indian Americans",
    "Indian students",
    "Indian professionals",
];

/// Curated article table. In production this would be fed by news APIs and
/// RSS feeds.
const ARTICLES: &[NewsArticle] = &[
    NewsArticle {
        id: "1",
        title: "USCIS Announces Major Changes to H-1B Lottery System for 2025",
        summary: "The U.S. Citizenship and Immigration Services unveils significant \
                  modifications to the H-1B visa lottery process, affecting thousands \
                  of Indian professionals seeking employment in America.",
        source: "Reuters",
        timestamp: "2 hours ago",
        url: "https://www.reuters.com",
        category: "Immigration",
    },
    NewsArticle {
        id: "2",
        title: "OPT Extension Period Extended for STEM Students",
        summary: "Department of Homeland Security extends Optional Practical Training \
                  for STEM graduates, giving international students more time to gain \
                  work experience in the US.",
        source: "The Wall Street Journal",
        timestamp: "4 hours ago",
        url: "https://www.wsj.com",
        category: "Education",
    },
    NewsArticle {
        id: "3",
        title: "Indian Student Enrollment in US Universities Reaches Record High",
        summary: "New data shows Indian student enrollment in American universities at \
                  an all-time high, with over 200,000 Indian students currently \
                  studying in the United States.",
        source: "CNN",
        timestamp: "1 day ago",
        url: "https://www.cnn.com",
        category: "Education",
    },
    NewsArticle {
        id: "4",
        title: "New Immigration Bill Could Fast-Track Green Cards for Indian Tech Workers",
        summary: "Bipartisan legislation introduced in Congress aims to address the \
                  green card backlog, potentially benefiting hundreds of thousands of \
                  Indian professionals in tech.",
        source: "TechCrunch",
        timestamp: "1 day ago",
        url: "https://www.techcrunch.com",
        category: "Immigration",
    },
    NewsArticle {
        id: "5",
        title: "Indian Community Centers Across US Report Surge in Cultural Events",
        summary: "Cultural organizations nationwide report increased participation in \
                  Diwali, Holi, and other traditional festivals as the Indian-American \
                  community continues to grow.",
        source: "NBC News",
        timestamp: "2 days ago",
        url: "https://www.nbcnews.com",
        category: "Culture",
    },
    NewsArticle {
        id: "6",
        title: "US-India Trade Relations Strengthen with New Technology Partnership",
        summary: "The United States and India announce expanded cooperation in \
                  technology sectors, creating new opportunities for Indian \
                  professionals and businesses in America.",
        source: "Financial Times",
        timestamp: "3 days ago",
        url: "https://www.ft.com",
        category: "Business",
    },
    NewsArticle {
        id: "7",
        title: "F-1 Visa Processing Times Improve as Consulates Increase Capacity",
        summary: "US consulates in India report faster F-1 student visa processing \
                  following increased staffing and streamlined procedures.",
        source: "The Times of India",
        timestamp: "4 days ago",
        url: "https://timesofindia.com",
        category: "Education",
    },
    NewsArticle {
        id: "8",
        title: "Indian-American Entrepreneurs Lead Startup Growth in Silicon Valley",
        summary: "Recent data shows Indian-American founders are behind nearly 30% of \
                  new startups in Silicon Valley, contributing significantly to \
                  innovation and job creation.",
        source: "Bloomberg",
        timestamp: "5 days ago",
        url: "https://www.bloomberg.com",
        category: "Business",
    },
];

/// True when the article mentions any of the audience keywords.
fn is_relevant(article: &NewsArticle) -> bool {
    let haystack = format!("{} {}", article.title, article.summary).to_lowercase();
    RELEVANT_KEYWORDS
        .iter()
        .any(|keyword| haystack.contains(&keyword.to_lowercase()))
}

/// Numeric age of a relative timestamp in hours (lower = more recent).
fn recency_hours(timestamp: &str) -> u32 {
    let count: u32 = timestamp
        .split_whitespace()
        .next()
        .and_then(|n| n.parse().ok())
        .unwrap_or(1);
    if timestamp.contains("hour") {
        count
    } else if timestamp.contains("day") {
        count * 24
    } else if timestamp.contains("week") {
        count * 24 * 7
    } else {
        // Unrecognized format sorts last.
        u32::MAX
    }
}

/// The relevance-filtered article list, most recent first.
///
/// Falls back to the first articles unfiltered if the relevance pass drops
/// everything, so the carousel is never empty.
pub fn curated() -> Vec<NewsArticle> {
    let mut articles: Vec<NewsArticle> = ARTICLES
        .iter()
        .filter(|a| is_relevant(a))
        .cloned()
        .collect();

    if articles.is_empty() {
        return ARTICLES.iter().take(5).cloned().collect();
    }

    articles.sort_by_key(|a| recency_hours(a.timestamp));
    articles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curated_is_sorted_most_recent_first() {
        let articles = curated();
        assert!(!articles.is_empty());
        assert!(
            articles
                .windows(2)
                .all(|w| recency_hours(w[0].timestamp) <= recency_hours(w[1].timestamp))
        );
    }

    #[test]
    fn curated_articles_are_relevant() {
        for article in curated() {
            assert!(is_relevant(&article), "irrelevant article: {}", article.id);
        }
    }

    #[test]
    fn relevance_drops_unrelated_articles() {
        let unrelated = NewsArticle {
            id: "x",
            title: "Local bakery wins pie contest",
            summary: "A small-town bakery took home the blue ribbon.",
            source: "Gazette",
            timestamp: "1 hour ago",
            url: "#",
            category: "Local",
        };
        assert!(!is_relevant(&unrelated));
    }

    #[test]
    fn recency_parses_hours_days_weeks() {
        assert_eq!(recency_hours("2 hours ago"), 2);
        assert_eq!(recency_hours("1 day ago"), 24);
        assert_eq!(recency_hours("2 weeks ago"), 336);
        assert_eq!(recency_hours("a while back"), u32::MAX);
    }
}
