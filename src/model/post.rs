//! Feed posts for the service interface.

/// A post in a service's feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: u32,
    pub author: String,
    pub content: String,
    /// Relative display timestamp (e.g. "2 hours ago")
    pub timestamp: String,
    pub likes: u32,
    pub comments: u32,
    pub has_image: bool,
    /// Whether the signed-in user authored this post
    pub own: bool,
}

impl Post {
    pub fn new(
        id: u32,
        author: impl Into<String>,
        content: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id,
            author: author.into(),
            content: content.into(),
            timestamp: timestamp.into(),
            likes: 0,
            comments: 0,
            has_image: false,
            own: false,
        }
    }

    pub const fn with_likes(mut self, likes: u32) -> Self {
        self.likes = likes;
        self
    }

    pub const fn with_comments(mut self, comments: u32) -> Self {
        self.comments = comments;
        self
    }

    pub const fn with_image(mut self) -> Self {
        self.has_image = true;
        self
    }
}

/// Seed posts shown in every service feed until a backend exists.
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post::new(
            1,
            "Alex Rivera",
            "Looking for someone to share a ride from LA to Vegas this weekend. \
             Leaving Friday evening, returning Sunday. Split gas and tolls!",
            "2 hours ago",
        )
        .with_likes(5)
        .with_comments(3),
        Post::new(
            2,
            "Sarah Kim",
            "Need accommodation in NYC for 3 nights next month. Budget friendly \
             options preferred. Clean and safe area!",
            "4 hours ago",
        )
        .with_likes(8)
        .with_comments(7)
        .with_image(),
        Post::new(
            3,
            "Mike Johnson",
            "Emergency fundraiser - My neighbor's house was damaged in the storm. \
             Family of 4 needs help with temporary housing costs.",
            "1 day ago",
        )
        .with_likes(23)
        .with_comments(12),
    ]
}
