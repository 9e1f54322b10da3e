use crate::models::{FeedPost, QuickAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeTab {
    #[default]
    QuickActions,
    CommunityFeed,
}

impl HomeTab {
    pub const ALL: [HomeTab; 2] = [HomeTab::QuickActions, HomeTab::CommunityFeed];

    pub fn label(&self) -> &'static str {
        match self {
            HomeTab::QuickActions => "Quick Actions",
            HomeTab::CommunityFeed => "Community",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            HomeTab::QuickActions => "⚡",
            HomeTab::CommunityFeed => "💬",
        }
    }
}

impl FeedPost {
    pub fn toggle_like(&mut self) {
        if self.is_liked {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.likes += 1;
        }
        self.is_liked = !self.is_liked;
    }

    pub fn toggle_repost(&mut self) {
        if self.is_reposted {
            self.reposts = self.reposts.saturating_sub(1);
        } else {
            self.reposts += 1;
        }
        self.is_reposted = !self.is_reposted;
    }
}

/// Static community posts. Likes and reposts only change locally.
pub struct CommunityFeed {
    posts: Vec<FeedPost>,
}

impl CommunityFeed {
    pub fn new(posts: Vec<FeedPost>) -> Self {
        Self { posts }
    }

    pub fn posts(&self) -> &[FeedPost] {
        &self.posts
    }

    pub fn toggle_like(&mut self, post_id: &str) -> bool {
        match self.posts.iter_mut().find(|post| post.id == post_id) {
            Some(post) => {
                post.toggle_like();
                true
            }
            None => false,
        }
    }

    pub fn toggle_repost(&mut self, post_id: &str) -> bool {
        match self.posts.iter_mut().find(|post| post.id == post_id) {
            Some(post) => {
                post.toggle_repost();
                true
            }
            None => false,
        }
    }
}

impl Default for CommunityFeed {
    fn default() -> Self {
        Self::new(sample_posts())
    }
}

pub fn quick_actions() -> &'static [QuickAction] {
    const ACTIONS: &[QuickAction] = &[
        QuickAction {
            id: "breathe",
            title: "Breathe",
            description: "Try box breathing: in for 4, hold for 4, out for 4, hold for 4. Repeat four times.",
            icon: "🌬",
        },
        QuickAction {
            id: "journal",
            title: "Journal",
            description: "Write down three things on your mind right now. No need to make them tidy.",
            icon: "📓",
        },
        QuickAction {
            id: "ground",
            title: "Ground",
            description: "Name 5 things you can see, 4 you can touch, 3 you can hear, 2 you can smell and 1 you can taste.",
            icon: "🌱",
        },
        QuickAction {
            id: "reach-out",
            title: "Reach out",
            description: "Send a short message to someone you trust. If you are in crisis, contact your local emergency line.",
            icon: "🤝",
        },
    ];
    ACTIONS
}

fn sample_posts() -> Vec<FeedPost> {
    let post = |id: &str, user: &str, content: &str, timestamp: &str, likes, reposts, image: Option<&str>| {
        FeedPost {
            id: id.to_string(),
            user: user.to_string(),
            content: content.to_string(),
            timestamp: timestamp.to_string(),
            likes,
            reposts,
            is_liked: false,
            is_reposted: false,
            image: image.map(str::to_string),
        }
    };

    vec![
        post(
            "p1",
            "Maya",
            "Went for a short walk before work and it really changed my morning.",
            "2h ago",
            24,
            3,
            None,
        ),
        post(
            "p2",
            "Jordan",
            "Reminder: rest is productive too. Took a nap today and I'm not sorry.",
            "5h ago",
            58,
            12,
            None,
        ),
        post(
            "p3",
            "Sam",
            "The peer support circle last week was exactly what I needed. See you all there again!",
            "1d ago",
            31,
            5,
            Some("https://images.unsplash.com/photo-1529156069898-49953e39b3ac?w=640"),
        ),
        post(
            "p4",
            "Alex",
            "Day 10 of journaling. Small habit, big difference.",
            "2d ago",
            17,
            1,
            None,
        ),
    ]
}
