#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: u32,
    pub author: &'static str,
    pub timestamp: &'static str,
    pub content: &'static str,
    pub likes: u32,
    pub comments: u32,
    pub liked: bool,
}

impl Post {
    /// Flip the like flag, adjusting the count by one in either direction.
    pub fn toggle_like(&mut self) {
        if self.liked {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.likes += 1;
        }
        self.liked = !self.liked;
    }
}

pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            author: "Sarah Chen",
            timestamp: "2 hours ago",
            content: "Just finished an amazing React workshop! 🚀 Can't wait to build my first AI-powered app. Thanks to everyone who participated!",
            likes: 24,
            comments: 5,
            liked: false,
        },
        Post {
            id: 2,
            author: "Marcus Johnson",
            timestamp: "4 hours ago",
            content: "Does anyone know if the library study rooms are available this weekend? Need a quiet place for finals prep 📚",
            likes: 12,
            comments: 8,
            liked: true,
        },
        Post {
            id: 3,
            author: "Lisa Weber",
            timestamp: "6 hours ago",
            content: "The Mensa vegetarian curry today is amazing! Highly recommend 🍛 Also free desserts until 3 PM!",
            likes: 45,
            comments: 12,
            liked: false,
        },
        Post {
            id: 4,
            author: "David Kim",
            timestamp: "1 day ago",
            content: "Looking for teammates for the Startup Pitch Competition! We're building an eco-friendly campus solution. DM me if interested! 🌱",
            likes: 31,
            comments: 15,
            liked: true,
        },
        Post {
            id: 5,
            author: "Emma Schmidt",
            timestamp: "1 day ago",
            content: "PSA: The Career Fair starts at 5 PM today in Main Hall. Don't miss it! Lots of great companies attending. Good luck everyone! 💼",
            likes: 67,
            comments: 9,
            liked: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_like_round_trip() {
        for original in sample_posts() {
            let mut post = original.clone();
            post.toggle_like();
            assert_ne!(post.liked, original.liked);
            assert_eq!(post.likes.abs_diff(original.likes), 1);
            post.toggle_like();
            assert_eq!(post, original);
        }
    }
}
