//! Shared feed records: posts, achievements, comments, visibility.
//!
//! # Responsibility
//! - Define the entities shown in the social feed and their visibility
//!   scoping.
//!
//! # Invariants
//! - `likes` behaves as a set of user ids; the toggle operations keep it
//!   duplicate-free.
//! - `comments` are append-only and ordered by insertion, which equals
//!   chronological order in the single-writer execution model.

use crate::model::user::{User, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type PostId = Uuid;
pub type AchievementId = Uuid;
pub type CommentId = Uuid;

/// Per-entity audience scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Owner only.
    Private,
    /// Owner plus mutual friends.
    Friends,
    /// Everyone.
    Public,
}

impl Visibility {
    /// Evaluates the audience predicate for content owned by `author`.
    ///
    /// Authors always see their own content regardless of scope.
    pub fn grants(self, author: &User, viewer: UserId) -> bool {
        if author.id == viewer {
            return true;
        }
        match self {
            Self::Public => true,
            Self::Friends => author.is_friend_of(viewer),
            Self::Private => false,
        }
    }
}

/// A remark attached to a post or achievement. Created through the
/// parent's comment operation; never edited or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    /// Comment author.
    pub user_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(user_id: UserId, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// Feed item category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostKind {
    Text,
    Mood,
    Achievement,
    Goal,
    Photo,
}

/// User-authored feed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub content: String,
    /// Inline image payloads as data URIs.
    pub images: Vec<String>,
    pub kind: PostKind,
    pub visibility: Visibility,
    pub likes: Vec<UserId>,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn new(
        user_id: UserId,
        content: impl Into<String>,
        kind: PostKind,
        visibility: Visibility,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            content: content.into(),
            images: Vec::new(),
            kind,
            visibility,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

/// Life-domain tag of a celebrated event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    Mental,
    Emotional,
    Professional,
    Social,
}

/// A celebrated event with engagement, scoped like a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub kind: AchievementKind,
    /// Day the achievement happened, as picked by the owner.
    pub date: NaiveDate,
    pub visibility: Visibility,
    pub likes: Vec<UserId>,
    pub comments: Vec<Comment>,
}

impl Achievement {
    pub fn new(
        user_id: UserId,
        title: impl Into<String>,
        kind: AchievementKind,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: title.into(),
            description: String::new(),
            kind,
            date,
            visibility: Visibility::Private,
            likes: Vec::new(),
            comments: Vec::new(),
        }
    }
}

/// Adds `user` to `likes` if absent, removes it otherwise. Two identical
/// calls cancel out.
pub(crate) fn toggle_like(likes: &mut Vec<UserId>, user: UserId) {
    if let Some(position) = likes.iter().position(|id| *id == user) {
        likes.remove(position);
    } else {
        likes.push(user);
    }
}

#[cfg(test)]
mod tests {
    use super::{toggle_like, Visibility};
    use crate::model::user::User;
    use uuid::Uuid;

    #[test]
    fn toggle_like_is_an_involution() {
        let mut likes = vec![Uuid::new_v4()];
        let user = Uuid::new_v4();
        let before = likes.clone();

        toggle_like(&mut likes, user);
        assert!(likes.contains(&user));
        toggle_like(&mut likes, user);
        assert_eq!(likes, before);
    }

    #[test]
    fn private_scope_admits_only_the_author() {
        let author = User::new("ana", "pw", "Ana");
        let viewer = Uuid::new_v4();
        assert!(Visibility::Private.grants(&author, author.id));
        assert!(!Visibility::Private.grants(&author, viewer));
    }

    #[test]
    fn friends_scope_follows_the_author_friend_list() {
        let mut author = User::new("ana", "pw", "Ana");
        let viewer = Uuid::new_v4();
        assert!(!Visibility::Friends.grants(&author, viewer));
        author.friends.push(viewer);
        assert!(Visibility::Friends.grants(&author, viewer));
    }
}
