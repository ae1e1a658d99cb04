//! Social operations: posts, achievements, engagement, friend graph,
//! feed resolution.
//!
//! # Responsibility
//! - CRUD for posts and achievements plus their like/comment engagement.
//! - Friend-invite state transitions over ordered user pairs.
//! - Visibility-filtered feed composition, evaluated at read time.
//!
//! # Invariants
//! - Accepting an invite records the friendship on both sides; removing
//!   one tears it down on both sides.
//! - `send_friend_invite` is idempotent: a sender appears at most once in
//!   the recipient's pending list.
//! - Feed queries never materialize state; they filter and sort the full
//!   collection on every call.

use crate::model::social::{toggle_like, Achievement, AchievementId, Comment, CommentId, Post, PostId};
use crate::model::user::UserId;
use crate::repo::snapshot_repo::SnapshotRepository;
use crate::store::{NexusStore, StoreError, StoreResult};

impl<R: SnapshotRepository> NexusStore<R> {
    // --- posts ---

    /// Appends a post and returns its id.
    pub fn add_post(&mut self, post: Post) -> StoreResult<PostId> {
        let id = post.id;
        self.state.posts.push(post);
        self.commit()?;
        Ok(id)
    }

    /// Applies a partial update to the matching post.
    pub fn update_post(
        &mut self,
        id: PostId,
        mutate: impl FnOnce(&mut Post),
    ) -> StoreResult<()> {
        let index = self.require_post_index(id)?;
        mutate(&mut self.state.posts[index]);
        self.commit()
    }

    /// Removes the matching post.
    pub fn delete_post(&mut self, id: PostId) -> StoreResult<()> {
        self.require_post_index(id)?;
        self.state.posts.retain(|post| post.id != id);
        self.commit()
    }

    /// Toggles `user`'s like on a post. Two identical calls cancel out.
    pub fn toggle_post_like(&mut self, post_id: PostId, user: UserId) -> StoreResult<()> {
        let index = self.require_post_index(post_id)?;
        toggle_like(&mut self.state.posts[index].likes, user);
        self.commit()
    }

    /// Appends a comment to a post and returns the comment id.
    pub fn add_post_comment(
        &mut self,
        post_id: PostId,
        author: UserId,
        content: impl Into<String>,
    ) -> StoreResult<CommentId> {
        let index = self.require_post_index(post_id)?;
        let comment = Comment::new(author, content);
        let id = comment.id;
        self.state.posts[index].comments.push(comment);
        self.commit()?;
        Ok(id)
    }

    // --- achievements ---

    /// Appends an achievement and returns its id. Achievements expose no
    /// delete operation.
    pub fn add_achievement(&mut self, achievement: Achievement) -> StoreResult<AchievementId> {
        let id = achievement.id;
        self.state.achievements.push(achievement);
        self.commit()?;
        Ok(id)
    }

    /// Applies a partial update to the matching achievement.
    pub fn update_achievement(
        &mut self,
        id: AchievementId,
        mutate: impl FnOnce(&mut Achievement),
    ) -> StoreResult<()> {
        let index = self.require_achievement_index(id)?;
        mutate(&mut self.state.achievements[index]);
        self.commit()
    }

    /// Toggles `user`'s like on an achievement.
    pub fn toggle_achievement_like(
        &mut self,
        achievement_id: AchievementId,
        user: UserId,
    ) -> StoreResult<()> {
        let index = self.require_achievement_index(achievement_id)?;
        toggle_like(&mut self.state.achievements[index].likes, user);
        self.commit()
    }

    /// Appends a comment to an achievement and returns the comment id.
    pub fn add_achievement_comment(
        &mut self,
        achievement_id: AchievementId,
        author: UserId,
        content: impl Into<String>,
    ) -> StoreResult<CommentId> {
        let index = self.require_achievement_index(achievement_id)?;
        let comment = Comment::new(author, content);
        let id = comment.id;
        self.state.achievements[index].comments.push(comment);
        self.commit()?;
        Ok(id)
    }

    // --- friend graph ---

    /// Records an invite from `from` in `to`'s pending list.
    ///
    /// Idempotent for an already-pending pair. Nothing here prevents
    /// self-invites or invites between existing friends; callers filter.
    pub fn send_friend_invite(&mut self, from: UserId, to: UserId) -> StoreResult<()> {
        self.require_user_index(from)?;
        let to_index = self.require_user_index(to)?;

        let recipient = &mut self.state.users[to_index];
        if !recipient.pending_invites.contains(&from) {
            recipient.pending_invites.push(from);
        }
        self.commit()
    }

    /// Confirms an invite: both accounts list each other as friends and
    /// the pending entry is cleared.
    pub fn accept_friend_invite(&mut self, user: UserId, from: UserId) -> StoreResult<()> {
        let user_index = self.require_user_index(user)?;
        let sender_index = self.require_user_index(from)?;

        {
            let account = &mut self.state.users[user_index];
            account.pending_invites.retain(|sender| *sender != from);
            if !account.friends.contains(&from) {
                account.friends.push(from);
            }
        }
        {
            let sender = &mut self.state.users[sender_index];
            if !sender.friends.contains(&user) {
                sender.friends.push(user);
            }
        }
        self.commit()
    }

    /// Rejects an invite: clears the pending entry, no friendship change.
    pub fn decline_friend_invite(&mut self, user: UserId, from: UserId) -> StoreResult<()> {
        let user_index = self.require_user_index(user)?;
        self.state.users[user_index]
            .pending_invites
            .retain(|sender| *sender != from);
        self.commit()
    }

    /// Symmetric friendship teardown. Leaves no trace of the pair.
    pub fn remove_friend(&mut self, user: UserId, friend: UserId) -> StoreResult<()> {
        let user_index = self.require_user_index(user)?;
        let friend_index = self.require_user_index(friend)?;

        self.state.users[user_index]
            .friends
            .retain(|id| *id != friend);
        self.state.users[friend_index]
            .friends
            .retain(|id| *id != user);
        self.commit()
    }

    // --- feed resolution ---

    /// Evaluates the audience predicate for one post. A post whose author
    /// no longer exists is visible to nobody.
    pub fn is_post_visible_to(&self, post: &Post, viewer: UserId) -> bool {
        self.user(post.user_id)
            .is_some_and(|author| post.visibility.grants(author, viewer))
    }

    /// Evaluates the audience predicate for one achievement.
    pub fn is_achievement_visible_to(&self, achievement: &Achievement, viewer: UserId) -> bool {
        self.user(achievement.user_id)
            .is_some_and(|author| achievement.visibility.grants(author, viewer))
    }

    /// Composes the feed for `viewer`: every visible post, newest first.
    pub fn visible_posts(&self, viewer: UserId) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self
            .state
            .posts
            .iter()
            .filter(|post| self.is_post_visible_to(post, viewer))
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        posts
    }

    /// Every achievement visible to `viewer`, newest first.
    pub fn visible_achievements(&self, viewer: UserId) -> Vec<&Achievement> {
        let mut achievements: Vec<&Achievement> = self
            .state
            .achievements
            .iter()
            .filter(|achievement| self.is_achievement_visible_to(achievement, viewer))
            .collect();
        achievements.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
        achievements
    }

    fn require_post_index(&self, id: PostId) -> StoreResult<usize> {
        self.state
            .posts
            .iter()
            .position(|post| post.id == id)
            .ok_or(StoreError::NotFound { entity: "post", id })
    }

    fn require_achievement_index(&self, id: AchievementId) -> StoreResult<usize> {
        self.state
            .achievements
            .iter()
            .position(|achievement| achievement.id == id)
            .ok_or(StoreError::NotFound {
                entity: "achievement",
                id,
            })
    }
}
