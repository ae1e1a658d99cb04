use chrono::NaiveDateTime;
use nexus_core::db::open_db_in_memory;
use nexus_core::{
    Achievement, AchievementKind, NexusStore, Post, PostKind, SeedAdmin,
    SqliteSnapshotRepository, Visibility,
};

fn seed() -> SeedAdmin {
    SeedAdmin {
        username: "admin".to_string(),
        password: "test-admin-pw".to_string(),
        display_name: "Admin".to_string(),
    }
}

fn timestamp(value: &str) -> chrono::DateTime<chrono::Utc> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .unwrap()
        .and_utc()
}

#[test]
fn friends_scoped_post_appears_only_after_friendship_is_established() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::try_new(&conn).unwrap();
    let mut store = NexusStore::open(repo, seed()).unwrap();

    let alice = store.register("alice", "pw1", "Alice A").unwrap().unwrap();
    let bob = store.register("bob", "pw2", "Bob B").unwrap().unwrap();

    let post = Post::new(bob.id, "morning walk", PostKind::Text, Visibility::Friends);
    let post_id = store.add_post(post).unwrap();

    assert!(!store
        .visible_posts(alice.id)
        .iter()
        .any(|post| post.id == post_id));

    store.send_friend_invite(bob.id, alice.id).unwrap();
    store.accept_friend_invite(alice.id, bob.id).unwrap();

    assert!(store
        .visible_posts(alice.id)
        .iter()
        .any(|post| post.id == post_id));
}

#[test]
fn private_post_is_visible_to_its_author_only() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::try_new(&conn).unwrap();
    let mut store = NexusStore::open(repo, seed()).unwrap();

    let alice = store.register("alice", "pw1", "Alice A").unwrap().unwrap();
    let bob = store.register("bob", "pw2", "Bob B").unwrap().unwrap();

    let post_id = store
        .add_post(Post::new(
            bob.id,
            "draft thought",
            PostKind::Text,
            Visibility::Private,
        ))
        .unwrap();

    assert!(store
        .visible_posts(bob.id)
        .iter()
        .any(|post| post.id == post_id));
    assert!(!store
        .visible_posts(alice.id)
        .iter()
        .any(|post| post.id == post_id));
}

#[test]
fn public_posts_reach_unrelated_viewers() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::try_new(&conn).unwrap();
    let mut store = NexusStore::open(repo, seed()).unwrap();

    let alice = store.register("alice", "pw1", "Alice A").unwrap().unwrap();
    let bob = store.register("bob", "pw2", "Bob B").unwrap().unwrap();

    let post_id = store
        .add_post(Post::new(
            bob.id,
            "hello world",
            PostKind::Text,
            Visibility::Public,
        ))
        .unwrap();

    assert!(store
        .visible_posts(alice.id)
        .iter()
        .any(|post| post.id == post_id));
}

#[test]
fn feed_orders_posts_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::try_new(&conn).unwrap();
    let mut store = NexusStore::open(repo, seed()).unwrap();

    let bob = store.register("bob", "pw2", "Bob B").unwrap().unwrap();

    let mut older = Post::new(bob.id, "older", PostKind::Text, Visibility::Public);
    older.created_at = timestamp("2026-03-01 09:00:00");
    let mut newer = Post::new(bob.id, "newer", PostKind::Text, Visibility::Public);
    newer.created_at = timestamp("2026-03-02 09:00:00");

    store.add_post(older).unwrap();
    store.add_post(newer).unwrap();

    let feed = store.visible_posts(bob.id);
    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0].content, "newer");
    assert_eq!(feed[1].content, "older");
}

#[test]
fn achievement_visibility_follows_the_same_predicate() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::try_new(&conn).unwrap();
    let mut store = NexusStore::open(repo, seed()).unwrap();

    let alice = store.register("alice", "pw1", "Alice A").unwrap().unwrap();
    let bob = store.register("bob", "pw2", "Bob B").unwrap().unwrap();

    let mut achievement = Achievement::new(
        bob.id,
        "ran a marathon",
        AchievementKind::Professional,
        chrono::NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
    );
    achievement.visibility = Visibility::Friends;
    let achievement_id = store.add_achievement(achievement).unwrap();

    assert!(!store
        .visible_achievements(alice.id)
        .iter()
        .any(|a| a.id == achievement_id));

    store.send_friend_invite(bob.id, alice.id).unwrap();
    store.accept_friend_invite(alice.id, bob.id).unwrap();

    assert!(store
        .visible_achievements(alice.id)
        .iter()
        .any(|a| a.id == achievement_id));
}
