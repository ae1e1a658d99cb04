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

#[test]
fn liking_a_post_twice_restores_its_original_like_set() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::try_new(&conn).unwrap();
    let mut store = NexusStore::open(repo, seed()).unwrap();

    let alice = store.register("alice", "pw1", "Alice A").unwrap().unwrap();
    let bob = store.register("bob", "pw2", "Bob B").unwrap().unwrap();

    let post_id = store
        .add_post(Post::new(
            bob.id,
            "hello",
            PostKind::Text,
            Visibility::Public,
        ))
        .unwrap();

    let feed = store.visible_posts(alice.id);
    let before = feed[0].likes.clone();
    drop(feed);

    store.toggle_post_like(post_id, alice.id).unwrap();
    let liked = store.visible_posts(alice.id)[0].likes.clone();
    assert!(liked.contains(&alice.id));

    store.toggle_post_like(post_id, alice.id).unwrap();
    let after = store.visible_posts(alice.id)[0].likes.clone();
    assert_eq!(after, before);
}

#[test]
fn comments_append_in_call_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::try_new(&conn).unwrap();
    let mut store = NexusStore::open(repo, seed()).unwrap();

    let alice = store.register("alice", "pw1", "Alice A").unwrap().unwrap();
    let bob = store.register("bob", "pw2", "Bob B").unwrap().unwrap();

    let post_id = store
        .add_post(Post::new(
            bob.id,
            "photo dump",
            PostKind::Photo,
            Visibility::Public,
        ))
        .unwrap();

    store.add_post_comment(post_id, alice.id, "nice!").unwrap();
    store.add_post_comment(post_id, bob.id, "thanks").unwrap();

    let feed = store.visible_posts(bob.id);
    let comments = &feed[0].comments;
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].content, "nice!");
    assert_eq!(comments[0].user_id, alice.id);
    assert_eq!(comments[1].content, "thanks");
}

#[test]
fn achievement_likes_toggle_like_post_likes() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::try_new(&conn).unwrap();
    let mut store = NexusStore::open(repo, seed()).unwrap();

    let alice = store.register("alice", "pw1", "Alice A").unwrap().unwrap();
    let bob = store.register("bob", "pw2", "Bob B").unwrap().unwrap();

    let mut achievement = Achievement::new(
        bob.id,
        "finished therapy program",
        AchievementKind::Mental,
        chrono::NaiveDate::from_ymd_opt(2026, 2, 14).unwrap(),
    );
    achievement.visibility = Visibility::Public;
    let id = store.add_achievement(achievement).unwrap();

    store.toggle_achievement_like(id, alice.id).unwrap();
    assert_eq!(store.visible_achievements(alice.id)[0].likes, vec![alice.id]);

    store.toggle_achievement_like(id, alice.id).unwrap();
    assert!(store.visible_achievements(alice.id)[0].likes.is_empty());
}

#[test]
fn achievement_comments_record_their_author() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::try_new(&conn).unwrap();
    let mut store = NexusStore::open(repo, seed()).unwrap();

    let alice = store.register("alice", "pw1", "Alice A").unwrap().unwrap();
    let bob = store.register("bob", "pw2", "Bob B").unwrap().unwrap();

    let mut achievement = Achievement::new(
        bob.id,
        "first public talk",
        AchievementKind::Social,
        chrono::NaiveDate::from_ymd_opt(2026, 2, 20).unwrap(),
    );
    achievement.visibility = Visibility::Public;
    let id = store.add_achievement(achievement).unwrap();

    store
        .add_achievement_comment(id, alice.id, "congratulations!")
        .unwrap();

    let achievements = store.visible_achievements(alice.id);
    assert_eq!(achievements[0].comments.len(), 1);
    assert_eq!(achievements[0].comments[0].user_id, alice.id);
}

#[test]
fn update_post_merges_fields_in_place() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::try_new(&conn).unwrap();
    let mut store = NexusStore::open(repo, seed()).unwrap();

    let bob = store.register("bob", "pw2", "Bob B").unwrap().unwrap();
    let post_id = store
        .add_post(Post::new(
            bob.id,
            "draft",
            PostKind::Text,
            Visibility::Private,
        ))
        .unwrap();

    store
        .update_post(post_id, |post| {
            post.content = "final".to_string();
            post.visibility = Visibility::Public;
        })
        .unwrap();

    let feed = store.visible_posts(bob.id);
    assert_eq!(feed[0].content, "final");
    assert_eq!(feed[0].visibility, Visibility::Public);
}

#[test]
fn delete_post_removes_it_from_every_feed() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::try_new(&conn).unwrap();
    let mut store = NexusStore::open(repo, seed()).unwrap();

    let bob = store.register("bob", "pw2", "Bob B").unwrap().unwrap();
    let post_id = store
        .add_post(Post::new(
            bob.id,
            "regrettable",
            PostKind::Text,
            Visibility::Public,
        ))
        .unwrap();

    store.delete_post(post_id).unwrap();
    assert!(store.visible_posts(bob.id).is_empty());
}
