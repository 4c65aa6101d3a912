//! Integration tests for the PostgreSQL repository implementations.
//!
//! These tests require a real PostgreSQL database and use SQLx test macros
//! to ensure proper test isolation and cleanup. They are ignored by default;
//! run with a reachable `DATABASE_URL` via:
//! `cargo test --test postgres_integration -- --ignored`

use chrono::Utc;
use forum_repository::{
    CommentsRepository, PostgresCommentsRepository, PostgresSubjectsRepository,
    PostgresUsersRepository, SubjectsRepository, UsersRepository, UsersRepositoryError,
};
use forum_shared::{Comment, Subject, User, VoteSets};
use uuid::Uuid;

/// Creates a test subject with default values.
fn make_subject() -> Subject {
    let now = Utc::now();
    Subject {
        id: Uuid::new_v4(),
        title: "What should we read next?".to_string(),
        description: "Suggestions welcome".to_string(),
        author_id: Uuid::new_v4().to_string(),
        author_username: "john_doe".to_string(),
        like_count: 0,
        votes: VoteSets::default(),
        created_at: now,
        updated_at: now,
    }
}

/// Creates a test comment under the given subject.
fn make_comment(subject_id: Uuid, parent: Option<Uuid>) -> Comment {
    let now = Utc::now();
    Comment {
        id: Uuid::new_v4(),
        subject_id,
        parent_comment_id: parent,
        content: "I second this".to_string(),
        author_id: Uuid::new_v4().to_string(),
        author_username: "jane_smith".to_string(),
        like_count: 0,
        votes: VoteSets::default(),
        created_at: now,
        updated_at: now,
    }
}

/// Creates a test user with the given username and email.
fn make_user(username: &str, email: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        username: username.to_string(),
        email: email.to_string(),
        phone: None,
        password_hash: "demo".to_string(),
        created_at: now,
        updated_at: now,
    }
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_insert_and_get_subject(pool: sqlx::PgPool) {
    let repository = PostgresSubjectsRepository::new(pool);
    let subject = make_subject();

    repository.insert_subject(&subject).await.unwrap();
    let fetched = repository.get_subject(subject.id).await.unwrap().unwrap();

    // Timestamps lose sub-microsecond precision in postgres, so compare the
    // fields that survive the round trip.
    assert_eq!(fetched.id, subject.id);
    assert_eq!(fetched.title, subject.title);
    assert_eq!(fetched.description, subject.description);
    assert_eq!(fetched.like_count, 0);
    assert_eq!(fetched.votes, VoteSets::default());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_get_subject_missing_returns_none(pool: sqlx::PgPool) {
    let repository = PostgresSubjectsRepository::new(pool);
    assert!(
        repository
            .get_subject(Uuid::new_v4())
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_apply_vote_increments_count_atomically(pool: sqlx::PgPool) {
    let repository = PostgresSubjectsRepository::new(pool);
    let subject = make_subject();
    repository.insert_subject(&subject).await.unwrap();

    let mut votes = VoteSets::default();
    votes.liked_by.insert("alice".to_string());
    let updated = repository
        .apply_vote(subject.id, &votes, 1)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.like_count, 1);
    assert!(updated.votes.liked("alice"));

    // Switching to dislike moves two units in one statement.
    let mut votes = VoteSets::default();
    votes.disliked_by.insert("alice".to_string());
    let updated = repository
        .apply_vote(subject.id, &votes, -2)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.like_count, -1);
    assert!(updated.votes.disliked("alice"));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_list_subjects_newest_first_with_comment_counts(pool: sqlx::PgPool) {
    let subjects = PostgresSubjectsRepository::new(pool.clone());
    let comments = PostgresCommentsRepository::new(pool);

    let mut older = make_subject();
    older.created_at = Utc::now() - chrono::Duration::hours(1);
    let newer = make_subject();
    subjects.insert_subject(&older).await.unwrap();
    subjects.insert_subject(&newer).await.unwrap();
    comments
        .insert_comment(&make_comment(older.id, None))
        .await
        .unwrap();

    let listing = subjects.list_subjects().await.unwrap();

    assert_eq!(listing.len(), 2);
    assert_eq!(listing[0].subject.id, newer.id);
    assert_eq!(listing[0].comment_count, 0);
    assert_eq!(listing[1].subject.id, older.id);
    assert_eq!(listing[1].comment_count, 1);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_comment_round_trip_and_listing(pool: sqlx::PgPool) {
    let subjects = PostgresSubjectsRepository::new(pool.clone());
    let comments = PostgresCommentsRepository::new(pool);

    let subject = make_subject();
    subjects.insert_subject(&subject).await.unwrap();

    let root = make_comment(subject.id, None);
    let reply = make_comment(subject.id, Some(root.id));
    comments.insert_comment(&root).await.unwrap();
    comments.insert_comment(&reply).await.unwrap();

    let listed = comments.list_for_subject(subject.id).await.unwrap();
    assert_eq!(listed.len(), 2);

    let fetched = comments.get_comment(reply.id).await.unwrap().unwrap();
    assert_eq!(fetched.parent_comment_id, Some(root.id));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_duplicate_user_is_rejected(pool: sqlx::PgPool) {
    let repository = PostgresUsersRepository::new(pool);

    let user = make_user("john_doe", "john@example.com");
    repository.insert_user(&user).await.unwrap();

    let duplicate = make_user("john_doe", "other@example.com");
    let result = repository.insert_user(&duplicate).await;
    assert!(matches!(result, Err(UsersRepositoryError::DuplicateUser)));

    let found = repository
        .find_by_username_or_email("john_doe", "nobody@example.com")
        .await
        .unwrap();
    assert!(found.is_some());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_find_by_email(pool: sqlx::PgPool) {
    let repository = PostgresUsersRepository::new(pool);
    let user = make_user("jane_smith", "jane@example.com");
    repository.insert_user(&user).await.unwrap();

    let found = repository
        .find_by_email("jane@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, user.id);
    assert!(
        repository
            .find_by_email("missing@example.com")
            .await
            .unwrap()
            .is_none()
    );
}
