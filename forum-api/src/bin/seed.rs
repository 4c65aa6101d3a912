// Seed loader - populates the database with demo users, subjects, and a
// threaded conversation, replacing the original ad-hoc seeding scripts.
use chrono::{Duration, Utc};
use forum_api::config;
use forum_engine::apply_vote;
use forum_repository::{
    CommentsRepository, PostgresCommentsRepository, PostgresSubjectsRepository,
    PostgresUsersRepository, SubjectsRepository, UsersRepository, connect_pool,
    postgres::MIGRATOR,
};
use forum_shared::{Comment, Subject, User, VoteAction, VoteSets};
use tracing::info;
use uuid::Uuid;

fn demo_password_hash(password: &str) -> String {
    // Must match the placeholder digest the register endpoint stores.
    format!("$2b$10$demo_hash_{password}")
}

fn make_user(username: &str, email: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        username: username.to_string(),
        email: email.to_string(),
        phone: None,
        password_hash: demo_password_hash("password123"),
        created_at: now,
        updated_at: now,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .compact()
        .init();

    let pool = connect_pool(&config::database_url()).await?;
    MIGRATOR.run(&pool).await?;

    let users = PostgresUsersRepository::new(pool.clone());
    let subjects = PostgresSubjectsRepository::new(pool.clone());
    let comments = PostgresCommentsRepository::new(pool);

    let john = make_user("john_doe", "john@example.com");
    let jane = make_user("jane_smith", "jane@example.com");
    users.insert_user(&john).await?;
    users.insert_user(&jane).await?;
    info!("Seeded users john_doe and jane_smith (password: password123)");

    let now = Utc::now();
    let subject = Subject {
        id: Uuid::new_v4(),
        title: "What should we read next?".to_string(),
        description: "Nominations for the next book club pick.".to_string(),
        author_id: john.id.to_string(),
        author_username: john.username.clone(),
        like_count: 0,
        votes: VoteSets::default(),
        created_at: now - Duration::hours(2),
        updated_at: now - Duration::hours(2),
    };
    subjects.insert_subject(&subject).await?;

    let quiet = Subject {
        id: Uuid::new_v4(),
        title: "Meeting time poll".to_string(),
        description: String::new(),
        author_id: jane.id.to_string(),
        author_username: jane.username.clone(),
        like_count: 0,
        votes: VoteSets::default(),
        created_at: now - Duration::hours(1),
        updated_at: now - Duration::hours(1),
    };
    subjects.insert_subject(&quiet).await?;

    let root = Comment {
        id: Uuid::new_v4(),
        subject_id: subject.id,
        parent_comment_id: None,
        content: "I nominate The Dispossessed.".to_string(),
        author_id: jane.id.to_string(),
        author_username: jane.username.clone(),
        like_count: 0,
        votes: VoteSets::default(),
        created_at: now - Duration::minutes(90),
        updated_at: now - Duration::minutes(90),
    };
    comments.insert_comment(&root).await?;

    let reply = Comment {
        id: Uuid::new_v4(),
        subject_id: subject.id,
        parent_comment_id: Some(root.id),
        content: "Seconded, it has been on my list for ages.".to_string(),
        author_id: john.id.to_string(),
        author_username: john.username.clone(),
        like_count: 0,
        votes: VoteSets::default(),
        created_at: now - Duration::minutes(60),
        updated_at: now - Duration::minutes(60),
    };
    comments.insert_comment(&reply).await?;

    // A couple of standing votes, applied through the engine so the stored
    // counts stay consistent with the membership sets.
    let outcome = apply_vote(&subject.votes, &jane.id.to_string(), VoteAction::Like);
    subjects
        .apply_vote(subject.id, &outcome.sets, outcome.delta)
        .await?;
    let outcome = apply_vote(&root.votes, &john.id.to_string(), VoteAction::Like);
    comments
        .apply_vote(root.id, &outcome.sets, outcome.delta)
        .await?;

    info!("Seeded {} subjects with a threaded conversation", 2);
    Ok(())
}
