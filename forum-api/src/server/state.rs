// App state for the Axum server
use std::sync::Arc;

use forum_repository::{CommentsRepository, SubjectsRepository, UsersRepository};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UsersRepository>,
    pub subjects: Arc<dyn SubjectsRepository>,
    pub comments: Arc<dyn CommentsRepository>,
}
