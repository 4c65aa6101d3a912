mod comments;
mod subjects;
mod users;

pub use comments::CommentsRepositoryError;
pub use subjects::SubjectsRepositoryError;
pub use users::UsersRepositoryError;
