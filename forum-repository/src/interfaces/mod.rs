mod comments;
mod subjects;
mod users;

pub use comments::CommentsRepository;
pub use subjects::SubjectsRepository;
pub use users::UsersRepository;
