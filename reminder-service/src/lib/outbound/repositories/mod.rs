pub mod reminder;
pub mod user;

pub use reminder::PostgresReminderRepository;
pub use user::PostgresUserRepository;
