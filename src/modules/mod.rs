pub mod leave;
pub mod users;
