pub mod delete_session;
pub mod get_session;
pub mod put_session;

pub use delete_session::DeleteSessionUseCase;
pub use get_session::GetSessionUseCase;
pub use put_session::PutSessionUseCase;
