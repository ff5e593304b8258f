pub mod app_error;
pub mod auth_error;

// Re-export error types
pub use app_error::AppError;
pub use auth_error::AuthError;
