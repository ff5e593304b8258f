pub mod auth;

// Re-export middleware functions
pub use auth::auth_middleware;
