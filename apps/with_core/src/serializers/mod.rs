pub mod api_error;
pub mod with_health;
