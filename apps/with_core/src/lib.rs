pub mod response;
pub mod serializers;
pub mod urls;
pub mod views;

pub use response::{ApiRejection, JsonUtf8, JSON_UTF8};
pub use serializers::api_error::ApiError;
