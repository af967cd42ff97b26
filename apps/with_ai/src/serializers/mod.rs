pub mod with_classify;
pub mod with_respond;
