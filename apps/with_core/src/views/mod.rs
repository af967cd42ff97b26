pub mod with_health;
