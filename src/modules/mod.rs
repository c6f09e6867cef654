pub mod auth;
pub mod content;
pub mod editor;
pub mod media;
