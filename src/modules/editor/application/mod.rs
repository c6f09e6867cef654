pub mod domain;
pub mod sessions;
