// entities/mod.rs
pub mod post;
