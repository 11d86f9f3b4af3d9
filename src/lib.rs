// lib.rs
pub mod bootstrap;
pub mod config;
pub mod entities;
