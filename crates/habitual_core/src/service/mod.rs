//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep view shells decoupled from storage details.

pub mod habit_service;
