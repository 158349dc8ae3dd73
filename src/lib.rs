pub mod clients;
pub mod config;
pub mod domain;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

use diesel_migrations::{EmbeddedMigrations, embed_migrations};

/// SQL migrations bundled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();
