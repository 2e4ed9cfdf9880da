//! Stickies - terminal sticky notes
//!
//! A small TUI application that keeps short text notes, each shown in its
//! own floating window inside the terminal. Notes are persisted in a local
//! SQLite database and survive restarts with their content and color.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`storage`] - Local database and data persistence
//! * [`notes`] - Note lifecycle service (create, save, delete, export, list)
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Error taxonomy for note operations
pub mod error;

/// File logging setup
pub mod logger;

/// Note lifecycle service used by the UI
pub mod notes;

/// Repository layer for database operations
pub mod repositories;

/// Local storage layer holding the notes database
pub mod storage;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for colors and text handling
pub mod utils;

// Re-export the entity model for convenient access
pub use entities::note;
