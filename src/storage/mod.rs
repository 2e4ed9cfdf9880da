//! Local storage module for note persistence
//!
//! This module provides database access using SeaORM for the single
//! `notes` table.

pub mod db;

pub use db::LocalStorage;
