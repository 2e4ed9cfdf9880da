//! Note lifecycle service for the stickies application.
//!
//! This module provides the [`NoteService`] struct which mediates between
//! the UI layer and the local note store. It owns every note lifecycle
//! operation: creation, per-keystroke saving, recoloring, deletion,
//! listing, and plain-text export.
//!
//! The service is the single data layer of the application: all reads and
//! writes against the store go through it, and every operation completes
//! before the next input event is processed.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::entities::note;
use crate::error::NoteError;
use crate::repositories::NoteRepository;
use crate::storage::LocalStorage;
use crate::utils::text;

/// A list entry: note identifier plus a truncated content preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePreview {
    pub id: i32,
    pub preview: String,
}

/// Service that manages the note lifecycle against local storage.
///
/// Cloning is cheap; all clones share the same storage handle. Operations
/// run to completion on the caller's task, there is no background work.
#[derive(Clone)]
pub struct NoteService {
    storage: Arc<Mutex<LocalStorage>>,
}

impl NoteService {
    pub fn new(storage: LocalStorage) -> Self {
        Self {
            storage: Arc::new(Mutex::new(storage)),
        }
    }

    /// Insert a new note with empty content and the given color, returning
    /// the stored row with its assigned identifier.
    pub async fn create_note(&self, color: &str) -> Result<note::Model, NoteError> {
        let storage = self.storage.lock().await;
        let model = NoteRepository::create(storage.conn(), color).await?;
        log::info!("Created note {}", model.id);
        Ok(model)
    }

    /// Fetch a single note by id.
    pub async fn get_note(&self, id: i32) -> Result<Option<note::Model>, NoteError> {
        let storage = self.storage.lock().await;
        Ok(NoteRepository::get_by_id(storage.conn(), id).await?)
    }

    /// Fetch all stored notes in insertion order, used for startup
    /// auto-load.
    pub async fn get_all_notes(&self) -> Result<Vec<note::Model>, NoteError> {
        let storage = self.storage.lock().await;
        Ok(NoteRepository::get_all(storage.conn()).await?)
    }

    /// Persist content and color for an existing note. Safe to call on
    /// every keystroke; saving unchanged values has no effect.
    pub async fn save_note(&self, id: i32, content: &str, color: &str) -> Result<note::Model, NoteError> {
        let storage = self.storage.lock().await;
        NoteRepository::save(storage.conn(), id, content, color)
            .await?
            .ok_or(NoteError::NotFound(id))
    }

    /// Persist a color change, keeping the current content.
    pub async fn set_color(&self, id: i32, content: &str, color: &str) -> Result<note::Model, NoteError> {
        let model = self.save_note(id, content, color).await?;
        log::info!("Note {} recolored to {}", id, color);
        Ok(model)
    }

    /// Delete a note row. Returns `false` when the id had no matching row,
    /// which callers treat as a no-op.
    pub async fn delete_note(&self, id: i32) -> Result<bool, NoteError> {
        let storage = self.storage.lock().await;
        let deleted = NoteRepository::delete(storage.conn(), id).await?;
        if deleted {
            log::info!("Deleted note {}", id);
        } else {
            log::warn!("Delete requested for missing note {}", id);
        }
        Ok(deleted)
    }

    /// Enumerate all notes as (id, truncated preview) pairs for the list
    /// window.
    pub async fn list_previews(&self) -> Result<Vec<NotePreview>, NoteError> {
        let notes = self.get_all_notes().await?;
        Ok(notes
            .into_iter()
            .map(|n| NotePreview {
                id: n.id,
                preview: text::preview(&n.content),
            })
            .collect())
    }

    /// Write note content verbatim to a file, creating or overwriting it.
    /// Exports the in-memory text as given; the store is not consulted or
    /// modified.
    pub fn export_note(&self, content: &str, path: &Path) -> Result<(), NoteError> {
        std::fs::write(path, content)?;
        log::info!("Exported note content to {}", path.display());
        Ok(())
    }
}
