//! Note repository for database operations.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::entities::note;

/// Repository for note-related database operations.
pub struct NoteRepository;

impl NoteRepository {
    /// Insert a new note with empty content and the given color.
    /// SQLite assigns the identifier; identifiers are never reused.
    pub async fn create<C>(conn: &C, color: &str) -> Result<note::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let model = note::ActiveModel {
            content: Set(String::new()),
            color: Set(color.to_string()),
            ..Default::default()
        };
        model.insert(conn).await
    }

    /// Get a single note by id.
    pub async fn get_by_id<C>(conn: &C, id: i32) -> Result<Option<note::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        note::Entity::find_by_id(id).one(conn).await
    }

    /// Get all notes in insertion order (id ascending). This order is
    /// stable across restarts as long as no rows change.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<note::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        note::Entity::find().order_by_asc(note::Column::Id).all(conn).await
    }

    /// Upsert content and color for an existing note. Returns `None` when
    /// the id has no matching row. Saving identical values is a no-op.
    pub async fn save<C>(conn: &C, id: i32, content: &str, color: &str) -> Result<Option<note::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        let Some(existing) = Self::get_by_id(conn, id).await? else {
            return Ok(None);
        };

        if existing.content == content && existing.color == color {
            return Ok(Some(existing));
        }

        let model = note::ActiveModel {
            id: Set(id),
            content: Set(content.to_string()),
            color: Set(color.to_string()),
        };
        Ok(Some(model.update(conn).await?))
    }

    /// Delete a note. Returns `false` when no row matched.
    pub async fn delete<C>(conn: &C, id: i32) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        let result = note::Entity::delete_many()
            .filter(note::Column::Id.eq(id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
