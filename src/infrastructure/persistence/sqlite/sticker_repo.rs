//! SQLite Sticker Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{
    NewStickerRecord, RepositoryError, StickerRecord, StickerRepositoryPort,
};

/// SQLite Sticker Repository
pub struct SqliteStickerRepository {
    pool: DbPool,
}

impl SqliteStickerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct StickerRow {
    id: i64,
    name: String,
}

impl From<StickerRow> for StickerRecord {
    fn from(row: StickerRow) -> Self {
        StickerRecord {
            id: row.id,
            name: row.name,
        }
    }
}

#[async_trait]
impl StickerRepositoryPort for SqliteStickerRepository {
    async fn insert(&self, sticker: &NewStickerRecord) -> Result<StickerRecord, RepositoryError> {
        let result = sqlx::query("INSERT INTO stickers (name) VALUES (?)")
            .bind(&sticker.name)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(StickerRecord {
            id: result.last_insert_rowid(),
            name: sticker.name.clone(),
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<StickerRecord>, RepositoryError> {
        let row: Option<StickerRow> = sqlx::query_as("SELECT id, name FROM stickers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.map(StickerRecord::from))
    }

    async fn find_all(&self) -> Result<Vec<StickerRecord>, RepositoryError> {
        let rows: Vec<StickerRow> = sqlx::query_as("SELECT id, name FROM stickers ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(StickerRecord::from).collect())
    }

    async fn update(&self, sticker: &StickerRecord) -> Result<bool, RepositoryError> {
        let result = sqlx::query("UPDATE stickers SET name = ? WHERE id = ?")
            .bind(&sticker.name)
            .bind(sticker.id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM stickers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};

    async fn repo() -> SqliteStickerRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteStickerRepository::new(pool)
    }

    fn new_sticker(name: &str) -> NewStickerRecord {
        NewStickerRecord {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = repo().await;

        let first = repo.insert(&new_sticker("one")).await.unwrap();
        let second = repo.insert(&new_sticker("two")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.find_by_id(2).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_find_all_ordered_by_id() {
        let repo = repo().await;
        repo.insert(&new_sticker("b")).await.unwrap();
        repo.insert(&new_sticker("a")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        let ids: Vec<i64> = all.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_update_reports_missing_row() {
        let repo = repo().await;
        let mut sticker = repo.insert(&new_sticker("before")).await.unwrap();

        sticker.name = "after".to_string();
        assert!(repo.update(&sticker).await.unwrap());
        assert_eq!(
            repo.find_by_id(sticker.id).await.unwrap().unwrap().name,
            "after"
        );

        let ghost = StickerRecord {
            id: 42,
            name: "ghost".to_string(),
        };
        assert!(!repo.update(&ghost).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_reports_missing_row() {
        let repo = repo().await;
        let sticker = repo.insert(&new_sticker("gone")).await.unwrap();

        assert!(repo.delete(sticker.id).await.unwrap());
        assert!(!repo.delete(sticker.id).await.unwrap());
        assert_eq!(repo.find_by_id(sticker.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = repo().await;
        let first = repo.insert(&new_sticker("first")).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.insert(&new_sticker("second")).await.unwrap();
        assert!(second.id > first.id);
    }
}
