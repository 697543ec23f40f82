//! SQLite database layer (embedded, no external dependencies)

use async_trait::async_trait;
use chrono::NaiveDateTime;
use portfolio_core::{NewProject, PortfolioError, Project, ProjectId, ProjectStore, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

const MAX_CONNECTIONS: u32 = 5;

/// SQLite-backed project store.
///
/// Statements borrow a connection from the pool and hand it back when they
/// finish, whether they succeed or fail.
pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    /// Open (creating if missing) the database file at `database_path` and
    /// ensure the schema exists.
    pub async fn connect(database_path: &str) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path);

        if let Some(parent) = Path::new(database_path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
        {
            tracing::debug!("Creating parent directory: {}", parent.display());
            tokio::fs::create_dir_all(parent).await?;
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .map_err(db_error)?;

        let db = Self {
            pool: Arc::new(pool),
        };
        db.init_schema().await?;

        tracing::info!("Database initialization complete");
        Ok(db)
    }

    /// A private in-memory database.
    ///
    /// Every SQLite connection to `:memory:` sees its own database, so the
    /// pool holds exactly one connection and never recycles it.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:").map_err(db_error)?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await
            .map_err(db_error)?;

        let db = Self {
            pool: Arc::new(pool),
        };
        db.init_schema().await?;
        Ok(db)
    }
}

#[async_trait]
impl ProjectStore for Database {
    async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS projects (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                image_filename TEXT NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&*self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        // Timestamps have one-second resolution; id breaks ties.
        let rows: Vec<ProjectRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, image_filename, created_at
            FROM projects
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(db_error)?;

        tracing::debug!("Listed {} projects", rows.len());
        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn get_project(&self, id: ProjectId) -> Result<Option<Project>> {
        let row: Option<ProjectRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, image_filename, created_at
            FROM projects WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await
        .map_err(db_error)?;

        Ok(row.map(|r| r.into()))
    }

    async fn insert_project(&self, project: &NewProject) -> Result<ProjectId> {
        let result = sqlx::query(
            r#"
            INSERT INTO projects (title, description, image_filename)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image_filename)
        .execute(&*self.pool)
        .await
        .map_err(db_error)?;

        let id = result.last_insert_rowid();
        tracing::info!("Inserted project {}: {}", id, project.title);
        Ok(id)
    }

    async fn delete_project(&self, id: ProjectId) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM projects WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&*self.pool)
        .await
        .map_err(db_error)?;

        let removed = result.rows_affected();
        tracing::info!("Deleted project {} ({} rows)", id, removed);
        Ok(removed)
    }

    async fn update_project(&self, id: ProjectId, project: &NewProject) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE projects
            SET title = ?1, description = ?2, image_filename = ?3
            WHERE id = ?4
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image_filename)
        .bind(id)
        .execute(&*self.pool)
        .await
        .map_err(db_error)?;

        let updated = result.rows_affected();
        tracing::info!("Updated project {} ({} rows)", id, updated);
        Ok(updated)
    }
}

fn db_error(e: sqlx::Error) -> PortfolioError {
    PortfolioError::Database(e.to_string())
}

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: i64,
    title: String,
    description: String,
    image_filename: String,
    created_at: NaiveDateTime,
}

impl From<ProjectRow> for Project {
    fn from(r: ProjectRow) -> Self {
        Project {
            id: r.id,
            title: r.title,
            description: r.description,
            image_filename: r.image_filename,
            created_at: r.created_at.and_utc(),
        }
    }
}
