/// SQLite persistence layer for the portfolio
///
/// Handles project, project-image, and message rows in a single SQLite
/// database. Schema creation is idempotent and runs at startup. The
/// project+images insert is transactional so a crash cannot leave a project
/// without its gallery rows (or orphaned gallery rows without a project).

use crate::portfolio::types::{ContactForm, Message, Project, ProjectForm};
use anyhow::Result;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Row,
};

/// SQLite-backed store shared by all request handlers
///
/// Holds a connection pool rather than opening a connection per request.
/// Foreign keys are enabled on every connection so project deletion cascades
/// to its image rows at the engine level.
#[derive(Debug, Clone)]
pub struct PortfolioStore {
    /// SQLite connection pool
    pool: SqlitePool,
}

impl PortfolioStore {
    /// Open (creating if missing) the database file and initialize the schema
    pub async fn connect(path: &str) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePool::connect_with(options).await?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// Open an in-memory database, used by tests
    ///
    /// Capped at one connection: each SQLite in-memory connection is its own
    /// database, so a larger pool would scatter rows across databases.
    pub async fn open_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .in_memory(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// Create tables if they do not exist
    ///
    /// Safe to call multiple times (uses IF NOT EXISTS).
    async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS projects (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                link TEXT,
                tags TEXT,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS project_images (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                project_id INTEGER NOT NULL
                    REFERENCES projects(id) ON DELETE CASCADE,
                image TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                subject TEXT,
                message TEXT NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // Index for the per-project gallery lookup
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_project_images_project_id \
             ON project_images(project_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// List all projects, newest first, each enriched with its gallery
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let rows = sqlx::query(
            "SELECT id, title, description, link, tags, created_at \
             FROM projects ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut projects = Vec::with_capacity(rows.len());
        for row in rows {
            let id: i64 = row.get("id");
            projects.push(Project {
                id,
                title: row.get("title"),
                description: row.get("description"),
                link: row.get("link"),
                tags: row.get("tags"),
                created_at: row.get("created_at"),
                images: self.project_images(id).await?,
            });
        }

        Ok(projects)
    }

    /// Create a project and its image rows as a single transaction
    ///
    /// Validation has already happened at the web layer. Returns the new
    /// project id. Rolls back entirely if any insert fails.
    pub async fn create_project(
        &self,
        form: &ProjectForm,
        image_filenames: &[String],
    ) -> Result<i64> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "INSERT INTO projects (title, description, link, tags) VALUES (?, ?, ?, ?)",
        )
        .bind(form.title.trim())
        .bind(form.description.trim())
        .bind(form.link())
        .bind(form.tags())
        .execute(&mut *tx)
        .await?;

        let project_id = result.last_insert_rowid();

        for filename in image_filenames {
            sqlx::query("INSERT INTO project_images (project_id, image) VALUES (?, ?)")
                .bind(project_id)
                .bind(filename)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(project_id)
    }

    /// Stored filenames for one project's gallery, upload order
    pub async fn project_images(&self, project_id: i64) -> Result<Vec<String>> {
        let rows = sqlx::query(
            "SELECT image FROM project_images WHERE project_id = ? ORDER BY id",
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|row| row.get("image")).collect())
    }

    /// Delete a project by id; image rows go with it via the FK cascade
    ///
    /// Returns `None` if no row existed (deleting a missing id is not an
    /// error: the web layer treats delete as idempotent). Otherwise returns
    /// the stored filenames that no remaining gallery references, so the
    /// caller can unlink exactly those. Identical uploads share one on-disk
    /// file, so a filename still referenced by another project must survive.
    pub async fn delete_project(&self, id: i64) -> Result<Option<Vec<String>>> {
        let mut tx = self.pool.begin().await?;

        let images: Vec<String> =
            sqlx::query("SELECT image FROM project_images WHERE project_id = ? ORDER BY id")
                .bind(id)
                .fetch_all(&mut *tx)
                .await?
                .into_iter()
                .map(|row| row.get("image"))
                .collect();

        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.commit().await?;
            return Ok(None);
        }

        let mut unreferenced = Vec::new();
        for image in images {
            let remaining: i64 =
                sqlx::query("SELECT COUNT(*) AS n FROM project_images WHERE image = ?")
                    .bind(&image)
                    .fetch_one(&mut *tx)
                    .await?
                    .get("n");
            if remaining == 0 && !unreferenced.contains(&image) {
                unreferenced.push(image);
            }
        }

        tx.commit().await?;

        Ok(Some(unreferenced))
    }

    /// Whether any gallery row references this stored filename
    ///
    /// Used before unlinking files saved for a submission that was then
    /// rejected, in case an existing project already shares the same file.
    pub async fn image_in_use(&self, stored_filename: &str) -> Result<bool> {
        let count: i64 = sqlx::query("SELECT COUNT(*) AS n FROM project_images WHERE image = ?")
            .bind(stored_filename)
            .fetch_one(&self.pool)
            .await?
            .get("n");

        Ok(count > 0)
    }

    /// Store a contact-form submission, returning the new message id
    pub async fn create_message(&self, form: &ContactForm) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO messages (name, email, subject, message) VALUES (?, ?, ?, ?)",
        )
        .bind(form.name.trim())
        .bind(form.email.trim())
        .bind(form.subject())
        .bind(form.message.trim())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Load all stored messages, newest first
    ///
    /// Not reachable from any route; the inbox is read from a database shell
    /// or maintenance script.
    pub async fn list_messages(&self) -> Result<Vec<Message>> {
        let rows = sqlx::query(
            "SELECT id, name, email, subject, message, created_at \
             FROM messages ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Message {
                id: row.get("id"),
                name: row.get("name"),
                email: row.get("email"),
                subject: row.get("subject"),
                message: row.get("message"),
                created_at: row.get("created_at"),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_form(title: &str, description: &str) -> ProjectForm {
        ProjectForm {
            title: title.to_string(),
            description: description.to_string(),
            link: String::new(),
            tags: String::new(),
        }
    }

    #[tokio::test]
    async fn created_projects_are_listed_newest_first() {
        let store = PortfolioStore::open_in_memory().await.unwrap();

        let first = store.create_project(&project_form("Old", "first"), &[]).await.unwrap();
        let second = store.create_project(&project_form("New", "second"), &[]).await.unwrap();

        let projects = store.list_projects().await.unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].id, second);
        assert_eq!(projects[0].title, "New");
        assert_eq!(projects[1].id, first);
    }

    #[tokio::test]
    async fn create_project_stores_all_fields_and_images() {
        let store = PortfolioStore::open_in_memory().await.unwrap();

        let form = ProjectForm {
            title: "Portfolio Site".into(),
            description: "A demo".into(),
            link: "http://example.com".into(),
            tags: "web,demo".into(),
        };
        let images = vec!["a.png".to_string(), "b.png".to_string()];
        let id = store.create_project(&form, &images).await.unwrap();

        let projects = store.list_projects().await.unwrap();
        assert_eq!(projects.len(), 1);
        let project = &projects[0];
        assert_eq!(project.id, id);
        assert_eq!(project.title, "Portfolio Site");
        assert_eq!(project.description, "A demo");
        assert_eq!(project.link.as_deref(), Some("http://example.com"));
        assert_eq!(project.tags.as_deref(), Some("web,demo"));
        assert_eq!(project.images, images);

        assert_eq!(store.project_images(id).await.unwrap(), images);
    }

    #[tokio::test]
    async fn blank_optional_fields_are_stored_as_null() {
        let store = PortfolioStore::open_in_memory().await.unwrap();

        let id = store
            .create_project(&project_form("Title", "Description"), &[])
            .await
            .unwrap();

        let projects = store.list_projects().await.unwrap();
        assert_eq!(projects[0].id, id);
        assert_eq!(projects[0].link, None);
        assert_eq!(projects[0].tags, None);
    }

    #[tokio::test]
    async fn delete_cascades_to_image_rows() {
        let store = PortfolioStore::open_in_memory().await.unwrap();

        let images = vec!["a.png".to_string(), "b.png".to_string()];
        let id = store
            .create_project(&project_form("Doomed", "gone soon"), &images)
            .await
            .unwrap();

        let removed = store.delete_project(id).await.unwrap().unwrap();
        assert_eq!(removed, images);
        assert!(store.list_projects().await.unwrap().is_empty());
        assert!(store.project_images(id).await.unwrap().is_empty());

        let orphans: i64 = sqlx::query("SELECT COUNT(*) AS n FROM project_images")
            .fetch_one(&store.pool)
            .await
            .unwrap()
            .get("n");
        assert_eq!(orphans, 0);
    }

    #[tokio::test]
    async fn deleting_a_missing_id_reports_no_row_without_error() {
        let store = PortfolioStore::open_in_memory().await.unwrap();
        assert!(store.delete_project(4242).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn shared_image_survives_until_its_last_reference_is_deleted() {
        let store = PortfolioStore::open_in_memory().await.unwrap();

        // Identical uploads alias to one stored filename shared by both rows
        let shared = vec!["1a2b3c4d-a.png".to_string()];
        let a = store.create_project(&project_form("A", "first"), &shared).await.unwrap();
        let b = store.create_project(&project_form("B", "second"), &shared).await.unwrap();

        // Deleting A must not hand the shared file back for unlinking
        let removed = store.delete_project(a).await.unwrap().unwrap();
        assert!(removed.is_empty());
        assert_eq!(store.project_images(b).await.unwrap(), shared);

        // Last reference gone: now the file is reported unreferenced
        let removed = store.delete_project(b).await.unwrap().unwrap();
        assert_eq!(removed, shared);
    }

    #[tokio::test]
    async fn image_in_use_tracks_gallery_references() {
        let store = PortfolioStore::open_in_memory().await.unwrap();

        assert!(!store.image_in_use("1a2b3c4d-a.png").await.unwrap());

        let images = vec!["1a2b3c4d-a.png".to_string()];
        let id = store.create_project(&project_form("P", "d"), &images).await.unwrap();
        assert!(store.image_in_use("1a2b3c4d-a.png").await.unwrap());

        store.delete_project(id).await.unwrap();
        assert!(!store.image_in_use("1a2b3c4d-a.png").await.unwrap());
    }

    #[tokio::test]
    async fn contact_submissions_are_stored_verbatim() {
        let store = PortfolioStore::open_in_memory().await.unwrap();

        let form = ContactForm {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        };
        let id = store.create_message(&form).await.unwrap();

        let messages = store.list_messages().await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, id);
        assert_eq!(messages[0].name, "Jane");
        assert_eq!(messages[0].email, "jane@x.com");
        assert_eq!(messages[0].subject.as_deref(), Some("Hi"));
        assert_eq!(messages[0].message, "Hello");
    }

    #[tokio::test]
    async fn submit_then_delete_scenario() {
        let store = PortfolioStore::open_in_memory().await.unwrap();

        let form = ProjectForm {
            title: "Portfolio Site".into(),
            description: "A demo".into(),
            link: "http://example.com".into(),
            tags: "web,demo".into(),
        };
        let images = vec!["a.png".to_string(), "b.png".to_string()];
        let id = store.create_project(&form, &images).await.unwrap();

        let listed = store.list_projects().await.unwrap();
        assert_eq!(listed[0].images, images);

        assert!(store.delete_project(id).await.unwrap().is_some());
        assert!(store.list_projects().await.unwrap().is_empty());
    }
}
