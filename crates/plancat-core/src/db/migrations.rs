//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection so child rows cascade
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Brings files created before `display_order` existed up to date.
    fn apply_migrations(&self) -> Result<()> {
        let has_display_order: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('plans') WHERE name = 'display_order'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_display_order {
            self.connection
                .execute(
                    "ALTER TABLE plans ADD COLUMN display_order INTEGER NOT NULL DEFAULT 0",
                    [],
                )
                .db_context("Failed to add display_order column to plans table")?;
        }

        Ok(())
    }
}
