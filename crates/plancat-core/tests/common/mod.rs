use plancat_core::{Catalog, CatalogBuilder, CatalogConfig};
use tempfile::TempDir;

/// Helper function to create a test catalog
pub async fn create_test_catalog() -> (TempDir, Catalog) {
    create_test_catalog_with(CatalogConfig::default()).await
}

/// Helper function to create a test catalog with a custom config
pub async fn create_test_catalog_with(config: CatalogConfig) -> (TempDir, Catalog) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let catalog = CatalogBuilder::new()
        .with_database_path(Some(&db_path))
        .with_config(config)
        .build()
        .await
        .expect("Failed to create catalog");
    (temp_dir, catalog)
}
