//! Integration tests for Carton

#[test]
fn test_workspace_builds() {
    // Basic smoke test to ensure the workspace compiles
    assert!(true);
}

#[test]
fn test_default_config_layout() {
    use carton_core::config::CatalogConfig;

    let config = CatalogConfig::default();
    assert_eq!(config.catalog_path, "extensions");
    assert_eq!(config.metadata_root, std::path::PathBuf::from("metadata"));
    assert_eq!(config.offline_root, std::path::PathBuf::from("offline"));
}
