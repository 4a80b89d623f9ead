//! Catalog file I/O.
//!
//! The mockup ships with a built-in catalog; a JSON file with the same
//! shape can be passed on the command line to swap the mock data out.
//! Nothing else is persisted: orders, carts and sessions are transient
//! by design.

use crate::domain::{Catalog, DomainError, DomainResult};
use std::fs;

pub struct CatalogRepository;

impl CatalogRepository {
    /// Loads a catalog from a JSON file.
    pub fn load(path: &str) -> DomainResult<Catalog> {
        let content =
            fs::read_to_string(path).map_err(|e| DomainError::CatalogIo(e.to_string()))?;
        serde_json::from_str::<Catalog>(&content)
            .map_err(|e| DomainError::CatalogFormat(e.to_string()))
    }

    /// Writes a catalog as pretty-printed JSON, e.g. to produce a
    /// template from the built-in data.
    pub fn save(catalog: &Catalog, path: &str) -> DomainResult<()> {
        let json = serde_json::to_string_pretty(catalog)
            .map_err(|e| DomainError::CatalogFormat(e.to_string()))?;
        fs::write(path, json).map_err(|e| DomainError::CatalogIo(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let path = path.to_str().unwrap();

        let catalog = Catalog::default();
        CatalogRepository::save(&catalog, path).unwrap();
        let loaded = CatalogRepository::load(path).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = CatalogRepository::load("/no/such/catalog.json").unwrap_err();
        assert!(matches!(err, DomainError::CatalogIo(_)));
    }

    #[test]
    fn test_load_invalid_json_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = CatalogRepository::load(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, DomainError::CatalogFormat(_)));
    }
}
