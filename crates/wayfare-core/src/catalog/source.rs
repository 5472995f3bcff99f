//! Where the reference catalog comes from.

use std::path::{Path, PathBuf};

use log::{debug, info};

use super::Catalog;
use crate::error::{BookingError, FsResultExt, Result};

const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

const CATALOG_FILE_NAME: &str = "catalog.json";

/// Location of the catalog to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A JSON catalog on disk
    File(PathBuf),
    /// The sample catalog compiled into the crate
    Bundled,
}

impl CatalogSource {
    /// Pick the catalog source.
    ///
    /// An explicit path wins. Otherwise a `catalog.json` in the XDG config
    /// directory (`$XDG_CONFIG_HOME/wayfare/`) is used when present, and the
    /// bundled sample catalog when not.
    pub fn discover<P: AsRef<Path>>(explicit: Option<P>) -> Self {
        if let Some(path) = explicit {
            return Self::File(path.as_ref().to_path_buf());
        }
        match xdg::BaseDirectories::with_prefix("wayfare").find_config_file(CATALOG_FILE_NAME) {
            Some(path) => {
                debug!("Found catalog in config directory: {}", path.display());
                Self::File(path)
            }
            None => Self::Bundled,
        }
    }

    /// Load the catalog from this source.
    pub fn load(&self) -> Result<Catalog> {
        match self {
            Self::File(path) => Catalog::load(path),
            Self::Bundled => Catalog::bundled(),
        }
    }
}

impl Catalog {
    /// Read and validate a JSON catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading catalog from {}", path.display());
        let json = std::fs::read_to_string(path).fs_context(path)?;
        Self::from_json(&json).map_err(|e| match e {
            BookingError::Serialization { source } => {
                BookingError::catalog(format!("{}: {source}", path.display()))
            }
            other => other,
        })
    }

    /// The sample catalog shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.destinations.len(), 3);
        for destination in &catalog.destinations {
            let resolved = catalog.resolve(&destination.name);
            assert!(!resolved.hotels.is_empty(), "{} has hotels", destination.name);
            assert!(!resolved.meals.is_empty(), "{} has meals", destination.name);
        }
    }

    #[test]
    fn test_explicit_path_wins() {
        let source = CatalogSource::discover(Some("/tmp/custom.json"));
        assert_eq!(source, CatalogSource::File(PathBuf::from("/tmp/custom.json")));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"currency": "EUR", "hotels": {{"Italy": [{{"id": 1, "name": "Villa", "price": 120}}]}}}}"#
        )
        .unwrap();

        let catalog = CatalogSource::File(file.path().to_path_buf()).load().unwrap();
        assert_eq!(catalog.currency, "EUR");
        assert_eq!(catalog.resolve("italy").hotels[0].name, "Villa");
    }

    #[test]
    fn test_load_reports_path_on_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = Catalog::load(file.path()).unwrap_err();
        assert!(matches!(err, BookingError::Catalog { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load(Path::new("/nonexistent/wayfare/catalog.json")).unwrap_err();
        assert!(matches!(err, BookingError::FileSystem { .. }));
    }
}
