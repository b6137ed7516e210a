//! Resolved runtime state shared by commands.

use crate::config::Config;
use crate::error::{CliError, Result};
use docpin_catalog::ReferenceCatalog;
use docpin_classifier::{builtin_registry, Classifier, RuleRegistry};
use std::path::PathBuf;

/// Configuration plus the command-line overrides that apply to every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Loaded configuration
    pub config: Config,
    /// Where the configuration lives (whether or not it exists yet)
    pub config_path: PathBuf,
    /// `--catalog` override
    pub catalog_file: Option<PathBuf>,
    /// `--rules` override
    pub rules_file: Option<PathBuf>,
}

impl Context {
    /// Build a context; flags win over configuration entries.
    pub fn new(
        config: Config,
        config_path: PathBuf,
        catalog_file: Option<PathBuf>,
        rules_file: Option<PathBuf>,
    ) -> Self {
        let catalog_file = catalog_file.or_else(|| config.catalog_file.clone());
        let rules_file = rules_file.or_else(|| config.rules_file.clone());
        Self {
            config,
            config_path,
            catalog_file,
            rules_file,
        }
    }

    /// Content file given on the command line, or the configured default.
    pub fn content_file(&self, explicit: Option<PathBuf>) -> Result<PathBuf> {
        explicit
            .or_else(|| self.config.content_file.clone())
            .ok_or_else(|| {
                CliError::InvalidInput(
                    "No content file given and no content_file configured".to_string(),
                )
            })
    }

    /// Load the reference catalog.
    ///
    /// A catalog file replaces the built-in catalog entirely.
    pub fn catalog(&self) -> Result<ReferenceCatalog> {
        let catalog = match &self.catalog_file {
            Some(path) => ReferenceCatalog::from_path(path)?,
            None => ReferenceCatalog::builtin()?,
        };
        Ok(catalog)
    }

    /// Load the rule registry.
    pub fn registry(&self) -> Result<RuleRegistry> {
        let registry = match &self.rules_file {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading rules");
                RuleRegistry::from_path(path)?
            }
            None => builtin_registry(),
        };
        Ok(registry)
    }

    /// Build the catalog and a classifier, optionally overriding the cap.
    ///
    /// Topic keys the catalog cannot resolve are logged once here.
    pub fn engine(&self, cap: Option<usize>) -> Result<(ReferenceCatalog, Classifier)> {
        let catalog = self.catalog()?;

        let mut classifier_config = self.config.classifier.clone();
        if let Some(cap) = cap {
            classifier_config.max_references = cap;
        }
        let classifier = Classifier::new(self.registry()?, classifier_config)?;

        for missing in classifier.unresolved_keys(&catalog) {
            tracing::warn!(kind = %missing.kind, key = %missing.key, "Topic key not in catalog");
        }

        Ok((catalog, classifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn context() -> Context {
        Context::new(Config::default(), PathBuf::from("config.toml"), None, None)
    }

    #[test]
    fn test_flag_overrides_config() {
        let mut config = Config::default();
        config.catalog_file = Some(PathBuf::from("from-config.toml"));
        let ctx = Context::new(config, PathBuf::new(), Some(PathBuf::from("from-flag.toml")), None);
        assert_eq!(ctx.catalog_file, Some(PathBuf::from("from-flag.toml")));
    }

    #[test]
    fn test_content_file_required() {
        assert!(matches!(context().content_file(None), Err(CliError::InvalidInput(_))));
        assert_eq!(
            context().content_file(Some(PathBuf::from("a.json"))).unwrap(),
            PathBuf::from("a.json")
        );
    }

    #[test]
    fn test_builtin_engine() {
        let (catalog, classifier) = context().engine(Some(1)).unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(classifier.config().max_references, 1);
    }

    #[test]
    fn test_zero_cap_rejected() {
        assert!(matches!(context().engine(Some(0)), Err(CliError::Classifier(_))));
    }

    #[test]
    fn test_catalog_file_replaces_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(
            &path,
            "[[entry]]\nkey = \"only\"\nlabel = \"Only\"\nurl = \"https://example.com\"\ndescription = \"\"\n",
        )
        .unwrap();

        let ctx = Context::new(Config::default(), PathBuf::new(), Some(path), None);
        let catalog = ctx.catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains_key("only"));
    }

    #[test]
    fn test_duplicate_catalog_key_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        let entry = "[[entry]]\nkey = \"dup\"\nlabel = \"A\"\nurl = \"https://example.com/a\"\n";
        fs::write(&path, format!("{}{}", entry, entry)).unwrap();

        let ctx = Context::new(Config::default(), PathBuf::new(), Some(path), None);
        assert!(matches!(ctx.catalog(), Err(CliError::Catalog(_))));
    }
}
