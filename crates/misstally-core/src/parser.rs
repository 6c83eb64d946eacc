//! JSON test definition loader.
//!
//! Loads test definitions from `.json` files and directories. Only tests
//! that parse and pass index validation make it into a [`TestCatalog`];
//! everything else is recorded as skipped.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::index::QuestionIndex;
use crate::model::TestDefinition;

/// A file the loader could not use, and why.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Validated tests available for selection.
#[derive(Debug, Clone, Default)]
pub struct TestCatalog {
    /// Tests in path order, unique by name.
    pub tests: Vec<TestDefinition>,
    /// Files that were not usable as tests.
    pub skipped: Vec<SkippedFile>,
}

impl TestCatalog {
    pub fn get(&self, name: &str) -> Option<&TestDefinition> {
        self.tests.iter().find(|t| t.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.tests.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Add a test; a test with the same name is replaced in place.
    fn insert(&mut self, test: TestDefinition, path: &Path) {
        match self.tests.iter_mut().find(|t| t.name == test.name) {
            Some(existing) => {
                tracing::warn!(
                    "test `{}` in {} replaces an earlier definition",
                    test.name,
                    path.display()
                );
                *existing = test;
            }
            None => self.tests.push(test),
        }
    }

    fn skip(&mut self, path: PathBuf, err: &anyhow::Error) {
        tracing::warn!("skipping {}: {:#}", path.display(), err);
        self.skipped.push(SkippedFile {
            path,
            reason: format!("{err:#}"),
        });
    }
}

/// Parse a single JSON file into a `TestDefinition`.
pub fn parse_test_definition(path: &Path) -> Result<TestDefinition> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read test file: {}", path.display()))?;

    parse_test_definition_str(&content, path)
}

/// Parse a JSON string into a `TestDefinition` (useful for testing).
pub fn parse_test_definition_str(content: &str, source_path: &Path) -> Result<TestDefinition> {
    serde_json::from_str(content)
        .with_context(|| format!("failed to parse test JSON: {}", source_path.display()))
}

/// Parse and validate one file.
pub fn load_test_file(path: &Path) -> Result<TestDefinition> {
    let test = parse_test_definition(path)?;
    QuestionIndex::build(&test)?;
    Ok(test)
}

/// Load a catalog from a single file or recursively from a directory.
///
/// Unreadable directories and entries are recorded as skipped; only a
/// missing `path` is an error.
pub fn load_catalog(path: &Path) -> Result<TestCatalog> {
    let mut catalog = TestCatalog::default();

    if path.is_dir() {
        let mut files = Vec::new();
        collect_json_files(path, &mut files, &mut catalog);
        files.sort();

        for file in files {
            match load_test_file(&file) {
                Ok(test) => catalog.insert(test, &file),
                Err(e) => catalog.skip(file, &e),
            }
        }
    } else if path.is_file() {
        match load_test_file(path) {
            Ok(test) => catalog.insert(test, path),
            Err(e) => catalog.skip(path.to_path_buf(), &e),
        }
    } else {
        anyhow::bail!("no such file or directory: {}", path.display());
    }

    tracing::debug!(
        tests = catalog.tests.len(),
        skipped = catalog.skipped.len(),
        "loaded catalog from {}",
        path.display()
    );
    Ok(catalog)
}

/// Push every `.json` file under `dir` onto `files`.
fn collect_json_files(dir: &Path, files: &mut Vec<PathBuf>, catalog: &mut TestCatalog) {
    let entries = match std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))
    {
        Ok(entries) => entries,
        Err(e) => return catalog.skip(dir.to_path_buf(), &e),
    };

    for entry in entries {
        let path = match entry
            .with_context(|| format!("failed to read entry in directory: {}", dir.display()))
        {
            Ok(entry) => entry.path(),
            Err(e) => {
                catalog.skip(dir.to_path_buf(), &e);
                continue;
            }
        };

        if path.is_dir() {
            collect_json_files(&path, files, catalog);
        } else if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
}
