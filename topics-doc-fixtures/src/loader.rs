//! Fixture file loading.
//!
//! A fixture file holds a JSON array of fixture records.

use crate::{FixtureError, FixtureResult};
use std::fs;
use std::path::{Path, PathBuf};
use topics_doc::FixtureRecord;

/// Load the records of a single fixture file.
pub fn load_fixture_file(path: &Path) -> FixtureResult<Vec<FixtureRecord>> {
    let content = fs::read_to_string(path).map_err(|e| FixtureError::Load {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| FixtureError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Load all fixture files from a directory (glob: **/*.json), ordered by
/// relative path.
pub fn load_all_fixtures(dir: &Path) -> FixtureResult<Vec<(String, Vec<FixtureRecord>)>> {
    let mut paths = Vec::new();
    collect_fixture_paths(dir, &mut paths)?;
    paths.sort();

    let mut fixtures = Vec::with_capacity(paths.len());
    for path in paths {
        let relative = path.strip_prefix(dir).unwrap_or(&path);
        let records = load_fixture_file(&path)?;
        tracing::debug!("Loaded {} records from {}", records.len(), relative.display());
        fixtures.push((relative.display().to_string(), records));
    }
    Ok(fixtures)
}

/// Every record under `dir`, in file order and then in-file order.
pub fn load_records(dir: &Path) -> FixtureResult<Vec<FixtureRecord>> {
    Ok(load_all_fixtures(dir)?
        .into_iter()
        .flat_map(|(_, records)| records)
        .collect())
}

fn collect_fixture_paths(dir: &Path, paths: &mut Vec<PathBuf>) -> FixtureResult<()> {
    if !dir.is_dir() {
        return Ok(());
    }

    for entry in fs::read_dir(dir).map_err(|e| FixtureError::Load {
        path: dir.display().to_string(),
        message: e.to_string(),
    })? {
        let entry = entry.map_err(|e| FixtureError::Load {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        let path = entry.path();

        if path.is_dir() {
            collect_fixture_paths(&path, paths)?;
        } else if path.extension().map_or(false, |e| e == "json") {
            paths.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use topics_doc::Expected;

    fn fixtures_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    #[test]
    fn test_load_fixture_file() {
        let records = load_fixture_file(&fixtures_dir().join("git.json")).unwrap();
        let branch = records
            .iter()
            .find(|r| r.name == "TestGitBranch")
            .unwrap();
        assert!(branch.message.is_specified());
        assert_eq!(
            branch.expected.title,
            Expected::Specified(Some("(abc) pushed to branch".to_string()))
        );
        assert!(branch.expected.subtitle.is_unspecified());
    }

    #[test]
    fn test_load_all_fixtures_sorted() {
        let fixtures = load_all_fixtures(&fixtures_dir()).unwrap();
        let names: Vec<&str> = fixtures.iter().map(|(name, _)| name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(fixtures.len() >= 3);
    }

    #[test]
    fn test_load_all_fixtures_ignores_other_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("README.txt"), "not a fixture").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("one.json"), r#"[{"name": "TestOne"}]"#)
            .unwrap();

        let fixtures = load_all_fixtures(dir.path()).unwrap();
        assert_eq!(fixtures.len(), 1);
        assert_eq!(fixtures[0].1[0].name, "TestOne");
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = tempdir().unwrap();
        let fixtures = load_all_fixtures(&dir.path().join("missing")).unwrap();
        assert!(fixtures.is_empty());
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, r#"{"name": "NotAnArray"}"#).unwrap();

        let err = load_fixture_file(&path).unwrap_err();
        match err {
            FixtureError::Parse { path: reported, .. } => {
                assert!(reported.ends_with("broken.json"))
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
