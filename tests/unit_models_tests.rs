//! # Models Unit Tests / 数据模型单元测试
//!
//! Tests for `core::models`: artifact resolution precedence and language
//! parsing.
//!
//! `core::models` 的测试：产物解析的优先级和语言解析。

use case_runner::core::models::{Artifact, CPP_SOURCE, Language, PY_SOURCE};
use std::fs;
use std::str::FromStr;
use tempfile::TempDir;

#[test]
fn test_resolve_prefers_compiled_source() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CPP_SOURCE), "int main() {}").unwrap();
    fs::write(dir.path().join(PY_SOURCE), "pass").unwrap();

    match Artifact::resolve(dir.path()) {
        Some(Artifact::Compiled { source }) => {
            assert_eq!(source.file_name().unwrap(), CPP_SOURCE);
        }
        other => panic!("expected compiled artifact, got {:?}", other),
    }
}

#[test]
fn test_resolve_falls_back_to_interpreted_source() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(PY_SOURCE), "pass").unwrap();

    match Artifact::resolve(dir.path()) {
        Some(Artifact::Interpreted { source }) => {
            assert_eq!(source.file_name().unwrap(), PY_SOURCE);
        }
        other => panic!("expected interpreted artifact, got {:?}", other),
    }
}

#[test]
fn test_resolve_empty_directory_yields_none() {
    let dir = TempDir::new().unwrap();
    assert_eq!(Artifact::resolve(dir.path()), None);
}

#[test]
fn test_language_parsing() {
    assert_eq!(Language::from_str("cpp").unwrap(), Language::Cpp);
    assert_eq!(Language::from_str("C++").unwrap(), Language::Cpp);
    assert_eq!(Language::from_str("python").unwrap(), Language::Python);
    assert_eq!(Language::from_str("Py").unwrap(), Language::Python);
    assert!(Language::from_str("rust").is_err());
}

#[test]
fn test_language_source_files() {
    assert_eq!(Language::Cpp.source_file(), "code.cpp");
    assert_eq!(Language::Python.source_file(), "code.py");
}
