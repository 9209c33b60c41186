//! # Template Writer Unit Tests / 模板写入器单元测试
//!
//! Tests for `core::template`: fixed file names, the verbatim C++ path and
//! the single-substitution Python transform.
//!
//! `core::template` 的测试：固定文件名、C++ 原样写入，
//! 以及 Python 的单次替换转换。

use case_runner::core::models::Language;
use case_runner::core::template::write_template;
use std::fs;
use tempfile::TempDir;

const TEMPLATE: &str = "class Solution { }; int main() { return 0; }";

#[test]
fn test_cpp_template_written_verbatim() {
    let dir = TempDir::new().unwrap();

    let path = write_template(Language::Cpp, TEMPLATE, dir.path()).unwrap();

    assert_eq!(path.file_name().unwrap(), "code.cpp");
    assert_eq!(fs::read_to_string(&path).unwrap(), TEMPLATE);
}

#[test]
fn test_python_template_replaces_entry_point() {
    let dir = TempDir::new().unwrap();

    let path = write_template(Language::Python, TEMPLATE, dir.path()).unwrap();

    assert_eq!(path.file_name().unwrap(), "code.py");
    // A textual placeholder transform, not a translator: "int main()" becomes
    // "def main()()" and the surrounding C++ stays as-is.
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "class Solution { }; def main()() { return 0; }");
}

#[test]
fn test_python_transform_replaces_only_first_occurrence() {
    let dir = TempDir::new().unwrap();
    let template = "int main one; int main two";

    let path = write_template(Language::Python, template, dir.path()).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "def main() one; int main two");
}

#[test]
fn test_python_transform_without_marker_leaves_template_unchanged() {
    // Zero occurrences of the marker is accepted behavior, not an error.
    let dir = TempDir::new().unwrap();
    let template = "def solve(): pass";

    let path = write_template(Language::Python, template, dir.path()).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), template);
}
