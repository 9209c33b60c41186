//! Template writer: persists the scraped code template under the fixed file
//! name for the chosen language.
//!
//! 模板写入器：将抓取到的代码模板以所选语言的固定文件名保存。

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::CoreError;
use crate::core::models::Language;

/// The entry-point marker expected in the scraped template.
const CPP_ENTRY: &str = "int main";
/// Its interpreted-language replacement.
const PY_ENTRY: &str = "def main()";

/// Writes the template into `dir` under the fixed name for `language` and
/// returns the written path.
///
/// For `Cpp` the text is written verbatim. For `Python` exactly one textual
/// substitution is applied: the first literal `int main` becomes
/// `def main()`. This is a placeholder transform, not a translator; when the
/// marker does not occur the template is written unchanged, which is accepted
/// behavior rather than an error.
///
/// 将模板以 `language` 的固定文件名写入 `dir` 并返回路径。
/// `Cpp` 原样写入；`Python` 仅做一次文本替换：第一个 `int main`
/// 变为 `def main()`。标记不存在时模板原样写入，这是约定行为而非错误。
pub fn write_template(
    language: Language,
    template: &str,
    dir: &Path,
) -> Result<PathBuf, CoreError> {
    let contents = match language {
        Language::Cpp => template.to_string(),
        Language::Python => template.replacen(CPP_ENTRY, PY_ENTRY, 1),
    };

    let path = dir.join(language.source_file());
    fs::write(&path, contents)?;
    Ok(path)
}
