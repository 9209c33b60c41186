//! # Working-Directory Layout Module / 工作目录布局模块
//!
//! Helpers for the on-disk test-case layout: `input<N>.txt` holds a case's
//! stdin, `output<N>.txt` the expected stdout, and `output<N>_tested.txt` the
//! actual output of the most recent run (overwritten each time).
//!
//! 磁盘上测试用例布局的辅助函数：`input<N>.txt` 保存用例的标准输入，
//! `output<N>.txt` 保存期望输出，`output<N>_tested.txt` 保存最近一次
//! 运行的实际输出（每次运行覆盖）。

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::models::TestCase;

static INPUT_FILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^input(\d+)\.txt$").expect("INPUT_FILE pattern"));

pub fn input_path(dir: &Path, index: u32) -> PathBuf {
    dir.join(format!("input{index}.txt"))
}

pub fn expected_path(dir: &Path, index: u32) -> PathBuf {
    dir.join(format!("output{index}.txt"))
}

pub fn actual_path(dir: &Path, index: u32) -> PathBuf {
    dir.join(format!("output{index}_tested.txt"))
}

/// Lists the numeric indices of all persisted input files in `dir`, sorted
/// ascending. Directory enumeration order is never meaningful here: the
/// underlying listing primitive gives no ordering guarantee, so the parsed
/// indices are sorted before anyone iterates them.
///
/// 列出 `dir` 中所有输入文件的数字编号并升序排序。
/// 目录枚举顺序不可依赖，因此在迭代前对解析出的编号排序。
pub fn list_case_indices(dir: &Path) -> io::Result<Vec<u32>> {
    let mut indices: Vec<u32> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .filter_map(|entry| parse_input_index(&entry.file_name().to_string_lossy()))
        .collect();
    indices.sort_unstable();
    Ok(indices)
}

fn parse_input_index(file_name: &str) -> Option<u32> {
    INPUT_FILE
        .captures(file_name)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}

/// The index a manually added case receives: one past the number of existing
/// input files. With the usual dense 1-based numbering this is max+1.
///
/// 手动添加用例获得的编号：现有输入文件数量加一。
/// 在常规的连续 1 起始编号下等于最大编号加一。
pub fn next_case_index(dir: &Path) -> io::Result<u32> {
    if !dir.is_dir() {
        return Ok(1);
    }
    let count = list_case_indices(dir)?.len() as u32;
    Ok(count + 1)
}

/// Persists one test case as an `input<N>.txt` / `output<N>.txt` sibling
/// pair, creating the directory if needed. Contents are trimmed at write
/// time so the round trip through the files is exact.
///
/// 将一个测试用例保存为 `input<N>.txt` / `output<N>.txt` 文件对，
/// 必要时创建目录。写入时去除首尾空白，保证读写往返一致。
pub fn write_case(dir: &Path, case: &TestCase) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(input_path(dir, case.index), case.input.trim())?;
    fs::write(expected_path(dir, case.index), case.expected_output.trim())?;
    Ok(())
}

/// Reads a persisted test case back, trimmed exactly like the harness reads
/// it at comparison time.
///
/// 读回一个已保存的测试用例，裁剪方式与执行器比较时一致。
pub fn read_case(dir: &Path, index: u32) -> io::Result<TestCase> {
    Ok(TestCase {
        index,
        input: read_trimmed(&input_path(dir, index))?,
        expected_output: read_trimmed(&expected_path(dir, index))?,
    })
}

/// Reads a file and strips trailing whitespace, the normalization applied to
/// both sides before the harness compares expected and actual output.
pub fn read_trimmed(path: &Path) -> io::Result<String> {
    Ok(fs::read_to_string(path)?.trim_end().to_string())
}
