//! 启动时的交互输入

use std::io::{BufRead, Write};

use crate::error::InputError;

pub const WORKER_COUNT_PROMPT: &str = "Enter the number of workers:";

/// 解析 worker 数量
///
/// 接受任意整数，负数按 0 处理；非整数视为错误
pub fn parse_worker_count(input: &str) -> Result<usize, InputError> {
    let input = input.trim();
    let count: i64 = input.parse().map_err(|_| InputError::InvalidCount(input.to_string()))?;
    Ok(usize::try_from(count).unwrap_or(0))
}

/// 输出提示并读取一行，解析为 worker 数量
pub fn read_worker_count<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
) -> Result<usize, InputError> {
    writeln!(writer, "{}", WORKER_COUNT_PROMPT)?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    parse_worker_count(&line)
}
