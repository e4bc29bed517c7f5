//! # 输入解析工具函数
//!
//! 处理长度输入框的编辑边界：只截取前 2 个字符，仅接受数字，并限制到 [1, 99]。
//! 非法输入在到达生成器之前即被拒绝。

use crate::error::AppError;
use crate::models::options::clamp_length;

/// 长度输入框最多接受的字符数
const MAX_INPUT_DIGITS: usize = 2;

/// 解析长度输入框的原始文本
///
/// # 参数
/// - `raw` - 输入框中的原始字符串
///
/// # 返回值
/// 限制在 [1, 99] 范围内的长度值（"0" 和 "00" 都被提升为 1）
///
/// # 错误
/// 输入为空或截取后的字符中含有非数字时返回 `AppError::InvalidLengthInput`
///
/// # 示例
/// ```text
/// "128" → 12,  "0" → 1,  "ab" → InvalidLengthInput
/// ```
pub fn parse_length_input(raw: &str) -> Result<u8, AppError> {
    let truncated: String = raw.trim().chars().take(MAX_INPUT_DIGITS).collect();

    if truncated.is_empty() || !truncated.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::InvalidLengthInput(raw.to_string()));
    }

    // 最多 2 位数字，必然落在 u8 范围内
    let value: u8 = truncated
        .parse()
        .map_err(|_| AppError::InvalidLengthInput(raw.to_string()))?;

    Ok(clamp_length(value))
}
