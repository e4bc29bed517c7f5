//! # 密码生成服务
//!
//! 纯函数：根据生成选项构造字母表，并从中独立、均匀地抽取 `length` 个字符。
//!
//! ## 随机源
//! 随机数生成器由调用方注入（`R: Rng`），生产环境使用会话持有的 `SmallRng`，
//! 测试使用固定种子的 `StdRng`。随机源不要求密码学安全。
//!
//! ## 不做的事
//! - 不保证每个已启用类别至少出现一次（小概率下某类字符可能完全缺席）
//! - 不去重、不截断

use rand::Rng;

use crate::error::AppError;
use crate::models::options::GeneratorOptions;

/// 生成一个新密码
///
/// # 参数
/// - `options` - 生成选项（长度和四个字符类别开关）
/// - `rng` - 均匀随机源
///
/// # 返回值
/// 由已启用类别字符组成、长度恰好为 `options.length` 的新字符串
///
/// # 错误
/// 四个类别全部未启用时返回 `AppError::NoCharacterClassSelected`
pub fn generate<R: Rng + ?Sized>(
    options: &GeneratorOptions,
    rng: &mut R,
) -> Result<String, AppError> {
    let alphabet = options.alphabet();
    if alphabet.is_empty() {
        return Err(AppError::NoCharacterClassSelected);
    }

    // 字母表全部是 ASCII 字符，可以直接按字节索引
    let charset = alphabet.as_bytes();
    let password: String = (0..options.length)
        .map(|_| {
            let idx = rng.gen_range(0..charset.len());
            charset[idx] as char
        })
        .collect();

    log::debug!(
        "生成密码: 长度 {}, 字母表大小 {}",
        options.length,
        charset.len()
    );

    Ok(password)
}
