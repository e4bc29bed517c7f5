//! # 生成选项数据模型
//!
//! 定义了密码生成选项（GeneratorOptions）和字符类别（CharacterClass）。
//!
//! 对应前端 `ui/main.js` 中渲染的表单状态：一个长度输入框和四个字符类别复选框。

use serde::{Deserialize, Serialize};

/// 密码长度下限
pub const MIN_LENGTH: u8 = 1;

/// 密码长度上限（输入框最多接受 2 位数字）
pub const MAX_LENGTH: u8 = 99;

/// 默认密码长度
pub const DEFAULT_LENGTH: u8 = 12;

const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGIT_CHARS: &str = "0123456789";
const SYMBOL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// 字符类别
///
/// 前端以小写字符串传入（"uppercase" | "lowercase" | "digits" | "symbols"）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// 拼接字母表时的固定顺序：大写、小写、数字、符号
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    /// 该类别包含的全部字符
    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE_CHARS,
            CharacterClass::Lowercase => LOWERCASE_CHARS,
            CharacterClass::Digits => DIGIT_CHARS,
            CharacterClass::Symbols => SYMBOL_CHARS,
        }
    }
}

/// 密码生成选项
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface GeneratorOptions {
///   length: number;
///   includeUpper: boolean;
///   includeLower: boolean;
///   includeDigits: boolean;
///   includeSymbols: boolean;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorOptions {
    /// 密码长度，取值范围 [1, 99]
    pub length: u8,
    /// 是否包含大写字母 A-Z
    pub include_upper: bool,
    /// 是否包含小写字母 a-z
    pub include_lower: bool,
    /// 是否包含数字 0-9
    pub include_digits: bool,
    /// 是否包含符号
    pub include_symbols: bool,
}

/// 默认值：长度 12，四个字符类别全部启用
impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_upper: true,
            include_lower: true,
            include_digits: true,
            include_symbols: true,
        }
    }
}

impl GeneratorOptions {
    /// 查询某个字符类别是否启用
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_upper,
            CharacterClass::Lowercase => self.include_lower,
            CharacterClass::Digits => self.include_digits,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    /// 设置某个字符类别的启用状态
    pub fn set_enabled(&mut self, class: CharacterClass, enabled: bool) {
        let flag = match class {
            CharacterClass::Uppercase => &mut self.include_upper,
            CharacterClass::Lowercase => &mut self.include_lower,
            CharacterClass::Digits => &mut self.include_digits,
            CharacterClass::Symbols => &mut self.include_symbols,
        };
        *flag = enabled;
    }

    /// 按固定顺序拼接所有已启用类别的字符，得到可选字母表
    ///
    /// 没有任何类别启用时返回空字符串。
    pub fn alphabet(&self) -> String {
        CharacterClass::ALL
            .iter()
            .filter(|class| self.is_enabled(**class))
            .map(|class| class.chars())
            .collect()
    }
}

/// 将任意长度值限制在 [MIN_LENGTH, MAX_LENGTH] 范围内
pub fn clamp_length(length: u8) -> u8 {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}
