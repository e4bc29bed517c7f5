//! # 应用错误类型
//!
//! 所有可能返回给前端的错误都集中在 `AppError` 中。
//! 每种错误都可在本地恢复：应用在任何错误之后都保持完全可用。
//!
//! ## IPC 序列化格式
//! Tauri command 的错误类型必须实现 `Serialize`。`AppError` 序列化为：
//! ```json
//! { "kind": "NoCharacterClassSelected", "message": "At least one character type must be selected." }
//! ```
//! 前端根据 `kind` 决定提示方式（阻塞式 alert 或非阻塞提示），`message` 直接展示给用户。

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// 应用错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// 四个字符类别全部未勾选，字母表为空，无法生成密码
    ///
    /// 生成被中止，当前显示的密码保持不变。
    #[error("At least one character type must be selected.")]
    NoCharacterClassSelected,

    /// 系统剪贴板写入失败（如权限被拒绝），携带底层错误描述
    #[error("Error copying password: {0}")]
    ClipboardWriteFailed(String),

    /// 长度输入框的内容不是 1~2 位数字，携带原始输入
    #[error("Password length must be a number between 1 and 99, got '{0}'")]
    InvalidLengthInput(String),
}

impl AppError {
    /// 错误种类名称，对应前端的 `kind` 字段
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::NoCharacterClassSelected => "NoCharacterClassSelected",
            AppError::ClipboardWriteFailed(_) => "ClipboardWriteFailed",
            AppError::InvalidLengthInput(_) => "InvalidLengthInput",
        }
    }
}

impl Serialize for AppError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AppError", 2)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
