//! # 剪贴板复制服务
//!
//! 将当前密码写入系统剪贴板。复制结果（成功/失败）只用于提示用户，
//! 不会修改会话中的选项或密码。
//!
//! 平台剪贴板通过 `ClipboardWriter` trait 抽象：生产环境由
//! `tauri-plugin-clipboard-manager` 实现，测试中使用内存实现。

use tauri::{AppHandle, Runtime};
use tauri_plugin_clipboard_manager::ClipboardExt;

use crate::error::AppError;

/// 平台剪贴板写入能力
pub trait ClipboardWriter {
    /// 将文本写入剪贴板，失败时返回底层错误描述
    fn write_text(&self, text: &str) -> Result<(), String>;
}

/// 基于 Tauri 剪贴板插件的实现
impl<R: Runtime> ClipboardWriter for AppHandle<R> {
    fn write_text(&self, text: &str) -> Result<(), String> {
        self.clipboard()
            .write_text(text.to_string())
            .map_err(|e| e.to_string())
    }
}

/// 复制密码到剪贴板
///
/// # 参数
/// - `writer` - 剪贴板写入实现
/// - `password` - 要复制的完整密码
///
/// # 错误
/// 平台剪贴板写入失败时返回 `AppError::ClipboardWriteFailed`
pub fn copy_password<W: ClipboardWriter + ?Sized>(
    writer: &W,
    password: &str,
) -> Result<(), AppError> {
    writer.write_text(password).map_err(|e| {
        log::error!("复制密码失败: {}", e);
        AppError::ClipboardWriteFailed(e)
    })?;

    log::info!("已复制 {} 个字符到剪贴板", password.chars().count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// 内存剪贴板，可配置为始终失败
    #[derive(Default)]
    struct MemoryClipboard {
        contents: RefCell<Option<String>>,
        fail_with: Option<String>,
    }

    impl ClipboardWriter for MemoryClipboard {
        fn write_text(&self, text: &str) -> Result<(), String> {
            if let Some(reason) = &self.fail_with {
                return Err(reason.clone());
            }
            *self.contents.borrow_mut() = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_success() {
        let clipboard = MemoryClipboard::default();
        copy_password(&clipboard, "aB3$xY9!").unwrap();
        assert_eq!(clipboard.contents.borrow().as_deref(), Some("aB3$xY9!"));
    }

    #[test]
    fn test_copy_failure_reports_error() {
        let clipboard = MemoryClipboard {
            fail_with: Some("permission denied".to_string()),
            ..Default::default()
        };
        let result = copy_password(&clipboard, "secret");
        assert_eq!(
            result,
            Err(AppError::ClipboardWriteFailed("permission denied".to_string()))
        );
        assert!(clipboard.contents.borrow().is_none());
    }

    #[test]
    fn test_copy_failure_leaves_session_untouched() {
        use crate::services::session::PasswordSession;
        use rand::SeedableRng;
        use rand::rngs::SmallRng;

        let session = PasswordSession::with_rng(SmallRng::seed_from_u64(5));
        let before = session.snapshot();
        let clipboard = MemoryClipboard {
            fail_with: Some("no clipboard".to_string()),
            ..Default::default()
        };

        assert!(copy_password(&clipboard, session.password().unwrap_or_default()).is_err());
        assert_eq!(session.snapshot(), before);
    }
}
