//! # 密码生成 Tauri Commands
//!
//! 提供密码生成器界面的 Tauri command 处理函数：
//! - `get_session` - 获取当前会话快照（选项 + 当前密码）
//! - `regenerate_password` - 刷新按钮：重新生成密码
//! - `set_length` - 长度输入框变更
//! - `set_character_class` - 字符类别复选框变更
//! - `copy_password` - 复制按钮：将当前密码写入剪贴板
//!
//! 变更类 command 成功时返回最新快照；失败时返回 `AppError`，
//! 前端提示错误后调用 `get_session` 重新渲染（选项变更可能已生效）。

use tauri::{AppHandle, State};

use crate::error::AppError;
use crate::models::options::CharacterClass;
use crate::models::session::SessionSnapshot;
use crate::services::clipboard;
use crate::services::session::SessionState;
use crate::utils::input;

/// 获取当前会话快照
///
/// 前端在页面加载时以及任意变更失败后调用，用于渲染表单和密码显示区。
#[tauri::command]
pub fn get_session(state: State<'_, SessionState>) -> SessionSnapshot {
    state.lock().snapshot()
}

/// 重新生成密码
///
/// # 错误
/// 所有字符类别均未启用时返回 `NoCharacterClassSelected`，当前密码保持不变
#[tauri::command]
pub fn regenerate_password(state: State<'_, SessionState>) -> Result<SessionSnapshot, AppError> {
    let mut session = state.lock();
    session.regenerate()?;
    Ok(session.snapshot())
}

/// 设置密码长度
///
/// # 参数
/// - `raw` - 长度输入框的原始文本（只取前 2 位数字，限制到 [1, 99]）
///
/// # 错误
/// - 输入为空或不是数字时返回 `InvalidLengthInput`，选项不变
/// - 长度变化但字母表为空时返回 `NoCharacterClassSelected`
#[tauri::command]
pub fn set_length(raw: String, state: State<'_, SessionState>) -> Result<SessionSnapshot, AppError> {
    let length = input::parse_length_input(&raw)?;
    let mut session = state.lock();
    session.set_length(length)?;
    Ok(session.snapshot())
}

/// 设置某个字符类别的启用状态
///
/// # 参数
/// - `class` - 字符类别（"uppercase" | "lowercase" | "digits" | "symbols"）
/// - `enabled` - 复选框的勾选状态
///
/// # 错误
/// 取消勾选最后一个类别时返回 `NoCharacterClassSelected`；
/// 此时该类别保持未勾选，当前密码保持不变
#[tauri::command]
pub fn set_character_class(
    class: CharacterClass,
    enabled: bool,
    state: State<'_, SessionState>,
) -> Result<SessionSnapshot, AppError> {
    let mut session = state.lock();
    session.set_class(class, enabled)?;
    Ok(session.snapshot())
}

/// 复制当前密码到系统剪贴板
///
/// 剪贴板写入在阻塞线程池中执行，不占用界面线程。
/// 尚未生成密码时复制空字符串（与显示区内容一致）。
///
/// # 错误
/// 平台剪贴板写入失败时返回 `ClipboardWriteFailed`，会话状态不受影响
#[tauri::command]
pub async fn copy_password(
    app: AppHandle,
    state: State<'_, SessionState>,
) -> Result<(), AppError> {
    let password = state.lock().password().unwrap_or_default().to_string();

    tauri::async_runtime::spawn_blocking(move || clipboard::copy_password(&app, &password))
        .await
        .map_err(|e| AppError::ClipboardWriteFailed(e.to_string()))?
}
