//! # Password Generator - Tauri 应用核心初始化模块
//!
//! 本模块负责 Tauri 应用的完整初始化流程，包括：
//! - 注册 Tauri 官方插件（剪贴板、日志）
//! - 注册自定义 Tauri commands（会话查询、选项变更、重新生成、复制）
//! - 初始化应用全局状态（密码生成会话）
//! - 生成应用上下文并启动事件循环
//!
//! ## 模块结构
//! - `commands/` - Tauri command 处理函数（IPC 接口层）
//! - `models/` - 数据模型（对应前端类型）
//! - `services/` - 核心业务逻辑（生成、会话、剪贴板）
//! - `utils/` - 通用工具函数
//! - `error` - 返回给前端的错误类型

mod commands;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

use services::session::SessionState;

// 移动端（Android/iOS）编译时将 `run()` 标记为入口点；桌面端由 `main.rs` 直接调用。
#[cfg_attr(mobile, tauri::mobile_entry_point)]
/// Tauri 应用启动函数
///
/// 1. 注册剪贴板插件
/// 2. 创建密码生成会话（默认选项下立即生成第一个密码）
/// 3. 注册所有自定义 Tauri commands
/// 4. 在 `setup` 钩子中按需注册调试专用插件（日志）
/// 5. 生成应用上下文并启动主事件循环
///
/// # Panics
/// 如果 Tauri 应用启动失败（例如配置文件缺失或窗口创建失败），
/// 将通过 `.expect()` 触发 panic 并输出错误信息。
pub fn run() {
    tauri::Builder::default()
        // 剪贴板插件：复制按钮通过 Rust 端写入系统剪贴板
        .plugin(tauri_plugin_clipboard_manager::init())
        // 会话状态：所有 command 通过 `State<SessionState>` 访问
        .manage(SessionState::new())
        .invoke_handler(tauri::generate_handler![
            commands::generator::get_session,
            commands::generator::regenerate_password,
            commands::generator::set_length,
            commands::generator::set_character_class,
            commands::generator::copy_password,
        ])
        .setup(|app| {
            // 仅在开发调试模式下启用日志插件
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }
            log::info!("密码生成器已启动");
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
