//! # 数据模型模块
//!
//! 定义了与前端类型一一对应的 Rust 数据结构，用于 Tauri IPC 传输。
//! - `options` - 生成选项与字符类别
//! - `session` - 会话快照

pub mod options;
pub mod session;
