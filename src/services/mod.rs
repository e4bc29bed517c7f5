//! # 业务逻辑服务模块
//!
//! 包含核心业务逻辑的实现，与 Tauri command 层解耦：
//! - `generator` - 密码生成：构造字母表并均匀抽样
//! - `session` - 会话状态：生成选项、当前密码和重新生成规则
//! - `clipboard` - 剪贴板复制

pub mod clipboard;
pub mod generator;
pub mod session;
