//! # Tauri Command 处理模块
//!
//! 本模块包含所有注册到 Tauri 的 command 处理函数：
//! - `generator` - 密码生成、选项变更和复制相关 commands

pub mod generator;
