//! # 通用工具函数模块
//!
//! - `input` - 长度输入框的解析与范围限制

pub mod input;
