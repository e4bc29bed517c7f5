//! # 会话快照数据模型
//!
//! `SessionSnapshot` 是会话状态的只读视图，每次 command 执行后返回给前端用于渲染。

use serde::Serialize;

use super::options::GeneratorOptions;

/// 会话快照
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface SessionSnapshot {
///   options: GeneratorOptions;
///   password: string | null;
///   generation: number;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// 当前生成选项
    pub options: GeneratorOptions,

    /// 最近一次成功生成的密码；首次生成成功之前为 `null`（None）
    pub password: Option<String>,

    /// 生成尝试次数（包含失败的尝试），每次选项变更恰好加一
    pub generation: u64,
}
