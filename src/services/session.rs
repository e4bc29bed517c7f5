//! # 会话状态服务
//!
//! 持有当前生成选项和最近一次生成的密码，并提供每个字段的 setter。
//!
//! ## 重新生成规则
//! - 任何 setter 真正改变了某个值时，恰好触发一次重新生成
//! - 写入与当前相同的值不会触发生成
//! - 生成失败时选项变更仍然保留，但当前密码保持不变，错误返回给调用方
//!
//! ## 线程安全
//! `SessionState` 使用 `std::sync::Mutex` 包装会话，通过 Tauri 的 `manage()` 注册，
//! 所有 command 函数可以通过 `State<SessionState>` 参数访问。

use std::sync::{Mutex, MutexGuard};

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::error::AppError;
use crate::models::options::{CharacterClass, GeneratorOptions, clamp_length};
use crate::models::session::SessionSnapshot;
use crate::services::generator;

/// 单个窗口的密码生成会话
pub struct PasswordSession {
    /// 当前生成选项
    options: GeneratorOptions,
    /// 最近一次成功生成的密码
    password: Option<String>,
    /// 生成尝试次数
    generation: u64,
    /// 通用（非密码学）均匀随机源
    rng: SmallRng,
}

impl PasswordSession {
    /// 使用默认选项创建会话，并立即生成第一个密码
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// 使用指定的随机源创建会话
    pub fn with_rng(rng: SmallRng) -> Self {
        let mut session = Self {
            options: GeneratorOptions::default(),
            password: None,
            generation: 0,
            rng,
        };
        if let Err(e) = session.regenerate() {
            log::warn!("初始密码生成失败: {}", e);
        }
        session
    }

    /// 当前会话快照
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            options: self.options.clone(),
            password: self.password.clone(),
            generation: self.generation,
        }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// 重新生成密码（刷新按钮）
    ///
    /// 无论选项是否变化都执行一次生成。
    ///
    /// # 错误
    /// 字母表为空时返回 `AppError::NoCharacterClassSelected`，当前密码保持不变
    pub fn regenerate(&mut self) -> Result<(), AppError> {
        self.generation += 1;
        match generator::generate(&self.options, &mut self.rng) {
            Ok(password) => {
                self.password = Some(password);
                Ok(())
            }
            Err(e) => {
                log::warn!("第 {} 次生成被中止: {}", self.generation, e);
                Err(e)
            }
        }
    }

    /// 设置密码长度
    ///
    /// 超出 [1, 99] 的值会被限制到边界。长度变化时触发一次重新生成。
    pub fn set_length(&mut self, length: u8) -> Result<(), AppError> {
        let length = clamp_length(length);
        if self.options.length == length {
            return Ok(());
        }
        log::info!("密码长度: {} -> {}", self.options.length, length);
        self.options.length = length;
        self.regenerate()
    }

    /// 设置某个字符类别的启用状态
    ///
    /// 状态变化时触发一次重新生成。
    pub fn set_class(&mut self, class: CharacterClass, enabled: bool) -> Result<(), AppError> {
        if self.options.is_enabled(class) == enabled {
            return Ok(());
        }
        log::info!("字符类别 {:?}: {}", class, enabled);
        self.options.set_enabled(class, enabled);
        self.regenerate()
    }

    pub fn set_include_upper(&mut self, enabled: bool) -> Result<(), AppError> {
        self.set_class(CharacterClass::Uppercase, enabled)
    }

    pub fn set_include_lower(&mut self, enabled: bool) -> Result<(), AppError> {
        self.set_class(CharacterClass::Lowercase, enabled)
    }

    pub fn set_include_digits(&mut self, enabled: bool) -> Result<(), AppError> {
        self.set_class(CharacterClass::Digits, enabled)
    }

    pub fn set_include_symbols(&mut self, enabled: bool) -> Result<(), AppError> {
        self.set_class(CharacterClass::Symbols, enabled)
    }
}

impl Default for PasswordSession {
    fn default() -> Self {
        Self::new()
    }
}

/// 应用全局会话状态（Tauri managed state）
pub struct SessionState {
    session: Mutex<PasswordSession>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            session: Mutex::new(PasswordSession::new()),
        }
    }

    /// 获取会话的独占访问
    ///
    /// 某个 command 在持锁期间 panic 不会破坏会话数据（所有字段都在一次赋值内更新），
    /// 因此中毒的锁直接恢复使用。
    pub fn lock(&self) -> MutexGuard<'_, PasswordSession> {
        self.session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> PasswordSession {
        PasswordSession::with_rng(SmallRng::seed_from_u64(2024))
    }

    #[test]
    fn test_initial_generation() {
        let s = session();
        let snap = s.snapshot();
        assert_eq!(snap.generation, 1);
        assert_eq!(snap.options, GeneratorOptions::default());
        assert_eq!(snap.password.map(|p| p.len()), Some(12));
    }

    #[test]
    fn test_toggle_symbols_regenerates_once() {
        let mut s = session();
        let before = s.snapshot().generation;

        s.set_include_symbols(false).unwrap();

        let snap = s.snapshot();
        assert_eq!(snap.generation, before + 1);
        assert!(!snap.options.include_symbols);
        let pw = snap.password.unwrap();
        assert_eq!(pw.len(), 12);
        assert!(pw.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_unchanged_value_does_not_regenerate() {
        let mut s = session();
        let before = s.snapshot();

        s.set_include_upper(true).unwrap();
        s.set_length(12).unwrap();

        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn test_set_length_clamps_and_regenerates() {
        let mut s = session();
        s.set_length(0).unwrap();
        assert_eq!(s.options().length, 1);
        assert_eq!(s.password().map(str::len), Some(1));

        s.set_length(250).unwrap();
        assert_eq!(s.options().length, 99);
        assert_eq!(s.password().map(str::len), Some(99));
        assert_eq!(s.snapshot().generation, 3);
    }

    #[test]
    fn test_all_classes_disabled_keeps_previous_password() {
        let mut s = session();
        s.set_include_upper(false).unwrap();
        s.set_include_lower(false).unwrap();
        s.set_include_digits(false).unwrap();
        let previous = s.password().map(str::to_string);
        let generation = s.snapshot().generation;

        let result = s.set_include_symbols(false);

        assert_eq!(result, Err(AppError::NoCharacterClassSelected));
        assert!(!s.options().include_symbols);
        assert_eq!(s.password().map(str::to_string), previous);
        assert_eq!(s.snapshot().generation, generation + 1);

        // 再次启用任意类别后恢复正常生成
        s.set_include_digits(true).unwrap();
        assert!(s.password().unwrap().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_regenerate_always_counts() {
        let mut s = session();
        s.regenerate().unwrap();
        s.regenerate().unwrap();
        let snap = s.snapshot();
        assert_eq!(snap.generation, 3);
        assert_eq!(snap.password.map(|p| p.len()), Some(12));
    }

    #[test]
    fn test_state_lock() {
        let state = SessionState::new();
        state.lock().set_length(20).unwrap();
        assert_eq!(state.lock().options().length, 20);
    }

    #[test]
    fn test_snapshot_ipc_shape() {
        let value = serde_json::to_value(session().snapshot()).unwrap();
        assert_eq!(value["generation"], 1);
        assert_eq!(value["options"]["includeUpper"], true);
        assert!(value["password"].is_string());
    }
}
