//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。
//! "已认证" 的唯一依据是 LocalStorage 中存在 token。

use crate::api::AuthApi;
use crate::models::{LoginRequest, RegisterRequest};
use crate::web::LocalStorage;
use leptos::prelude::*;

/// 会话凭证在 LocalStorage 中的键
pub const TOKEN_STORAGE_KEY: &str = "token";

/// 认证状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// 会话 token（仅在认证成功后存在）
    pub token: Option<String>,
    /// 是否正在加载
    pub is_loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    /// 创建新的认证上下文
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState {
            token: None,
            is_loading: true,
        });
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated())
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 页面加载时从 LocalStorage 恢复上次会话的 token。
pub fn init_auth(ctx: &AuthContext) {
    let token = LocalStorage::get(TOKEN_STORAGE_KEY);
    ctx.set_state.update(|state| {
        state.token = token;
        state.is_loading = false;
    });
}

/// 登录并保存凭证
///
/// 成功时把后端签发的 token 写入 LocalStorage（键 `token`），
/// 之后的导航与 API 调用都以该键的存在为准。
pub async fn login(ctx: &AuthContext, username: String, password: String) -> Result<(), String> {
    let api = AuthApi::default();
    let token = api.login(&LoginRequest { username, password }).await?;

    LocalStorage::set(TOKEN_STORAGE_KEY, &token);
    ctx.set_state.update(|state| {
        state.token = Some(token);
    });

    web_sys::console::log_1(&"[Auth] Login succeeded.".into());
    Ok(())
}

/// 注册新用户
///
/// 注册不建立会话，成功后由调用方引导用户去登录。
pub async fn register(username: String, password: String, email: String) -> Result<(), String> {
    let api = AuthApi::default();
    api.register(&RegisterRequest {
        username,
        password,
        email,
    })
    .await
}

/// 注销并清除凭证
///
/// 导航将由路由服务的认证状态监听自动处理。
pub fn logout(ctx: &AuthContext) {
    LocalStorage::delete(TOKEN_STORAGE_KEY);
    ctx.set_state.update(|state| {
        state.token = None;
    });
    // 注意：不需要手动导航，路由服务会监听认证状态变化并自动重定向
}
