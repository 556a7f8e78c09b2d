//! 会话上下文
//!
//! 会话对象通过 Context 注入，组件不直接读写 localStorage。
//! 路由服务通过注入的认证信号来感知登录 / 注销。

use crate::web::{FetchHttpClient, LocalStorage};
use leptos::prelude::*;
use storefront::{ApiConfig, Session, StoreApi, StoreResult, resolve_user, sign_in, sign_out};
use storefront_shared::User;

pub type Api = StoreApi<FetchHttpClient>;

/// 会话上下文
///
/// `token` 镜像存储中的令牌，令牌变化会驱动导航栏和路由重定向。
#[derive(Clone, Copy)]
pub struct SessionContext {
    token: RwSignal<Option<String>>,
    api: StoredValue<Api>,
    session: StoredValue<Session<LocalStorage>>,
}

impl SessionContext {
    /// 创建新的会话上下文，并从存储中恢复令牌
    pub fn new(api: Api, session: Session<LocalStorage>) -> Self {
        let token = RwSignal::new(session.read());
        Self {
            token,
            api: StoredValue::new(api),
            session: StoredValue::new(session),
        }
    }

    pub fn api(&self) -> Api {
        self.api.get_value()
    }

    /// 当前令牌（响应式）
    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let token = self.token;
        Signal::derive(move || token.with(Option::is_some))
    }

    /// 登录并保存令牌
    ///
    /// 失败时不保存任何东西；路由服务会在认证状态变化后自动离开登录页。
    pub async fn login(&self, username: &str, password: &str) -> StoreResult<()> {
        let api = self.api();
        let session = self.session.get_value();
        let token = sign_in(&api, &session, username, password).await?;
        self.token.set(Some(token));
        Ok(())
    }

    /// 获取当前用户
    ///
    /// 失败时令牌作废：存储与信号一起清空，界面回到未登录状态，
    /// 登录页因此重新可达。
    pub async fn current_user(&self, token: &str) -> StoreResult<User> {
        let api = self.api();
        let session = self.session.get_value();
        let result = resolve_user(&api, &session, token).await;
        if result.is_err() && self.token.with_untracked(|t| t.as_deref() == Some(token)) {
            self.token.set(None);
        }
        result
    }

    /// 注销并清除令牌
    pub fn logout(&self) {
        self.session.with_value(sign_out);
        self.token.set(None);
    }
}

/// 创建会话上下文并注入 Context
pub fn provide_session() -> SessionContext {
    let api = StoreApi::new(ApiConfig::from_build_env(), FetchHttpClient);
    let ctx = SessionContext::new(api, Session::new(LocalStorage));
    provide_context(ctx);
    ctx
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}
