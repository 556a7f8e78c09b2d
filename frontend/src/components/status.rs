//! 视图加载状态的公共部件
//!
//! 每个视图持有一个 `RwSignal<ViewState<T>>`，
//! 挂载（或路由参数变化）时通过 [`spawn_load`] 发起一次加载。

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use storefront::{Generation, StoreError, StoreResult, ViewState, load_latest};

/// 在后台执行一次加载，并把结果写入 `state`
///
/// 加载前先切换到 `Loading`；若期间又发起了新的加载（或视图已卸载并让
/// `generation` 过期），本次结果会被丢弃。
pub fn spawn_load<T, Fut>(state: RwSignal<ViewState<T>>, generation: &Generation, fetch: Fut)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = StoreResult<T>> + 'static,
{
    state.set(ViewState::Loading);
    let pending = load_latest(generation, fetch);
    spawn_local(async move {
        if let Some(next) = pending.await {
            state.set(next);
        }
    });
}

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center h-[20vh]">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

#[component]
pub fn ErrorAlert(error: StoreError) -> impl IntoView {
    view! {
        <div role="alert" class="alert alert-error m-4">
            <span>"Error: " {error.user_message()}</span>
        </div>
    }
}
