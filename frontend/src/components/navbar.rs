use crate::components::icons::LogOutIcon;
use crate::components::status::spawn_load;
use crate::session::use_session;
use crate::web::router::Link;
use leptos::prelude::*;
use storefront::{Generation, ViewState};
use storefront_shared::User;
use storefront_shared::initials::username_initials;

/// 顶部导航栏，始终渲染
///
/// 有令牌时拉取当前用户信息；拉取失败时记录日志、作废令牌，并回退为登录入口。
#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let is_authenticated = session.is_authenticated_signal();
    let user_state = RwSignal::new(ViewState::<User>::Idle);
    let generation = Generation::new();

    // 令牌变化（登录 / 注销）时重新拉取
    Effect::new(move |_| match session.token() {
        Some(token) => {
            spawn_load(user_state, &generation, async move {
                session
                    .current_user(&token)
                    .await
                    .inspect_err(|e| log::error!("Error fetching user data: {:?}", e))
            });
        }
        None => {
            generation.invalidate();
            user_state.set(ViewState::Idle);
        }
    });

    let on_logout = move |_| session.logout();

    let login_link = || {
        view! {
            <Link to="/login">
                <span class="btn btn-ghost">"Login"</span>
            </Link>
        }
        .into_any()
    };

    view! {
        <div class="navbar bg-primary text-primary-content shadow">
            <div class="flex-1">
                <Link to="/">
                    <span class="btn btn-ghost text-xl normal-case">"Home"</span>
                </Link>
            </div>
            <div class="flex-none gap-2">
                {move || {
                    if !is_authenticated.get() {
                        return login_link();
                    }
                    match user_state.get() {
                        ViewState::Ready(user) => {
                            view! {
                                <div class="flex items-center gap-2">
                                    <UserAvatar user=user />
                                    <button class="btn btn-ghost btn-circle" on:click=on_logout>
                                        <LogOutIcon />
                                    </button>
                                </div>
                            }
                            .into_any()
                        }
                        ViewState::Failed(_) => login_link(),
                        ViewState::Idle | ViewState::Loading => ().into_any(),
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn UserAvatar(user: User) -> impl IntoView {
    let content = match user.avatar_url() {
        Some(url) => view! {
            <img src=url.to_string() alt=user.username.clone() />
        }
        .into_any(),
        None => view! {
            <span class="font-bold uppercase">{username_initials(&user.username)}</span>
        }
        .into_any(),
    };

    view! {
        <div class="avatar placeholder">
            <div class="bg-neutral-content text-neutral rounded-full w-10">{content}</div>
        </div>
    }
}
