use crate::components::icons::{EyeIcon, EyeOffIcon};
use crate::session::use_session;
use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront::{StoreError, ViewState};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let submit_state = RwSignal::new(ViewState::<()>::Idle);

    let is_submitting = move || submit_state.with(ViewState::is_loading);
    let error_msg = move || submit_state.with(|s| s.error().map(StoreError::user_message));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submit_state.with_untracked(ViewState::is_loading) {
            return;
        }

        submit_state.set(ViewState::Loading);
        let user = username.get_untracked();
        let pass = password.get_untracked();

        spawn_local(async move {
            let result = session.login(&user, &pass).await;
            // 登录成功后路由会离开本页，信号可能已被销毁
            let _ = submit_state.try_set(ViewState::from_result(result));
        });
    };

    view! {
        <div class="flex items-center justify-center min-h-[90vh] bg-base-200">
            <div class="card shrink-0 w-full max-w-sm shadow-2xl bg-base-100">
                <form class="card-body" on:submit=on_submit>
                    <h2 class="text-2xl font-bold text-center">"Login"</h2>

                    <div class="form-control">
                        <label class="label" for="username">
                            <span class="label-text">"Username"</span>
                        </label>
                        <input
                            id="username"
                            type="text"
                            autocomplete="username"
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            prop:value=username
                            class="input input-bordered"
                            required
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">"Password"</span>
                        </label>
                        <div class="join w-full">
                            <input
                                id="password"
                                type=move || if show_password.get() { "text" } else { "password" }
                                autocomplete="current-password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered join-item w-full"
                                required
                            />
                            <button
                                type="button"
                                class="btn join-item"
                                on:click=move |_| set_show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() {
                                    view! { <EyeOffIcon /> }.into_any()
                                } else {
                                    view! { <EyeIcon /> }.into_any()
                                }}
                            </button>
                        </div>
                    </div>
                    <div class="form-control mt-6">
                        <button type="submit" class="btn btn-primary" disabled=is_submitting>
                            {move || if is_submitting() {
                                view! { <span class="loading loading-spinner"></span> }.into_any()
                            } else {
                                "Login".into_any()
                            }}
                        </button>
                    </div>

                    {move || error_msg().map(|msg| view! {
                        <div role="alert" class="alert alert-error text-sm py-2 mt-2">
                            <span>{msg}</span>
                        </div>
                    })}
                </form>
            </div>
        </div>
    }
}
