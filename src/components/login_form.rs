//! Login Form Component
//!
//! Collapsed to a single "log in" button until opened.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::BrowserActions;
use crate::state::{use_app_store, AppStateStoreFields};

#[component]
pub fn LoginForm() -> impl IntoView {
    let store = use_app_store();
    let visible = move || store.session().with(|s| s.login_form_visible());

    view! {
        <Show
            when=visible
            fallback=move || view! {
                <button on:click=move |_| store.session().update(|s| s.show_login_form())>
                    "log in"
                </button>
            }
        >
            <LoginFields />
        </Show>
    }
}

#[component]
fn LoginFields() -> impl IntoView {
    let store = use_app_store();
    let actions = expect_context::<BrowserActions>();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let actions = actions.clone();
        spawn_local(async move {
            let _ = actions.log_in(&store).await;
        });
    };

    view! {
        <div class="login-form">
            <h2>"Login"</h2>
            <form on:submit=submit>
                <div>
                    "username "
                    <input
                        type="text"
                        name="Username"
                        autocomplete="username"
                        prop:value=move || store.session().with(|s| s.form().username.clone())
                        on:input=move |ev| store.session().update(|s| s.set_username(event_target_value(&ev)))
                    />
                </div>
                <div>
                    "password "
                    <input
                        type="password"
                        name="Password"
                        autocomplete="current-password"
                        prop:value=move || store.session().with(|s| s.form().password.clone())
                        on:input=move |ev| store.session().update(|s| s.set_password(event_target_value(&ev)))
                    />
                </div>
                <button type="submit">"login"</button>
            </form>
            <button class="cancel-btn" on:click=move |_| store.session().update(|s| s.hide_login_form())>
                "cancel"
            </button>
        </div>
    }
}
