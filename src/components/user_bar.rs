//! Logged-in User Bar

use leptos::prelude::*;

use crate::actions::BrowserActions;
use crate::state::{use_app_store, AppStateStoreFields};

#[component]
pub fn UserBar() -> impl IntoView {
    let store = use_app_store();
    let actions = expect_context::<BrowserActions>();

    let name = move || {
        store
            .session()
            .with(|s| s.user().map(|u| u.name.clone()).unwrap_or_default())
    };

    let log_out = move |_| {
        if let Err(err) = actions.log_out(&store) {
            tracing::warn!(%err, "logout failed");
        }
    };

    view! {
        <p class="user-bar">
            {name} " logged in "
            <button on:click=log_out>"logout"</button>
        </p>
    }
}
