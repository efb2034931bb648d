//! Error Banner Component
//!
//! Shows the active notification and arms a timer to clear it.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::BrowserActions;
use crate::state::{now, use_app_store, AppStateStoreFields};

#[component]
pub fn NotificationBanner() -> impl IntoView {
    let store = use_app_store();
    let actions = expect_context::<BrowserActions>();

    let message = move || store.notification().with(|n| n.current(now()).map(str::to_string));

    // Every new message gets its own timer. A timer that wakes before the
    // deadline sleeps again for whatever is left.
    Effect::new(move |_| {
        if message().is_none() {
            return;
        }
        let ttl = store.notification().with_untracked(|n| n.ttl());
        let ttl_ms = u32::try_from(ttl.as_millis()).unwrap_or(u32::MAX);
        let actions = actions.clone();
        spawn_local(async move {
            let mut wait_ms = ttl_ms;
            loop {
                TimeoutFuture::new(wait_ms).await;
                match actions.expire_notification(&store) {
                    Some(left) => wait_ms = u32::try_from(left).unwrap_or(u32::MAX).max(1),
                    None => break,
                }
            }
            tracing::debug!("notification expired");
        });
    });

    view! {
        {move || message().map(|text| view! {
            <div class="error" role="alert">
                <span>{text}</span>
                <button
                    class="dismiss-btn"
                    on:click=move |_| store.notification().update(|n| n.dismiss())
                >
                    "×"
                </button>
            </div>
        })}
    }
}
