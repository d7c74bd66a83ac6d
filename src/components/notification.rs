//! Transient notification banner.
//!
//! `notify` starts (or restarts) the banner timeline; the delayed retract
//! and conceal steps are dropped when a newer notification has arrived.

use leptos::prelude::*;

use crate::state::notification::{Notification, NotificationState};

/// Show `notification` and schedule its retraction.
pub fn notify(state: RwSignal<NotificationState>, notification: Notification) {
    let Some(seq) = state.try_update(|s| s.show(notification)) else {
        return;
    };

    #[cfg(feature = "csr")]
    {
        use crate::state::notification::{RETRACT_MS, VISIBLE_MS};
        use crate::util::timers::sleep_ms;

        leptos::task::spawn_local(async move {
            sleep_ms(VISIBLE_MS).await;
            if !state.try_update(|s| s.retract(seq)).unwrap_or(false) {
                return;
            }
            sleep_ms(RETRACT_MS).await;
            let _ = state.try_update(|s| s.conceal(seq));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = seq;
    }
}

#[component]
pub fn NotificationBanner() -> impl IntoView {
    let state = expect_context::<RwSignal<NotificationState>>();

    view! {
        <div
            id="notification"
            class=move || state.get().class_name()
            role="status"
            aria-live="polite"
            aria-hidden=move || state.get().aria_hidden_attr()
        >
            {move || {
                state
                    .get()
                    .current
                    .map(|n| {
                        view! {
                            <i class=n.kind.icon() aria-hidden="true"></i>
                            <span>{n.message}</span>
                        }
                    })
            }}
        </div>
    }
}
