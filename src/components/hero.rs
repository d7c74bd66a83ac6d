//! Hero banner with the looping typed-text heading.

use leptos::prelude::*;

use super::anchor::AnchorLink;
use crate::content::data::OWNER_NAME;

/// Hero section. The typing loop starts after `START_DELAY_MS` and is
/// cancelled on unmount or page unload.
#[component]
pub fn Hero() -> impl IntoView {
    let text = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    {
        use crate::state::typing::{PROFESSIONS, START_DELAY_MS, TypingAnimator};
        use crate::util::timers::{Liveness, sleep_ms};

        let alive = Liveness::default();
        if let Some(mut animator) = TypingAnimator::new(PROFESSIONS) {
            let task_alive = alive.clone();
            leptos::task::spawn_local(async move {
                let mut delay = START_DELAY_MS;
                loop {
                    sleep_ms(delay).await;
                    if !task_alive.is_alive() {
                        break;
                    }
                    let tick = animator.tick();
                    text.set(tick.text);
                    delay = tick.delay_ms;
                }
            });
        }

        let unload_alive = alive.clone();
        let unload = window_event_listener(leptos::ev::beforeunload, move |_| unload_alive.cancel());
        on_cleanup(move || {
            alive.cancel();
            unload.remove();
        });
    }

    view! {
        <section id="home" class="hero section">
            <div class="hero-content">
                <p class="hero-greeting">"Hello, I'm"</p>
                <h1 class="hero-name">{OWNER_NAME}</h1>
                <h2 class="hero-title">
                    "I'm a " <span class="typing-text" aria-live="polite">{move || text.get()}</span>
                    <span class="cursor" aria-hidden="true">"|"</span>
                </h2>
                <div class="hero-cta">
                    <AnchorLink href="#projects" class="btn btn-primary">"View My Work"</AnchorLink>
                    <AnchorLink href="#contact" class="btn btn-secondary">"Get In Touch"</AnchorLink>
                </div>
            </div>
        </section>
    }
}
