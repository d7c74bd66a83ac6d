//! Root application component and context providers.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::components::back_to_top::BackToTop;
use crate::components::contact_form::ContactSection;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::notification::NotificationBanner;
use crate::components::projects::Projects;
use crate::components::skills::Skills;
use crate::state::nav::NavState;
use crate::state::notification::NotificationState;
use crate::state::reveal::RevealTracker;
use crate::state::theme::ThemeState;
use crate::util::{dark_mode, reveal_dom};

/// Root application component.
///
/// Provides the theme, menu, and notification state to every section and
/// starts the section reveal observer once the page is mounted.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let initial_theme = dark_mode::read_preference();
    dark_mode::apply(initial_theme);

    let theme = RwSignal::new(ThemeState::new(initial_theme));
    let nav = RwSignal::new(NavState::default());
    let notifications = RwSignal::new(NotificationState::default());

    provide_context(theme);
    provide_context(nav);
    provide_context(notifications);

    let tracker = Rc::new(RefCell::new(RevealTracker::default()));
    Effect::new(move |started: Option<()>| {
        if started.is_none() {
            reveal_dom::observe_sections(Rc::clone(&tracker));
        }
    });

    view! {
        <Title text="Portfolio"/>
        <Meta name="description" content="Personal portfolio: skills, projects, and contact."/>

        <Header/>
        <main>
            <Hero/>
            <About/>
            <Skills/>
            <Projects/>
            <ContactSection/>
        </main>
        <Footer/>
        <BackToTop/>
        <NotificationBanner/>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="about section">
            <h2 class="section-title">"About Me"</h2>
            <p class="about-text">
                "I build web applications and machine learning systems, from Flask and React "
                "front ends to NLP and deep learning models."
            </p>
        </section>
    }
}
