//! Projects grid. Markup comes from `content::markup::render_projects`.

use leptos::prelude::*;

use crate::content::data::PROJECTS;
use crate::content::markup::render_projects;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="projects section">
            <h2 class="section-title">"Projects"</h2>
            <div class="projects-grid" role="list" inner_html=render_projects(PROJECTS)></div>
        </section>
    }
}
