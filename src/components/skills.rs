//! Skills grid. Markup comes from `content::markup::render_skills`.

use leptos::prelude::*;

use crate::content::data::SKILLS;
use crate::content::markup::render_skills;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="skills section">
            <h2 class="section-title">"Skills"</h2>
            <div class="skills-grid" role="list" inner_html=render_skills(SKILLS)></div>
        </section>
    }
}
