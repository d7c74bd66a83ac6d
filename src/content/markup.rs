//! Pure data-to-markup renderers for the skills and projects grids.
//!
//! Output replaces the container's content wholesale on every call. All
//! interpolated text is escaped.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::data::{Project, Skill};

/// Render the skills grid fragment.
pub fn render_skills(skills: &[Skill]) -> String {
    skills.iter().fold(String::new(), |mut out, skill| {
        write_skill(&mut out, skill);
        out
    })
}

/// Render the projects grid fragment.
pub fn render_projects(projects: &[Project]) -> String {
    projects.iter().fold(String::new(), |mut out, project| {
        write_project(&mut out, project);
        out
    })
}

fn write_skill(out: &mut String, skill: &Skill) {
    let level = skill.level.min(100);
    let name_text = encode_text(skill.name);
    let name_attr = encode_double_quoted_attribute(skill.name);
    let icon = encode_double_quoted_attribute(skill.icon);

    let _ = write!(
        out,
        concat!(
            r#"<div class="skill-item" role="listitem">"#,
            r#"<div class="skill-header">"#,
            r#"<i class="{icon}" aria-hidden="true"></i>"#,
            r#"<span class="skill-name">{name_text}</span>"#,
            "</div>",
            r#"<div class="skill-bar">"#,
            r#"<div class="skill-progress" style="width: {level}%" aria-label="{name_attr} skill level: {level}%">"#,
            r#"<span class="sr-only">{level}%</span>"#,
            "</div>",
            "</div>",
            "</div>",
        ),
        icon = icon,
        name_text = name_text,
        name_attr = name_attr,
        level = level,
    );
}

fn write_project(out: &mut String, project: &Project) {
    let title_text = encode_text(project.title);
    let title_attr = encode_double_quoted_attribute(project.title);

    let _ = write!(
        out,
        concat!(
            r#"<div class="project-card" role="listitem">"#,
            r#"<div class="project-image-container">"#,
            r#"<img src="{image}" alt="{title_attr} screenshot" class="project-image" loading="lazy">"#,
            "</div>",
            r#"<div class="project-content">"#,
            r#"<h3 class="project-title">{title_text}</h3>"#,
            r#"<p class="project-description">{description}</p>"#,
            r#"<div class="project-tech">"#,
        ),
        image = encode_double_quoted_attribute(project.image),
        title_attr = title_attr,
        title_text = title_text,
        description = encode_text(project.description),
    );
    for tech in project.technologies {
        let _ = write!(out, r#"<span class="tech-tag">{}</span>"#, encode_text(tech));
    }
    out.push_str(r#"</div><div class="project-links">"#);
    if let Some(href) = link(project.github) {
        write_link(out, href, &format!("View {title_attr} on GitHub"), "fab fa-github");
    }
    if let Some(href) = link(project.live) {
        write_link(out, href, &format!("View {title_attr} live demo"), "fas fa-external-link-alt");
    }
    out.push_str("</div></div></div>");
}

fn write_link(out: &mut String, href: &str, label: &str, icon: &str) {
    let _ = write!(
        out,
        r#"<a href="{}" class="project-link" aria-label="{label}" target="_blank" rel="noopener noreferrer"><i class="{icon}"></i></a>"#,
        encode_double_quoted_attribute(href),
    );
}

/// A link field counts only when it has non-whitespace content.
fn link(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
