//! Turns the static content tables into section markup.
//!
//! Each section owns a mount point in index.html; rendering is a one-time
//! `set_inner_html` per container, after which only the contact form and the
//! scroll effects touch the DOM again.

use portfolio_core::content::{
    CONTACT_CHANNELS, HERO_GREETING, HERO_ROLES, HERO_TAGLINE, HIGHLIGHTS, NAV_ITEMS, PROJECTS,
    SITE_NAME, SKILL_CATEGORIES, SOCIAL_LINKS, STATS,
};
use web_sys as web;

pub fn build(document: &web::Document) -> anyhow::Result<()> {
    render_nav(document)?;
    render_hero(document)?;
    render_about(document)?;
    render_skills(document)?;
    render_projects(document)?;
    render_contact_info(document)?;
    Ok(())
}

fn container(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))
}

fn render_nav(document: &web::Document) -> anyhow::Result<()> {
    let el = container(document, "nav-links")?;
    let mut html = String::new();
    for item in &NAV_ITEMS {
        html.push_str(&format!(
            "<a id='nav-{0}' class='nav-link' href='#{0}'>{1}</a>",
            item.target, item.label
        ));
    }
    el.set_inner_html(&html);
    Ok(())
}

fn render_hero(document: &web::Document) -> anyhow::Result<()> {
    let el = container(document, "hero-content")?;
    let roles = HERO_ROLES
        .iter()
        .map(|r| format!("<span class='role'>{r}</span>"))
        .collect::<String>();
    el.set_inner_html(&format!(
        "<p class='greeting'>{HERO_GREETING}</p>\
         <h1>I'm <span class='accent'>{SITE_NAME}</span></h1>\
         <div class='roles'>{roles}</div>\
         <p class='tagline'>{HERO_TAGLINE}</p>\
         <a class='cta' href='#contact'>Get in Touch</a>"
    ));
    Ok(())
}

fn render_about(document: &web::Document) -> anyhow::Result<()> {
    let el = container(document, "about-content")?;
    let mut html = String::from("<div class='highlights'>");
    for h in &HIGHLIGHTS {
        html.push_str(&format!(
            "<div class='card'><h3>{}</h3><p>{}</p></div>",
            h.title, h.blurb
        ));
    }
    html.push_str("</div><div class='stats'>");
    for s in &STATS {
        html.push_str(&format!(
            "<div class='stat'><span class='stat-value'>{}</span>\
             <span class='stat-label'>{}</span><p>{}</p></div>",
            s.value, s.label, s.blurb
        ));
    }
    html.push_str("</div>");
    el.set_inner_html(&html);
    Ok(())
}

fn render_skills(document: &web::Document) -> anyhow::Result<()> {
    let el = container(document, "skills-grid")?;
    let mut html = String::new();
    for category in &SKILL_CATEGORIES {
        html.push_str(&format!(
            "<div class='card skill-category'><h3>{}</h3><p>{}</p>",
            category.title, category.blurb
        ));
        for group in category.groups {
            html.push_str(&format!("<h4>{}</h4><ul class='skills'>", group.title));
            for skill in group.skills {
                html.push_str(&format!(
                    "<li><span>{}</span><span class='level'>{}</span></li>",
                    skill.name,
                    skill.level.label()
                ));
            }
            html.push_str("</ul>");
        }
        html.push_str("</div>");
    }
    el.set_inner_html(&html);
    Ok(())
}

fn render_projects(document: &web::Document) -> anyhow::Result<()> {
    let el = container(document, "projects-grid")?;
    let mut html = String::new();
    for project in &PROJECTS {
        let tags = project
            .tags
            .iter()
            .map(|t| format!("<span class='tag'>{t}</span>"))
            .collect::<String>();
        html.push_str(&format!(
            "<div class='card project'><h3>{}</h3><p>{}</p>\
             <div class='tags'>{tags}</div>\
             <div class='links'><a href='{}'>Live</a><a href='{}'>Code</a></div></div>",
            project.title, project.blurb, project.live_url, project.repo_url
        ));
    }
    el.set_inner_html(&html);
    Ok(())
}

fn render_contact_info(document: &web::Document) -> anyhow::Result<()> {
    let el = container(document, "contact-info")?;
    let mut html = String::from("<h3>Let's Connect</h3>");
    for channel in &CONTACT_CHANNELS {
        let value = match channel.href {
            Some(href) => format!("<a href='{href}'>{}</a>", channel.value),
            None => channel.value.to_string(),
        };
        html.push_str(&format!(
            "<div class='channel'><span class='channel-label'>{}</span>{value}</div>",
            channel.label
        ));
    }
    html.push_str("<div class='social'>");
    for link in &SOCIAL_LINKS {
        html.push_str(&format!(
            "<a href='{}' target='_blank' rel='noopener'>{}</a>",
            link.url, link.label
        ));
    }
    html.push_str("</div>");
    el.set_inner_html(&html);
    Ok(())
}
