// Sanity checks over the static site content tables.

use portfolio_core::content::{
    Proficiency, CONTACT_CHANNELS, HERO_ROLES, NAV_ITEMS, PROJECTS, SKILL_CATEGORIES, SOCIAL_LINKS,
};
use portfolio_core::Hsla;

#[test]
fn nav_targets_are_unique_and_named() {
    let mut seen = Vec::new();
    for item in &NAV_ITEMS {
        assert!(!item.label.is_empty());
        assert!(!item.target.is_empty());
        assert!(
            !seen.contains(&item.target),
            "duplicate nav target {}",
            item.target
        );
        seen.push(item.target);
    }
    assert_eq!(seen.first(), Some(&"hero"), "home leads the nav");
    assert_eq!(seen.last(), Some(&"contact"), "contact closes the nav");
}

#[test]
fn every_skill_category_has_content() {
    for category in &SKILL_CATEGORIES {
        assert!(!category.title.is_empty());
        assert!(!category.blurb.is_empty());
        assert!(
            !category.groups.is_empty(),
            "{} has no groups",
            category.title
        );
        for group in category.groups {
            assert!(
                !group.skills.is_empty(),
                "{}/{} has no skills",
                category.title,
                group.title
            );
            for skill in group.skills {
                assert!(!skill.name.is_empty());
                assert!(!skill.level.label().is_empty());
            }
        }
    }
}

#[test]
fn proficiency_labels_are_distinct() {
    let labels = [
        Proficiency::Basics.label(),
        Proficiency::Intermediate.label(),
        Proficiency::Advanced.label(),
    ];
    assert_eq!(labels, ["Basics", "Intermediate", "Advanced"]);
}

#[test]
fn projects_carry_tags_and_links() {
    assert!(!PROJECTS.is_empty());
    for project in &PROJECTS {
        assert!(!project.title.is_empty());
        assert!(!project.blurb.is_empty());
        assert!(!project.tags.is_empty(), "{} has no tags", project.title);
        assert!(!project.live_url.is_empty());
        assert!(!project.repo_url.is_empty());
    }
}

#[test]
fn contact_channels_include_a_mail_link() {
    assert!(CONTACT_CHANNELS
        .iter()
        .any(|c| c.href.is_some_and(|h| h.starts_with("mailto:"))));
    for link in &SOCIAL_LINKS {
        assert!(
            link.url.starts_with("https://"),
            "{} is not an absolute link",
            link.label
        );
    }
}

#[test]
fn hero_roles_are_nonempty() {
    for role in &HERO_ROLES {
        assert!(!role.is_empty());
    }
}

#[test]
fn hsla_css_serializes_in_canvas_form() {
    assert_eq!(
        Hsla::new(220.0, 100.0, 40.0, 0.8).css(),
        "hsla(220, 100%, 40%, 0.8)"
    );
    assert_eq!(
        Hsla::new(220.5, 100.0, 50.0, 0.8).css(),
        "hsla(220.5, 100%, 50%, 0.8)"
    );
}
