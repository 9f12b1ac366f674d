#![cfg(feature = "ssr")]

use app::content::{Content, EducationEntry, Project};
use app::pages::portfolio::Portfolio;
use leptos::prelude::*;

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn render(content: Content) -> String {
    Owner::new().with(|| view! { <Portfolio content=content /> }.to_html())
}

fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| {
            html.find(needle)
                .unwrap_or_else(|| panic!("{needle:?} not found in the page"))
        })
        .collect()
}

fn assert_increasing(positions: &[usize]) {
    assert!(
        positions.windows(2).all(|pair| pair[0] < pair[1]),
        "out of order: {positions:?}"
    );
}

#[test]
fn sections_are_rendered_in_order() {
    setup();

    let html = render(Content::default());
    assert_eq!(1, html.matches("<header").count());
    assert_eq!(1, html.matches("id=\"about\"").count());
    assert_eq!(1, html.matches("<footer").count());
    assert_increasing(&positions(
        &html,
        &[
            "<header",
            "id=\"about\"",
            "id=\"education\"",
            "id=\"projects\"",
            "<footer",
        ],
    ));
}

#[test]
fn about_has_two_contact_links() {
    setup();

    let html = render(Content::default());
    assert_eq!(2, html.matches("contact-link").count());
    assert!(html.contains("href=\"mailto:angheloaguilera@gmail.com\""));
    assert!(html.contains("href=\"https://wa.me/+584120948781\""));
    assert!(html.contains("+58 412-0948781"));
    assert!(html.contains("rel=\"noopener noreferrer\""));
    assert_increasing(&positions(&html, &["mailto:", "https://wa.me/"]));
}

#[test]
fn builtin_education_and_projects() {
    setup();

    let html = render(Content::default());
    assert_eq!(2, html.matches("education-item").count());
    assert_eq!(3, html.matches("project-card").count());
    assert_increasing(&positions(
        &html,
        &["U.E Colegio Juan Griego", "Universidad de Oriente"],
    ));
    assert_increasing(&positions(
        &html,
        &["Sistema de envíos", "TaskApp", "Sistema de Inscripciones Ficticio"],
    ));
}

#[test]
fn profile_image_starts_visible() {
    setup();

    let html = render(Content::default());
    assert!(html.contains("src=\"/Anghelo.png\""));
    assert!(html.contains("data-state=\"image-visible\""));
    assert!(html.contains("Foto aquí"));
    assert_eq!(1, html.matches("display:block;").count());
    assert_eq!(1, html.matches("display:none;").count());
}

#[test]
fn permuted_content_is_rendered_permuted() {
    setup();

    let mut content = Content::default();
    content.projects.reverse();
    content.education.reverse();
    let html = render(content);
    assert_increasing(&positions(
        &html,
        &["Sistema de Inscripciones Ficticio", "TaskApp", "Sistema de envíos"],
    ));
    assert_increasing(&positions(
        &html,
        &["Universidad de Oriente", "U.E Colegio Juan Griego"],
    ));
}

#[test]
fn lists_are_not_limited_to_the_builtin_sizes() {
    setup();

    let mut content = Content::default();
    content.education = vec![EducationEntry {
        institution: String::from("Instituto"),
        degree: String::from("Técnico"),
        period: String::from("2020"),
        description: String::new(),
    }];
    content.projects = (1..=5)
        .map(|n| Project {
            title: format!("Proyecto {n}"),
            description: format!("Descripción {n}"),
        })
        .collect();
    let html = render(content);
    assert_eq!(1, html.matches("education-item").count());
    assert_eq!(5, html.matches("project-card").count());
    assert_increasing(&positions(
        &html,
        &["Proyecto 1", "Proyecto 2", "Proyecto 3", "Proyecto 4", "Proyecto 5"],
    ));
}

#[test]
fn empty_lists_render_empty_sections() {
    setup();

    let mut content = Content::default();
    content.education.clear();
    content.projects.clear();
    let html = render(content);
    assert_eq!(0, html.matches("education-item").count());
    assert_eq!(0, html.matches("project-card").count());
    assert!(html.contains("Formación Académica"));
    assert!(html.contains("Mis Proyectos"));
}

#[test]
fn rendering_is_idempotent() {
    setup();

    assert_eq!(render(Content::default()), render(Content::default()));
}
