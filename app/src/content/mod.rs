//! The literal content of the page.
//!
//! Everything the page displays lives here, apart from markup and styling.
//! The `Default` impls hold the built-in content; a YAML document can replace
//! any of its sections on the server (see [`Content::load`]).

use serde::{Deserialize, Serialize};

cfg_if::cfg_if! {
    if #[cfg(feature = "ssr")] {
        pub mod errors;
        mod file;

        pub use errors::{Error, Result};
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Content {
    pub title: String,
    pub description: String,
    pub profile: Profile,
    pub contact: Contact,
    pub headings: Headings,
    /// Display order, top to bottom.
    pub education: Vec<EducationEntry>,
    /// Display order, left to right then top to bottom.
    pub projects: Vec<Project>,
    pub footer: Footer,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub about: String,
    pub photo: Photo,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Photo {
    pub src: String,
    pub alt: String,
    /// Shown in place of the photo when it fails to load.
    pub fallback_label: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    /// International number, as used in the messaging link.
    pub phone: String,
    pub phone_display: String,
}

impl Contact {
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn messaging_href(&self) -> String {
        format!("https://wa.me/{}", self.phone)
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Headings {
    pub about: String,
    pub contact: String,
    pub education: String,
    pub projects: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    /// Free-form, e.g. "2011 - 2022".
    pub period: String,
    pub description: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Footer {
    pub copyright: String,
    pub credits: String,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            title: String::from("Anghelo Aguilera - Desarrollador Full Stack"),
            description: String::from(
                "Portafolio de Anghelo Aguilera, desarrollador full stack: formación académica y proyectos.",
            ),
            profile: Profile::default(),
            contact: Contact::default(),
            headings: Headings::default(),
            education: vec![
                EducationEntry {
                    institution: String::from("U.E Colegio Juan Griego"),
                    degree: String::from("Bachiller"),
                    period: String::from("2011 - 2022"),
                    description: String::from(
                        "Bachiller en Ciencias de la República Bolivariana de Venezuela.",
                    ),
                },
                EducationEntry {
                    institution: String::from("Universidad de Oriente"),
                    degree: String::from("Licenciado en Informatica"),
                    period: String::from("2022 - Presente"),
                    description: String::from(
                        "Cursando la Licenciatura en Informática en la UDONE.",
                    ),
                },
            ],
            projects: vec![
                Project {
                    title: String::from("Sistema de envíos"),
                    description: String::from(
                        "Una plataforma de envíos completa con sistema de pagos y panel de administración en NextJS.",
                    ),
                },
                Project {
                    title: String::from("TaskApp"),
                    description: String::from(
                        "Aplicación de gestión de tareas con funcionalidades de arrastrar y soltar, categorías y recordatorios con React y Laravel.",
                    ),
                },
                Project {
                    title: String::from("Sistema de Inscripciones Ficticio"),
                    description: String::from(
                        "Aplicación de gestión de Inscripciones con PHP para simular procesos educativos.",
                    ),
                },
            ],
            footer: Footer::default(),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: String::from("Anghelo Aguilera"),
            headline: String::from("Desarrollador Full Stack"),
            about: String::from(
                "Soy un desarrollador apasionado por la tecnología y la creación de soluciones innovadoras. \
                 Con experiencia en desarrollo web full stack, me especializo en crear aplicaciones con React, \
                 Django o Laravel. Siempre buscando nuevos desafíos y oportunidades para crecer profesionalmente.",
            ),
            photo: Photo::default(),
        }
    }
}

impl Default for Photo {
    fn default() -> Self {
        Self {
            src: String::from("/Anghelo.png"),
            alt: String::from("Anghelo Aguilera"),
            fallback_label: String::from("Foto aquí"),
        }
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            email: String::from("angheloaguilera@gmail.com"),
            phone: String::from("+584120948781"),
            phone_display: String::from("+58 412-0948781"),
        }
    }
}

impl Default for Headings {
    fn default() -> Self {
        Self {
            about: String::from("Sobre mí"),
            contact: String::from("Contacto"),
            education: String::from("Formación Académica"),
            projects: String::from("Mis Proyectos"),
        }
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            copyright: String::from("\u{a9} 2025 Anghelo Aguilera. Todos los derechos reservados."),
            credits: String::from("Desarrollado con Rust, Leptos y Tailwind CSS"),
        }
    }
}
