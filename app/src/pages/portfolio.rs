use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::{EducationItem, Footer, Header, ProfileImage, ProjectCard, SectionHeading};
use crate::content::{Contact, Content, Headings, Profile};

#[component]
pub fn Index() -> impl IntoView {
    // On the server the content comes from the context set up at startup, the
    // hydrating client gets the serialized value and never runs the fetcher.
    let provided = use_context::<Content>();
    let content = Resource::new_blocking(
        || (),
        move |_| {
            let provided = provided.clone();
            async move { provided.unwrap_or_default() }
        },
    );

    view! {
        <Suspense fallback=|| view! { <p>{"Loading…"}</p> }>
            {move || Suspend::new(async move {
                let content = content.await;
                view! {
                    <Title text=content.title.clone() />
                    <Meta name="description" content=content.description.clone() />
                    <Portfolio content=content />
                }
            })}
        </Suspense>
    }
}

/// The whole page, rendered from `content` in its given order.
#[component]
pub fn Portfolio(content: Content) -> impl IntoView {
    let Content {
        profile,
        contact,
        headings,
        education,
        projects,
        footer,
        ..
    } = content;

    view! {
        <div class="portfolio min-h-screen bg-gradient-to-br from-gray-50 to-indigo-50 font-sans">
            <Header name=profile.name.clone() headline=profile.headline.clone() />

            <main class="container mx-auto px-4 py-16">
                <About profile=profile contact=contact headings=headings.clone() />

                <section id="education" class="mb-20">
                    <SectionHeading text=headings.education />
                    <div class="max-w-4xl mx-auto p-6 bg-white rounded-2xl shadow-inner">
                        {education
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <EducationItem
                                        institution=entry.institution
                                        degree=entry.degree
                                        period=entry.period
                                        description=entry.description
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section id="projects">
                    <SectionHeading text=headings.projects />
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {projects
                            .into_iter()
                            .map(|project| {
                                view! {
                                    <ProjectCard title=project.title description=project.description />
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </main>

            <Footer copyright=footer.copyright credits=footer.credits />
        </div>
    }
}

#[component]
fn About(profile: Profile, contact: Contact, headings: Headings) -> impl IntoView {
    let mailto = contact.mailto_href();
    let messaging = contact.messaging_href();

    view! {
        <section id="about" class="mb-20">
            <div class="flex flex-col md:flex-row items-center gap-12">
                <div class="w-full md:w-2/5 flex justify-center">
                    <ProfileImage
                        src=profile.photo.src
                        alt=profile.photo.alt
                        fallback_label=profile.photo.fallback_label
                    />
                </div>

                <div class="w-full md:w-3/5">
                    <div class="bg-white rounded-3xl p-10 shadow-3xl border border-gray-200">
                        <h2 class="text-3xl font-extrabold text-gray-900 mb-6 flex items-center">
                            {headings.about}
                        </h2>
                        <p class="text-gray-700 mb-8 leading-relaxed text-lg border-l-4 border-indigo-200 pl-4 italic">
                            {profile.about}
                        </p>

                        <h3 class="text-2xl font-bold text-gray-900 mb-4 pt-4 border-t border-gray-100 flex items-center">
                            {headings.contact}
                        </h3>
                        <div class="flex flex-wrap gap-4">
                            <a
                                href=mailto
                                class="contact-link flex items-center text-gray-700 hover:text-white transition-all duration-300 bg-indigo-50 hover:bg-indigo-600 p-3 rounded-xl font-semibold shadow-md"
                            >
                                <svg class="w-5 h-5 mr-2" fill="currentColor" viewBox="0 0 20 20">
                                    <path d="M2.003 5.884L10 9.882l7.997-3.998A2 2 0 0016 4H4a2 2 0 00-1.997 1.884z" />
                                    <path d="M18 8.118l-8 4-8-4V14a2 2 0 002 2h12a2 2 0 002-2V8.118z" />
                                </svg>
                                {contact.email}
                            </a>
                            <a
                                href=messaging
                                target="_blank"
                                rel="noopener noreferrer"
                                class="contact-link flex items-center text-gray-700 hover:text-white transition-all duration-300 bg-indigo-50 hover:bg-indigo-600 p-3 rounded-xl font-semibold shadow-md"
                            >
                                <svg class="w-5 h-5 mr-2" fill="currentColor" viewBox="0 0 20 20">
                                    <path d="M2 3a1 1 0 011-1h2.153a1 1 0 01.986.836l.74 4.435a1 1 0 01-.54 1.06l-1.548.773a11.037 11.037 0 006.105 6.105l.774-1.548a1 1 0 011.059-.54l4.435.74a1 1 0 01.836.986V17a1 1 0 01-1 1h-2C7.82 18 2 12.18 2 5V3z" />
                                </svg>
                                {contact.phone_display}
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
