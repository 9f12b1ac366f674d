use leptos::prelude::*;

mod profile_image;

pub use profile_image::{ImageState, ProfileImage};

/// One project in the projects grid.
#[component]
pub fn ProjectCard(#[prop(into)] title: String, #[prop(into)] description: String) -> impl IntoView {
    view! {
        <div class="project-card bg-white rounded-xl p-6 shadow-xl border border-gray-100 transition-all duration-500 hover:shadow-indigo-300/50 transform hover:-translate-y-2 cursor-pointer">
            <h3 class="text-xl font-extrabold text-gray-900 mb-3 border-l-4 border-indigo-500 pl-3">
                {title}
            </h3>
            <p class="text-gray-700 leading-relaxed">{description}</p>
        </div>
    }
}

/// One node of the education timeline.
#[component]
pub fn EducationItem(
    #[prop(into)] institution: String,
    #[prop(into)] degree: String,
    #[prop(into)] period: String,
    #[prop(into)] description: String,
) -> impl IntoView {
    view! {
        <div class="education-item relative border-l-4 border-indigo-200 pl-8 mb-8">
            <div class="timeline-dot absolute w-4 h-4 bg-indigo-500 rounded-full -left-2 top-0 border-4 border-gray-50 shadow-md"></div>
            <div class="bg-white p-5 rounded-lg shadow-lg hover:shadow-xl transition-shadow duration-300">
                <div class="flex flex-col md:flex-row md:justify-between md:items-start mb-3">
                    <div>
                        <h3 class="text-xl font-bold text-gray-800">{institution}</h3>
                        <p class="text-lg text-indigo-700 font-medium">{degree}</p>
                    </div>
                    <span class="period-badge bg-indigo-50 text-indigo-600 px-3 py-1 rounded-full text-sm font-semibold mt-2 md:mt-0 border border-indigo-300 whitespace-nowrap">
                        {period}
                    </span>
                </div>
                <p class="text-gray-700 leading-relaxed">{description}</p>
            </div>
        </div>
    }
}

/// Centered section title followed by the accent bar.
#[component]
pub fn SectionHeading(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <h2 class="text-4xl font-extrabold text-gray-800 mb-4 flex justify-center items-center">
                {text}
            </h2>
            <div class="w-24 h-1.5 bg-indigo-500 mx-auto rounded-full"></div>
        </div>
    }
}

#[component]
pub fn Header(#[prop(into)] name: String, #[prop(into)] headline: String) -> impl IntoView {
    view! {
        <header class="portfolio-header py-12 shadow-2xl backdrop-blur-md bg-white/80 top-0 z-10">
            <div class="container mx-auto px-4 text-center">
                <h1 class="text-6xl font-black text-gray-900 mb-2 tracking-tighter">{name}</h1>
                <p class="text-2xl text-indigo-700 font-extrabold uppercase tracking-widest">
                    {headline}
                </p>
            </div>
        </header>
    }
}

#[component]
pub fn Footer(#[prop(into)] copyright: String, #[prop(into)] credits: String) -> impl IntoView {
    view! {
        <footer class="portfolio-footer bg-gray-900 text-white py-8 mt-16 shadow-2xl">
            <div class="container mx-auto px-4 text-center">
                <p class="text-gray-400">{copyright}</p>
                <p class="text-indigo-400 mt-2 text-sm font-medium">{credits}</p>
            </div>
        </footer>
    }
}
