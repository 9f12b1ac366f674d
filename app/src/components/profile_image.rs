use leptos::html::Img;
use leptos::prelude::*;

/// What the profile picture frame currently shows.
///
/// `Fallback` is terminal: once the photo failed to load we never retry it,
/// a remount starts over from `Visible`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageState {
    #[default]
    Visible,
    Fallback,
}

impl ImageState {
    pub fn on_load_error(self) -> Self {
        ImageState::Fallback
    }

    fn is_image_visible(self) -> bool {
        self == ImageState::Visible
    }

    fn is_fallback_visible(self) -> bool {
        self == ImageState::Fallback
    }

    pub fn image_display(self) -> &'static str {
        if self.is_image_visible() {
            "block"
        } else {
            "none"
        }
    }

    pub fn fallback_display(self) -> &'static str {
        if self.is_fallback_visible() {
            "flex"
        } else {
            "none"
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImageState::Visible => "image-visible",
            ImageState::Fallback => "fallback-visible",
        }
    }
}

/// Round profile picture, swapped for a placeholder if the photo can't be
/// loaded.
///
/// Both elements are always rendered and only one is displayed. The server
/// rendered photo starts loading before the page is hydrated, so a failure can
/// precede the `error` listener: the effect catches that case by looking at
/// the image once it is hydrated, `on:error` handles everything later.
#[component]
pub fn ProfileImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(into)] fallback_label: String,
    /// Starts at `Visible` when not given.
    #[prop(optional)]
    state: Option<RwSignal<ImageState>>,
) -> impl IntoView {
    let state = state.unwrap_or_else(|| RwSignal::new(ImageState::default()));
    let image = NodeRef::<Img>::new();

    // Only runs in the browser.
    Effect::new(move |_| {
        if let Some(img) = image.get() {
            if img.complete() && img.natural_width() == 0 {
                state.update(|state| *state = state.on_load_error());
            }
        }
    });

    view! {
        <div
            class="profile-image w-80 h-80 bg-gray-100 rounded-full overflow-hidden border-4 border-white shadow-2xl ring-4 ring-indigo-400/50 transition-all duration-500 hover:ring-indigo-600"
            data-state=move || state.get().as_str()
        >
            <img
                node_ref=image
                src=src
                alt=alt
                class="w-full h-full object-cover"
                style:display=move || state.get().image_display()
                on:error=move |_| state.update(|state| *state = state.on_load_error())
            />
            <div
                class="profile-fallback w-full h-full items-center justify-center bg-indigo-100"
                style:display=move || state.get().fallback_display()
            >
                <span class="text-indigo-600 font-semibold">{fallback_label}</span>
            </div>
        </div>
    }
}
