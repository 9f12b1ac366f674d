use anyhow::Context as _;
use leptos::prelude::*;

use app::content::Content;

/// Optional path to a YAML document replacing the built-in page content.
const CONTENT_PATH_ENV: &str = "PORTFOLIO_CONTENT_PATH";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use leptos_axum::{generate_route_list, LeptosRoutes};

    env_logger::init();

    let conf = get_configuration(None).context("Could not read the leptos configuration")?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;

    let content_path = std::env::var_os(CONTENT_PATH_ENV).map(std::path::PathBuf::from);
    let content = Content::load(content_path.as_deref())
        .with_context(|| format!("Could not load the page content (set by {CONTENT_PATH_ENV})"))?;

    let ctx = app::context::Context {
        leptos_options: leptos_options.clone(),
        content,
    };
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(app::App);
    let ctx_fn = {
        let ctx = ctx.clone();
        move || provide_context(ctx.content.clone())
    };
    let app_fn = {
        let ctx = ctx.clone();
        move || app::shell(ctx.leptos_options.clone())
    };

    let app = axum::Router::new()
        .leptos_routes_with_context(&ctx, routes, ctx_fn, app_fn)
        // Serves the profile photo, the stylesheet and the wasm bundle from the site root.
        .fallback(leptos_axum::file_and_error_handler::<app::context::Context, _>(app::shell))
        .with_state(ctx);

    log::info!("listening in {:?} on http://{}", &leptos_options.env, &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Could not bind {addr}"))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}
