use axum::extract::FromRef;
use leptos::prelude::LeptosOptions;

use crate::content::Content;

/// Server state: the leptos options and the content every render uses.
///
/// `LeptosOptions: FromRef<Context>` is what `leptos_routes_with_context` and
/// `file_and_error_handler` need.
#[derive(Clone, Debug, FromRef)]
pub struct Context {
    pub leptos_options: LeptosOptions,
    pub content: Content,
}
