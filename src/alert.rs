//! Error banners for requests initiated by HTMX.
//!
//! Forms declare `hx-target-error="#alert-container"`; when an endpoint
//! answers with an error status, the fragment built here replaces the
//! container content instead of the form.

use maud::{Markup, html};

/// An error banner with a title and a sentence of detail.
pub fn error_alert(title: &str, details: &str) -> Markup {
    html! {
        div
            id="alert-container"
            class="w-full max-w-md px-4"
            style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
        {
            div
                role="alert"
                class="rounded border border-red-300 bg-red-50 px-4 py-3 text-sm
                    text-red-800 shadow-lg dark:border-red-800 dark:bg-gray-800
                    dark:text-red-400"
            {
                p class="font-semibold" { (title) }
                p { (details) }
            }
        }
    }
}
