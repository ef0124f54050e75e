//! The navigation bar shown on every page behind the login screen.

use maud::{Markup, html};

use crate::endpoints;

/// Render the navigation bar.
///
/// `username` is the signed-in user from the session cookie, shown next to
/// the logout link when present.
pub fn nav_bar(username: Option<&str>) -> Markup {
    html!(
        nav class="bg-white border-gray-200 dark:bg-gray-900"
        {
            div
                class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4"
            {
                a
                    href=(endpoints::ACCOUNTS_VIEW)
                    class="self-center text-2xl font-semibold whitespace-nowrap dark:text-white"
                {
                    "Banquier"
                }

                div class="flex items-center gap-4"
                {
                    @if let Some(username) = username {
                        span class="text-sm text-gray-500 dark:text-gray-400" { (username) }
                    }

                    a
                        href=(endpoints::LOG_OUT)
                        class="text-sm text-blue-600 hover:text-blue-500 dark:text-blue-500
                            dark:hover:text-blue-400 underline"
                    {
                        "Se déconnecter"
                    }
                }
            }
        }
    )
}
