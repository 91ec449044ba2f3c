//! Login landing page.
//!
//! The sign-in flow itself is served by the API; this route exists so guards
//! have a destination for unauthenticated users.

use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <p class="login-card__subtitle">"Sign in to continue to your courses."</p>
                <a class="login-button" href="/">"Back to home"</a>
            </div>
        </div>
    }
}
