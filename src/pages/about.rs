//! About page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"About"</h1>
            <p>"We build short, focused courses that take you from first lesson to finished project."</p>
            <a href="/">"Back to courses"</a>
        </div>
    }
}
