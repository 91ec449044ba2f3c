//! Marketing landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Learn new skills online"</h1>
            <p class="home-page__lead">"Practical courses taught by working professionals."</p>
            <nav class="home-page__courses">
                <a class="home-page__course-link" href="/courses/english">"English"</a>
                <a class="home-page__course-link" href="/courses/video-editing">"Video Editing"</a>
            </nav>
            <a class="home-page__about" href="/about">"About us"</a>
        </div>
    }
}
