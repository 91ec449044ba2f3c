//! Course landing pages with their curriculum.

use leptos::prelude::*;

use crate::components::curriculum_accordion::CurriculumAccordion;
use crate::content::{CurriculumModule, ENGLISH_CURRICULUM, VIDEO_EDITING_CURRICULUM};

#[component]
fn CourseLanding(title: &'static str, summary: &'static str, modules: &'static [CurriculumModule]) -> impl IntoView {
    view! {
        <div class="course-page">
            <header class="course-page__header">
                <h1>{title}</h1>
                <p>{summary}</p>
            </header>
            <h2>"Curriculum"</h2>
            <CurriculumAccordion modules=modules/>
        </div>
    }
}

#[component]
pub fn EnglishCoursePage() -> impl IntoView {
    view! {
        <CourseLanding
            title="English Course"
            summary="Speak, write and work in English with confidence."
            modules=ENGLISH_CURRICULUM
        />
    }
}

#[component]
pub fn VideoEditingCoursePage() -> impl IntoView {
    view! {
        <CourseLanding
            title="Video Editing Course"
            summary="Edit, grade and publish video from raw footage to final export."
            modules=VIDEO_EDITING_CURRICULUM
        />
    }
}
