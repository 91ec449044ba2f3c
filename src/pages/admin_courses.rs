//! Admin list of every course.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `AdminRoute`. Fetches the course inventory once on mount;
//! the API still authorizes the request on its side.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::course_card::CourseCard;
use crate::config::ApiConfig;
use crate::state::courses::{CoursesState, CoursesView};

#[component]
pub fn AllCoursesPage() -> impl IntoView {
    let api = expect_context::<ApiConfig>();
    let courses = RwSignal::new(CoursesState::loading());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_courses(&api).await;
        if let Err(e) = &result {
            log::warn!("admin courses: {e}");
        }
        courses.update(|s| s.finish(result));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = api;

    view! {
        <div class="admin-courses-page">
            <h1>"All Courses"</h1>
            {move || {
                let state = courses.get();
                match state.view() {
                    CoursesView::Loading => view! { <p>"Loading..."</p> }.into_any(),
                    CoursesView::Failed => {
                        let message = state.error.unwrap_or_default();
                        view! { <p class="admin-courses-page__error">{message}</p> }.into_any()
                    }
                    CoursesView::Empty => view! { <p>"No courses found."</p> }.into_any(),
                    CoursesView::List => {
                        state
                            .items
                            .into_iter()
                            .map(|course| view! { <CourseCard course=course/> })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
