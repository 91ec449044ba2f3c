//! Card for one course in the admin course list.

use leptos::prelude::*;

use crate::net::types::Course;

#[component]
pub fn CourseCard(course: Course) -> impl IntoView {
    let author = course.author_label().to_owned();
    let price = course.price_label();

    view! {
        <article class="course-card" class:course-card--paid=course.is_paid>
            <h3 class="course-card__title">{course.title}</h3>
            <p class="course-card__description">{course.description}</p>
            <div class="course-card__meta">
                <span class="course-card__price">{price}</span>
                <span class="course-card__author">"By " {author}</span>
            </div>
        </article>
    }
}
