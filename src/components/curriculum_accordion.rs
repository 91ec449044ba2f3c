//! Accordion over a static course curriculum.

use leptos::prelude::*;

use crate::content::CurriculumModule;
use crate::state::curriculum::CurriculumState;

/// Controlled-expansion list of curriculum modules; the first module starts open.
#[component]
pub fn CurriculumAccordion(modules: &'static [CurriculumModule]) -> impl IntoView {
    let state = RwSignal::new(CurriculumState::opened(0));

    view! {
        <div class="curriculum">
            {modules
                .iter()
                .enumerate()
                .map(|(index, module)| {
                    let expanded = move || state.get().is_expanded(index);
                    view! {
                        <section class="curriculum__module" class:curriculum__module--open=expanded>
                            <button
                                class="curriculum__header"
                                type="button"
                                aria-expanded=move || expanded().to_string()
                                on:click=move |_| state.update(|s| s.toggle(index))
                            >
                                <span class="curriculum__title">{module.title}</span>
                                <span class="curriculum__count">{format!("{} lessons", module.lessons.len())}</span>
                            </button>
                            <Show when=expanded>
                                <ul class="curriculum__lessons">
                                    {module
                                        .lessons
                                        .iter()
                                        .map(|lesson| view! { <li class="curriculum__lesson">{*lesson}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </Show>
                        </section>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
