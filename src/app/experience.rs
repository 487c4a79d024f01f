use leptos::{ev::KeyboardEvent, html, prelude::*};

use crate::content::ExperienceItem;
use crate::unlock::{Activation, CardVisibility, UnlockState, FOCUS_DELAY};

use super::use_content;

#[component]
pub fn Experience() -> impl IntoView {
    let content = use_content();

    view! {
        <section id="experience" class="px-6 lg:px-24 relative" aria-labelledby="experience-title">
            <h3 id="experience-title" class="text-3xl font-bold text-white mb-8 flex items-center gap-3">
                <span class="w-12 h-1 bg-brand-orange rounded-full" aria-hidden="true"></span>
                {move || content.get().ui.experience}
            </h3>
            <div
                class="relative border-l-2 border-zinc-800 ml-4 md:ml-10 space-y-16"
                role="list"
                aria-label=move || content.get().aria_labels.experience_timeline
                aria-live="polite"
            >
                // keyed by position so an unlocked card survives a language switch
                <For
                    each=move || 0..content.get().experience.len()
                    key=|index| *index
                    children=move |index| view! { <ExperienceCard index /> }
                />
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(index: usize) -> impl IntoView {
    let content = use_content();
    let job = Memo::new(move |_| content.get().experience.get(index).copied());
    let state = RwSignal::new(UnlockState::default());
    let visibility = Memo::new(move |_| {
        CardVisibility::of(job.get().is_some_and(|j| j.is_locked), state.get())
    });
    let details_ref = NodeRef::<html::Div>::new();

    let focus_timer = StoredValue::new(None::<TimeoutHandle>);
    on_cleanup(move || {
        if let Some(handle) = focus_timer.try_get_value().flatten() {
            handle.clear();
        }
    });

    let reveal = move |how: Activation| {
        if !state.try_update(UnlockState::reveal).unwrap_or(false) {
            return;
        }
        log::debug!("experience {index} unlocked via {how:?}");
        let timer = set_timeout_with_handle(
            move || {
                if let Some(el) = details_ref.get_untracked() {
                    let _ = el.focus();
                }
            },
            FOCUS_DELAY,
        );
        if let Ok(handle) = timer {
            focus_timer.set_value(Some(handle));
        }
    };

    view! {
        <article class="relative pl-8 md:pl-16" role="listitem">
            <span
                class="absolute -left-[9px] top-0 w-4 h-4 rounded-full bg-zinc-900 border-2 border-brand-orange shadow-[0_0_10px_rgba(249,115,22,0.5)]"
                aria-hidden="true"
            />
            <div class="bg-brand-surface/50 backdrop-blur-sm p-6 md:p-8 rounded-2xl border border-zinc-800 hover:border-zinc-700 transition-all group relative">
                <Show when=move || visibility.get().show_unlock_control>
                    <div class="absolute inset-0 flex items-center justify-center z-10 bg-zinc-900/80 backdrop-blur-sm rounded-2xl">
                        <div class="flex flex-col items-center gap-4 p-6">
                            <p class="text-brand-muted text-center text-sm md:text-base">
                                {move || content.get().ui.locked_notice}
                            </p>
                            <button
                                type="button"
                                class="flex items-center gap-2 text-brand-orange cursor-pointer hover:text-orange-400 transition-colors bg-transparent border border-brand-orange px-4 py-2 rounded-lg hover:bg-brand-orange/10"
                                aria-label=move || content.get().aria_labels.unlock_experiences
                                on:click=move |_| reveal(Activation::Pointer)
                                on:keydown=move |ev: KeyboardEvent| {
                                    if let Some(how) = Activation::from_key(&ev.key()) {
                                        // keeps the browser from firing a second click
                                        ev.prevent_default();
                                        reveal(how);
                                    }
                                }
                            >
                                <span aria-hidden="true">"🔓"</span>
                                <span class="text-sm font-medium">
                                    {move || content.get().ui.unlock}
                                </span>
                            </button>
                        </div>
                    </div>
                </Show>
                <div
                    node_ref=details_ref
                    tabindex="-1"
                    class=move || {
                        if visibility.get().obscured {
                            "transition-all outline-none blur-sm select-none pointer-events-none"
                        } else {
                            "transition-all outline-none"
                        }
                    }
                    aria-hidden=move || visibility.get().obscured.then_some("true")
                    inert=move || visibility.get().obscured
                >
                    {move || job.get().map(|job| view! { <CardDetails job /> })}
                </div>
            </div>
        </article>
    }
}

#[component]
fn CardDetails(job: ExperienceItem) -> impl IntoView {
    let content = use_content();

    view! {
        <div class="flex flex-col md:flex-row md:items-center justify-between mb-4 gap-2">
            <div>
                <h4 class="text-xl md:text-2xl font-bold text-white group-hover:text-brand-orange transition-colors flex gap-2 items-center">
                    {job.is_locked.then(|| view! { <span aria-hidden="true">"🔓"</span> })}
                    {job.role}
                </h4>
                <div class="flex items-center gap-2 text-brand-orange font-semibold mt-1">
                    <span aria-hidden="true">"💼"</span>
                    <span>{job.company}</span>
                </div>
                <div class="text-sm text-zinc-500 mt-1">{job.location}</div>
            </div>
            <div class="flex items-center gap-2 text-zinc-500 font-mono text-sm bg-zinc-900/50 px-3 py-1 rounded-md border border-zinc-800">
                <span aria-hidden="true">"📅"</span>
                <time datetime=job.period>{job.period}</time>
            </div>
        </div>
        <div class="space-y-4 mb-6">
            {job
                .summary
                .iter()
                .map(|item| view! { <p class="text-brand-muted leading-relaxed">{*item}</p> })
                .collect_view()}
        </div>
        <div
            class="flex flex-wrap gap-2 mt-6 pt-6 border-t border-zinc-800"
            role="list"
            aria-label=move || content.get().aria_labels.technologies_used
        >
            {job
                .tech_stack
                .iter()
                .map(|tech| {
                    view! {
                        <span
                            class="text-xs font-mono text-zinc-300 bg-zinc-800 px-3 py-1 rounded-full border border-zinc-700"
                            role="listitem"
                        >
                            {*tech}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
