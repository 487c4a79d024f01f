use leptos::prelude::*;

use super::use_content;

#[component]
pub fn Education() -> impl IntoView {
    let content = use_content();

    view! {
        <section id="education" class="py-10 px-6 lg:px-24" aria-labelledby="education-title">
            <h3 id="education-title" class="text-3xl font-bold text-white mb-6 flex items-center gap-3">
                <span class="w-12 h-1 bg-brand-orange rounded-full" aria-hidden="true"></span>
                {move || content.get().ui.education}
            </h3>
            <div
                class="grid grid-cols-1 md:grid-cols-3 gap-6"
                role="list"
                aria-label=move || content.get().aria_labels.education_list
            >
                {move || {
                    content
                        .get()
                        .education
                        .iter()
                        .map(|edu| {
                            view! {
                                <article
                                    class="bg-zinc-900/20 p-6 rounded-xl border border-zinc-800 hover:bg-zinc-900/40 transition-colors"
                                    role="listitem"
                                >
                                    <span class="block text-3xl mb-4" aria-hidden="true">"🎓"</span>
                                    <h4 class="text-lg font-bold text-white mb-1">{edu.degree}</h4>
                                    <p class="text-zinc-400 mb-2">{edu.institution}</p>
                                    <time
                                        class="text-xs font-mono text-zinc-500 uppercase tracking-wider"
                                        datetime=edu.period
                                    >
                                        {edu.period}
                                    </time>
                                </article>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
