use leptos::prelude::*;

use crate::content::{mailto_url, profile_url, whatsapp_url};

use super::use_content;

const CONTACT_BUTTON: &str = "flex items-center gap-2 px-6 py-3 bg-brand-surface border border-zinc-700 text-white rounded-full font-semibold hover:border-brand-orange hover:text-brand-orange transition-colors";

#[component]
pub fn Hero() -> impl IntoView {
    let content = use_content();

    view! {
        <section
            class="flex flex-col justify-center relative overflow-hidden px-6 lg:px-24 pt-28"
            aria-label=move || content.get().aria_labels.personal_presentation
        >
            <div class="absolute top-0 right-0 -z-10 w-[600px] h-[600px] bg-brand-orange/5 rounded-full blur-[120px]" />
            <div class="absolute bottom-0 left-0 -z-10 w-[400px] h-[400px] bg-purple-900/10 rounded-full blur-[100px]" />
            <div class="z-10">
                <span class="text-brand-orange font-mono tracking-wide text-lg mb-4 block animate-fade-in-up">
                    {move || content.get().ui.greeting}
                </span>
                <h1 class="text-5xl md:text-7xl font-bold text-white mb-6 leading-tight animate-fade-in-up">
                    {move || {
                        content
                            .get()
                            .name
                            .split(' ')
                            .enumerate()
                            .map(|(i, word)| {
                                let class = if i == 0 { "text-white" } else { "text-brand-light" };
                                view! { <span class=class>{word}" "</span> }
                            })
                            .collect_view()
                    }}
                </h1>
                <h2 class="text-2xl md:text-3xl text-brand-muted font-light mb-8 animate-fade-in-up">
                    {move || content.get().role}
                </h2>
                {move || {
                    content
                        .get()
                        .summary
                        .iter()
                        .map(|paragraph| {
                            view! {
                                <p class="text-lg text-brand-muted leading-relaxed mb-10 animate-fade-in-up">
                                    {*paragraph}
                                </p>
                            }
                        })
                        .collect_view()
                }}
                <ContactLinks />
                <div
                    class="flex flex-wrap gap-6 text-sm text-brand-muted font-mono animate-fade-in-up"
                    role="group"
                    aria-label=move || content.get().aria_labels.location
                >
                    <div class="flex items-center gap-2">
                        <span class="text-brand-orange" aria-hidden="true">"📍"</span>
                        <span>{move || content.get().contact.location}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactLinks() -> impl IntoView {
    let content = use_content();

    move || {
        let data = content.get();
        let contact = data.contact;
        let aria = data.aria_labels;
        view! {
            <div
                class="flex flex-wrap gap-4 mb-12 animate-fade-in-up"
                role="group"
                aria-label=aria.contact_links
            >
                <a
                    href=whatsapp_url(contact.phone)
                    target="_blank"
                    rel="noreferrer"
                    class="flex items-center gap-2 px-6 py-3 bg-[#25D366] text-white rounded-full font-semibold hover:bg-[#128C7E] transition-colors shadow-lg shadow-green-900/20"
                    aria-label=format!("{} {}", aria.open_whats_app, contact.phone)
                >
                    <span>"WhatsApp"</span>
                </a>
                <a
                    href=mailto_url(contact.email)
                    class=CONTACT_BUTTON
                    aria-label=format!("{} {}", aria.send_email, contact.email)
                >
                    <span>"Email"</span>
                </a>
                <a
                    href=profile_url(contact.linkedin)
                    target="_blank"
                    rel="noreferrer"
                    class=CONTACT_BUTTON
                    aria-label=aria.open_linked_in
                >
                    <i class="devicon-linkedin-plain" aria-hidden="true"></i>
                    <span>"LinkedIn"</span>
                </a>
                <a
                    href=profile_url(contact.instagram)
                    target="_blank"
                    rel="noreferrer"
                    class=CONTACT_BUTTON
                    aria-label=aria.open_instagram
                >
                    <span>"Instagram"</span>
                </a>
            </div>
        }
    }
}
