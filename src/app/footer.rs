use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::content::{mailto_url, profile_url, whatsapp_url};

use super::use_content;

const SOCIAL_LINK: &str = "text-zinc-500 hover:text-white transition-colors text-2xl";

#[component]
pub fn Footer() -> impl IntoView {
    let content = use_content();
    let year = Utc::now().year();

    view! {
        <footer class="bg-zinc-950 border-t border-zinc-900 py-12 px-6 lg:px-24 text-center">
            {move || {
                let data = content.get();
                let contact = data.contact;
                let aria = data.aria_labels;
                view! {
                    <nav aria-label=aria.social_links>
                        <div class="flex justify-center gap-8 mb-8 items-center">
                            <a
                                href=whatsapp_url(contact.phone)
                                target="_blank"
                                rel="noreferrer"
                                class="text-zinc-500 hover:text-[#25D366] transition-colors text-2xl"
                                aria-label=format!("{} {}", aria.open_whats_app, contact.phone)
                            >
                                <span aria-hidden="true">"💬"</span>
                            </a>
                            <a
                                href=profile_url(contact.github)
                                target="_blank"
                                rel="noreferrer"
                                class=SOCIAL_LINK
                                aria-label=aria.open_github
                            >
                                <i class="devicon-github-plain" aria-hidden="true"></i>
                            </a>
                            <a
                                href=profile_url(contact.linkedin)
                                target="_blank"
                                rel="noreferrer"
                                class=SOCIAL_LINK
                                aria-label=aria.open_linked_in
                            >
                                <i class="devicon-linkedin-plain" aria-hidden="true"></i>
                            </a>
                            <a
                                href=mailto_url(contact.email)
                                class=SOCIAL_LINK
                                aria-label=format!("{} {}", aria.send_email, contact.email)
                            >
                                <span aria-hidden="true">"✉"</span>
                            </a>
                        </div>
                    </nav>
                    <p class="text-zinc-600 text-sm">
                        {format!("© {year} {}. {}", data.name, data.ui.rights_reserved)}
                    </p>
                }
            }}
        </footer>
    }
}
