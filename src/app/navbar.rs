use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::mailto_url;
use crate::i18n::ResolvedContent;
use crate::nav::{is_scrolled, nav_links, MobileMenu};

use super::use_content;

fn language_label(content: ResolvedContent) -> String {
    let aria = content.get().aria_labels;
    format!(
        "{}. {}: {}",
        aria.change_language,
        aria.current_language,
        content.language().current().code().to_uppercase()
    )
}

#[component]
pub fn Navbar() -> impl IntoView {
    let content = use_content();
    let selector = content.language();
    // listener is removed with the navbar's owner
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get()));
    let menu = RwSignal::new(MobileMenu::default());

    let link_items = move |on_mobile: bool| {
        let data = content.get();
        nav_links(&data.ui)
            .into_iter()
            .map(|link| {
                let label = format!("{} {}", data.aria_labels.navigate_to_section, link.name);
                let class = if on_mobile {
                    "text-zinc-300 hover:text-brand-orange py-2 text-lg"
                } else {
                    "text-sm text-zinc-400 hover:text-brand-orange transition-colors uppercase tracking-wider font-medium"
                };
                view! {
                    <a
                        href=link.href
                        class=class
                        aria-label=label
                        on:click=move |_| {
                            if on_mobile {
                                menu.update(MobileMenu::link_activated);
                            }
                        }
                    >
                        {link.name}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav
            class=move || {
                if scrolled.get() {
                    "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-zinc-950/80 backdrop-blur-md border-b border-zinc-800 py-4"
                } else {
                    "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent py-6"
                }
            }
            aria-label=move || content.get().aria_labels.main_navigation
        >
            <div class="px-6 lg:px-24 flex items-center justify-between">
                <Logo />
                // desktop
                <div class="hidden md:flex items-center gap-8">
                    {move || link_items(false)}
                    <div class="h-5 w-px bg-zinc-800 mx-2" aria-hidden="true" />
                    <button
                        type="button"
                        class="flex cursor-pointer items-center gap-2 text-sm text-zinc-400 hover:text-white transition-colors font-mono"
                        aria-label=move || language_label(content)
                        on:click=move |_| selector.toggle()
                    >
                        <span aria-hidden="true">"🌐"</span>
                        <span>{move || selector.current().code().to_uppercase()}</span>
                    </button>
                    <a
                        href=move || mailto_url(content.get().contact.email)
                        class="px-4 py-2 bg-zinc-100 text-zinc-950 rounded-full text-sm font-bold hover:bg-white transition-colors"
                        aria-label=move || {
                            let data = content.get();
                            format!("{} {}", data.aria_labels.send_email, data.contact.email)
                        }
                    >
                        {move || content.get().ui.get_in_touch}
                    </a>
                </div>
                // mobile
                <div class="flex items-center gap-4 md:hidden">
                    <button
                        type="button"
                        class="text-zinc-400 hover:text-white transition-colors"
                        aria-label=move || language_label(content)
                        on:click=move |_| selector.toggle()
                    >
                        <span class="font-mono font-bold">
                            {move || selector.current().code().to_uppercase()}
                        </span>
                    </button>
                    <button
                        type="button"
                        class="text-white text-2xl"
                        aria-controls="mobile-menu"
                        aria-expanded=move || menu.get().is_open().to_string()
                        aria-label=move || {
                            let aria = content.get().aria_labels;
                            if menu.get().is_open() { aria.close_menu } else { aria.open_menu }
                        }
                        on:click=move |_| menu.update(MobileMenu::toggle)
                    >
                        <span aria-hidden="true">
                            {move || if menu.get().is_open() { "✕" } else { "☰" }}
                        </span>
                    </button>
                </div>
            </div>
            <Show when=move || menu.get().is_open()>
                <nav
                    id="mobile-menu"
                    class="md:hidden absolute top-full left-0 right-0 bg-zinc-950 border-b border-zinc-800 p-6 flex flex-col gap-4"
                    aria-label=move || content.get().aria_labels.mobile_navigation
                >
                    {move || link_items(true)}
                </nav>
            </Show>
        </nav>
    }
}

#[component]
fn Logo() -> impl IntoView {
    let content = use_content();
    let first_name = move || content.get().name.split(' ').next().unwrap_or_default();

    view! {
        <a
            href="#"
            class="text-xl font-bold text-white tracking-tight"
            aria-label=move || content.get().aria_labels.back_to_top
            on:click=move |ev| {
                ev.prevent_default();
                window().scroll_to_with_x_and_y(0.0, 0.0);
            }
        >
            {first_name}
            <span class="text-brand-orange text-4xl mx-1" aria-hidden="true">
                "."
            </span>
        </a>
    }
}
