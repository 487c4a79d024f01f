mod education;
mod experience;
mod footer;
mod hero;
mod navbar;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::structured_data;
use crate::i18n::{LanguageSelector, ResolvedContent};

use education::Education;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use skills::SkillsGrid;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="bg-brand-dark">
                <App />
            </body>
        </html>
    }
}

/// Content for the active language, provided by [`App`].
pub fn use_content() -> ResolvedContent {
    expect_context::<ResolvedContent>()
}

#[cfg(feature = "ssr")]
fn preferred_locales() -> Vec<String> {
    use crate::i18n::parse_accept_language;

    use_context::<http::request::Parts>()
        .and_then(|parts| {
            parts
                .headers
                .get(http::header::ACCEPT_LANGUAGE)?
                .to_str()
                .ok()
                .map(parse_accept_language)
        })
        .unwrap_or_default()
}

#[cfg(not(feature = "ssr"))]
fn preferred_locales() -> Vec<String> {
    leptos_use::use_locales().get_untracked()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let selector = LanguageSelector::from_locales(preferred_locales());
    let content = ResolvedContent::new(selector);
    provide_context(content);

    let name = content.get_untracked().name;

    view! {
        <Html attr:lang=move || selector.current().code() />
        <Title formatter=move |title| format!("{name} - {title}") />
        <Title text=move || content.get().ui.page_title />
        <Meta
            name="description"
            content=move || content.get().summary.first().copied().unwrap_or_default()
        />

        <Router>
            <Routes fallback=move || content.get().ui.not_found>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let content = use_content();

    view! {
        <div class="bg-brand-dark min-h-screen text-brand-light selection:bg-brand-orange selection:text-white max-w-7xl mx-auto">
            <script
                type="application/ld+json"
                inner_html=move || structured_data(content.get()).to_string()
            ></script>
            <a
                href="#main-content"
                class="sr-only focus:not-sr-only focus:absolute focus:top-4 focus:left-4 focus:z-50 focus:px-4 focus:py-2 focus:bg-brand-orange focus:text-white focus:rounded-md focus:font-bold"
            >
                {move || content.get().aria_labels.skip_to_content}
            </a>
            <Navbar />
            <main id="main-content" tabindex="-1">
                <Hero />
                <Experience />
                <SkillsGrid />
                <Education />
            </main>
            <Footer />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::{whatsapp_url, ResumeData, DATA_EN, DATA_PT};
    use crate::i18n::Language;

    const TIMELINE_CARD: &str = r#"<article class="relative pl-8 md:pl-16""#;
    const UNLOCK_CONTROL: &str = r#"<span class="text-sm font-medium">"#;

    fn render_home(language: Language) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(ResolvedContent::new(LanguageSelector::new(language)));
            view! { <HomePage /> }.to_html()
        })
    }

    fn assert_timeline(html: &str, data: &ResumeData) {
        let locked = data.experience.iter().filter(|e| e.is_locked).count();
        assert_eq!(html.matches(TIMELINE_CARD).count(), data.experience.len());
        assert_eq!(html.matches(r#"aria-hidden="true" inert"#).count(), locked);
        assert_eq!(html.matches(UNLOCK_CONTROL).count(), locked);
        assert!(html.contains(data.ui.unlock));
    }

    #[test]
    fn test_home_hides_only_the_locked_entry() {
        let html = render_home(Language::Pt);
        assert_timeline(&html, &DATA_PT);

        // the overlay sits right before the obscured details
        let details = html.find(r#"aria-hidden="true" inert"#).unwrap();
        let control = html.find(UNLOCK_CONTROL).unwrap();
        assert!(control < details);
    }

    #[test]
    fn test_home_renders_active_language() {
        let html = render_home(Language::En);
        assert_timeline(&html, &DATA_EN);
        assert!(html.contains(DATA_EN.ui.experience));
        assert!(!html.contains(DATA_PT.ui.unlock));
    }

    #[test]
    fn test_home_links_contact_channels() {
        let html = render_home(Language::Pt);
        assert!(html.contains(&whatsapp_url(DATA_PT.contact.phone)));
        assert!(html.contains(&format!("mailto:{}", DATA_PT.contact.email)));
        assert!(html.contains(r#"type="application/ld+json""#));
        assert!(html.contains(r##"href="#main-content""##));
    }
}
