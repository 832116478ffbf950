use folio_core::{CV_URL, FOCUS, HEADLINE, HERO_PHRASES, HERO_TYPEWRITER, OWNER_NAME, TAGLINE, WELCOME};
use yew::prelude::*;

use crate::typewriter_runtime::use_typewriter;

const PROJECTS_SECTION: &str = "projects";
const HERO_BADGES: [&str; 3] = ["Deep Learning", "System Design", "High Performance"];

pub(crate) fn scroll_to_section(id: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    match document.get_element_by_id(id) {
        Some(section) => section.scroll_into_view(),
        None => gloo::console::warn!("scroll target missing", id.to_string()),
    }
}

pub(crate) fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.open_with_url_and_target(url, "_blank") {
        gloo::console::warn!("failed to open link", err);
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct TypewriterLineProps {
    pub(crate) text: AttrValue,
    #[prop_or_default]
    pub(crate) complete: bool,
}

#[function_component(TypewriterLine)]
pub(crate) fn typewriter_line(props: &TypewriterLineProps) -> Html {
    let cursor_class = if props.complete {
        "typewriter-cursor typewriter-cursor-idle"
    } else {
        "typewriter-cursor"
    };
    html! {
        <span class="typewriter">
            <span class="typewriter-text">{ props.text.clone() }</span>
            <span class={cursor_class} aria-hidden="true" />
        </span>
    }
}

#[function_component(Hero)]
pub(crate) fn hero() -> Html {
    let typewriter = use_typewriter(HERO_PHRASES, HERO_TYPEWRITER);
    let view = typewriter.view.clone();

    let on_replay = {
        let reset = typewriter.reset.clone();
        let complete = view.is_complete;
        Callback::from(move |_: MouseEvent| {
            if complete {
                reset.emit(());
            }
        })
    };
    let on_view_projects = Callback::from(|_: MouseEvent| scroll_to_section(PROJECTS_SECTION));
    let download_cv = CV_URL.map(|url| {
        let onclick = Callback::from(move |_: MouseEvent| open_in_new_tab(url));
        html! {
            <button class="hero-cta hero-cta-secondary" {onclick}>{ "Download CV" }</button>
        }
    });

    html! {
        <section class="hero" id="hero">
            <h1 class="hero-name">{ OWNER_NAME.to_uppercase() }</h1>
            <div class="hero-welcome">
                <p class="hero-welcome-title">{ WELCOME }</p>
                <p class="muted">{ FOCUS }</p>
            </div>
            <div class="hero-badges">
                { for HERO_BADGES.iter().map(|badge| html! { <span class="hero-badge" key={*badge}>{ *badge }</span> }) }
            </div>
            <div class="hero-role">
                <p class="hero-headline">{ HEADLINE }</p>
                <p class="muted">{ TAGLINE }</p>
            </div>
            <div class="hero-typewriter" title="Replay" onclick={on_replay}>
                { "\u{201c}" }
                <TypewriterLine text={AttrValue::from(view.display_text)} complete={view.is_complete} />
                { "\u{201d}" }
            </div>
            <div class="hero-actions">
                <button class="hero-cta" onclick={on_view_projects.clone()}>{ "View Projects" }</button>
                { download_cv.unwrap_or_default() }
            </div>
            <button class="hero-scroll" aria-label="Scroll to projects" onclick={on_view_projects}>
                { "\u{2304}" }
            </button>
        </section>
    }
}
