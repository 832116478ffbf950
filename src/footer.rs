use folio_core::content::copyright_line;
use folio_core::{SocialLink, SOCIAL_LINKS};
use yew::prelude::*;

fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "github" => "\u{2387}",
        "linkedin" => "in",
        "mail" => "\u{2709}",
        _ => "\u{2197}",
    }
}

fn social_link(link: &SocialLink) -> Html {
    let target = link.opens_new_tab().then_some("_blank");
    html! {
        <a
            key={link.name}
            class="social-link"
            href={link.url}
            target={target}
            rel="noopener noreferrer"
            aria-label={link.name}
            title={link.name}
        >
            { icon_glyph(link.icon) }
        </a>
    }
}

#[function_component(Footer)]
pub(crate) fn footer() -> Html {
    html! {
        <footer class="footer" id="contact">
            <h2 class="section-title">{ "Let's Connect" }</h2>
            <p class="muted">{ "Ready to discuss your next AI project?" }</p>
            <nav class="social-links">
                { for SOCIAL_LINKS.iter().map(social_link) }
            </nav>
            <p class="muted footer-signature">{ copyright_line() }</p>
        </footer>
    }
}
