use folio_core::{Stat, ABOUT};
use yew::prelude::*;

fn highlight(stat: &Stat) -> Html {
    html! {
        <div class="about-highlight" key={stat.label}>
            <span class="about-highlight-value">{ stat.value }</span>
            <span class="about-highlight-label">{ stat.label }</span>
        </div>
    }
}

#[function_component(AboutMe)]
pub(crate) fn about_me() -> Html {
    let portrait = ABOUT.profile_image.map(|src| {
        html! {
            <div class="about-portrait">
                <img src={src} alt="Profile" loading="lazy" />
            </div>
        }
    });
    let quote = ABOUT.quote.map(|quote| {
        html! {
            <blockquote class="about-quote">{ format!("\u{201c}{quote}\u{201d}") }</blockquote>
        }
    });

    html! {
        <section class="about" id="about">
            { portrait.unwrap_or_default() }
            <div class="about-body">
                <h2 class="section-title">{ ABOUT.headline }</h2>
                <h3 class="about-subtitle">{ ABOUT.subtitle }</h3>
                { for ABOUT.paragraphs.iter().map(|paragraph| html! { <p class="muted">{ *paragraph }</p> }) }
                <div class="about-highlights">
                    { for ABOUT.highlights.iter().map(highlight) }
                </div>
                { quote.unwrap_or_default() }
            </div>
        </section>
    }
}
