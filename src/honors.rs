use folio_core::{Honor, HONORS};
use yew::prelude::*;

fn honor_card(honor: &Honor) -> Html {
    let media = match honor.image {
        Some(src) => html! { <img src={src} alt={honor.title} loading="lazy" /> },
        None => html! { <span class="honor-placeholder">{ "Award" }</span> },
    };
    html! {
        <article class="honor-card" key={honor.id}>
            <div class="honor-media">
                { media }
                <span class="honor-date">{ honor.date }</span>
            </div>
            <div class="honor-body">
                <h3>{ honor.title }</h3>
                <p class="honor-issuer">{ honor.issuer }</p>
                if let Some(description) = honor.description {
                    <p class="muted">{ description }</p>
                }
            </div>
        </article>
    }
}

#[function_component(HonorsAwards)]
pub(crate) fn honors_awards() -> Html {
    if HONORS.is_empty() {
        return Html::default();
    }
    html! {
        <section class="honors" id="honors">
            <h2 class="section-title">{ "Honors & Awards" }</h2>
            <p class="muted section-lead">
                { "Recognition for academic excellence and competitive achievements" }
            </p>
            <div class="honors-grid">
                { for HONORS.iter().map(honor_card) }
            </div>
        </section>
    }
}
