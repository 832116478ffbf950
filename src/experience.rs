use folio_core::{Experience, EXPERIENCE};
use yew::prelude::*;

fn timeline_item(index: usize, entry: &Experience) -> Html {
    let side = if index % 2 == 0 { "timeline-left" } else { "timeline-right" };
    html! {
        <div class={classes!("timeline-item", side)} key={entry.id}>
            <div class="timeline-dot">
                if entry.active {
                    <span class="timeline-dot-ping" />
                }
            </div>
            <div class="timeline-card">
                <span class="timeline-period">{ entry.period }</span>
                <h3>{ entry.role }</h3>
                <p class="timeline-company">{ entry.company }</p>
                <p class="muted">{ entry.description }</p>
                <div class="skill-chips">
                    { for entry.skills.iter().map(|skill| html! { <span class="skill-chip" key={*skill}>{ *skill }</span> }) }
                </div>
            </div>
        </div>
    }
}

#[function_component(ExperienceTimeline)]
pub(crate) fn experience_timeline() -> Html {
    html! {
        <section class="experience" id="experience">
            <h2 class="section-title">{ "Experience Timeline" }</h2>
            <p class="muted section-lead">{ "My journey in data science and AI engineering" }</p>
            <div class="timeline">
                <div class="timeline-line" />
                { for EXPERIENCE.iter().enumerate().map(|(index, entry)| timeline_item(index, entry)) }
            </div>
        </section>
    }
}
