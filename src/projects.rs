use folio_core::content::project;
use folio_core::{Project, Stat, PROJECTS};
use yew::prelude::*;

/// Card accent class and glyph, cycled by position.
const CARD_SCHEMES: [(&str, &str); 3] = [
    ("accent-pink", "\u{1f3ac}"),
    ("accent-blue", "\u{1f4c8}"),
    ("accent-purple", "\u{1f3af}"),
];

pub(crate) fn card_scheme(index: usize) -> (&'static str, &'static str) {
    CARD_SCHEMES[index % CARD_SCHEMES.len()]
}

#[derive(Properties, PartialEq)]
pub(crate) struct ProjectCardProps {
    pub(crate) project: &'static Project,
    pub(crate) index: usize,
    pub(crate) on_select: Callback<&'static str>,
}

#[function_component(ProjectCard)]
pub(crate) fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let (accent, glyph) = card_scheme(props.index);

    let on_card = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(project.id))
    };
    let on_details = {
        let on_select = props.on_select.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_select.emit(project.id);
        })
    };
    let on_code = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <article
            class={classes!("project-card", project.spotlight.then_some("project-card-spotlight"))}
            data-testid="project-card"
            onclick={on_card}
        >
            <div class={classes!("project-icon", accent)}>{ glyph }</div>
            <h3>{ project.title }</h3>
            <p class="muted project-description">{ project.description }</p>
            <div class="project-tags">
                { for project.card_tags().iter().map(|tag| html! { <span class="skill-chip" key={*tag}>{ *tag }</span> }) }
            </div>
            <div class="project-links">
                if let Some(url) = project.code_url() {
                    <a href={url} target="_blank" rel="noopener noreferrer" onclick={on_code}>
                        { "Code" }
                    </a>
                }
                <button class="project-details" onclick={on_details}>{ "Details" }</button>
            </div>
        </article>
    }
}

fn metrics_grid(metrics: &[Stat]) -> Html {
    if metrics.is_empty() {
        return Html::default();
    }
    html! {
        <div class="metrics-grid">
            { for metrics.iter().map(|metric| html! {
                <div class="metric" key={metric.label}>
                    <p class="metric-value">{ metric.value }</p>
                    <p class="metric-label">{ metric.label }</p>
                </div>
            }) }
        </div>
    }
}

fn media_section(project: &Project) -> Html {
    if let Some(video) = project.demo_video {
        return html! {
            <div class="project-media">
                <video src={video} controls={true} poster={project.architecture_image}>
                    { "Your browser does not support the video tag." }
                </video>
            </div>
        };
    }
    match project.architecture_image {
        Some(src) => html! {
            <div class="project-media">
                <img src={src} alt={format!("{} architecture", project.title)} loading="lazy" />
            </div>
        },
        None => html! {
            <div class="project-media project-media-empty">
                <p class="muted">{ "Video demonstration coming soon" }</p>
            </div>
        },
    }
}

fn project_links(project: &Project) -> Html {
    let links = [
        ("View on GitHub", project.code_url()),
        ("Live Demo", project.demo_url),
        ("Full Report", project.report_url),
    ];
    html! {
        <div class="project-modal-links">
            { for links.into_iter().filter_map(|(label, url)| url.map(|url| html! {
                <a class="hero-cta hero-cta-secondary" key={label} href={url} target="_blank" rel="noopener noreferrer">
                    { label }
                </a>
            })) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ProjectModalProps {
    pub(crate) project: Option<&'static Project>,
    pub(crate) on_close: Callback<()>,
}

#[function_component(ProjectModal)]
pub(crate) fn project_modal(props: &ProjectModalProps) -> Html {
    let Some(project) = props.project else {
        return Html::default();
    };
    let close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="project-modal-layer">
            <div class="project-modal-backdrop" onclick={close.clone()} />
            <div class="project-modal" role="dialog" aria-modal="true" aria-label={project.title}>
                <button class="project-modal-close" aria-label="Close modal" onclick={close}>
                    { "\u{2715}" }
                </button>
                <div class="project-modal-grid">
                    <div class="project-modal-column">
                        { media_section(project) }
                        { metrics_grid(project.metrics) }
                        <div>
                            <h4>{ "Tech Stack" }</h4>
                            <div class="skill-chips">
                                { for project.tech_stack.iter().map(|tech| html! { <span class="skill-chip" key={*tech}>{ *tech }</span> }) }
                            </div>
                        </div>
                        { project_links(project) }
                    </div>
                    <div class="project-modal-column">
                        <div class="project-tags">
                            { for project.tags.iter().map(|tag| html! { <span class="project-tag" key={*tag}>{ *tag }</span> }) }
                        </div>
                        <h2>{ project.title }</h2>
                        <p class="muted">{ project.summary() }</p>
                        <div class="project-problem">
                            <h4>{ "The Problem" }</h4>
                            <p class="muted">{ project.problem }</p>
                        </div>
                        <div class="project-solution">
                            <h4>{ "The Solution" }</h4>
                            <p class="muted">{ project.solution }</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(FeaturedProjects)]
pub(crate) fn featured_projects() -> Html {
    let selected = use_state(|| None::<&'static str>);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |id: &'static str| selected.set(Some(id)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };
    let open = (*selected).and_then(project);

    html! {
        <section class="projects" id="projects">
            <h2 class="section-title">{ "Featured Projects" }</h2>
            <p class="muted section-lead">
                { "Interactive gallery showcasing AI/ML projects that push the boundaries of what's possible" }
            </p>
            <div class="projects-grid">
                { for PROJECTS.iter().enumerate().map(|(index, entry)| html! {
                    <ProjectCard key={entry.id} project={entry} index={index} on_select={on_select.clone()} />
                }) }
            </div>
            <ProjectModal project={open} {on_close} />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_root(id: &str) -> Element {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let root = document.create_element("div").expect("create root");
        root.set_id(id);
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append root");
        root
    }

    fn click(root: &Element, selector: &str) {
        root.query_selector(selector)
            .expect("valid selector")
            .expect("element rendered")
            .dyn_into::<HtmlElement>()
            .expect("html element")
            .click();
    }

    async fn settle() {
        TimeoutFuture::new(20).await;
    }

    #[wasm_bindgen_test]
    fn card_schemes_cycle() {
        assert_eq!(card_scheme(0), card_scheme(3));
        assert_ne!(card_scheme(0), card_scheme(1));
    }

    #[wasm_bindgen_test]
    async fn details_open_and_close_the_modal() {
        let root = mount_root("projects-test-root");
        let _handle = yew::Renderer::<FeaturedProjects>::with_root(root.clone()).render();
        settle().await;

        assert!(root.get_elements_by_class_name("project-card").length() >= 3);
        assert!(root.query_selector(".project-modal").expect("selector").is_none());

        click(&root, ".project-details");
        settle().await;
        let modal = root
            .query_selector(".project-modal")
            .expect("selector")
            .expect("modal open");
        assert_eq!(modal.get_attribute("aria-label").as_deref(), Some(PROJECTS[0].title));

        click(&root, ".project-modal-close");
        settle().await;
        assert!(root.query_selector(".project-modal").expect("selector").is_none());
    }
}
