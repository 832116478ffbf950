use folio_core::content::marquee_items;
use folio_core::TECH_STACK;
use yew::prelude::*;

#[function_component(TechStackMarquee)]
pub(crate) fn tech_stack_marquee() -> Html {
    if TECH_STACK.is_empty() {
        return Html::default();
    }
    // The strip holds the list twice; the CSS animation slides it by half.
    html! {
        <section class="marquee" aria-label="Tech stack">
            <div class="marquee-track">
                { for marquee_items().enumerate().map(|(index, item)| html! {
                    <span
                        key={format!("{}-{index}", item.name)}
                        class={classes!("marquee-item", item.category.as_str())}
                        title={item.name}
                    >
                        { item.name }
                    </span>
                }) }
            </div>
        </section>
    }
}
