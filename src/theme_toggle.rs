use folio_core::Theme;
use yew::prelude::*;

use crate::theme_runtime::ThemeContext;

pub(crate) fn toggle_title(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "Switch to light mode",
        Theme::Light => "Switch to dark mode",
    }
}

pub(crate) fn toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "Toggle light mode",
        Theme::Light => "Toggle dark mode",
    }
}

#[function_component(ThemeToggle)]
pub(crate) fn theme_toggle() -> Html {
    let Some(context) = use_context::<ThemeContext>() else {
        return Html::default();
    };
    if !context.ready {
        return html! {
            <div class="theme-toggle theme-toggle-pending">
                <div class="theme-toggle-pulse" />
            </div>
        };
    }

    let theme = context.theme;
    let onclick = Callback::from(move |_: MouseEvent| context.toggle());
    let icon = if theme.is_dark() { "\u{263e}" } else { "\u{2600}" };
    html! {
        <button
            class="theme-toggle"
            title={toggle_title(theme)}
            aria-label={toggle_label(theme)}
            {onclick}
        >
            <span class={classes!("theme-toggle-icon", theme.as_str())}>{ icon }</span>
        </button>
    }
}
