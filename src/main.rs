mod about;
mod background;
mod experience;
mod footer;
mod hero;
mod honors;
mod projects;
mod skill_radar;
mod tech_marquee;
mod theme_runtime;
mod theme_toggle;
mod typewriter_runtime;

use std::rc::Rc;

use folio_core::Theme;
use yew::prelude::*;

use crate::about::AboutMe;
use crate::background::AnimatedBackground;
use crate::experience::ExperienceTimeline;
use crate::footer::Footer;
use crate::hero::Hero;
use crate::honors::HonorsAwards;
use crate::projects::FeaturedProjects;
use crate::skill_radar::SkillRadar;
use crate::tech_marquee::TechStackMarquee;
use crate::theme_runtime::ThemeContext;
use crate::theme_toggle::ThemeToggle;

#[function_component(App)]
fn app() -> Html {
    let controller = use_memo((), |_| theme_runtime::browser_controller());
    let theme = use_state(|| controller.theme());
    let ready = use_state(|| controller.is_ready());

    {
        let controller = controller.clone();
        let theme = theme.clone();
        let ready = ready.clone();
        use_effect_with((), move |_| {
            let setter = theme.setter();
            let subscription = controller.subscribe(Rc::new(move |next: Theme| setter.set(next)));
            controller.initialize();
            ready.set(controller.is_ready());
            move || drop(subscription)
        });
    }

    let context = ThemeContext {
        controller,
        theme: *theme,
        ready: *ready,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            <main class="page">
                <AnimatedBackground />
                <div class="theme-toggle-slot">
                    <ThemeToggle />
                </div>
                <div class="page-content">
                    <Hero />
                    <TechStackMarquee />
                    <AboutMe />
                    <FeaturedProjects />
                    <SkillRadar />
                    <ExperienceTimeline />
                    <HonorsAwards />
                    <Footer />
                </div>
            </main>
        </ContextProvider<ThemeContext>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
