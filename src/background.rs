use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use folio_core::field::{glow_stops, GLOW_SCALE, LINK_END, LINK_START, LINK_WIDTH};
use folio_core::{FieldOpacity, FieldSurface, Link, Node, ParticleField, Rgb, Theme};
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use js_sys::Math;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::theme_runtime::ThemeContext;

pub(crate) struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub(crate) fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }
}

impl FieldSurface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn draw_link(&mut self, link: &Link) {
        let gradient = self
            .ctx
            .create_linear_gradient(link.from.0, link.from.1, link.to.0, link.to.1);
        let _ = gradient.add_color_stop(0.0, &LINK_START.rgba(link.alpha));
        let _ = gradient.add_color_stop(1.0, &LINK_END.rgba(link.alpha));
        self.ctx.begin_path();
        self.ctx.move_to(link.from.0, link.from.1);
        self.ctx.line_to(link.to.0, link.to.1);
        self.ctx.set_stroke_style_canvas_gradient(&gradient);
        self.ctx.set_line_width(LINK_WIDTH);
        self.ctx.stroke();
    }

    fn draw_node(&mut self, node: &Node, color: Rgb, opacity: f64) {
        let glow_radius = node.radius * GLOW_SCALE;
        if let Ok(gradient) =
            self.ctx
                .create_radial_gradient(node.x, node.y, 0.0, node.x, node.y, glow_radius)
        {
            for (offset, stop) in glow_stops(color, opacity) {
                let _ = gradient.add_color_stop(offset as f32, &stop);
            }
            self.ctx.begin_path();
            let _ = self.ctx.arc(node.x, node.y, glow_radius, 0.0, TAU);
            self.ctx.set_fill_style_canvas_gradient(&gradient);
            self.ctx.fill();
        }

        self.ctx.begin_path();
        let _ = self.ctx.arc(node.x, node.y, node.radius, 0.0, TAU);
        self.ctx.set_fill_style_str(&color.hex());
        self.ctx.fill();
    }
}

/// Self-rescheduling frame loop over one canvas. Dropping the pending
/// frame handle in [`FieldLoop::stop`] is what ends it.
struct FieldLoop {
    canvas: HtmlCanvasElement,
    surface: RefCell<CanvasSurface>,
    field: RefCell<ParticleField>,
    opacity: Cell<FieldOpacity>,
    frame: RefCell<Option<AnimationFrame>>,
    running: Cell<bool>,
}

impl FieldLoop {
    fn start(canvas: HtmlCanvasElement, theme: Theme) -> Option<Rc<Self>> {
        let Some(surface) = CanvasSurface::from_canvas(&canvas) else {
            gloo::console::warn!("background: 2d context unavailable");
            return None;
        };
        let seed = (Math::random() * f64::from(u32::MAX)) as u32;
        let view = Rc::new(Self {
            canvas,
            surface: RefCell::new(surface),
            field: RefCell::new(ParticleField::new(seed)),
            opacity: Cell::new(FieldOpacity::for_theme(theme)),
            frame: RefCell::new(None),
            running: Cell::new(true),
        });
        view.resize();
        view.schedule();
        Some(view)
    }

    fn resize(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
        self.field
            .borrow_mut()
            .resize(f64::from(self.canvas.width()), f64::from(self.canvas.height()));
    }

    fn set_theme(&self, theme: Theme) {
        self.opacity.set(FieldOpacity::for_theme(theme));
    }

    fn schedule(self: &Rc<Self>) {
        if !self.running.get() {
            return;
        }
        let view = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            view.frame.borrow_mut().take();
            view.render_frame();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn render_frame(self: &Rc<Self>) {
        if !self.running.get() {
            return;
        }
        {
            let mut surface = self.surface.borrow_mut();
            self.field
                .borrow_mut()
                .tick(&mut *surface, self.opacity.get());
        }
        self.schedule();
    }

    fn stop(&self) {
        self.running.set(false);
        self.frame.borrow_mut().take();
    }
}

#[function_component(AnimatedBackground)]
pub(crate) fn animated_background() -> Html {
    let theme = use_context::<ThemeContext>()
        .map(|context| context.theme)
        .unwrap_or_default();
    let canvas_ref = use_node_ref();
    let field_loop = use_mut_ref(|| None::<Rc<FieldLoop>>);

    {
        let canvas_ref = canvas_ref.clone();
        let field_loop = field_loop.clone();
        use_effect_with((), move |_| {
            let mut listener = None;
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                if let Some(view) = FieldLoop::start(canvas, theme) {
                    let on_resize = Rc::clone(&view);
                    if let Some(window) = web_sys::window() {
                        listener = Some(EventListener::new(&window, "resize", move |_| {
                            on_resize.resize();
                        }));
                    }
                    *field_loop.borrow_mut() = Some(view);
                }
            }
            move || {
                drop(listener);
                if let Some(view) = field_loop.borrow_mut().take() {
                    view.stop();
                }
            }
        });
    }

    {
        let field_loop = field_loop.clone();
        use_effect_with(theme, move |theme| {
            if let Some(view) = field_loop.borrow().as_ref() {
                view.set_theme(*theme);
            }
            || ()
        });
    }

    let style = format!("background: {};", theme.presentation().canvas_background);
    html! {
        <canvas
            ref={canvas_ref}
            class="animated-background"
            style={style}
            aria-hidden="true"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn canvas() -> HtmlCanvasElement {
        web_sys::window()
            .and_then(|window| window.document())
            .expect("document available")
            .create_element("canvas")
            .expect("create canvas")
            .dyn_into::<HtmlCanvasElement>()
            .expect("canvas element")
    }

    #[wasm_bindgen_test]
    fn start_without_2d_context_does_no_work() {
        let canvas = canvas();
        // A canvas bound to another context kind refuses a 2d one.
        let other = canvas
            .get_context("bitmaprenderer")
            .expect("context lookup");
        assert!(other.is_some());
        assert!(FieldLoop::start(canvas, Theme::Dark).is_none());
    }

    #[wasm_bindgen_test]
    fn stop_clears_the_frame_and_ignores_late_frames() {
        let view = FieldLoop::start(canvas(), Theme::Dark).expect("2d context");
        assert!(view.frame.borrow().is_some());

        view.stop();
        assert!(view.frame.borrow().is_none());

        let before = view.field.borrow().nodes().to_vec();
        view.render_frame();
        assert!(view.frame.borrow().is_none());
        assert_eq!(view.field.borrow().nodes(), before.as_slice());
    }

    #[wasm_bindgen_test]
    fn theme_change_updates_opacity() {
        let view = FieldLoop::start(canvas(), Theme::Dark).expect("2d context");
        view.set_theme(Theme::Light);
        assert_eq!(view.opacity.get(), FieldOpacity::for_theme(Theme::Light));
        view.stop();
    }
}
