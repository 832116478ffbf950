use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{Typewriter, TypewriterConfig};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct TypewriterView {
    pub(crate) display_text: String,
    pub(crate) is_complete: bool,
    pub(crate) is_typing: bool,
}

impl TypewriterView {
    fn of(machine: &Typewriter) -> Self {
        Self {
            display_text: machine.display_text().to_string(),
            is_complete: machine.is_complete(),
            is_typing: machine.is_typing(),
        }
    }
}

/// Owns the single pending timer of a [`Typewriter`]. Scheduling always
/// replaces the slot, and dropping a `Timeout` clears it, so two timers
/// never race on the same text.
pub(crate) struct TypewriterDriver {
    machine: RefCell<Typewriter>,
    timer: RefCell<Option<Timeout>>,
    on_change: Rc<dyn Fn(TypewriterView)>,
}

impl TypewriterDriver {
    pub(crate) fn new(machine: Typewriter, on_change: Rc<dyn Fn(TypewriterView)>) -> Rc<Self> {
        Rc::new(Self {
            machine: RefCell::new(machine),
            timer: RefCell::new(None),
            on_change,
        })
    }

    pub(crate) fn start(self: &Rc<Self>) {
        self.publish();
        self.schedule();
    }

    pub(crate) fn reset(self: &Rc<Self>) {
        self.timer.borrow_mut().take();
        self.machine.borrow_mut().reset();
        self.start();
    }

    pub(crate) fn stop(&self) {
        self.timer.borrow_mut().take();
    }

    fn publish(&self) {
        let view = TypewriterView::of(&self.machine.borrow());
        (self.on_change)(view);
    }

    fn schedule(self: &Rc<Self>) {
        let delay = self.machine.borrow().next_delay_ms();
        let next = delay.map(|delay| {
            let driver = Rc::clone(self);
            Timeout::new(delay, move || {
                driver.timer.borrow_mut().take();
                driver.machine.borrow_mut().tick();
                driver.publish();
                driver.schedule();
            })
        });
        *self.timer.borrow_mut() = next;
    }
}

#[derive(Clone, PartialEq)]
pub(crate) struct TypewriterHandle {
    pub(crate) view: TypewriterView,
    pub(crate) reset: Callback<()>,
}

#[hook]
pub(crate) fn use_typewriter(
    phrases: &'static [&'static str],
    config: TypewriterConfig,
) -> TypewriterHandle {
    let view = use_state(TypewriterView::default);
    let driver = use_mut_ref(|| None::<Rc<TypewriterDriver>>);

    {
        let view = view.clone();
        let driver = driver.clone();
        use_effect_with((phrases, config), move |(phrases, config)| {
            match Typewriter::new(phrases.iter().copied(), *config) {
                Ok(machine) => {
                    let setter = view.setter();
                    let next = TypewriterDriver::new(
                        machine,
                        Rc::new(move |next: TypewriterView| setter.set(next)),
                    );
                    next.start();
                    *driver.borrow_mut() = Some(next);
                }
                Err(err) => {
                    gloo::console::warn!("typewriter disabled", err.to_string());
                }
            }
            move || {
                if let Some(driver) = driver.borrow_mut().take() {
                    driver.stop();
                }
            }
        });
    }

    let reset = {
        let driver = driver.clone();
        Callback::from(move |_| {
            let current = driver.borrow().clone();
            if let Some(current) = current {
                current.reset();
            }
        })
    };

    TypewriterHandle {
        view: (*view).clone(),
        reset,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const STEP_MS: u32 = 50;

    fn counting_driver(phrases: &[&str]) -> (Rc<TypewriterDriver>, Rc<Cell<usize>>, Rc<RefCell<String>>) {
        let calls = Rc::new(Cell::new(0));
        let last = Rc::new(RefCell::new(String::new()));
        let config = TypewriterConfig {
            typing_ms: STEP_MS,
            deleting_ms: STEP_MS,
            pause_ms: STEP_MS * 10,
        };
        let machine = Typewriter::new(phrases.iter().copied(), config).expect("phrases");
        let on_change = {
            let calls = Rc::clone(&calls);
            let last = Rc::clone(&last);
            Rc::new(move |view: TypewriterView| {
                calls.set(calls.get() + 1);
                *last.borrow_mut() = view.display_text;
            })
        };
        (TypewriterDriver::new(machine, on_change), calls, last)
    }

    #[wasm_bindgen_test]
    async fn stop_cancels_the_pending_timer() {
        let (driver, calls, _) = counting_driver(&["abc"]);
        driver.start();
        assert_eq!(calls.get(), 1);
        assert!(driver.timer.borrow().is_some());

        driver.stop();
        assert!(driver.timer.borrow().is_none());
        TimeoutFuture::new(STEP_MS * 3).await;
        assert_eq!(calls.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn reset_keeps_a_single_pending_timer() {
        let (driver, calls, last) = counting_driver(&["abc"]);
        driver.start();
        driver.reset();
        assert_eq!(calls.get(), 2);
        assert!(driver.timer.borrow().is_some());

        // One step elapses before the next would be due; a leftover timer
        // from `start` would have ticked a second time.
        TimeoutFuture::new(STEP_MS * 3 / 2).await;
        assert_eq!(calls.get(), 3);
        assert_eq!(last.borrow().as_str(), "a");
        driver.stop();
    }

    #[wasm_bindgen_test]
    async fn finished_machine_leaves_no_timer() {
        let (driver, calls, last) = counting_driver(&["a"]);
        driver.start();
        TimeoutFuture::new(STEP_MS * 3).await;
        assert_eq!(last.borrow().as_str(), "a");
        assert!(driver.timer.borrow().is_none());
        assert_eq!(calls.get(), 2);
    }
}
