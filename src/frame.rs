use crate::animation::LoopState;
use crate::canvas::CanvasSurface;
use crate::dom::{self, ResizeListener};
use crate::field::{DoodleField, FieldOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickClosure = Closure<dyn FnMut(f64)>;

/// A doodle field bound to a canvas, animated by `requestAnimationFrame`.
///
/// Each tick renders one full frame and only then requests the next one.
/// `destroy` cancels the outstanding request, detaches the resize listener
/// and leaves the loop inert; calling it again does nothing.
pub struct DoodleLoop {
    field: Rc<RefCell<DoodleField<CanvasSurface>>>,
    state: Rc<RefCell<LoopState>>,
    tick: Rc<RefCell<Option<TickClosure>>>,
    resize: Option<ResizeListener>,
}

impl DoodleLoop {
    pub fn start(canvas_id: &str, options: &FieldOptions) -> anyhow::Result<Self> {
        let surface = CanvasSurface::from_element_id(canvas_id)?;
        let mut rng = options.rng();
        let field = Rc::new(RefCell::new(DoodleField::new(
            surface,
            dom::viewport_size(),
            options.count,
            &mut rng,
        )));

        let field_resize = field.clone();
        let resize = ResizeListener::attach(move |w, h| {
            field_resize.borrow_mut().resize(w, h);
        })?;

        let state = Rc::new(RefCell::new(LoopState::new()));
        let tick: Rc<RefCell<Option<TickClosure>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let state_tick = state.clone();
        let field_tick = field.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
            state_tick.borrow_mut().fire();
            field_tick.borrow_mut().render_frame(timestamp_ms / 1000.0);
            if !state_tick.borrow().should_continue() {
                return;
            }
            if let Some(cb) = tick_clone.borrow().as_ref() {
                request_frame(&state_tick, cb);
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(cb) = tick.borrow().as_ref() {
            request_frame(&state, cb);
        }

        log::info!(
            "[doodles] started {} doodles on #{}",
            field.borrow().doodles().len(),
            canvas_id
        );
        Ok(Self {
            field,
            state,
            tick,
            resize: Some(resize),
        })
    }

    pub fn doodle_count(&self) -> usize {
        self.field.borrow().doodles().len()
    }

    pub fn is_running(&self) -> bool {
        !self.state.borrow().is_cancelled()
    }

    pub fn destroy(&mut self) {
        let pending = self.state.borrow_mut().cancel();
        if let (Some(id), Some(w)) = (pending, web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        if self.resize.take().is_some() {
            log::info!("[doodles] destroyed");
        }
        // breaks the closure's self-reference
        self.tick.borrow_mut().take();
    }
}

impl Drop for DoodleLoop {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn request_frame(state: &RefCell<LoopState>, cb: &TickClosure) {
    let Some(w) = web::window() else {
        return;
    };
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => state.borrow_mut().arm(id),
        Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
    }
}
