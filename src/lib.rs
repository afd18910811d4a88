mod utils;

pub mod animator;
pub mod color;
pub mod config;
pub mod field;
pub mod frame_loop;
pub mod particle;
pub mod renderer;
pub mod surface;

extern crate nalgebra_glm as glm;

use animator::Animator;
use config::FieldConfig;
use frame_loop::{AnimationFrameScheduler, FrameLoop};
use std::cell::RefCell;
use std::rc::Rc;
use surface::{CanvasSurface, Surface};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// Use `wee_alloc` as the global allocator when the feature is enabled
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Id of the background canvas on the site's pages
pub const DEFAULT_CANVAS_ID: &str = "particles-canvas";

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

// console.time span that ends when dropped. Only active with the
// `frame-timing` feature in the browser.
#[cfg_attr(
    not(all(target_arch = "wasm32", feature = "frame-timing")),
    allow(dead_code)
)]
pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        #[cfg(all(target_arch = "wasm32", feature = "frame-timing"))]
        web_sys::console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        #[cfg(all(target_arch = "wasm32", feature = "frame-timing"))]
        web_sys::console::time_end_with_label(self.name);
    }
}

struct Running {
    animator: Rc<RefCell<Animator<CanvasSurface>>>,
    frame_loop: FrameLoop<AnimationFrameScheduler>,
}

// Handle to the background animation given back to the page. Inactive when
// there was no canvas to draw on.
#[wasm_bindgen]
pub struct ParticleBackground {
    running: Option<Running>,
}

#[wasm_bindgen]
impl ParticleBackground {
    pub fn is_active(&self) -> bool {
        self.running.is_some()
    }

    pub fn is_running(&self) -> bool {
        self.running
            .as_ref()
            .map_or(false, |running| running.frame_loop.is_running())
    }

    pub fn particle_count(&self) -> u32 {
        self.running.as_ref().map_or(0, |running| {
            running.animator.borrow().field().particles().len() as u32
        })
    }

    pub fn resize(&self, width: u32, height: u32) {
        if let Some(running) = &self.running {
            running
                .animator
                .borrow_mut()
                .resize(width as f64, height as f64);
        }
    }

    pub fn cancel(&self) -> Result<(), JsValue> {
        match &self.running {
            Some(running) => running.frame_loop.cancel(),
            None => Ok(()),
        }
    }
}

// Starts the particle background on the canvas with the given id. The canvas
// is kept at the window's inner size and the animation runs until the page
// goes away. A missing canvas isn't an error, the background just stays off.
#[wasm_bindgen]
pub fn start_particles(canvas_id: &str) -> Result<ParticleBackground, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;

    let mut surface = match CanvasSurface::from_element_id(&document, canvas_id)? {
        Some(surface) => surface,
        None => return Ok(ParticleBackground { running: None }),
    };
    let (width, height) = window_size(&window)?;
    surface.set_size(width, height);

    let mut rng = rand::thread_rng();
    let config = FieldConfig::default();
    let animator = Rc::new(RefCell::new(Animator::new(surface, &config, &mut rng)));

    let frame_animator = Rc::clone(&animator);
    let frame_loop = FrameLoop::start(AnimationFrameScheduler::new(window.clone()), move || {
        frame_animator.borrow_mut().frame()
    })?;

    // Only once the loop is up, so a failed start leaves nothing behind
    listen_for_resize(&window, Rc::clone(&animator))?;

    utils::log(&format!(
        "particle background started: {} particles on {}x{}",
        config.particle_count, width, height
    ));

    Ok(ParticleBackground {
        running: Some(Running {
            animator,
            frame_loop,
        }),
    })
}

// Keeps the canvas and the field at the window's inner size. The listener
// lives as long as the page does.
fn listen_for_resize(
    window: &web_sys::Window,
    animator: Rc<RefCell<Animator<CanvasSurface>>>,
) -> Result<(), JsValue> {
    let resize_window = window.clone();
    let on_resize = Closure::wrap(Box::new(move || match window_size(&resize_window) {
        Ok((width, height)) => animator.borrow_mut().resize(width, height),
        Err(err) => utils::log_error("failed to read window size", &err),
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}

fn window_size(window: &web_sys::Window) -> Result<(f64, f64), JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;
    Ok((width, height))
}
