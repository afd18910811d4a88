//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use particle_field_backend::config::FieldConfig;
use particle_field_backend::surface::{CanvasSurface, Surface};
use particle_field_backend::{start_particles, DEFAULT_CANVAS_ID};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

fn add_canvas(id: &str) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn missing_canvas_leaves_background_off() {
    let background = start_particles("no-such-canvas").unwrap();
    assert!(!background.is_active());
    assert!(!background.is_running());
    assert_eq!(background.particle_count(), 0);
    background.cancel().unwrap();
}

#[wasm_bindgen_test]
fn non_canvas_element_is_ignored() {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    div.set_id("not-a-canvas");
    document.body().unwrap().append_child(&div).unwrap();

    let surface = CanvasSurface::from_element_id(&document, "not-a-canvas").unwrap();
    assert!(surface.is_none());
}

#[wasm_bindgen_test]
fn starts_on_window_sized_canvas() {
    let canvas = add_canvas(DEFAULT_CANVAS_ID);
    let window = web_sys::window().unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap() as u32;

    let background = start_particles(DEFAULT_CANVAS_ID).unwrap();
    assert!(background.is_active());
    assert!(background.is_running());
    assert_eq!(background.particle_count(), FieldConfig::PARTICLE_COUNT as u32);
    assert_eq!(canvas.width(), width);

    background.resize(320, 240);
    assert_eq!((canvas.width(), canvas.height()), (320, 240));

    background.cancel().unwrap();
    assert!(!background.is_running());
    canvas.remove();
}

#[wasm_bindgen_test]
fn canvas_surface_tracks_size() {
    let canvas = add_canvas("surface-size");
    let document = web_sys::window().unwrap().document().unwrap();
    let mut surface = CanvasSurface::from_element_id(&document, "surface-size")
        .unwrap()
        .unwrap();

    surface.set_size(640.0, 480.0);
    assert_eq!(surface.size(), (640.0, 480.0));
    assert_eq!(surface.canvas().width(), 640);

    surface.clear(640.0, 480.0);
    surface
        .fill_circle([10.0, 10.0], 2.0, "rgba(0, 217, 255, 0.5)")
        .unwrap();
    surface.stroke_line([100.0, 0.0], [100.0, 50.0], "rgba(0, 217, 255, 1)", 2.0);

    let context = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into::<CanvasRenderingContext2d>()
        .unwrap();
    let dot = context.get_image_data(10.0, 10.0, 1.0, 1.0).unwrap().data();
    assert_eq!(dot[0], 0);
    assert!(dot[2] > 0);
    assert!(dot[3] > 0);
    let line = context.get_image_data(100.0, 25.0, 1.0, 1.0).unwrap().data();
    assert!(line[2] > 0);
    assert!(line[3] > 0);
    let empty = context.get_image_data(300.0, 300.0, 1.0, 1.0).unwrap().data();
    assert_eq!(empty[3], 0);
    canvas.remove();
}

#[wasm_bindgen_test]
fn window_resize_event_resizes_canvas() {
    let canvas = add_canvas("resize-listener");
    let window = web_sys::window().unwrap();

    let background = start_particles("resize-listener").unwrap();
    background.resize(10, 10);
    assert_eq!((canvas.width(), canvas.height()), (10, 10));

    window
        .dispatch_event(&Event::new("resize").unwrap())
        .unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap() as u32;
    let height = window.inner_height().unwrap().as_f64().unwrap() as u32;
    assert_eq!((canvas.width(), canvas.height()), (width, height));

    background.cancel().unwrap();
    canvas.remove();
}
