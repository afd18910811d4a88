// Drawing surface the particle field is rendered onto. The browser
// implementation wraps a canvas element and its 2d context.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

pub trait Surface {
    // Pixel dimensions as (width, height)
    fn size(&self) -> (f64, f64);

    fn set_size(&mut self, width: f64, height: f64);

    fn clear(&mut self, width: f64, height: f64);

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, style: &str) -> Result<(), JsValue>;

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], style: &str, width: f64);
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    // Looks up the canvas by element id. Ok(None) when there is no such
    // element, it isn't a canvas, or it has no 2d context to draw with.
    pub fn from_element_id(document: &Document, id: &str) -> Result<Option<Self>, JsValue> {
        let canvas = match document
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
        {
            Some(canvas) => canvas,
            None => return Ok(None),
        };
        CanvasSurface::from_canvas(canvas)
    }

    pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Option<Self>, JsValue> {
        let context = match canvas.get_context("2d")? {
            Some(context) => context.dyn_into::<CanvasRenderingContext2d>()?,
            None => return Ok(None),
        };
        Ok(Some(CanvasSurface { canvas, context }))
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, style: &str) -> Result<(), JsValue> {
        self.context.set_fill_style_str(style);
        self.context.begin_path();
        self.context
            .arc(center[0], center[1], radius, 0.0, std::f64::consts::PI * 2.0)?;
        self.context.fill();
        Ok(())
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], style: &str, width: f64) {
        self.context.set_stroke_style_str(style);
        self.context.set_line_width(width);
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
    }
}
