// Renderer struct that owns the drawing surface and knows how to paint a
// particle field onto it: dots first, then the connecting lines.

use crate::color::Color;
use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::surface::Surface;
use wasm_bindgen::JsValue;

pub struct Renderer<S: Surface> {
    surface: S,
    color: Color,
    line_width: f64,
}

impl<S: Surface> Renderer<S> {
    pub fn new(surface: S, config: &FieldConfig) -> Self {
        Renderer {
            surface,
            color: config.color,
            line_width: config.line_width,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn render(&mut self, field: &ParticleField) -> Result<(), JsValue> {
        self.surface.clear(field.width(), field.height());
        self.render_particles(field)?;
        self.render_connections(field);
        Ok(())
    }

    fn render_particles(&mut self, field: &ParticleField) -> Result<(), JsValue> {
        for p in field.particles() {
            let style = self.color.to_css(p.opacity());
            self.surface.fill_circle(p.pos(), p.radius(), &style)?;
        }
        Ok(())
    }

    fn render_connections(&mut self, field: &ParticleField) {
        for connection in field.connections() {
            let style = self.color.to_css(connection.alpha);
            self.surface
                .stroke_line(connection.from, connection.to, &style, self.line_width);
        }
    }
}
