// Animator ties the particle field to a renderer. One call to frame() is one
// display frame: move everything, then repaint.

use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::renderer::Renderer;
use crate::surface::Surface;
use crate::Timer;
use rand::Rng;
use wasm_bindgen::JsValue;

pub struct Animator<S: Surface> {
    field: ParticleField,
    renderer: Renderer<S>,
}

impl<S: Surface> Animator<S> {
    // Particles are spread over whatever size the surface has right now
    pub fn new<R: Rng + ?Sized>(surface: S, config: &FieldConfig, rng: &mut R) -> Self {
        let (width, height) = surface.size();
        Animator {
            field: ParticleField::new(width, height, config, rng),
            renderer: Renderer::new(surface, config),
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    #[cfg(test)]
    pub(crate) fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }

    pub fn surface(&self) -> &S {
        self.renderer.surface()
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.renderer.surface_mut().set_size(width, height);
        // The surface may round to whole pixels
        let (width, height) = self.renderer.surface().size();
        self.field.resize(width, height);
    }

    pub fn frame(&mut self) -> Result<(), JsValue> {
        let _timer = Timer::new("Animator::frame");
        self.field.update();
        self.renderer.render(&self.field)
    }
}
