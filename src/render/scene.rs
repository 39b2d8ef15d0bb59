use crate::{
    render::surface::Surface,
    state::slots::{AnimState, SlotId},
};

/// Render hook: draws the animation state after each frame's updates.
pub trait Scene {
    fn render(&mut self, state: &AnimState, surface: &mut dyn Surface);
}

/// Draws nothing.
impl Scene for () {
    fn render(&mut self, _state: &AnimState, _surface: &mut dyn Surface) {}
}

/// Paints a color slot over the whole surface.
///
/// Opaque colors fill the surface, translucent ones are blended over it and
/// fully transparent ones leave it untouched.
#[derive(Clone, Copy, Debug)]
pub struct BackgroundFill {
    pub slot: SlotId,
}

impl BackgroundFill {
    pub fn new(slot: SlotId) -> Self {
        Self { slot }
    }
}

impl Scene for BackgroundFill {
    fn render(&mut self, state: &AnimState, surface: &mut dyn Surface) {
        let Some(color) = state.color(self.slot) else {
            return;
        };
        if color.is_opaque() {
            surface.fill(color);
        } else if !color.is_transparent() {
            let bounds = surface.bounds();
            surface.blend_rect(color, bounds);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
