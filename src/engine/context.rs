use tracing::trace;

use crate::animation::state::AnimationState;
use crate::engine::clock::FrameClock;
use crate::foundation::error::{EmbuiError, EmbuiResult};
use crate::render::renderer::{RenderStats, Renderer};
use crate::scene::graph::SceneGraph;

/// Drives one engine tick: advance every registered animation state, then render once.
///
/// Owns nothing; the renderer, scene and states are borrowed from the embedder.
pub struct Context<'a, 'fb> {
    renderer: &'a mut Renderer<'fb>,
    scene: &'a SceneGraph,
    states: &'a mut [AnimationState],
    clock: FrameClock,
}

impl<'a, 'fb> Context<'a, 'fb> {
    /// A context with no animation states and a fixed 60 Hz clock.
    pub fn new(renderer: &'a mut Renderer<'fb>, scene: &'a SceneGraph) -> Self {
        Self {
            renderer,
            scene,
            states: Default::default(),
            clock: FrameClock::default(),
        }
    }

    pub fn set_animation_states(&mut self, states: &'a mut [AnimationState]) -> EmbuiResult<()> {
        self.states = states;
        Ok(())
    }

    pub fn set_clock(&mut self, clock: FrameClock) {
        self.clock = clock;
    }

    pub fn states(&self) -> &[AnimationState] {
        &*self.states
    }

    pub fn renderer(&self) -> &Renderer<'fb> {
        &*self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer<'fb> {
        &mut *self.renderer
    }

    pub fn run(&mut self) -> EmbuiResult<RenderStats> {
        let delta_ms = self.clock.next_delta_ms();
        self.run_with_delta(delta_ms)
    }

    #[tracing::instrument(skip(self))]
    pub fn run_with_delta(&mut self, delta_ms: f32) -> EmbuiResult<RenderStats> {
        if !delta_ms.is_finite() || delta_ms < 0.0 {
            return Err(EmbuiError::animation(format!(
                "tick delta must be finite and >= 0, got {delta_ms}"
            )));
        }
        for state in self.states.iter_mut() {
            state.tick(delta_ms);
        }
        trace!(states = self.states.len(), "animation states advanced");
        self.renderer.run(self.scene, &*self.states)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/context.rs"]
mod tests;
