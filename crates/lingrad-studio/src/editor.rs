//! The gradient editor application: ties input, animation and drawing together.

use lingrad_engine::coords::{Rect, Vec2};
use lingrad_engine::core::{App, AppControl, FrameCtx, WindowCtx};
use lingrad_engine::device::Gpu;
use lingrad_engine::input::{InputEvent, Key, KeyState, MouseButtonState, PointerButtonEvent};
use lingrad_engine::paint::Color;
use lingrad_engine::render::shapes::circle::CircleRenderer;
use lingrad_engine::render::shapes::line::LineRenderer;
use lingrad_engine::scene::DrawList;

use crate::config::EditorConfig;
use crate::gradient::GradientModel;
use crate::interaction::InteractionController;
use crate::overlay::build_overlay;
use crate::renderer::LinearGradientRenderer;
use crate::resources::ShaderResources;
use crate::uniforms::{GradientUniformBlock, GradientUniforms, MAX_GPU_STOPS};

/// Size of the rect filled by the gradient, centered in the window.
pub const GRADIENT_RECT_SIZE: Vec2 = Vec2::new(400.0, 200.0);

pub struct GradientEditor {
    model: GradientModel,
    controller: InteractionController,
    resources: ShaderResources,
    window_size: Vec2,

    /// `None` until startup, and for good if the gradient shaders failed.
    gradient: Option<LinearGradientRenderer>,
    lines: LineRenderer,
    circles: CircleRenderer,
    overlay: DrawList,

    truncation_reported: bool,
}

impl GradientEditor {
    pub fn new(config: &EditorConfig) -> Self {
        let window_size = config.initial_window_size();
        let resources = match &config.shader_dir {
            Some(dir) => ShaderResources::with_override_dir(dir),
            None => ShaderResources::embedded(),
        };

        Self {
            model: GradientModel::initialize(window_size),
            controller: InteractionController::new(config.hit),
            resources,
            window_size,
            gradient: None,
            lines: LineRenderer::new(),
            circles: CircleRenderer::new(),
            overlay: DrawList::new(),
            truncation_reported: false,
        }
    }

    #[inline]
    pub fn model(&self) -> &GradientModel {
        &self.model
    }

    #[inline]
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    #[inline]
    pub fn window_size(&self) -> Vec2 {
        self.window_size
    }

    #[inline]
    pub fn has_gradient_pipeline(&self) -> bool {
        self.gradient.is_some()
    }

    pub fn gradient_rect(&self) -> Rect {
        Rect::centered(self.window_size * 0.5, GRADIENT_RECT_SIZE)
    }

    /// Applies a frame's input events in arrival order.
    pub fn apply_input(&mut self, events: &[InputEvent]) {
        for event in events {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: &InputEvent) {
        match event {
            // Every button grabs and every release lets go.
            InputEvent::PointerButton(PointerButtonEvent { state, pos, .. }) => match state {
                MouseButtonState::Pressed => {
                    self.controller.mouse_down(self.model.definition(), *pos);
                }
                MouseButtonState::Released => self.controller.mouse_up(),
            },

            InputEvent::PointerMoved(pos) if self.controller.is_dragging() => {
                if let Err(err) = self.controller.mouse_drag(self.model.definition_mut(), *pos) {
                    log::trace!("drag to ({}, {}) ignored: {err}", pos.x, pos.y);
                }
            }

            // The release will never arrive once focus is gone.
            InputEvent::Focused(false) => self.controller.mouse_up(),

            InputEvent::Key { key, state: KeyState::Pressed, .. } => self.on_key_down(*key),

            _ => {}
        }
    }

    /// Key hook. Reserved for a fullscreen toggle; does nothing yet.
    pub fn on_key_down(&mut self, key: Key) {
        log::trace!("key down: {key}");
    }

    /// Advances the stop colors to `elapsed` seconds since startup.
    pub fn update(&mut self, elapsed: f64) {
        self.model.animate(elapsed);
    }

    /// Uniform block for the current gradient and window.
    pub fn uniform_block(&mut self) -> GradientUniformBlock {
        let uniforms = GradientUniforms::from_definition(self.model.definition(), self.window_size);
        if uniforms.is_truncated() && !self.truncation_reported {
            log::warn!(
                "gradient has {} stops; only the first {MAX_GPU_STOPS} are shaded",
                uniforms.stops.len()
            );
            self.truncation_reported = true;
        }
        GradientUniformBlock::new(&uniforms, self.window_size.x, self.gradient_rect())
    }

    /// Rebuilds the overlay draw list from the current gradient.
    pub fn rebuild_overlay(&mut self) -> &mut DrawList {
        self.overlay.clear();
        build_overlay(self.model.definition(), &mut self.overlay);
        &mut self.overlay
    }
}

impl App for GradientEditor {
    fn on_start(&mut self, window: &WindowCtx<'_>, gpu: &Gpu<'_>) {
        self.window_size = window.logical_size();
        self.model = GradientModel::initialize(self.window_size);
        log::info!(
            "gradient axis ({}, {}) -> ({}, {})",
            self.model.definition().start.x,
            self.model.definition().start.y,
            self.model.definition().end.x,
            self.model.definition().end.y,
        );

        self.gradient = match LinearGradientRenderer::load(gpu.device(), gpu.surface_format(), &self.resources) {
            Ok(renderer) => Some(renderer),
            Err(err) => {
                log::error!("{err}; continuing without the gradient fill");
                None
            }
        };
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.window_size = ctx.window.logical_size();

        self.apply_input(&ctx.input_frame.events);
        self.update(ctx.time.elapsed);

        let block = self.uniform_block();
        self.rebuild_overlay();

        let gradient = self.gradient.as_ref();
        let lines = &mut self.lines;
        let circles = &mut self.circles;
        let overlay = &mut self.overlay;

        ctx.render(Color::white(), |rctx, target| {
            if let Some(gradient) = gradient {
                gradient.render(rctx, target, &block);
            }
            lines.render(rctx, target, overlay);
            circles.render(rctx, target, overlay);
        })
    }
}
