use crate::device::Gpu;

use super::ctx::{FrameCtx, WindowCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called once after the window and its GPU context exist, before the first frame.
    fn on_start(&mut self, window: &WindowCtx<'_>, gpu: &Gpu<'_>) {
        let _ = (window, gpu);
    }

    /// Called once per rendered frame.
    ///
    /// Input that arrived since the previous frame is in `ctx.input_frame`, in
    /// arrival order; it is cleared after this call returns.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
