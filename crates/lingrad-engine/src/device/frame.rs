/// One acquired swapchain frame.
///
/// Must be handed back through `Gpu::submit` promptly; holding the surface
/// texture blocks acquisition of the next one.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
