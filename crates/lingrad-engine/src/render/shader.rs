use thiserror::Error;

/// Failure to turn a named shader resource into a usable module.
///
/// Neither variant is fatal: callers log it and keep running without the
/// pipeline that needed the shader.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShaderError {
    /// The source was found but wgpu rejected it (parse or validation).
    #[error("shader compile error in `{name}`: {message}")]
    Compile { name: String, message: String },

    /// Any other failure while resolving or reading the resource.
    #[error("unable to load shader `{name}`: {reason}")]
    Load { name: String, reason: String },
}

impl ShaderError {
    pub fn name(&self) -> &str {
        match self {
            ShaderError::Compile { name, .. } | ShaderError::Load { name, .. } => name,
        }
    }
}

/// Compiles WGSL into a module, reporting validation failures as `ShaderError::Compile`.
///
/// The error scope keeps an invalid shader from reaching wgpu's uncaptured
/// error handler (which panics by default).
pub fn compile_wgsl(
    device: &wgpu::Device,
    name: &str,
    source: &str,
) -> Result<wgpu::ShaderModule, ShaderError> {
    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(name),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    match pollster::block_on(scope.pop()) {
        None => {
            log::debug!("compiled shader `{name}`");
            Ok(module)
        }
        Some(err) => Err(ShaderError::Compile {
            name: name.to_owned(),
            message: err.to_string(),
        }),
    }
}
