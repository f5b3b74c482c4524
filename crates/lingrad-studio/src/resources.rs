//! Named shader resources, embedded at build time and optionally overridden
//! from a directory on disk.

use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};

use lingrad_engine::render::ShaderError;

pub const GRADIENT_VERTEX_SHADER: &str = "linear_gradient.vert.wgsl";
pub const GRADIENT_FRAGMENT_SHADER: &str = "linear_gradient.frag.wgsl";

const EMBEDDED: &[(&str, &str)] = &[
    (
        GRADIENT_VERTEX_SHADER,
        include_str!("../shaders/linear_gradient.vert.wgsl"),
    ),
    (
        GRADIENT_FRAGMENT_SHADER,
        include_str!("../shaders/linear_gradient.frag.wgsl"),
    ),
];

/// Resolves shader names to WGSL source.
///
/// A file named after the resource in the override directory takes
/// precedence over the embedded copy.
#[derive(Debug, Clone, Default)]
pub struct ShaderResources {
    override_dir: Option<PathBuf>,
}

impl ShaderResources {
    pub fn embedded() -> Self {
        Self::default()
    }

    pub fn with_override_dir(dir: impl Into<PathBuf>) -> Self {
        Self { override_dir: Some(dir.into()) }
    }

    pub fn override_dir(&self) -> Option<&Path> {
        self.override_dir.as_deref()
    }

    pub fn load(&self, name: &str) -> Result<Cow<'static, str>, ShaderError> {
        let embedded = EMBEDDED.iter().find(|(n, _)| *n == name).map(|(_, src)| *src);

        if let Some(dir) = &self.override_dir {
            let path = dir.join(name);
            match std::fs::read_to_string(&path) {
                Ok(src) => {
                    log::debug!("loaded shader `{name}` from {}", path.display());
                    return Ok(Cow::Owned(src));
                }
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                Err(err) => {
                    return Err(ShaderError::Load {
                        name: name.to_owned(),
                        reason: format!("{}: {err}", path.display()),
                    });
                }
            }
        }

        embedded.map(Cow::Borrowed).ok_or_else(|| ShaderError::Load {
            name: name.to_owned(),
            reason: "unknown resource".to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("lingrad-{tag}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn embedded_resources_resolve() {
        let res = ShaderResources::embedded();
        let vert = res.load(GRADIENT_VERTEX_SHADER).unwrap();
        let frag = res.load(GRADIENT_FRAGMENT_SHADER).unwrap();
        assert!(vert.contains("fn vs_main"));
        assert!(frag.contains("fn fs_main"));
        assert!(matches!(vert, Cow::Borrowed(_)));
    }

    #[test]
    fn unknown_name_is_load_error() {
        let err = ShaderResources::embedded().load("radial.frag.wgsl").unwrap_err();
        assert_eq!(
            err,
            ShaderError::Load {
                name: "radial.frag.wgsl".into(),
                reason: "unknown resource".into(),
            }
        );
    }

    #[test]
    fn override_dir_takes_precedence() {
        let dir = scratch_dir("override");
        std::fs::write(dir.join(GRADIENT_FRAGMENT_SHADER), "// replaced").unwrap();

        let res = ShaderResources::with_override_dir(&dir);
        assert_eq!(res.load(GRADIENT_FRAGMENT_SHADER).unwrap(), "// replaced");
        // Not overridden: falls back to the embedded copy.
        assert!(res.load(GRADIENT_VERTEX_SHADER).unwrap().contains("fn vs_main"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn override_dir_can_add_resources() {
        let dir = scratch_dir("extra");
        std::fs::write(dir.join("extra.wgsl"), "// extra").unwrap();

        let res = ShaderResources::with_override_dir(&dir);
        assert_eq!(res.load("extra.wgsl").unwrap(), "// extra");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unreadable_override_is_load_error() {
        let dir = scratch_dir("unreadable");
        // A directory where a file is expected cannot be read as text.
        std::fs::create_dir_all(dir.join(GRADIENT_VERTEX_SHADER)).unwrap();

        let err = ShaderResources::with_override_dir(&dir)
            .load(GRADIENT_VERTEX_SHADER)
            .unwrap_err();
        assert!(matches!(err, ShaderError::Load { .. }));
        assert_eq!(err.name(), GRADIENT_VERTEX_SHADER);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
