use anyhow::Result;

use lingrad_engine::logging::init_logging;
use lingrad_engine::window::Runtime;
use lingrad_studio::{EditorConfig, GradientEditor};

fn main() -> Result<()> {
    let config = EditorConfig::from_env();
    init_logging(config.logging.clone());

    if let Some(dir) = &config.shader_dir {
        log::info!("shader overrides from {}", dir.display());
    }

    let editor = GradientEditor::new(&config);
    Runtime::run(config.runtime, config.gpu, editor)
}
