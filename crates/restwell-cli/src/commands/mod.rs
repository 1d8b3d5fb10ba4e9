pub mod bedtime;
pub mod config;
pub mod model;

use std::path::PathBuf;

use restwell_core::{Config, LinearModel};

/// Resolve the model artifact: explicit flag, then config override, then
/// the bundled artifact.
pub fn resolve_model(
    flag: Option<PathBuf>,
    config: &Config,
) -> Result<LinearModel, Box<dyn std::error::Error>> {
    let model = match flag.or_else(|| config.model.path.clone()) {
        Some(path) => LinearModel::from_path(&path)?,
        None => LinearModel::bundled()?,
    };
    Ok(model)
}
