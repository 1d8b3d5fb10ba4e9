use std::path::PathBuf;

use clap::Subcommand;
use restwell_core::Config;

#[derive(Subcommand)]
pub enum ModelAction {
    /// Print metadata of the active model artifact
    Info {
        /// Path to a custom model artifact
        #[arg(long)]
        model: Option<PathBuf>,
    },
}

pub fn run(action: ModelAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ModelAction::Info { model } => {
            let config = Config::load()?;
            let model = super::resolve_model(model, &config)?;
            println!("{}", serde_json::to_string_pretty(&model.info())?);
        }
    }
    Ok(())
}
