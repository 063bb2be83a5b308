//! Config command (shows the effective configuration)

use anyhow::Result;

use super::output::Output;
use crate::storage::Config;

/// Prints the effective configuration and where it came from
pub fn show(output: &Output, config: &Config) -> Result<()> {
    let policy = config.policy();
    let global_path = Config::global_config_path();

    if output.is_json() {
        output.data(&serde_json::json!({
            "global_config": global_path.as_ref().map(|p| p.display().to_string()),
            "project_config": config.project_path.as_ref().map(|p| p.display().to_string()),
            "default_format": config.format(),
            "scoring": policy,
        }));
    } else {
        let describe = |path: Option<&std::path::PathBuf>| {
            path.map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string())
        };

        println!("Configuration");
        println!("{}", "=".repeat(40));
        println!("Global config:   {}", describe(global_path.as_ref()));
        println!("Project config:  {}", describe(config.project_path.as_ref()));
        println!("Default format:  {}", config.format().as_str());
        println!();
        println!("Scoring:");
        println!("  day_weight:      {}", policy.day_weight);
        println!("  undated_penalty: {}", policy.undated_penalty);
        println!("  effort_weight:   {}", policy.effort_weight);
    }

    Ok(())
}
