//! Command-line argument definitions for the floor-plan CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, layer selection,
//! configuration file selection, and logging verbosity.

use clap::Parser;

use floorplan::export::svg::DEFAULT_FILE_NAME;

/// Command-line arguments for the floor-plan SVG exporter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input scene JSON file
    #[arg(help = "Path to the input scene JSON file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = DEFAULT_FILE_NAME)]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Layer to export instead of the scene's selected layer
    #[arg(short, long)]
    pub layer: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["floorplan", "scene.json"]);
        assert_eq!(args.input, "scene.json");
        assert_eq!(args.output, "floor-plan.svg");
        assert_eq!(args.log_level, "info");
        assert!(args.config.is_none());
        assert!(args.layer.is_none());
    }

    #[test]
    fn test_layer_override() {
        let args = Args::parse_from(["floorplan", "scene.json", "--layer", "first-floor", "-o", "out.svg"]);
        assert_eq!(args.layer.as_deref(), Some("first-floor"));
        assert_eq!(args.output, "out.svg");
    }
}
