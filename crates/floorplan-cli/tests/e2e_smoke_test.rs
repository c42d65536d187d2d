use std::{fs, path::PathBuf};

use tempfile::tempdir;

use floorplan_cli::Args;

fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos")
}

/// Collects all .json scenes from a directory
fn collect_scene_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args_for(input: &PathBuf, output: PathBuf) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        layer: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let demos = collect_scene_files(demos_dir());
    assert!(!demos.is_empty(), "No demo scenes found in demos/");

    let mut failed = Vec::new();

    for demo_path in &demos {
        let output_path = temp_dir.path().join(format!(
            "{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        if let Err(e) = floorplan_cli::run(&args_for(demo_path, output_path.clone())) {
            failed.push((demo_path.clone(), e.to_string()));
            continue;
        }

        let svg = fs::read_to_string(&output_path).expect("Output should be written");
        if !svg.contains("<svg") || !svg.contains("</svg>") || !svg.contains("viewBox") {
            failed.push((demo_path.clone(), "incomplete SVG document".to_string()));
        }
    }

    if !failed.is_empty() {
        eprintln!("\nDemo scenes that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo scene(s) failed unexpectedly", failed.len());
    }

    println!("✅ All {} demo scenes exported", demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_scene_files(demos_dir().join("errors"));
    assert!(
        !error_demos.is_empty(),
        "No error scenes found in demos/errors/"
    );

    let mut unexpected_successes = Vec::new();

    for demo_path in &error_demos {
        let output_path = temp_dir.path().join("out.svg");
        if floorplan_cli::run(&args_for(demo_path, output_path)).is_ok() {
            unexpected_successes.push(demo_path.clone());
        }
    }

    assert!(
        unexpected_successes.is_empty(),
        "Error scenes exported without error: {unexpected_successes:?}"
    );
}

#[test]
fn e2e_layer_override() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_dir().join("two_floors.json");
    let output = temp_dir.path().join("upper.svg");

    let mut args = args_for(&input, output.clone());
    args.layer = Some("upper".to_string());
    floorplan_cli::run(&args).expect("Layer override should export");

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains(r#"data-element-id="upper-desk""#));
    assert!(!svg.contains(r#"data-element-id="lobby-label""#));
}
