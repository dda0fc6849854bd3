use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use planboard_cli::{
    Args, CanvasArgs, Command, LeavesArgs, SessionAction, SessionArgs, TimelineArgs, run,
};

fn demos_dir() -> PathBuf {
    // Demos are at workspace root, relative to workspace not the crate
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Collects all .toml files from a directory
fn collect_toml_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args(command: Command) -> Args {
    Args {
        command,
        config: None,
        log_level: "off".to_string(),
    }
}

fn canvas_args(script: &Path, output: &Path) -> Args {
    args(Command::Canvas(CanvasArgs {
        script: Some(script.to_string_lossy().to_string()),
        empty: false,
        output: output.to_string_lossy().to_string(),
    }))
}

fn output_path(dir: &Path, source: &Path, prefix: &str) -> PathBuf {
    dir.join(format!(
        "{prefix}{}.svg",
        source.file_stem().unwrap().to_string_lossy()
    ))
}

#[test]
fn e2e_smoke_test_gesture_scripts() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let scripts = collect_toml_files(demos_dir().join("scripts"));

    assert!(!scripts.is_empty(), "No scripts found in demos/scripts/");

    let mut failed = Vec::new();
    for script in &scripts {
        let output = output_path(temp_dir.path(), script, "");
        match run(&canvas_args(script, &output)) {
            Ok(()) => {
                let svg = fs::read_to_string(&output).unwrap();
                assert!(svg.contains("<svg"), "{} is not SVG", output.display());
            }
            Err(e) => failed.push((script.clone(), e)),
        }
    }

    if !failed.is_empty() {
        eprintln!("\nScripts that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} script(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_smoke_test_error_scripts() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let scripts = collect_toml_files(demos_dir().join("errors"));

    assert!(!scripts.is_empty(), "No error scripts found in demos/errors/");

    let mut unexpectedly_succeeded = Vec::new();
    for script in &scripts {
        let output = output_path(temp_dir.path(), script, "error_");
        if run(&canvas_args(script, &output)).is_ok() {
            unexpectedly_succeeded.push(script.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError scripts that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error script(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_smoke_test_plans() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let plans = collect_toml_files(demos_dir().join("plans"));

    assert!(!plans.is_empty(), "No plans found in demos/plans/");

    for plan in &plans {
        let output = output_path(temp_dir.path(), plan, "timeline_");
        let timeline = args(Command::Timeline(TimelineArgs {
            month: "2024-02".parse().unwrap(),
            plan: Some(plan.to_string_lossy().to_string()),
            today: None,
            output: output.to_string_lossy().to_string(),
        }));
        run(&timeline).unwrap_or_else(|e| panic!("{}: {e}", plan.display()));
        assert!(fs::read_to_string(&output).unwrap().contains("class=\"bar\""));

        let leaves = args(Command::Leaves(LeavesArgs {
            date: "2024-02-14".parse().ok(),
            plan: Some(plan.to_string_lossy().to_string()),
            limit: 3,
        }));
        run(&leaves).unwrap_or_else(|e| panic!("{}: {e}", plan.display()));
    }
}

#[test]
fn e2e_sample_timeline_with_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("timeline.svg");

    let mut timeline = args(Command::Timeline(TimelineArgs {
        month: "2024-02".parse().unwrap(),
        plan: None,
        today: "2024-02-14".parse().ok(),
        output: output.to_string_lossy().to_string(),
    }));
    timeline.config = Some(demos_dir().join("config.toml").to_string_lossy().to_string());

    run(&timeline).unwrap();

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("class=\"today\""));
    assert!(svg.contains("February"));
}

#[test]
fn e2e_session_round_trip() {
    let store = tempdir().expect("Failed to create temp directory");
    let session = |action| {
        args(Command::Session(SessionArgs {
            action,
            store: Some(store.path().to_string_lossy().to_string()),
        }))
    };

    run(&session(SessionAction::Register {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        password: "secret".to_string(),
    }))
    .unwrap();
    assert!(store.path().join("user.json").exists());

    run(&session(SessionAction::Whoami)).unwrap();
    run(&session(SessionAction::Logout)).unwrap();
    assert!(!store.path().join("user.json").exists());

    // Logging out twice is harmless
    run(&session(SessionAction::Logout)).unwrap();
}
