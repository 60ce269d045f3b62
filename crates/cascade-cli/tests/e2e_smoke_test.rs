use std::{fs, path::PathBuf};

use tempfile::tempdir;

use cascade::CascadeError;
use cascade_cli::{Args, run};

/// Collects all .toml day files from a directory
fn collect_day_files(dir: PathBuf) -> Vec<PathBuf> {
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

fn demos_dir() -> PathBuf {
    // Demos are at workspace root, relative to workspace not the crate
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args(input: PathBuf, output: PathBuf, strict: bool) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: Some(output.to_string_lossy().to_string()),
        config: None,
        strict,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_demo_days() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let demos = collect_day_files(demos_dir());
    assert!(!demos.is_empty(), "No demo day files found in demos/");

    let mut failed = Vec::new();

    for demo_path in &demos {
        let output_filename = format!(
            "{}.layout.toml",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        match run(&args(demo_path.clone(), output_path.clone(), true)) {
            Ok(()) => {
                let written = fs::read_to_string(&output_path).expect("output written");
                if !written.contains("[[day]]") {
                    failed.push((demo_path.clone(), "no [[day]] table in output".to_string()));
                }
            }
            Err(e) => failed.push((demo_path.clone(), e.to_string())),
        }
    }

    if !failed.is_empty() {
        eprintln!("\nDemo day files that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_overlapping_meetings_layout() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("out.toml");

    run(&args(
        demos_dir().join("overlapping_meetings.toml"),
        output_path.clone(),
        false,
    ))
    .expect("demo should lay out");

    let written = fs::read_to_string(&output_path).expect("output written");
    assert!(written.contains("date = \"2026-10-19\""), "{written}");
    assert!(written.contains("max_layers = 2"), "{written}");
    // The task without times is not part of the layout.
    assert!(!written.contains("inbox-zero"), "{written}");
}

#[test]
fn e2e_strict_mode_rejects_duplicate_keys() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("duplicates.toml");
    let output_path = temp_dir.path().join("out.toml");

    fs::write(
        &input_path,
        r#"
            [[task]]
            key = 1
            start = "2026-10-19T09:00:00"
            end = "2026-10-19T10:00:00"

            [[task]]
            key = 1
            start = "2026-10-19T14:00:00"
            end = "2026-10-19T15:00:00"
        "#,
    )
    .expect("Failed to write input");

    let err = run(&args(input_path.clone(), output_path.clone(), true)).unwrap_err();
    assert!(matches!(err, CascadeError::DuplicateKey(_)), "{err}");
    assert!(!output_path.exists());

    // Without --strict the later task wins and the run succeeds.
    run(&args(input_path, output_path.clone(), false)).expect("lenient run succeeds");
    assert!(output_path.exists());
}

#[test]
fn e2e_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let err = run(&args(
        temp_dir.path().join("missing.toml"),
        temp_dir.path().join("out.toml"),
        false,
    ))
    .unwrap_err();

    assert!(matches!(err, CascadeError::Io(_)), "{err}");
}
