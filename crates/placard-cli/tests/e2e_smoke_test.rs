use std::{fs, path::PathBuf};

use tempfile::tempdir;

use placard_cli::Args;

/// Collects all .toml plan files from a directory
fn collect_plan_files(dir: PathBuf) -> Vec<PathBuf> {
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

#[test]
fn e2e_smoke_test_valid_plans() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_plans = collect_plan_files(PathBuf::from("plans"));

    assert!(!valid_plans.is_empty(), "No valid plans found in plans/");

    let mut failed_plans = Vec::new();

    for plan_path in &valid_plans {
        let output_filename =
            format!("{}.json", plan_path.file_stem().unwrap().to_string_lossy());
        let output_path = temp_dir.path().join(output_filename);

        let args = Args {
            plan: plan_path.to_string_lossy().to_string(),
            output: output_path.to_string_lossy().to_string(),
            config: None,
            log_level: "off".to_string(),
        };

        if let Err(e) = placard_cli::run(&args) {
            failed_plans.push((plan_path.clone(), e));
            continue;
        }

        let written = fs::read_to_string(&output_path).expect("output file should exist");
        assert!(written.contains("\"placements\""));
        assert!(written.contains("\"report\""));
    }

    if !failed_plans.is_empty() {
        eprintln!("\nValid plans that failed:");
        for (path, err) in &failed_plans {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid plan(s) failed unexpectedly", failed_plans.len());
    }

    println!("✅ All {} valid plans passed", valid_plans.len());
}

#[test]
fn e2e_smoke_test_error_plans() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_plans = collect_plan_files(PathBuf::from("plans/errors"));

    assert!(
        !error_plans.is_empty(),
        "No error plans found in plans/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for plan_path in &error_plans {
        let output_filename = format!(
            "error_{}.json",
            plan_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        let args = Args {
            plan: plan_path.to_string_lossy().to_string(),
            output: output_path.to_string_lossy().to_string(),
            config: None,
            log_level: "off".to_string(),
        };

        if placard_cli::run(&args).is_ok() {
            unexpectedly_succeeded.push(plan_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError plans that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error plan(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error plans failed as expected",
        error_plans.len()
    );
}
