use std::path::{Path, PathBuf};
use std::process::Command;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

/// Copies a fixture catalog into a scratch directory so session state
/// written by one test never leaks into another.
fn scratch_catalog(fixture: &str, test_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("slidedex-test-{}", test_name));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    std::fs::copy(
        fixture_path(fixture).join("slides.csv"),
        dir.join("slides.csv"),
    )
    .expect("Failed to copy fixture dataset");
    dir
}

fn run_slidedex(dir: &Path, args: &[&str]) -> (bool, String, String) {
    let bin = env!("CARGO_BIN_EXE_slidedex-cli");
    let output = Command::new(bin)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run slidedex-cli");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (output.status.success(), stdout, stderr)
}

mod summary_command {
    use super::*;

    #[test]
    fn bare_invocation_summarizes_whole_catalog() {
        let dir = scratch_catalog("catalog", "bare-summary");
        let (ok, stdout, stderr) = run_slidedex(&dir, &[]);

        assert!(ok, "stderr: {}", stderr);
        assert!(stdout.contains("Total slides: 5"));
        assert!(stdout.contains("Company Counts"));
        assert!(stdout.contains("Tag Counts"));
    }

    #[test]
    fn company_facet_narrows_totals() {
        let dir = scratch_catalog("catalog", "summary-company");
        let (ok, stdout, _) = run_slidedex(&dir, &["summary", "--company", "Acme"]);

        assert!(ok);
        assert!(stdout.contains("Total slides: 3"));
        assert!(!stdout.contains("Bain"));
    }

    #[test]
    fn tag_facet_uses_membership() {
        let dir = scratch_catalog("catalog", "summary-tag");
        let (ok, stdout, _) = run_slidedex(&dir, &["summary", "--tag", "strategy"]);

        assert!(ok);
        assert!(stdout.contains("Total slides: 3"));
    }

    #[test]
    fn unmatched_facet_value_is_not_an_error() {
        let dir = scratch_catalog("catalog", "summary-unmatched");
        let (ok, stdout, _) = run_slidedex(&dir, &["summary", "--company", "Nonexistent"]);

        assert!(ok);
        assert!(stdout.contains("Total slides: 0"));
    }
}

mod gallery_command {
    use super::*;

    #[test]
    fn small_view_renders_table_with_image_urls() {
        let dir = scratch_catalog("catalog", "gallery-small");
        let (ok, stdout, stderr) = run_slidedex(&dir, &["gallery"]);

        assert!(ok, "stderr: {}", stderr);
        assert!(stdout.contains("S001"));
        assert!(stdout.contains("acme-growth.png"));
        assert!(stdout.contains("5 slide(s)"));
        assert!(!stdout.contains("Warning"));
    }

    #[test]
    fn empty_view_prints_notice_instead_of_table() {
        let dir = scratch_catalog("catalog", "gallery-empty");
        let (ok, stdout, _) = run_slidedex(&dir, &["gallery", "--company", "Nonexistent"]);

        assert!(ok);
        assert!(stdout.contains("No matching slides"));
    }

    #[test]
    fn over_threshold_view_warns_until_confirmed() {
        let dir = scratch_catalog("catalog", "gallery-gate");

        let args = ["gallery", "--company", "Acme", "--threshold", "2"];
        let (ok, stdout, _) = run_slidedex(&dir, &args);
        assert!(ok);
        assert!(stdout.contains("displaying 3 slides"));
        assert!(!stdout.contains("S001"));

        let (ok, stdout, _) = run_slidedex(
            &dir,
            &["gallery", "--company", "Acme", "--threshold", "2", "--confirm"],
        );
        assert!(ok);
        assert!(stdout.contains("S001"));
        assert!(stdout.contains("3 slide(s)"));

        // Same selection again: confirmation persists for the same view.
        let (ok, stdout, _) = run_slidedex(&dir, &args);
        assert!(ok);
        assert!(stdout.contains("S001"));
    }

    #[test]
    fn changing_selection_resets_confirmation() {
        let dir = scratch_catalog("catalog", "gallery-reset-on-change");

        let (ok, _, _) = run_slidedex(
            &dir,
            &["gallery", "--company", "Acme", "--threshold", "2", "--confirm"],
        );
        assert!(ok);

        let (ok, stdout, _) = run_slidedex(
            &dir,
            &["gallery", "--tag", "strategy", "--threshold", "2"],
        );
        assert!(ok);
        assert!(stdout.contains("displaying 3 slides"));
        assert!(!stdout.contains("S001"));
    }

    #[test]
    fn at_threshold_view_renders_without_confirmation() {
        let dir = scratch_catalog("catalog", "gallery-at-threshold");

        let (ok, stdout, _) = run_slidedex(
            &dir,
            &["gallery", "--company", "Acme", "--threshold", "3"],
        );
        assert!(ok);
        assert!(stdout.contains("3 slide(s)"));
        assert!(!stdout.contains("Warning"));
    }
}

mod session_command {
    use super::*;

    #[test]
    fn reset_clears_persisted_confirmation() {
        let dir = scratch_catalog("catalog", "session-reset");

        let args = ["gallery", "--company", "Acme", "--threshold", "2"];
        let (ok, _, _) = run_slidedex(
            &dir,
            &["gallery", "--company", "Acme", "--threshold", "2", "--confirm"],
        );
        assert!(ok);
        assert!(dir.join(".slidedex/session.json").exists());

        let (ok, stdout, _) = run_slidedex(&dir, &["session", "reset"]);
        assert!(ok);
        assert!(stdout.contains("Session state cleared"));

        let (ok, stdout, _) = run_slidedex(&dir, &args);
        assert!(ok);
        assert!(stdout.contains("displaying 3 slides"));
    }
}

mod facets_command {
    use super::*;

    #[test]
    fn lists_sorted_distinct_values_per_facet() {
        let dir = scratch_catalog("catalog", "facets");
        let (ok, stdout, _) = run_slidedex(&dir, &["facets"]);

        assert!(ok);
        assert!(stdout.contains("Company (3):"));
        assert!(stdout.contains("Tag (4):"));

        let acme = stdout.find("Acme").unwrap();
        let bain = stdout.find("Bain").unwrap();
        let mckinsey = stdout.find("McKinsey").unwrap();
        assert!(acme < bain && bain < mckinsey);
    }
}

mod status_command {
    use super::*;

    #[test]
    fn reports_catalog_and_session_state() {
        let dir = scratch_catalog("catalog", "status");
        let (ok, stdout, _) = run_slidedex(&dir, &["status"]);

        assert!(ok);
        assert!(stdout.contains("Slides: 5"));
        assert!(stdout.contains("Gallery confirmed: no"));
    }
}

mod load_errors {
    use super::*;

    #[test]
    fn malformed_tags_cell_aborts_with_row_number() {
        let dir = scratch_catalog("bad_tags", "bad-tags");
        let (ok, _, stderr) = run_slidedex(&dir, &["summary"]);

        assert!(!ok);
        assert!(stderr.contains("row 3"));
        assert!(stderr.contains("list-of-strings"));
    }

    #[test]
    fn missing_column_aborts() {
        let dir = scratch_catalog("bad_header", "bad-header");
        let (ok, _, stderr) = run_slidedex(&dir, &["summary"]);

        assert!(!ok);
        assert!(stderr.contains("missing column 'tags'"));
    }
}

mod config_file {
    use super::*;

    #[test]
    fn threshold_from_config_gates_the_gallery() {
        let dir = scratch_catalog("catalog", "config-threshold");
        std::fs::write(dir.join("slidedex.toml"), "gallery_threshold = 2\n")
            .expect("Failed to write config");

        let (ok, stdout, _) = run_slidedex(&dir, &["gallery", "--company", "Acme"]);
        assert!(ok);
        assert!(stdout.contains("displaying 3 slides"));
    }

    #[test]
    fn image_base_url_from_config_resolves_references() {
        let dir = scratch_catalog("catalog", "config-base-url");
        std::fs::write(
            dir.join("slidedex.toml"),
            "image_base_url = \"https://cdn.test/slides/\"\n",
        )
        .expect("Failed to write config");

        let (ok, stdout, _) = run_slidedex(&dir, &["gallery"]);
        assert!(ok);
        assert!(stdout.contains("https://cdn.test/slides/acme-growth.png"));
    }
}
