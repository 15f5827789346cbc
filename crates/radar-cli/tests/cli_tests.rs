use radar_cli::commands::generate::{self, GenerateArgs};
use radar_cli::commands::list::{self, ListArgs};
use radar_cli::commands::validate::{self, ValidateArgs};
use radar_cli::commands::export;
use radar_core::GenerateOptions;
use std::path::Path;
use std::time::SystemTime;
use tempfile::TempDir;

const FIRST: &str = r"
technologies:
  - name: Go
    ring: Adopt
    quadrant: Languages
    description: Fast compiled language
  - name: Angular
    ring: Trial
    quadrant: Frameworks
    description: Web framework
";

const SECOND: &str = r"
technologies:
  - name: Go
    ring: Adopt
    quadrant: Languages
    description: Fast compiled language
  - name: React
    ring: Assess
    quadrant: Frameworks
    description: UI library
";

fn input_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("20231201.yaml"), FIRST).unwrap();
    std::fs::write(dir.path().join("20231202.yaml"), SECOND).unwrap();
    std::fs::write(dir.path().join("meta.yaml"), "title: Team Radar\n").unwrap();
    dir
}

fn generate_args(input: &Path, output: &Path, options: GenerateOptions) -> GenerateArgs {
    GenerateArgs {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        template: None,
        meta: None,
        options,
    }
}

fn modified(path: &Path) -> SystemTime {
    std::fs::metadata(path).unwrap().modified().unwrap()
}

fn text(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).unwrap()
}

#[test]
fn test_generate_writes_one_page_per_snapshot() {
    let input = input_dir();
    let output = TempDir::new().unwrap();
    let mut out = Vec::new();

    let report = generate::run(
        &generate_args(input.path(), output.path(), GenerateOptions::default()),
        &mut out,
    )
    .unwrap();

    assert_eq!(report.generated().count(), 2);
    let page = std::fs::read_to_string(output.path().join("20231202.html")).unwrap();
    assert!(page.contains("<title>Team Radar - 2023-12-02</title>"));
    assert!(!page.contains("Changes in this Radar"));
    assert!(!output.path().join("meta.html").exists());
    assert!(text(out).contains("2 radar(s) generated, 0 skipped"));
}

#[test]
fn test_second_run_leaves_pages_untouched() {
    let input = input_dir();
    let output = TempDir::new().unwrap();
    let args = generate_args(input.path(), output.path(), GenerateOptions::default());

    generate::run(&args, &mut Vec::new()).unwrap();
    let page = output.path().join("20231201.html");
    let untouched = output.path().join("20231202.html");
    std::fs::write(&page, "hand edited").unwrap();
    let edited_at = modified(&page);
    let generated_at = modified(&untouched);

    let report = generate::run(&args, &mut Vec::new()).unwrap();
    assert_eq!(report.skipped().count(), 2);
    assert_eq!(std::fs::read_to_string(&page).unwrap(), "hand edited");
    assert_eq!(modified(&page), edited_at);
    assert_eq!(modified(&untouched), generated_at);

    let forced = generate_args(
        input.path(),
        output.path(),
        GenerateOptions {
            force: true,
            ..GenerateOptions::default()
        },
    );
    let report = generate::run(&forced, &mut Vec::new()).unwrap();
    assert_eq!(report.generated().count(), 2);
    assert_ne!(std::fs::read_to_string(&page).unwrap(), "hand edited");
}

#[test]
fn test_changes_table_on_later_snapshots() {
    let input = input_dir();
    let output = TempDir::new().unwrap();
    let options = GenerateOptions {
        add_changes_summary: true,
        ..GenerateOptions::default()
    };

    generate::run(&generate_args(input.path(), output.path(), options), &mut Vec::new()).unwrap();

    let first = std::fs::read_to_string(output.path().join("20231201.html")).unwrap();
    assert!(!first.contains("Changes in this Radar"));

    let second = std::fs::read_to_string(output.path().join("20231202.html")).unwrap();
    assert!(second.contains("Changes in this Radar"));
    assert!(second.contains(r#"<td class="status-new">NEW</td>"#));
    assert!(second.contains(r#"<td class="status-deleted">DELETED from Trial</td>"#));
}

#[test]
fn test_generate_fails_on_invalid_snapshot() {
    let input = input_dir();
    std::fs::write(
        input.path().join("20231203.yaml"),
        "technologies:\n  - {name: Rust, ring: Someday, quadrant: Languages}\n",
    )
    .unwrap();
    let output = TempDir::new().unwrap();

    let err = generate::run(
        &generate_args(input.path(), output.path(), GenerateOptions::default()),
        &mut Vec::new(),
    )
    .unwrap_err();

    assert!(format!("{err:#}").contains("20231203.yaml"));
    assert!(!output.path().join("20231201.html").exists());
}

#[test]
fn test_list_reports_render_state() {
    let input = input_dir();
    let output = TempDir::new().unwrap();
    std::fs::write(output.path().join("20231201.html"), "<html></html>").unwrap();

    let mut out = Vec::new();
    list::run(
        &ListArgs {
            input: input.path().to_path_buf(),
            output: output.path().to_path_buf(),
            meta: None,
        },
        &mut out,
    )
    .unwrap();

    let out = text(out);
    assert!(out.contains("Found 2 radar(s)"));
    assert!(out.contains("  20231201 ✓ (rendered: "));
    assert!(out.contains("  20231202 ✗ (not rendered)"));
}

#[test]
fn test_list_with_no_snapshots() {
    let input = TempDir::new().unwrap();
    let mut out = Vec::new();
    list::run(
        &ListArgs {
            input: input.path().to_path_buf(),
            output: input.path().join("output"),
            meta: None,
        },
        &mut out,
    )
    .unwrap();
    assert!(text(out).starts_with("No radar files found in"));
}

#[test]
fn test_validate_reports_each_failure() {
    let input = input_dir();
    std::fs::write(
        input.path().join("20231203.yaml"),
        "technologies:\n  - {name: Rust, ring: Adopt, quadrant: Languages}\n",
    )
    .unwrap();
    std::fs::write(input.path().join("20231204.yaml"), "technologies: []\n").unwrap();

    let (mut out, mut err) = (Vec::new(), Vec::new());
    let args = ValidateArgs {
        input: input.path().to_path_buf(),
        meta: None,
        verbose: true,
    };
    let summary = validate::run(&args, &mut out, &mut err).unwrap();

    assert_eq!(summary.passed, 2);
    assert_eq!(summary.failed, 2);
    assert!(!summary.is_ok());

    let out = text(out);
    assert!(out.contains("OK: 20231201.yaml"));
    let err = text(err);
    assert!(err.contains("ERROR: 20231203.yaml"));
    assert!(err.contains("'Rust' is missing 'description'"));
    assert!(err.contains("ERROR: 20231204.yaml"));
    assert!(err.contains("2 file(s) failed, 2 file(s) passed"));
}

#[test]
fn test_validate_all_good() {
    let input = input_dir();
    let (mut out, mut err) = (Vec::new(), Vec::new());
    let args = ValidateArgs {
        input: input.path().to_path_buf(),
        meta: None,
        verbose: false,
    };

    let summary = validate::run(&args, &mut out, &mut err).unwrap();
    assert!(summary.is_ok());
    assert_eq!(text(out), "OK: 2 file(s) processed\n");
    assert!(err.is_empty());
}

#[test]
fn test_exported_template_drives_generation() {
    let input = input_dir();
    let output = TempDir::new().unwrap();
    let template = output.path().join("template.html");

    let mut out = Vec::new();
    export::run(&template, &mut out).unwrap();
    assert!(text(out).starts_with("Template exported to"));

    let mut args = generate_args(input.path(), &output.path().join("site"), GenerateOptions::default());
    args.template = Some(template);
    generate::run(&args, &mut Vec::new()).unwrap();
    assert!(output.path().join("site").join("20231201.html").exists());
}
