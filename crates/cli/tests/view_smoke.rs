#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::process::Command;

fn temp_vault(test_name: &str) -> PathBuf {
    let base = std::env::temp_dir();
    let pid = std::process::id();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let dir = base.join(format!("tasklens_{test_name}_{pid}_{nonce}"));
    std::fs::create_dir_all(&dir).expect("create temp vault");
    dir
}

fn run(dir: &PathBuf, args: &[&str]) -> (String, String, bool) {
    let exe = env!("CARGO_BIN_EXE_tasklens");
    let output = Command::new(exe)
        .arg("--vault")
        .arg(dir)
        .args(args)
        .output()
        .expect("run tasklens");
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

#[test]
fn renders_own_and_tagged_tasks_in_order() {
    let dir = temp_vault("order");
    std::fs::write(
        dir.join("Project A.md"),
        "---\naliases:\n  - \"#projA\"\n---\n- [ ] Buy parts #projA\n- [x] already done #projA\n",
    )
    .expect("write focal page");
    std::fs::write(
        dir.join("Notes.md"),
        "## Backlog\n- [ ] Order cables #projA ⏫\n- [ ] unrelated errand\n",
    )
    .expect("write notes");

    // Tagged-pages stays off here: the inline #projA in Notes would
    // otherwise qualify the whole Notes page, unrelated errand included.
    let (stdout, stderr, ok) = run(&dir, &["--page", "Project A", "--no-tagged-pages"]);
    assert!(ok, "stderr={stderr}");
    assert!(stdout.contains("From Project A:"), "got: {stdout}");
    assert!(stdout.contains("*2 tasks*"), "got: {stdout}");
    assert!(stdout.contains("Project A (this page)"), "got: {stdout}");
    assert!(stdout.contains("- [ ] Buy parts #projA"));
    assert!(stdout.contains("- [ ] Order cables #projA ⏫"));
    assert!(!stdout.contains("already done"));
    assert!(!stdout.contains("unrelated errand"));

    // Own-page tasks come before tagged tasks from elsewhere.
    let own = stdout.find("Buy parts").expect("own task");
    let tagged = stdout.find("Order cables").expect("tagged task");
    assert!(own < tagged);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_page_reports_inline_error_and_exits_clean() {
    let dir = temp_vault("missing");
    std::fs::write(dir.join("Only.md"), "- [ ] something\n").expect("write page");

    let (stdout, _, ok) = run(&dir, &["--page", "Nope"]);
    assert!(ok);
    assert!(stdout.contains("**ERROR** No page Nope"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn flags_toggle_sources_and_rendering() {
    let dir = temp_vault("flags");
    std::fs::write(
        dir.join("Project A.md"),
        "---\naliases:\n  - \"#projA\"\n---\n- [ ] own task\n",
    )
    .expect("write focal page");
    std::fs::write(dir.join("Log.md"), "- [ ] logged #projA\n").expect("write log");

    let (stdout, _, ok) = run(
        &dir,
        &[
            "--page",
            "Project A",
            "--no-tagged-anywhere",
            "--no-tagged-pages",
            "--no-summary",
            "--no-sections",
        ],
    );
    assert!(ok);
    assert!(stdout.contains("- [ ] own task"));
    assert!(!stdout.contains("logged"));
    assert!(!stdout.contains("tasks*"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn params_file_drives_the_view() {
    let dir = temp_vault("params");
    std::fs::write(dir.join("Focus.md"), "- [ ] from params run\n").expect("write page");
    let params = dir.join("params.json");
    std::fs::write(&params, r#"{"thePage":"Focus","summary":false}"#).expect("write params");

    let (stdout, stderr, ok) = run(
        &dir,
        &["--params", params.to_str().expect("utf8 path")],
    );
    assert!(ok, "stderr={stderr}");
    assert!(stdout.contains("- [ ] from params run"), "got: {stdout}");
    assert!(!stdout.contains("tasks*"));

    std::fs::remove_dir_all(&dir).ok();
}
