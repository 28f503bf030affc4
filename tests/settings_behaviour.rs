use std::error::Error;
use std::fs;

use ahkbind::interp::detect_interpreter;
use ahkbind::paths::Paths;
use ahkbind::settings::{Settings, load_or_default};
use ahkbind::store::save_store;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn settings_file_drives_the_generated_script() -> TestResult {
    let dir = tempfile::tempdir()?;
    let paths = Paths::in_dir(dir.path());

    fs::write(
        paths.settings_file(),
        r#"
        [interpreter]
        exit_hotkey = "^+!x"

        [script]
        window_class = "MyGameClass"
        window_title = "My Game"
        poll_interval_ms = 750
        "#,
    )?;
    let settings = load_or_default(paths.settings_file())?;

    save_store(&paths, &settings, &[])?;
    let script = fs::read_to_string(paths.script_file())?;

    assert!(script.contains("WinExist(\"ahk_class MyGameClass\")"));
    assert!(script.contains("WinExist(\"My Game\")"));
    assert!(script.contains("SetTimer(CheckConfigUpdate, 750)"));
    assert!(script.contains("^+!x:: {"));

    Ok(())
}

#[test]
fn absent_settings_file_means_defaults() -> TestResult {
    let dir = tempfile::tempdir()?;
    let paths = Paths::in_dir(dir.path());

    let settings = load_or_default(paths.settings_file())?;
    assert_eq!(settings.script.poll_interval_ms, 2000);
    assert_eq!(settings.interpreter.exit_hotkey, "^+!e");

    Ok(())
}

#[test]
fn interpreter_path_override_is_honoured() -> TestResult {
    let dir = tempfile::tempdir()?;
    let paths = Paths::in_dir(dir.path());

    let fake_bin = dir.path().join("my-ahk.exe");
    fs::write(&fake_bin, b"")?;
    fs::write(
        paths.settings_file(),
        format!(
            "[interpreter]\npath = {:?}\n",
            fake_bin.display().to_string()
        ),
    )?;

    let settings = load_or_default(paths.settings_file())?;
    assert_eq!(detect_interpreter(&paths, &settings), Some(fake_bin));

    Ok(())
}

#[test]
fn download_url_default_points_at_official_release() -> TestResult {
    let settings = Settings::default();
    assert_eq!(
        settings.interpreter.download_url,
        "https://www.autohotkey.com/download/ahk-v2.exe"
    );
    Ok(())
}
