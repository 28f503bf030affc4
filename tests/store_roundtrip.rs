use std::error::Error;
use std::fs;

use ahkbind::paths::Paths;
use ahkbind::settings::Settings;
use ahkbind::store::{Keybind, load_store, save_store};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn missing_store_file_is_empty() -> TestResult {
    let dir = tempfile::tempdir()?;
    let paths = Paths::in_dir(dir.path());

    let binds = load_store(&paths)?;
    assert!(binds.is_empty());

    Ok(())
}

#[test]
fn save_then_load_roundtrips_in_order() -> TestResult {
    let dir = tempfile::tempdir()?;
    let paths = Paths::in_dir(dir.path());
    let settings = Settings::default();

    let binds = vec![
        Keybind::new("F5", "/heal", 250),
        Keybind::new("^b", "brb guys", 0),
        Keybind::new("XButton1", "gg", 1000),
    ];
    save_store(&paths, &settings, &binds)?;

    let loaded = load_store(&paths)?;
    assert_eq!(loaded, binds);

    Ok(())
}

#[test]
fn save_writes_both_artifacts() -> TestResult {
    let dir = tempfile::tempdir()?;
    let paths = Paths::in_dir(dir.path());

    save_store(&paths, &Settings::default(), &[Keybind::new("F5", "/heal", 0)])?;

    assert!(paths.config_file().exists());
    assert!(paths.script_file().exists());

    let config = fs::read_to_string(paths.config_file())?;
    assert!(config.starts_with("# ahkbind configuration"));
    assert!(config.contains("F5|/heal|0"));

    let script = fs::read_to_string(paths.script_file())?;
    assert!(script.contains("F5:: {"));

    Ok(())
}

#[test]
fn hand_edited_file_with_junk_lines_loads_the_good_ones() -> TestResult {
    let dir = tempfile::tempdir()?;
    let paths = Paths::in_dir(dir.path());

    fs::write(
        paths.config_file(),
        "# my notes\n\
         F5|/heal|250\n\
         this line is nonsense\n\
         \n\
         F6|/armor|abc\n",
    )?;

    let binds = load_store(&paths)?;
    assert_eq!(binds.len(), 2);
    assert_eq!(binds[0], Keybind::new("F5", "/heal", 250));
    // Unparsable delay falls back to 0.
    assert_eq!(binds[1], Keybind::new("F6", "/armor", 0));

    Ok(())
}

#[test]
fn last_write_wins() -> TestResult {
    let dir = tempfile::tempdir()?;
    let paths = Paths::in_dir(dir.path());
    let settings = Settings::default();

    save_store(&paths, &settings, &[Keybind::new("F5", "/heal", 0)])?;
    save_store(&paths, &settings, &[Keybind::new("F6", "/armor", 10)])?;

    let loaded = load_store(&paths)?;
    assert_eq!(loaded, vec![Keybind::new("F6", "/armor", 10)]);

    Ok(())
}
