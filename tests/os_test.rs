/*!
 * OS Facade Tests
 * Filesystem, environment, shell, process, and platform wrappers
 */

use pretty_assertions::assert_eq;
use serial_test::serial;
use std::fs::File;
use std::io::Write;
use sysport::os::{env, fs, platform, process, shell};
use sysport::{OsError, PlatformInfo};
use tempfile::tempdir;

// ----------------------------------------------------------------------------
// Filesystem
// ----------------------------------------------------------------------------

#[test]
fn test_exists_and_is_dir() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("probe.txt");

    assert!(fs::exists(dir.path()));
    assert!(fs::is_dir(dir.path()));
    assert!(!fs::exists(&file_path));

    File::create(&file_path).unwrap();
    assert!(fs::exists(&file_path));
    assert!(!fs::is_dir(&file_path));
}

#[test]
fn test_remove_file_and_empty_dir() {
    let dir = tempdir().unwrap();

    let file_path = dir.path().join("victim.txt");
    File::create(&file_path).unwrap();
    fs::remove(&file_path).unwrap();
    assert!(!fs::exists(&file_path));

    let sub = dir.path().join("empty");
    std::fs::create_dir(&sub).unwrap();
    fs::remove(&sub).unwrap();
    assert!(!fs::exists(&sub));
}

#[test]
fn test_remove_missing_path() {
    let dir = tempdir().unwrap();
    let ghost = dir.path().join("ghost");

    match fs::remove(&ghost) {
        Err(OsError::NotFound(path)) => assert_eq!(path, ghost),
        other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_rename_moves_and_replaces() {
    let dir = tempdir().unwrap();
    let from = dir.path().join("from.txt");
    let to = dir.path().join("to.txt");

    let mut file = File::create(&from).unwrap();
    file.write_all(b"payload").unwrap();
    File::create(&to).unwrap();

    fs::rename(&from, &to).unwrap();
    assert!(!fs::exists(&from));
    assert_eq!(std::fs::read(&to).unwrap(), b"payload");
}

#[test]
fn test_list_dir_names() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("a.txt")).unwrap();
    File::create(dir.path().join("b.txt")).unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();

    let mut names = fs::list_dir(dir.path()).unwrap();
    names.sort();
    assert_eq!(names, vec!["a.txt", "b.txt", "sub"]);
}

#[test]
fn test_list_dir_rejects_files() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("flat.txt");
    File::create(&file_path).unwrap();

    assert!(matches!(
        fs::list_dir(&file_path),
        Err(OsError::NotADirectory(_))
    ));
}

// ----------------------------------------------------------------------------
// Environment and working directory
// ----------------------------------------------------------------------------

#[test]
#[serial]
fn test_env_var_lookup() {
    std::env::set_var("SYSPORT_TEST_VAR", "present");
    assert_eq!(env::var("SYSPORT_TEST_VAR").as_deref(), Some("present"));

    std::env::remove_var("SYSPORT_TEST_VAR");
    assert_eq!(env::var("SYSPORT_TEST_VAR"), None);
}

#[test]
#[serial]
fn test_cwd_roundtrip() {
    let original = env::cwd().unwrap();
    let dir = tempdir().unwrap();

    env::set_cwd(dir.path()).unwrap();
    assert_eq!(
        env::cwd().unwrap().canonicalize().unwrap(),
        dir.path().canonicalize().unwrap()
    );

    env::set_cwd(&original).unwrap();
    assert_eq!(env::cwd().unwrap(), original);
}

// ----------------------------------------------------------------------------
// Shell execution
// ----------------------------------------------------------------------------

#[test]
fn test_shell_exit_codes() {
    assert_eq!(shell::run("true").unwrap(), 0);
    assert_eq!(shell::run("exit 7").unwrap(), 7);
}

#[test]
fn test_shell_missing_command() {
    // sh reports command-not-found as 127
    assert_eq!(shell::run("definitely-not-a-command-xyz").unwrap(), 127);
}

// ----------------------------------------------------------------------------
// Process identity
// ----------------------------------------------------------------------------

#[test]
fn test_args_and_pid() {
    assert!(!process::args().is_empty());
    assert!(process::pid() > 0);
}

#[test]
fn test_exe_path_points_at_file() {
    let path = process::exe_path().unwrap();
    assert!(path.is_absolute());
    assert!(fs::exists(&path));
}

#[test]
fn test_cpu_time_is_monotonic() {
    let before = process::cpu_time().unwrap();

    // Burn a little CPU so the counters have something to show
    let mut acc = 0u64;
    for i in 0..5_000_000u64 {
        acc = acc.wrapping_add(std::hint::black_box(i));
    }
    std::hint::black_box(acc);

    let after = process::cpu_time().unwrap();
    assert!(after.total() >= before.total());
}

// ----------------------------------------------------------------------------
// Platform metadata
// ----------------------------------------------------------------------------

#[test]
fn test_platform_info_shape() {
    let info = PlatformInfo::current();
    assert_eq!(info.family, "unix");
    assert_eq!(info.pointer_width, usize::BITS);
    assert!(info.endianness == "little" || info.endianness == "big");
}

#[test]
fn test_platform_info_serialization() {
    let info = PlatformInfo::current();
    let json = serde_json::to_string(&info).unwrap();
    let parsed: PlatformInfo = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, info);
}

#[test]
fn test_limits_positive() {
    assert!(platform::max_string_bytes() > 0);
    assert!(platform::max_array_len() > 0);
}
