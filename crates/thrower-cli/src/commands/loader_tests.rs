use std::io::Write;
use std::path::Path;

use super::loader::{LoadError, load_program, origin};

#[test]
fn reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "sleep 1\n# done\n").unwrap();

    assert_eq!(load_program(file.path()).unwrap(), "sleep 1\n# done\n");
}

#[test]
fn missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.thr");

    let err = load_program(&path).unwrap_err();
    assert!(matches!(err, LoadError::File { .. }));
    assert!(err.to_string().starts_with(&format!("failed to read '{}'", path.display())));
}

#[test]
fn origin_names() {
    assert_eq!(origin(Path::new("-")), "<stdin>");
    assert_eq!(origin(Path::new("probes/a.thr")), "probes/a.thr");
}
