use sls::{DisplayBuilder, Lister, SlsError, SortKey, list, list_targets, visible_width};
use std::fs;
use tempfile::{TempDir, tempdir};

fn scenario() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "0123456789").unwrap();
    fs::write(dir.path().join("b.txt"), "01234567890123456789").unwrap();
    fs::write(dir.path().join(".hidden"), "secret").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/c.txt"), "c").unwrap();
    dir
}

fn lines(text: &str) -> Vec<&str> {
    text.lines().filter(|l| !l.is_empty()).collect()
}

#[test]
fn integration_size_sort_hides_dotfiles() {
    let dir = scenario();
    let config = DisplayBuilder::new()
        .location(dir.path())
        .sort_key(SortKey::Size)
        .one_entry_per_line(true)
        .build();
    let out = list(&config).unwrap();
    assert_eq!(out, "b.txt\na.txt\nsub\n");
}

#[test]
fn integration_grid_size_sort() {
    let dir = scenario();
    let config = DisplayBuilder::new()
        .location(dir.path())
        .sort_key(SortKey::Size)
        .build();
    let out = Lister::new().terminal_width(80).list(&config).unwrap();
    assert_eq!(out, "b.txt  a.txt  sub  ");
}

#[test]
fn integration_all_recurse_by_name() {
    let dir = scenario();
    let config = DisplayBuilder::new()
        .location(dir.path())
        .show_hidden(true)
        .recurse(true)
        .one_entry_per_line(true)
        .build();
    let out = list(&config).unwrap();
    let header = format!("{}:", dir.path().join("sub").display());
    assert_eq!(
        out,
        format!(".hidden\na.txt\nb.txt\nsub\n\n{}\nc.txt\n", header)
    );
}

#[test]
fn integration_recurse_grid_inserts_blank_line() {
    let dir = scenario();
    let config = DisplayBuilder::new()
        .location(dir.path())
        .recurse(true)
        .build();
    let out = Lister::new().terminal_width(80).list(&config).unwrap();
    let header = dir.path().join("sub").display().to_string();
    assert_eq!(out, format!("a.txt  b.txt  sub  \n\n{}:\nc.txt  \n", header));
}

#[test]
fn integration_long_form_one_entry_per_line() {
    let dir = scenario();
    let config = DisplayBuilder::new()
        .location(dir.path())
        .long_form(true)
        .build();
    let out = list(&config).unwrap();
    let rows: Vec<&str> = out.lines().collect();
    assert_eq!(rows.len(), 3);
    assert!(out.ends_with('\n'));
    assert!(!out.contains("  a.txt  "));
    assert!(rows[0].ends_with(" a.txt"));
    assert!(rows[0].contains(" 10 "));
    assert!(rows[2].ends_with(" sub"));
    #[cfg(unix)]
    assert!(rows[2].starts_with('d'));
}

#[test]
fn integration_grid_respects_width() {
    let dir = tempdir().unwrap();
    for i in 0..30 {
        fs::write(dir.path().join(format!("file_{i:02}.txt")), "x").unwrap();
    }
    let config = DisplayBuilder::new()
        .location(dir.path())
        .icons(true)
        .color(true)
        .build();
    let out = Lister::new().terminal_width(40).list(&config).unwrap();
    assert!(out.lines().count() > 1);
    for line in out.lines() {
        assert!(visible_width(line) <= 40, "line too wide: {line:?}");
    }
    assert_eq!(out.matches("file_").count(), 30);
}

#[test]
fn integration_directory_only() {
    let dir = scenario();
    let config = DisplayBuilder::new()
        .location(dir.path().join("sub"))
        .directory_only(true)
        .classify_indicator(true)
        .one_entry_per_line(true)
        .build();
    assert_eq!(list(&config).unwrap(), "sub/\n");
}

#[test]
fn integration_missing_directory_is_unreadable() {
    let dir = tempdir().unwrap();
    let config = DisplayBuilder::new()
        .location(dir.path().join("does-not-exist"))
        .build();
    match list(&config) {
        Err(SlsError::DirectoryUnreadable { path, .. }) => {
            assert!(path.ends_with("does-not-exist"))
        }
        other => panic!("expected DirectoryUnreadable, got {other:?}"),
    }
}

#[test]
fn integration_file_target_is_unreadable() {
    let dir = scenario();
    let config = DisplayBuilder::new()
        .location(dir.path().join("a.txt"))
        .build();
    assert!(matches!(
        list(&config),
        Err(SlsError::DirectoryUnreadable { .. })
    ));
}

#[test]
fn integration_multiple_targets_framed() {
    let dir = scenario();
    let sub = dir.path().join("sub");
    let missing = dir.path().join("missing");
    let config = DisplayBuilder::new().one_entry_per_line(true).build();
    let results = list_targets(&config, &[sub.clone(), missing, dir.path().to_path_buf()]);
    assert_eq!(results.len(), 3);
    assert_eq!(
        results[0].as_ref().unwrap(),
        &format!("{}:\nc.txt\n", sub.display())
    );
    assert!(results[1].is_err());
    let third = results[2].as_ref().unwrap();
    assert!(third.starts_with(&format!("\n{}:\n", dir.path().display())));
    assert_eq!(&lines(third)[1..], &["a.txt", "b.txt", "sub"]);
}

#[test]
fn integration_single_target_has_no_header() {
    let dir = scenario();
    let config = DisplayBuilder::new().one_entry_per_line(true).build();
    let results = list_targets(&config, &[dir.path().join("sub")]);
    assert_eq!(results[0].as_ref().unwrap(), "c.txt\n");
}

#[cfg(unix)]
#[test]
fn integration_symlinks_are_listed_not_followed() {
    use std::os::unix::fs::{PermissionsExt, symlink};
    use std::path::Path;

    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("real")).unwrap();
    fs::write(root.join("real/inner.txt"), "x").unwrap();
    symlink(root, root.join("loop")).unwrap();
    symlink(Path::new("nowhere"), root.join("broken")).unwrap();
    fs::write(root.join("tool"), "#!/bin/sh\n").unwrap();
    fs::set_permissions(root.join("tool"), fs::Permissions::from_mode(0o755)).unwrap();

    let config = DisplayBuilder::new()
        .location(root)
        .recurse(true)
        .classify_indicator(true)
        .one_entry_per_line(true)
        .build();
    let out = list(&config).unwrap();
    assert!(out.contains(&format!("loop -> {}\n", root.display())));
    assert!(out.contains("broken -> nowhere\n"));
    assert!(out.contains("real/\n"));
    assert!(out.contains("tool*\n"));
    assert_eq!(out.matches(":\n").count(), 1);
    assert!(out.contains(&format!("{}:\ninner.txt\n", root.join("real").display())));
}

#[cfg(unix)]
#[test]
fn integration_long_form_reads_link_itself() {
    use std::os::unix::fs::symlink;
    use std::path::Path;

    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("big.bin"), vec![0u8; 5000]).unwrap();
    symlink(Path::new("big.bin"), root.join("link")).unwrap();
    let config = DisplayBuilder::new()
        .location(root)
        .long_form(true)
        .build();
    let out = list(&config).unwrap();
    let link_row = out.lines().find(|l| l.contains("link -> big.bin")).unwrap();
    assert!(link_row.starts_with('l'));
    assert!(!link_row.contains(" 5000 "));
}

#[test]
fn integration_human_readable_long_sizes() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("kb.bin"), vec![1u8; 4096]).unwrap();
    let config = DisplayBuilder::new()
        .location(dir.path())
        .long_form(true)
        .human_readable_sizes(true)
        .build();
    let out = list(&config).unwrap();
    assert!(out.contains("KiB"));
}

#[test]
fn integration_failed_first_target_adds_no_leading_blank_line() {
    let dir = scenario();
    let missing = dir.path().join("missing");
    let sub = dir.path().join("sub");
    let config = DisplayBuilder::new().one_entry_per_line(true).build();
    let results = list_targets(&config, &[missing, sub.clone(), dir.path().join("sub")]);
    assert!(results[0].is_err());
    assert_eq!(
        results[1].as_ref().unwrap(),
        &format!("{}:\nc.txt\n", sub.display())
    );
    assert_eq!(
        results[2].as_ref().unwrap(),
        &format!("\n{}:\nc.txt\n", sub.display())
    );
}
