use std::collections::BTreeSet;

use crate::common::{Fixture, ls_in, stdout_lines};

fn as_set(lines: &[String]) -> BTreeSet<&str> {
    lines.iter().map(String::as_str).collect()
}

#[test]
fn short_listing_hides_dot_entries_by_default() {
    let fixture = Fixture::new().file("visible.txt", 1).file(".secret", 1).subdir("dir");
    let lines = stdout_lines(&mut ls_in(&fixture, &[]));
    assert_eq!(as_set(&lines), BTreeSet::from([" visible.txt", " dir"]));
}

#[test]
fn only_hidden_entry_lists_nothing_without_a() {
    let fixture = Fixture::new().file(".hidden", 3);
    assert!(stdout_lines(&mut ls_in(&fixture, &[])).is_empty());

    let lines = stdout_lines(&mut ls_in(&fixture, &["-a"]));
    assert_eq!(as_set(&lines), BTreeSet::from([" .", " ..", " .hidden"]));
}

#[test]
fn almost_all_omits_dot_and_dotdot() {
    let fixture = Fixture::new().file(".hidden", 3).file("shown", 1);
    let lines = stdout_lines(&mut ls_in(&fixture, &["-A"]));
    assert_eq!(as_set(&lines), BTreeSet::from([" .hidden", " shown"]));
}

#[test]
fn size_sort_lists_largest_first() {
    let fixture = Fixture::new().file("b.txt", 10).file("a.txt", 100);
    let lines = stdout_lines(&mut ls_in(&fixture, &["-S"]));
    assert_eq!(lines, ["a.txt 100", "b.txt 10"]);
}

#[test]
fn size_sort_keeps_alphabetical_order_for_ties() {
    let fixture = Fixture::new().file("y", 5).file("x", 5).file("w", 6);
    let lines = stdout_lines(&mut ls_in(&fixture, &["-S"]));
    assert_eq!(lines, ["w 6", "x 5", "y 5"]);
}

#[test]
fn size_sort_respects_hidden_flags() {
    let fixture = Fixture::new().file(".dot", 7).file("plain", 1);
    assert_eq!(stdout_lines(&mut ls_in(&fixture, &["-S"])), ["plain 1"]);
    assert_eq!(stdout_lines(&mut ls_in(&fixture, &["-SA"])), [".dot 7", "plain 1"]);
}

#[test]
fn size_sort_wins_over_long_format() {
    let fixture = Fixture::new().file("only", 4);
    assert_eq!(stdout_lines(&mut ls_in(&fixture, &["-lS"])), ["only 4"]);
}

#[test]
fn long_format_fields() {
    let fixture = Fixture::new().file("data.bin", 42).subdir("sub");
    let lines = stdout_lines(&mut ls_in(&fixture, &["-l"]));
    assert_eq!(lines.len(), 2);

    for line in &lines {
        let fields: Vec<&str> = line.split(' ').collect();
        assert_eq!(fields.len(), 9, "unexpected layout: {line}");
        let mode = fields[0];
        assert_eq!(mode.len(), 10);
        assert!(matches!(mode.as_bytes()[0], b'd' | b'-'));
        for (i, ch) in mode[1..].chars().enumerate() {
            assert!(ch == '-' || ch == ['r', 'w', 'x'][i % 3], "bad mode {mode}");
        }
        assert!(fields[7].contains(':'), "time column missing: {line}");

        match fields[8] {
            "data.bin" => {
                assert!(mode.starts_with('-'));
                assert_eq!(fields[4], "42");
            }
            "sub" => assert!(mode.starts_with('d')),
            other => panic!("unexpected entry {other}"),
        }
    }
}

#[cfg(unix)]
#[test]
fn long_format_reflects_permission_bits() {
    use std::os::unix::fs::PermissionsExt;

    let fixture = Fixture::new().file("locked", 0);
    std::fs::set_permissions(fixture.path().join("locked"), std::fs::Permissions::from_mode(0o640)).unwrap();

    let lines = stdout_lines(&mut ls_in(&fixture, &["-l"]));
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("-rw-r----- 1 "), "got {}", lines[0]);
    assert!(lines[0].ends_with(" locked"));
}

#[test]
fn modification_time_sort_is_newest_first() {
    let fixture = Fixture::new()
        .file("old", 1)
        .file("new", 1)
        .file("mid", 1)
        .aged("old", 3_600)
        .aged("mid", 60)
        .aged("new", 0);
    let lines = stdout_lines(&mut ls_in(&fixture, &["-t"]));
    assert_eq!(lines, [" new", " mid", " old"]);
}

#[test]
fn access_time_sort_differs_from_modification_time_sort() {
    let fixture = Fixture::new()
        .file("written", 1)
        .file("both", 1)
        .file("read", 1)
        .aged("written", 60)
        .aged("both", 1_800)
        .aged("read", 3_600)
        .read_at("written", 7_200)
        .read_at("both", 5_400)
        .read_at("read", 120);

    assert_eq!(stdout_lines(&mut ls_in(&fixture, &["-t"])), [" written", " both", " read"]);
    assert_eq!(stdout_lines(&mut ls_in(&fixture, &["-u"])), [" read", " both", " written"]);
    assert_eq!(stdout_lines(&mut ls_in(&fixture, &["-tu"])), [" read", " both", " written"]);
}

#[test]
fn listing_is_idempotent() {
    let fixture = Fixture::new().file("a", 1).file("b", 2).subdir("c").file(".d", 3);
    let cases: [&[&str]; 5] = [&[], &["-a"], &["-l"], &["-la"], &["-S"]];
    for flags in cases {
        let first = stdout_lines(&mut ls_in(&fixture, flags));
        let second = stdout_lines(&mut ls_in(&fixture, flags));
        assert_eq!(first, second, "flags {flags:?}");
    }
}

#[cfg(unix)]
#[test]
fn dangling_symlink_is_skipped_and_reported() {
    let fixture = Fixture::new().file("real", 2);
    std::os::unix::fs::symlink(fixture.path().join("gone"), fixture.path().join("broken")).unwrap();

    let assert = ls_in(&fixture, &["-l"]).assert().code(1);
    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.ends_with(" real\n"));
    assert!(stderr.contains("broken"), "stderr: {stderr}");
}
