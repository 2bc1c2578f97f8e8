use super::*;
use molo_core::MigrationStatus;

fn row(version: &str, name: &str) -> StatusRow {
    StatusRow {
        status: MigrationStatus::Down,
        version: version.to_string(),
        name: name.to_string(),
    }
}

#[test]
fn test_format_single_pending() {
    let r = row("20240101000000", "Create users");
    assert_eq!(
        format_pending(&[&r]),
        "You have 1 pending migrations:\n  20240101000000 Create users\n"
    );
}

#[test]
fn test_format_multiple_pending() {
    let a = row("20240101000000", "Create users");
    let b = row("20240202000000", "Add email");
    let out = format_pending(&[&a, &b]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "You have 2 pending migrations:");
    assert_eq!(lines[1], "  20240101000000 Create users");
    assert_eq!(lines[2], "  20240202000000 Add email");
}
