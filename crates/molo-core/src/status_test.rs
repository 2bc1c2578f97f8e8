use super::*;
use crate::migration::MigrationScanner;
use crate::migration_version::MigrationVersion;
use std::fs::File;
use std::path::PathBuf;
use tempfile::tempdir;

fn file(version: &str, name: &str) -> MigrationFile {
    MigrationFile {
        version: MigrationVersion::parse(version).unwrap(),
        name: name.to_string(),
        path: PathBuf::from(format!("db/migrations/{version}_{name}.rb")),
        directory: PathBuf::from("db/migrations"),
    }
}

fn recorded(versions: &[&str]) -> AppliedVersions {
    AppliedVersions::Recorded(versions.iter().map(|v| v.to_string()).collect())
}

fn report(outcome: StatusOutcome) -> StatusReport {
    match outcome {
        StatusOutcome::Report(r) => r,
        StatusOutcome::Uninitialized => panic!("expected a report"),
    }
}

#[test]
fn test_applied_file_is_up_and_consumed() {
    let files = vec![file("20230101000000", "create users")];
    let r = report(build_status_report(
        "app",
        &files,
        recorded(&["20230101000000"]),
    ));

    assert_eq!(r.rows.len(), 1);
    assert_eq!(r.rows[0].status, MigrationStatus::Up);
    assert_eq!(r.rows[0].name, "Create users");
    assert!(r.leftover.is_empty());
}

#[test]
fn test_unapplied_file_is_down() {
    let files = vec![file("20230101000000", "create users")];
    let r = report(build_status_report("app", &files, recorded(&[])));

    assert_eq!(r.rows[0].status, MigrationStatus::Down);
    assert_eq!(r.pending().count(), 1);
}

#[test]
fn test_orphan_version_follows_file_rows() {
    let files = vec![file("20230101000000", "create users")];
    let r = report(build_status_report(
        "app",
        &files,
        recorded(&["20230102000000", "20230101000000"]),
    ));

    assert_eq!(r.rows.len(), 2);
    assert_eq!(r.rows[0].version, "20230101000000");
    assert_eq!(
        r.rows[1],
        StatusRow {
            status: MigrationStatus::Up,
            version: "20230102000000".to_string(),
            name: NO_FILE.to_string(),
        }
    );
    assert!(r.rows[1].is_orphan());
    assert_eq!(r.leftover, vec!["20230102000000".to_string()]);
}

#[test]
fn test_no_directories_yields_only_orphans() {
    let r = report(build_status_report(
        "app",
        &[],
        recorded(&["20230103000000", "20230101000000"]),
    ));

    let versions: Vec<&str> = r.rows.iter().map(|row| row.version.as_str()).collect();
    // Store order is preserved for orphans
    assert_eq!(versions, vec!["20230103000000", "20230101000000"]);
    assert!(r.rows.iter().all(|row| row.is_orphan()));
    assert!(r.rows.iter().all(|row| row.status == MigrationStatus::Up));
}

#[test]
fn test_uninitialized_short_circuits() {
    let files = vec![file("20230101000000", "create users")];
    let outcome = build_status_report("app", &files, AppliedVersions::Uninitialized);
    assert_eq!(outcome, StatusOutcome::Uninitialized);
}

#[test]
fn test_uninitialized_differs_from_empty() {
    let outcome = build_status_report("app", &[], recorded(&[]));
    assert!(matches!(outcome, StatusOutcome::Report(ref r) if r.rows.is_empty()));
}

#[test]
fn test_rows_keep_discovery_order() {
    let files = vec![
        file("20230105000000", "later"),
        file("20230101000000", "earlier"),
    ];
    let r = report(build_status_report(
        "app",
        &files,
        recorded(&["20230101000000"]),
    ));
    assert_eq!(r.rows[0].version, "20230105000000");
    assert_eq!(r.rows[0].status, MigrationStatus::Down);
    assert_eq!(r.rows[1].status, MigrationStatus::Up);
}

#[test]
fn test_duplicate_version_first_file_wins() {
    let files = vec![
        file("20230101000000", "from first dir"),
        file("20230101000000", "from second dir"),
    ];
    let r = report(build_status_report(
        "app",
        &files,
        recorded(&["20230101000000"]),
    ));
    assert_eq!(r.rows[0].status, MigrationStatus::Up);
    assert_eq!(r.rows[1].status, MigrationStatus::Down);
}

#[test]
fn test_repeated_applied_version_is_consumed_once() {
    let files = vec![file("20230101000000", "create users")];
    let r = report(build_status_report(
        "app",
        &files,
        recorded(&["20230101000000", "20221231000000", "20230101000000"]),
    ));
    assert_eq!(r.rows.len(), 2);
    assert_eq!(r.rows[0].status, MigrationStatus::Up);
    assert_eq!(r.rows[0].name, "Create users");
    assert_eq!(r.rows[1].version, "20221231000000");
    assert_eq!(r.rows[1].name, NO_FILE);
    assert_eq!(r.leftover, vec!["20221231000000".to_string()]);
}

#[test]
fn test_recorded_report_without_versions_is_all_pending() {
    let files = vec![
        file("20230101000000", "create users"),
        file("20230102000000", "add email"),
    ];
    let r = build_recorded_report("app", &files, Vec::new());
    assert_eq!(r.pending().count(), 2);
    assert!(r.leftover.is_empty());
}

#[test]
fn test_scan_then_report_end_to_end() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("20230101000000_create_users.rb")).unwrap();
    File::create(dir.path().join("garbage.txt")).unwrap();

    let files = MigrationScanner::default()
        .scan(&[dir.path().to_path_buf()])
        .unwrap();
    let r = report(build_status_report(
        "app",
        &files,
        recorded(&["20230101000000"]),
    ));
    assert_eq!(r.rows.len(), 1);
    assert_eq!(r.rows[0].status, MigrationStatus::Up);
}

#[test]
fn test_render_exact_layout() {
    let files = vec![
        file("20230101000000", "create users"),
        file("20230102000000", "add email to users"),
    ];
    let r = report(build_status_report(
        "app_dev",
        &files,
        recorded(&["20230101000000", "20221231000000"]),
    ));

    let expected = concat!(
        "\n",
        "database: app_dev\n",
        "\n",
        " Status   Migration ID    Migration Name\n",
        "--------------------------------------------------\n",
        "   up     20230101000000  Create users\n",
        "  down    20230102000000  Add email to users\n",
        "   up     20221231000000  *** NO FILE ***\n",
        "\n",
    );
    assert_eq!(render_status_table(&r), expected);
}

#[test]
fn test_render_long_names_do_not_shift_columns() {
    let files = vec![
        file("20230101000000", "a very long migration name that goes on and on"),
        file("20230102000000", "x"),
    ];
    let r = report(build_status_report("db", &files, recorded(&[])));
    let rendered = render_status_table(&r);
    let rows: Vec<&str> = rendered
        .lines()
        .filter(|l| l.contains("2023010"))
        .collect();

    assert_eq!(rows.len(), 2);
    for line in rows {
        // status (8) + 2 spaces, then the version always starts at column 10
        assert!(line[10..24].bytes().all(|b| b.is_ascii_digit()));
        assert_eq!(&line[24..26], "  ");
    }
}

#[test]
fn test_status_display_pads() {
    assert_eq!(format!("{:^8}", MigrationStatus::Up), "   up   ");
    assert_eq!(format!("{:^8}", MigrationStatus::Down), "  down  ");
    assert_eq!(MigrationStatus::Down.to_string(), "down");
}

#[test]
fn test_latest_version() {
    assert_eq!(AppliedVersions::Uninitialized.latest(), None);
    assert_eq!(recorded(&[]).latest(), None);
    assert_eq!(
        recorded(&["20230102000000", "20230105000000", "20230101000000"]).latest(),
        Some("20230105000000")
    );
}
