use std::{fs, path::PathBuf};

use codepost_powertools::{
    grading::{DEFAULT_MAPPING_FILENAME, IdRow, export_ids, id_rows, ids_mapping},
    output::OutputRoot,
    types::{AssignmentRef, CourseRef, Roster, SubmissionRecord},
};
use uuid::Uuid;

fn temp_root() -> PathBuf {
    let root = std::env::temp_dir().join(format!("powertools-ids-{}", Uuid::new_v4()));
    fs::create_dir_all(&root).expect("create temp root");
    root
}

fn submissions() -> Vec<SubmissionRecord> {
    vec![
        SubmissionRecord::new(100, vec!["alice@school.edu".to_string()]),
        // a group submission: both students share the id
        SubmissionRecord::new(
            200,
            vec!["bob@school.edu".to_string(), "carol@school.edu".to_string()],
        ),
    ]
}

#[test]
fn maps_only_submitted_students_without_a_roster() {
    let ids = ids_mapping(&submissions(), None);

    assert_eq!(ids.len(), 3);
    assert_eq!(ids["alice@school.edu"], Some(100));
    assert_eq!(ids["bob@school.edu"], Some(200));
    assert_eq!(ids["carol@school.edu"], Some(200));
}

#[test]
fn a_roster_adds_students_without_submissions() {
    let roster = Roster::new(vec![
        "alice@school.edu".to_string(),
        "bob@school.edu".to_string(),
        "carol@school.edu".to_string(),
        "dave@school.edu".to_string(),
    ]);
    let ids = ids_mapping(&submissions(), Some(&roster));

    assert_eq!(ids.len(), 4);
    assert_eq!(ids["alice@school.edu"], Some(100));
    assert_eq!(ids["dave@school.edu"], None);
}

#[test]
fn an_empty_submission_list_maps_the_roster_to_nothing() {
    let roster = Roster::new(vec!["alice@school.edu".to_string()]);
    let ids = ids_mapping(&[], Some(&roster));

    assert_eq!(ids.len(), 1);
    assert_eq!(ids["alice@school.edu"], None);

    assert!(ids_mapping(&[], None).is_empty());
}

#[test]
fn rows_follow_submission_order_with_one_row_per_student() {
    let rows = id_rows(&submissions());

    assert_eq!(rows, vec![
        IdRow {
            submission_id: 100,
            email:         "alice@school.edu".to_string(),
        },
        IdRow {
            submission_id: 200,
            email:         "bob@school.edu".to_string(),
        },
        IdRow {
            submission_id: 200,
            email:         "carol@school.edu".to_string(),
        },
    ]);
}

#[test]
fn exports_under_the_assignment_directory() {
    let base = temp_root();
    let root = OutputRoot::new(&base);
    let course = CourseRef::new("COS126", "F2022");
    let assignment = AssignmentRef::new("Hello");

    let path =
        export_ids(&root, &course, &assignment, &submissions(), None).expect("export ids");
    assert_eq!(
        path,
        base.join("COS126_F2022").join("Hello").join(DEFAULT_MAPPING_FILENAME)
    );

    let contents = fs::read_to_string(&path).expect("read back");
    assert_eq!(
        contents,
        "submission_id,email\n100,alice@school.edu\n200,bob@school.edu\n200,carol@school.edu\n"
    );

    let _ = fs::remove_dir_all(base);
}

#[test]
fn exports_to_a_caller_supplied_file_name() {
    let base = temp_root();
    let root = OutputRoot::new(&base);
    let course = CourseRef::new("COS126", "F2022");
    let assignment = AssignmentRef::new("Hello");

    let path = export_ids(&root, &course, &assignment, &submissions(), Some("mapping.csv"))
        .expect("export ids");
    assert!(path.ends_with("COS126_F2022/Hello/mapping.csv"));
    assert!(path.exists());

    let _ = fs::remove_dir_all(base);
}
