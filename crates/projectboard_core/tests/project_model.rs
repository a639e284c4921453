use projectboard_core::{Project, ProjectStatus, ProjectValidationError, DESCRIPTION_MIN_LEN};
use uuid::Uuid;

#[test]
fn project_new_sets_defaults() {
    let project = Project::new("Build X", "A short desc", 3).unwrap();

    assert!(!project.id.is_nil());
    assert_eq!(project.title, "Build X");
    assert_eq!(project.description, "A short desc");
    assert_eq!(project.people, 3);
    assert_eq!(project.status, ProjectStatus::Active);
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Project::with_id(Uuid::nil(), "Build X", "A short desc", 3).unwrap_err();
    assert_eq!(err, ProjectValidationError::NilId);
}

#[test]
fn new_rejects_blank_title() {
    let err = Project::new("   ", "A short desc", 3).unwrap_err();
    assert_eq!(err, ProjectValidationError::EmptyTitle);
}

#[test]
fn new_rejects_short_description() {
    let err = Project::new("Build X", "abcd", 3).unwrap_err();
    assert_eq!(
        err,
        ProjectValidationError::DescriptionTooShort {
            min: DESCRIPTION_MIN_LEN,
            actual: 4,
        }
    );

    // Exactly the minimum length is admitted.
    assert!(Project::new("Build X", "abcde", 3).is_ok());
}

#[test]
fn new_rejects_zero_people() {
    let err = Project::new("Build X", "A short desc", 0).unwrap_err();
    assert_eq!(err, ProjectValidationError::ZeroPeople);
}

#[test]
fn project_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut project = Project::with_id(id, "Build X", "A short desc", 3).unwrap();
    project.status = ProjectStatus::Finished;

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Build X");
    assert_eq!(json["description"], "A short desc");
    assert_eq!(json["people"], 3);
    assert_eq!(json["status"], "finished");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}
