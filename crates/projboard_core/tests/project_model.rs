use projboard_core::{Project, ProjectStatus};
use uuid::Uuid;

#[test]
fn project_new_sets_defaults() {
    let project = Project::new("Build API", "Design and build", 3);

    assert!(!project.id.is_nil());
    assert_eq!(project.title, "Build API");
    assert_eq!(project.description, "Design and build");
    assert_eq!(project.number_of_people, 3);
    assert_eq!(project.status, ProjectStatus::Active);
    assert!(project.is_active());
}

#[test]
fn new_projects_get_distinct_ids() {
    let first = Project::new("one", "first of two", 1);
    let second = Project::new("two", "second of two", 1);
    assert_ne!(first.id, second.id);
}

#[test]
fn status_toggled_flips_between_the_two_buckets() {
    assert_eq!(ProjectStatus::Active.toggled(), ProjectStatus::Finished);
    assert_eq!(ProjectStatus::Finished.toggled(), ProjectStatus::Active);
}

#[test]
fn status_tags_are_stable() {
    assert_eq!(ProjectStatus::Active.as_str(), "active");
    assert_eq!(ProjectStatus::Finished.as_str(), "finished");
}

#[test]
fn project_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut project = Project::with_id(id, "Ship it", "Cut the release", 2);
    project.status = ProjectStatus::Finished;

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Ship it");
    assert_eq!(json["description"], "Cut the release");
    assert_eq!(json["number_of_people"], 2);
    assert_eq!(json["status"], "finished");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}
