use chrono::NaiveDate;
use taskdeck_core::{Task, TaskId};

#[test]
fn task_new_sets_defaults() {
    let deadline = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    let task = Task::new("", deadline);

    assert!(!task.id.as_str().is_empty());
    assert_eq!(task.description, "");
    assert_eq!(task.deadline, deadline);
    assert!(!task.done);
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let mut task = Task::with_id(
        "3b1f7a52-1c1e-4c59-9d0c-2f1f3f6a7b10",
        "file taxes",
        NaiveDate::from_ymd_opt(2024, 4, 15).unwrap(),
    )
    .unwrap();
    task.done = true;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "3b1f7a52-1c1e-4c59-9d0c-2f1f3f6a7b10",
            "description": "file taxes",
            "deadline": "2024-04-15",
            "done": true
        })
    );

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn non_uuid_ids_survive_decoding() {
    let value = serde_json::json!({
        "id": "legacy-7",
        "description": "",
        "deadline": "2023-12-31",
        "done": false
    });

    let task: Task = serde_json::from_value(value).unwrap();
    assert_eq!(task.id, TaskId::from("legacy-7"));
}

#[test]
fn deserialize_rejects_non_iso_deadline() {
    let value = serde_json::json!({
        "id": "a",
        "description": "",
        "deadline": "01/02/2024",
        "done": false
    });

    assert!(serde_json::from_value::<Task>(value).is_err());
}
