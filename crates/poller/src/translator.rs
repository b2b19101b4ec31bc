use serde_json::Value;

use herald_common::error::PollError;
use herald_common::types::{HomeworkRecord, HomeworkStatus};

/// Extract a typed record from one element of the `homeworks` array.
pub fn parse_record(element: &Value) -> Result<HomeworkRecord, PollError> {
    let object = element.as_object().ok_or(PollError::TypeMismatch {
        what: "элемента \"homeworks\"",
        expected: "словарь",
    })?;

    let name = object
        .get("homework_name")
        .filter(|v| !v.is_null())
        .ok_or(PollError::MissingField("homework_name"))?
        .as_str()
        .ok_or(PollError::TypeMismatch {
            what: "поля \"homework_name\"",
            expected: "строка",
        })?;

    let status = object
        .get("status")
        .filter(|v| !v.is_null())
        .ok_or(PollError::MissingField("status"))?
        .as_str()
        .ok_or(PollError::TypeMismatch {
            what: "поля \"status\"",
            expected: "строка",
        })?;

    let status = HomeworkStatus::from_key(status).ok_or_else(|| PollError::UnknownStatus {
        status: status.to_string(),
        homework: name.to_string(),
    })?;

    tracing::debug!(homework = name, status = %status, "Parsed homework status");

    Ok(HomeworkRecord {
        name: name.to_string(),
        status,
    })
}

/// Build the notification text for one element of the `homeworks` array.
pub fn parse_status(element: &Value) -> Result<String, PollError> {
    parse_record(element).map(|record| record.message())
}
