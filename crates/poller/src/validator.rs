//! Shape checks for the status endpoint response.
//!
//! Only the envelope is validated here. Individual homework entries are
//! checked when they are translated into messages.

use serde_json::Value;

use herald_common::error::PollError;

/// Ensure the payload is an object carrying a `homeworks` array and return that array.
pub fn check_response(payload: &Value) -> Result<&[Value], PollError> {
    let object = payload.as_object().ok_or(PollError::TypeMismatch {
        what: "ответа API",
        expected: "словарь",
    })?;

    let homeworks = object
        .get("homeworks")
        .ok_or(PollError::MissingField("homeworks"))?;

    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or(PollError::TypeMismatch {
            what: "поля \"homeworks\"",
            expected: "список",
        })
}

/// Server-reported timestamp to use as the next `from_date`, if any.
pub fn current_date(payload: &Value) -> Option<i64> {
    payload.get("current_date").and_then(Value::as_i64)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_accepts_homeworks_array() {
        let payload = json!({
            "homeworks": [{"homework_name": "hw1", "status": "approved"}],
            "current_date": 1_700_000_000
        });
        let homeworks = check_response(&payload).unwrap();
        assert_eq!(homeworks.len(), 1);
        assert_eq!(homeworks[0]["homework_name"], "hw1");
    }

    #[test]
    fn test_accepts_empty_homeworks() {
        let payload = json!({"homeworks": []});
        assert!(check_response(&payload).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_non_object_payloads() {
        for payload in [json!([]), json!("homeworks"), json!(42), json!(null)] {
            assert!(
                matches!(
                    check_response(&payload),
                    Err(PollError::TypeMismatch { .. })
                ),
                "payload {payload}"
            );
        }
    }

    #[test]
    fn test_rejects_missing_homeworks() {
        let payload = json!({"current_date": 1});
        assert_eq!(
            check_response(&payload),
            Err(PollError::MissingField("homeworks"))
        );
    }

    #[test]
    fn test_rejects_non_array_homeworks() {
        for homeworks in [json!({}), json!("hw1"), json!(null), json!(1)] {
            let payload = json!({ "homeworks": homeworks });
            assert!(matches!(
                check_response(&payload),
                Err(PollError::TypeMismatch { .. })
            ));
        }
    }

    #[test]
    fn test_current_date() {
        assert_eq!(current_date(&json!({"current_date": 1234})), Some(1234));
        assert_eq!(current_date(&json!({"homeworks": []})), None);
        assert_eq!(current_date(&json!({"current_date": "1234"})), None);
        assert_eq!(current_date(&json!([1, 2])), None);
    }
}
