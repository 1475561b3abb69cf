use serde::Deserialize;
use serde_json::Value;

// Failure bodies look like `{"detail": ...}`. Validation failures put a list of objects in
// `detail` instead of a string; only string details are shown to the user.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
  #[serde(default)]
  detail: Option<Value>,
}

pub fn detail(body: &str) -> Option<String> {
  serde_json::from_str::<ErrorPayload>(body)
    .ok()
    .and_then(|payload| payload.detail)
    .and_then(|detail| match detail {
      Value::String(message) if !message.is_empty() => Some(message),
      _ => None,
    })
}

#[cfg(test)]
mod test {
  use super::detail;

  #[test]
  fn string_detail() {
    assert_eq!(
      detail(r#"{"detail":"name required"}"#),
      Some(String::from("name required"))
    );
  }

  #[test]
  fn structured_detail() {
    assert_eq!(detail(r#"{"detail":[{"loc":["body"],"msg":"bad"}]}"#), None);
  }

  #[test]
  fn missing_or_garbage() {
    assert_eq!(detail(r#"{}"#), None);
    assert_eq!(detail("<html>bad gateway</html>"), None);
    assert_eq!(detail(""), None);
  }
}
