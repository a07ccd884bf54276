use std::fmt::{Display, Formatter, Result};

use uuid::Uuid;

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
  pub fn new() -> Self {
    Self(Uuid::new_v4())
  }
}

impl Default for EventId {
  fn default() -> Self {
    Self::new()
  }
}

impl Display for EventId {
  fn fmt(&self, formatter: &mut Formatter) -> Result {
    formatter.write_fmt(format_args!("{}", self.0))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn serializes_as_the_bare_uuid() {
    let id = EventId::new();
    let json = serde_json::to_string(&id).unwrap();

    assert_eq!(json, format!("\"{id}\""));
    assert_eq!(serde_json::from_str::<EventId>(&json).unwrap(), id);
    assert_ne!(EventId::new(), id);
  }
}
