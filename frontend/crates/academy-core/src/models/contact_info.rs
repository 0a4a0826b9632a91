//! Structured contact details carried inside `StudentApplication::contact_info`.

use crate::Result as CoreErrorResult;

use serde::{Deserialize, Serialize};
use serde_json::Value;

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub father_name: String,
    pub city: String,
    pub age: String,
    pub contact_number: String,
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContactInfoWire {
    #[serde(default)]
    father_name: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    age: Option<Value>,
    #[serde(default)]
    contact_number: Option<String>,
}

impl ContactInfo {
    /// Decode the JSON payload of an application.
    ///
    /// Never fails: legacy applications stored a bare phone number, which
    /// ends up in `contact_number` with every other field set to `N/A`.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<ContactInfoWire>(raw) {
            Ok(wire) => Self {
                father_name: wire.father_name.unwrap_or_else(not_available),
                city: wire.city.unwrap_or_else(not_available),
                age: match wire.age {
                    Some(Value::Number(n)) => n.to_string(),
                    Some(Value::String(s)) => s,
                    _ => not_available(),
                },
                contact_number: wire.contact_number.unwrap_or_else(not_available),
            },
            Err(_) => Self {
                father_name: not_available(),
                city: not_available(),
                age: not_available(),
                contact_number: raw.to_string(),
            },
        }
    }

    /// Encode as the JSON string the backend stores. Numeric ages are written as numbers.
    pub fn encode(&self) -> CoreErrorResult<String> {
        let age = match self.age.trim().parse::<f64>() {
            Ok(n) if n.fract() == 0.0 && n >= 0.0 => Value::from(n as u64),
            Ok(n) => serde_json::Number::from_f64(n)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(self.age.clone())),
            Err(_) => Value::String(self.age.clone()),
        };

        let wire = ContactInfoWire {
            father_name: Some(self.father_name.clone()),
            city: Some(self.city.clone()),
            age: Some(age),
            contact_number: Some(self.contact_number.clone()),
        };

        Ok(serde_json::to_string(&wire)?)
    }

    /// Case-insensitive substring match over father name and city
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.father_name.to_lowercase().contains(needle_lower)
            || self.city.to_lowercase().contains(needle_lower)
    }
}

fn not_available() -> String {
    String::from(NOT_AVAILABLE)
}
