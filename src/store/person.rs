//! Person record and its wire-level request/response shapes.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

/// A stored person record.
///
/// `id` is assigned by the [`IdAllocator`](super::IdAllocator) on insert and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub address: String,
}

impl Person {
    /// Build a record from a mutation payload under the given id
    pub fn from_request(id: i64, request: PersonMutationRequest) -> Self {
        Self {
            id,
            name: request.name,
            age: request.age,
            address: request.address,
        }
    }

    /// Overwrite every mutable field, keeping the id
    pub fn apply(&mut self, request: PersonMutationRequest) {
        self.name = request.name;
        self.age = request.age;
        self.address = request.address;
    }
}

/// Body of `POST /persons` and `PUT /persons/id/{id}`.
///
/// Decoding is lenient the way Go's `encoding/json` is: keys match
/// case-insensitively, absent or `null` fields keep their zero value, a
/// top-level `null` is an all-zero request, and unknown keys are ignored.
/// Repeated keys overwrite in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonMutationRequest {
    pub name: String,
    pub age: i64,
    pub address: String,
}

impl PersonMutationRequest {
    pub fn new(name: impl Into<String>, age: i64, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            address: address.into(),
        }
    }
}

impl<'de> Deserialize<'de> for PersonMutationRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MutationRequestVisitor)
    }
}

struct MutationRequestVisitor;

impl<'de> Visitor<'de> for MutationRequestVisitor {
    type Value = PersonMutationRequest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a person object or null")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(PersonMutationRequest::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(PersonMutationRequest::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut request = PersonMutationRequest::default();

        while let Some(key) = map.next_key::<String>()? {
            match key.to_lowercase().as_str() {
                "name" => {
                    if let Some(name) = map.next_value::<Option<String>>()? {
                        request.name = name;
                    }
                }
                "age" => {
                    if let Some(age) = map.next_value::<Option<i64>>()? {
                        request.age = age;
                    }
                }
                "address" => {
                    if let Some(address) = map.next_value::<Option<String>>()? {
                        request.address = address;
                    }
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(request)
    }
}

/// Decode the first JSON value in `body`; anything after it is ignored.
pub fn decode_mutation_request(body: &[u8]) -> serde_json::Result<PersonMutationRequest> {
    serde_json::Deserializer::from_slice(body)
        .into_iter::<PersonMutationRequest>()
        .next()
        .unwrap_or_else(|| Err(de::Error::custom("empty body")))
}

/// Body of `GET /persons`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPersonsResponse {
    pub total: usize,
    pub persons: Vec<Person>,
}

impl GetPersonsResponse {
    pub fn new(persons: Vec<Person>) -> Self {
        Self {
            total: persons.len(),
            persons,
        }
    }
}

/// Operation tag carried by a [`PersonMutationResponse`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operation {
    Add,
    Edit,
    Delete,
}

/// Envelope returned by every mutating endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonMutationResponse {
    pub operation: Operation,
    pub success: bool,
    pub person: Person,
}

impl PersonMutationResponse {
    pub fn success(operation: Operation, person: Person) -> Self {
        Self {
            operation,
            success: true,
            person,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_missing_fields_default_to_zero() {
        let request: PersonMutationRequest = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        assert_eq!(request, PersonMutationRequest::new("Ada", 0, ""));
    }

    #[test]
    fn test_request_rejects_type_mismatch() {
        let result = serde_json::from_str::<PersonMutationRequest>(r#"{"age":"old"}"#);
        assert!(result.is_err());
        assert!(decode_mutation_request(b"[1, 2]").is_err());
        assert!(decode_mutation_request(br#"{"age": 1.5}"#).is_err());
    }

    #[test]
    fn test_request_top_level_null_is_zero_value() {
        let request = decode_mutation_request(b"null").unwrap();
        assert_eq!(request, PersonMutationRequest::default());
    }

    #[test]
    fn test_request_null_fields_are_skipped() {
        let request = decode_mutation_request(br#"{"name":null,"age":5}"#).unwrap();
        assert_eq!(request, PersonMutationRequest::new("", 5, ""));
    }

    #[test]
    fn test_request_keys_match_case_insensitively() {
        let request =
            decode_mutation_request(br#"{"Name":"Case","AGE":9,"aDdReSs":"Here"}"#).unwrap();
        assert_eq!(request, PersonMutationRequest::new("Case", 9, "Here"));
    }

    #[test]
    fn test_request_repeated_keys_last_wins() {
        let request = decode_mutation_request(br#"{"name":"a","NAME":"b"}"#).unwrap();
        assert_eq!(request.name, "b");
    }

    #[test]
    fn test_request_ignores_trailing_data() {
        let request = decode_mutation_request(br#"{"name":"T"} trailing"#).unwrap();
        assert_eq!(request.name, "T");

        let request = decode_mutation_request(br#"{"name":"T"}{"name":"U"}"#).unwrap();
        assert_eq!(request.name, "T");
    }

    #[test]
    fn test_request_empty_body_fails() {
        assert!(decode_mutation_request(b"").is_err());
        assert!(decode_mutation_request(b"   ").is_err());
        assert!(decode_mutation_request(b"{\"name\":").is_err());
    }

    #[test]
    fn test_envelope_serialization() {
        let person = Person::from_request(4, PersonMutationRequest::new("Jill", 30, "Raccoon City"));
        let envelope = PersonMutationResponse::success(Operation::Add, person);

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            json!({
                "operation": "ADD",
                "success": true,
                "person": {"id": 4, "name": "Jill", "age": 30, "address": "Raccoon City"}
            })
        );
    }

    #[test]
    fn test_operation_tags() {
        assert_eq!(serde_json::to_string(&Operation::Edit).unwrap(), "\"EDIT\"");
        assert_eq!(serde_json::to_string(&Operation::Delete).unwrap(), "\"DELETE\"");
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut person = Person::from_request(7, PersonMutationRequest::new("a", 1, "x"));
        person.apply(PersonMutationRequest::new("b", 2, "y"));
        assert_eq!(person.id, 7);
        assert_eq!(person.name, "b");
        assert_eq!(person.age, 2);
        assert_eq!(person.address, "y");
    }

    #[test]
    fn test_list_response_total() {
        let response = GetPersonsResponse::new(vec![
            Person::from_request(1, PersonMutationRequest::default()),
            Person::from_request(2, PersonMutationRequest::default()),
        ]);
        assert_eq!(response.total, 2);
    }
}
