use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::db::{Person, PersonInput};
use crate::{PeopleError, router::PeopleState};

/// GET /people -> every stored person, `[]` when the table is empty.
pub async fn list_people(
    State(state): State<PeopleState>,
) -> Result<Json<Vec<Person>>, PeopleError> {
    let people = state.store.list().await?;
    Ok(Json(people))
}

/// GET /people/{id}
pub async fn get_person(
    State(state): State<PeopleState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Person>, PeopleError> {
    let id = parse_id(&raw_id)?;
    let person = state.store.get_by_id(id).await?;
    Ok(Json(person))
}

/// POST /people -> the created person, including the id storage assigned.
pub async fn create_person(
    State(state): State<PeopleState>,
    body: Bytes,
) -> Result<Json<Person>, PeopleError> {
    let input = decode_body(&body)?;
    let person = state.store.insert(input).await?;
    info!(id = person.id, "person created");
    Ok(Json(person))
}

/// PUT /people/{id} -> 200 with an empty body, whether or not a row matched.
pub async fn update_person(
    State(state): State<PeopleState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, PeopleError> {
    let id = parse_id(&raw_id)?;
    let input = decode_body(&body)?;
    let changed = state.store.update_by_id(id, &input).await?;
    info!(id, changed, "person updated");
    Ok(StatusCode::OK)
}

/// DELETE /people/{id} -> `"User deleted"`, or 404 when nothing was removed.
pub async fn delete_person(
    State(state): State<PeopleState>,
    Path(raw_id): Path<String>,
) -> Result<Json<&'static str>, PeopleError> {
    let id = parse_id(&raw_id)?;
    if state.store.delete_by_id(id).await? == 0 {
        return Err(PeopleError::NotFound);
    }
    info!(id, "person deleted");
    Ok(Json("User deleted"))
}

fn parse_id(raw: &str) -> Result<i64, PeopleError> {
    raw.parse().map_err(|_| PeopleError::InvalidId(raw.to_string()))
}

/// Decode the first JSON value of the body, whatever the request's
/// content-type says. It must be an object or `null` (an empty input); any
/// bytes after that value are not read.
fn decode_body(body: &[u8]) -> Result<PersonInput, PeopleError> {
    let mut de = serde_json::Deserializer::from_slice(body);
    let Some(fields) = Option::<Map<String, Value>>::deserialize(&mut de)? else {
        return Ok(PersonInput::default());
    };
    Ok(serde_json::from_value(Value::Object(fields))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_rejects_non_numeric() {
        assert_eq!(parse_id("17").unwrap(), 17);
        assert!(matches!(parse_id("abc"), Err(PeopleError::InvalidId(s)) if s == "abc"));
        assert!(matches!(parse_id(""), Err(PeopleError::InvalidId(_))));
    }

    #[test]
    fn decode_body_reports_malformed_json() {
        assert!(matches!(decode_body(b"{\"name\":"), Err(PeopleError::Json(_))));
        assert!(matches!(decode_body(b""), Err(PeopleError::Json(_))));
        let input = decode_body(br#"{"name":"Ann"}"#).unwrap();
        assert_eq!(input.name(), "Ann");
        assert_eq!(input.email(), "");
    }

    #[test]
    fn decode_body_requires_an_object() {
        assert!(matches!(decode_body(br#"["Ann","a@x"]"#), Err(PeopleError::Json(_))));
        assert!(matches!(decode_body(b"\"Ann\""), Err(PeopleError::Json(_))));
        assert!(matches!(decode_body(b"42"), Err(PeopleError::Json(_))));
        assert!(matches!(
            decode_body(br#"{"id":"abc","name":"x"}"#),
            Err(PeopleError::Json(_))
        ));
    }

    #[test]
    fn decode_body_reads_only_the_first_value() {
        assert_eq!(decode_body(b"null").unwrap(), PersonInput::default());

        let input = decode_body(br#"{"name":"x"} {"a":1}"#).unwrap();
        assert_eq!(input.name(), "x");

        let input = decode_body(br#"{"email":"e@x"}garbage"#).unwrap();
        assert_eq!(input.email(), "e@x");
    }
}
