use actix_web::{HttpResponse, Responder};
use serde::Serialize;
use serde_json::{Value, json};

use super::error::{AppError, Res};

pub struct Success;
impl Success {
    pub fn created<T: Serialize>(body: T) -> Res<impl Responder> {
        Ok(HttpResponse::Created().json(envelope(body)?))
    }
    pub fn ok<T: Serialize>(body: T) -> Res<impl Responder> {
        Ok(HttpResponse::Ok().json(envelope(body)?))
    }
}

/// Every success payload carries `"success": true` next to its fields.
fn envelope<T: Serialize>(body: T) -> Res<Value> {
    let mut value = serde_json::to_value(body).map_err(|e| AppError::Internal(e.to_string()))?;
    match value.as_object_mut() {
        Some(map) => {
            map.insert("success".to_string(), Value::Bool(true));
            Ok(value)
        }
        None => Ok(json!({ "success": true, "data": value })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct UnsyncPayload {
        count: u64,
    }

    #[test]
    fn envelope_merges_success_into_objects() {
        let value = envelope(UnsyncPayload { count: 3 }).unwrap();
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["count"], json!(3));
    }

    #[test]
    fn envelope_wraps_non_objects() {
        let value = envelope(vec![1, 2, 3]).unwrap();
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["data"], json!([1, 2, 3]));
    }
}
