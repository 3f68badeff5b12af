use serde_json::value::{Map, Value};

///Parses a whole response body and returns it when it is a single JSON object.
///The chart endpoints answer with one object of parallel arrays: {"day": [...], "sum_h": [...]}
pub fn parse_json_object_root(body: &[u8]) -> Result<Map<String, Value>, String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err("JSON is empty".to_string());
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(root)) => Ok(root),
        Ok(_) => Err("JSON root is not an object".to_string()),
        Err(e) => Err(format!("Error deserializing JSON root: {}", e)),
    }
}
