use serde_json::{Value, json};

use crate::models::CreateUser;

const USERS: &[(&str, u8)] = &[("Петр", 16), ("Иван", 18), ("Дарья", 20)];

/// Create payloads for the three sample users.
pub fn users() -> Vec<CreateUser> {
    USERS
        .iter()
        .map(|(name, age)| CreateUser {
            name: Some(Value::String((*name).to_string())),
            age: Some(json!(age)),
        })
        .collect()
}
