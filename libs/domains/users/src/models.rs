use collection_store::{Record, StoreResult, field};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

pub const AGE_MESSAGE: &str = "integer from 0 to 150";

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Six-character alphanumeric identifier assigned on creation
    #[schema(example = "Qx81bT")]
    pub id: String,
    #[schema(example = "Дарья")]
    pub name: String,
    #[schema(example = 20)]
    pub age: i64,
}

/// DTO for creating a new user
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[serde(default, deserialize_with = "field::present")]
    #[validate(
        required(message = "required string"),
        custom(function = "field::required_text")
    )]
    #[schema(value_type = String, required = true, example = "Дарья")]
    pub name: Option<Value>,

    #[serde(default, deserialize_with = "field::present")]
    #[validate(
        required(message = "integer from 0 to 150"),
        custom(function = "age_in_range")
    )]
    #[schema(value_type = i64, required = true, example = 20)]
    pub age: Option<Value>,
}

/// DTO for partially updating a user
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[serde(default, deserialize_with = "field::present")]
    #[validate(custom(function = "field::required_text"))]
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,

    #[serde(default, deserialize_with = "field::present")]
    #[validate(custom(function = "age_in_range"))]
    #[schema(value_type = Option<i64>)]
    pub age: Option<Value>,
}

fn age_in_range(value: &Value) -> Result<(), ValidationError> {
    field::integer_in(value, 0..=150, AGE_MESSAGE)
}

impl Record for User {
    type Create = CreateUser;
    type Patch = UpdateUser;

    const KIND: &'static str = "User";
    const FIELDS: &'static [&'static str] = &["name", "age"];

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, input: CreateUser) -> StoreResult<Self> {
        Ok(Self {
            id,
            name: field::text("name", input.name.as_ref())?,
            age: field::integer("age", input.age.as_ref())?,
        })
    }

    fn has_changes(patch: &UpdateUser) -> bool {
        patch.name.is_some() || patch.age.is_some()
    }

    fn apply_patch(&mut self, patch: UpdateUser) -> StoreResult<()> {
        if let Some(name) = patch.name {
            self.name = field::text("name", Some(&name))?;
        }
        if let Some(age) = patch.age {
            self.age = field::integer("age", Some(&age))?;
        }
        Ok(())
    }
}
