use collection_store::{Record, StoreResult, field};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

pub const RATING_MESSAGE: &str = "number from 0 to 5";
pub const IMAGE_MESSAGE: &str = "URL string";

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Six-character alphanumeric identifier assigned on creation
    #[schema(example = "aZ3k9Q")]
    pub id: String,
    #[schema(example = "Каркассон")]
    pub name: String,
    #[schema(example = "Стратегия")]
    pub category: String,
    pub description: String,
    #[schema(example = 1890)]
    pub price: f64,
    #[schema(example = 22)]
    pub stock: i64,
    /// Average rating from 0 to 5
    #[schema(example = 4.6)]
    pub rating: Option<f64>,
    /// Picture URL
    pub image: Option<String>,
}

/// DTO for creating a new product
///
/// Fields stay as raw JSON until validated so that `"12"` and `12` both count
/// as a number and a wrong type is reported per field.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[serde(default, deserialize_with = "field::present")]
    #[validate(
        required(message = "required string"),
        custom(function = "field::required_text")
    )]
    #[schema(value_type = String, required = true, example = "Каркассон")]
    pub name: Option<Value>,

    #[serde(default, deserialize_with = "field::present")]
    #[validate(
        required(message = "required string"),
        custom(function = "field::required_text")
    )]
    #[schema(value_type = String, required = true, example = "Стратегия")]
    pub category: Option<Value>,

    #[serde(default, deserialize_with = "field::present")]
    #[validate(
        required(message = "required string"),
        custom(function = "field::required_text")
    )]
    #[schema(value_type = String, required = true)]
    pub description: Option<Value>,

    #[serde(default, deserialize_with = "field::present")]
    #[validate(
        required(message = "non-negative number"),
        custom(function = "field::non_negative_number")
    )]
    #[schema(value_type = f64, required = true, example = 1890)]
    pub price: Option<Value>,

    #[serde(default, deserialize_with = "field::present")]
    #[validate(
        required(message = "non-negative integer"),
        custom(function = "field::non_negative_integer")
    )]
    #[schema(value_type = i64, required = true, example = 22)]
    pub stock: Option<Value>,

    #[serde(default, deserialize_with = "field::present")]
    #[validate(custom(function = "rating_in_range"))]
    #[schema(value_type = Option<f64>, example = 4.6)]
    pub rating: Option<Value>,

    #[serde(default, deserialize_with = "field::present")]
    #[validate(custom(function = "image_url"))]
    #[schema(value_type = Option<String>)]
    pub image: Option<Value>,
}

/// DTO for partially updating a product
///
/// Absent fields are left untouched. An explicit `null` clears `rating` or
/// `image`; on required fields it is a violation.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[serde(default, deserialize_with = "field::present")]
    #[validate(custom(function = "field::required_text"))]
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,

    #[serde(default, deserialize_with = "field::present")]
    #[validate(custom(function = "field::required_text"))]
    #[schema(value_type = Option<String>)]
    pub category: Option<Value>,

    #[serde(default, deserialize_with = "field::present")]
    #[validate(custom(function = "field::required_text"))]
    #[schema(value_type = Option<String>)]
    pub description: Option<Value>,

    #[serde(default, deserialize_with = "field::present")]
    #[validate(custom(function = "field::non_negative_number"))]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Value>,

    #[serde(default, deserialize_with = "field::present")]
    #[validate(custom(function = "field::non_negative_integer"))]
    #[schema(value_type = Option<i64>)]
    pub stock: Option<Value>,

    #[serde(default, deserialize_with = "field::present")]
    #[validate(custom(function = "rating_in_range"))]
    #[schema(value_type = Option<f64>)]
    pub rating: Option<Value>,

    #[serde(default, deserialize_with = "field::present")]
    #[validate(custom(function = "image_url"))]
    #[schema(value_type = Option<String>)]
    pub image: Option<Value>,
}

fn rating_in_range(value: &Value) -> Result<(), ValidationError> {
    field::nullable_number_in(value, 0.0..=5.0, RATING_MESSAGE)
}

fn image_url(value: &Value) -> Result<(), ValidationError> {
    field::nullable_text(value, IMAGE_MESSAGE)
}

impl Record for Product {
    type Create = CreateProduct;
    type Patch = UpdateProduct;

    const KIND: &'static str = "Product";
    const FIELDS: &'static [&'static str] = &[
        "name",
        "category",
        "description",
        "price",
        "stock",
        "rating",
        "image",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, input: CreateProduct) -> StoreResult<Self> {
        Ok(Self {
            id,
            name: field::text("name", input.name.as_ref())?,
            category: field::text("category", input.category.as_ref())?,
            description: field::text("description", input.description.as_ref())?,
            price: field::number("price", input.price.as_ref())?,
            stock: field::integer("stock", input.stock.as_ref())?,
            rating: field::nullable_number("rating", input.rating.as_ref())?,
            image: field::nullable_string("image", input.image.as_ref())?,
        })
    }

    fn has_changes(patch: &UpdateProduct) -> bool {
        patch.name.is_some()
            || patch.category.is_some()
            || patch.description.is_some()
            || patch.price.is_some()
            || patch.stock.is_some()
            || patch.rating.is_some()
            || patch.image.is_some()
    }

    fn apply_patch(&mut self, patch: UpdateProduct) -> StoreResult<()> {
        if let Some(name) = patch.name {
            self.name = field::text("name", Some(&name))?;
        }
        if let Some(category) = patch.category {
            self.category = field::text("category", Some(&category))?;
        }
        if let Some(description) = patch.description {
            self.description = field::text("description", Some(&description))?;
        }
        if let Some(price) = patch.price {
            self.price = field::number("price", Some(&price))?;
        }
        if let Some(stock) = patch.stock {
            self.stock = field::integer("stock", Some(&stock))?;
        }
        if let Some(rating) = patch.rating {
            self.rating = field::nullable_number("rating", Some(&rating))?;
        }
        if let Some(image) = patch.image {
            self.image = field::nullable_string("image", Some(&image))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collection_store::field::{NON_NEGATIVE_INTEGER, REQUIRED_STRING};
    use serde_json::json;

    fn create(body: Value) -> CreateProduct {
        serde_json::from_value(body).unwrap()
    }

    fn messages(input: &impl Validate) -> Vec<(String, String)> {
        let errors = input.validate().unwrap_err();
        let mut out: Vec<_> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(|e| {
                    (
                        field.to_string(),
                        e.message.as_deref().unwrap_or_default().to_string(),
                    )
                })
            })
            .collect();
        out.sort();
        out
    }

    #[test]
    fn test_empty_create_reports_required_fields() {
        let input = create(json!({}));

        assert_eq!(
            messages(&input),
            vec![
                ("category".to_string(), "required string".to_string()),
                ("description".to_string(), "required string".to_string()),
                ("name".to_string(), "required string".to_string()),
                ("price".to_string(), "non-negative number".to_string()),
                ("stock".to_string(), "non-negative integer".to_string()),
            ]
        );
    }

    #[test]
    fn test_rating_and_image_rules() {
        let input = create(json!({
            "name": "Диксит",
            "category": "Вечеринка",
            "description": "Ассоциации",
            "price": 2200,
            "stock": 18,
            "rating": 7,
            "image": 42
        }));

        assert_eq!(
            messages(&input),
            vec![
                ("image".to_string(), IMAGE_MESSAGE.to_string()),
                ("rating".to_string(), RATING_MESSAGE.to_string()),
            ]
        );
    }

    #[test]
    fn test_null_and_empty_optionals_are_valid() {
        let input = create(json!({
            "name": "Диксит",
            "category": "Вечеринка",
            "description": "Ассоциации",
            "price": "2200",
            "stock": "18",
            "rating": null,
            "image": ""
        }));

        assert!(input.validate().is_ok());

        let product = Product::from_create("abc123".into(), input).unwrap();
        assert_eq!(product.price, 2200.0);
        assert_eq!(product.stock, 18);
        assert_eq!(product.rating, None);
        assert_eq!(product.image, None);
    }

    #[test]
    fn test_fractional_stock_is_rejected() {
        let input = create(json!({
            "name": "Dominion",
            "category": "Карточная",
            "description": "Колодострой",
            "price": 2100,
            "stock": 1.5
        }));

        assert_eq!(
            messages(&input),
            vec![("stock".to_string(), NON_NEGATIVE_INTEGER.to_string())]
        );
    }

    #[test]
    fn test_null_vs_absent_in_patch() {
        let absent: UpdateProduct = serde_json::from_value(json!({ "price": 10 })).unwrap();
        assert!(absent.rating.is_none());

        let cleared: UpdateProduct = serde_json::from_value(json!({ "rating": null })).unwrap();
        assert_eq!(cleared.rating, Some(Value::Null));
        assert!(Product::has_changes(&cleared));
        assert!(cleared.validate().is_ok());
    }

    #[test]
    fn test_null_required_field_in_patch_is_invalid() {
        let patch: UpdateProduct = serde_json::from_value(json!({ "name": null })).unwrap();

        assert_eq!(
            messages(&patch),
            vec![("name".to_string(), REQUIRED_STRING.to_string())]
        );
    }

    #[test]
    fn test_id_in_patch_is_not_a_change() {
        let patch: UpdateProduct = serde_json::from_value(json!({ "id": "zzzzzz" })).unwrap();
        assert!(!Product::has_changes(&patch));
    }

    #[test]
    fn test_apply_patch_clears_rating() {
        let mut product = Product {
            id: "abc123".into(),
            name: "Клуэдо".into(),
            category: "Детектив".into(),
            description: "Кто убил мистера Боди".into(),
            price: 1450.0,
            stock: 20,
            rating: Some(4.2),
            image: Some("https://example.com/cluedo.jpg".into()),
        };

        let patch: UpdateProduct =
            serde_json::from_value(json!({ "rating": null, "stock": "21" })).unwrap();
        product.apply_patch(patch).unwrap();

        assert_eq!(product.rating, None);
        assert_eq!(product.stock, 21);
        assert_eq!(product.image.as_deref(), Some("https://example.com/cluedo.jpg"));
    }
}
