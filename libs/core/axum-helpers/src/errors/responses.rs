//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "INTERNAL_ERROR",
        "message": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "Request validation failed",
        "details": [
            { "field": "name", "message": "required string" },
            { "field": "price", "message": "non-negative number" }
        ]
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

/// 400 for partial updates: either no updatable field was sent or a sent
/// field is invalid. Both share one status, so they are documented as examples.
#[derive(ToResponse)]
#[response(
    description = "Bad Request - Nothing to update or Validation Error",
    content_type = "application/json",
    examples(
        ("NothingToUpdate" = (
            summary = "No updatable field in the body",
            value = json!({
                "code": 1012,
                "error": "BAD_REQUEST",
                "message": "Nothing to update"
            })
        )),
        ("ValidationError" = (
            summary = "A present field is invalid",
            value = json!({
                "code": 1001,
                "error": "VALIDATION_ERROR",
                "message": "Request validation failed",
                "details": [{ "field": "price", "message": "non-negative number" }]
            })
        ))
    )
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "error": "NOT_FOUND",
        "message": "Resource not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
