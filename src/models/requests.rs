use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ProductStatus, is_valid_price, is_valid_status};
use crate::repository::{CreateProductParams, ListProductsParams, UpdateProductStatusParams};

pub const MIN_PAGE_SIZE: i32 = 5;
pub const MAX_PAGE_SIZE: i32 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

fn require_id(id: i32) -> Result<(), ValidationError> {
    if id < 1 {
        return Err(ValidationError::new("id", "must be at least 1"));
    }
    Ok(())
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "is required"));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: String,
    pub description: String,
}

impl CreateProductRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("price", &self.price)?;
        require_non_empty("description", &self.description)?;

        if !is_valid_price(&self.price) {
            return Err(ValidationError::new(
                "price",
                "expected up to 10 digits with at most 2 decimal places",
            ));
        }

        Ok(())
    }

    pub fn to_params(&self) -> CreateProductParams {
        CreateProductParams {
            name: self.name.clone(),
            price: self.price.clone(),
            description: self.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListProductsRequest {
    pub page_id: i32,
    pub page_size: i32,
}

impl ListProductsRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.page_id < 1 {
            return Err(ValidationError::new("page_id", "must be at least 1"));
        }

        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(ValidationError::new(
                "page_size",
                format!("must be between {MIN_PAGE_SIZE} and {MAX_PAGE_SIZE}"),
            ));
        }

        Ok(())
    }

    pub fn to_params(&self) -> ListProductsParams {
        let limit = i64::from(self.page_size);
        ListProductsParams {
            limit,
            offset: (i64::from(self.page_id) - 1) * limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProductStatusRequest {
    pub id: i32,
    pub status: ProductStatus,
}

impl UpdateProductStatusRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_id(self.id)?;

        if !is_valid_status(self.status.as_str()) {
            return Err(ValidationError::new(
                "status",
                "must be one of available, out_of_stock",
            ));
        }

        Ok(())
    }

    pub fn to_params(&self) -> UpdateProductStatusParams {
        UpdateProductStatusParams {
            id: self.id,
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GetProductRequest {
    pub id: i32,
}

impl GetProductRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_id(self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DeleteProductRequest {
    pub id: i32,
}

impl DeleteProductRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_id(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> CreateProductRequest {
        CreateProductRequest {
            name: "Widget A".to_string(),
            price: "12.50".to_string(),
            description: "test".to_string(),
        }
    }

    #[test]
    fn create_request_accepts_complete_payload() {
        assert_eq!(create_request().validate(), Ok(()));
    }

    #[test]
    fn create_request_requires_every_field() {
        let mut req = create_request();
        req.name = String::new();
        assert_eq!(req.validate().unwrap_err().field, "name");

        let mut req = create_request();
        req.description = "   ".to_string();
        assert_eq!(req.validate().unwrap_err().field, "description");

        let mut req = create_request();
        req.price = String::new();
        assert_eq!(req.validate().unwrap_err().field, "price");
    }

    #[test]
    fn create_request_rejects_bad_price() {
        let prices = [
            "-1.00",
            "1.999",
            "12345678901",
            "ten",
            "\u{0661}\u{0662}.\u{0665}\u{0660}",
        ];
        for price in prices {
            let req = CreateProductRequest {
                price: price.to_string(),
                ..create_request()
            };
            assert_eq!(req.validate().unwrap_err().field, "price", "price {price:?}");
        }
    }

    #[test]
    fn create_request_maps_fields_to_params() {
        let params = create_request().to_params();

        assert_eq!(params.name, "Widget A");
        assert_eq!(params.price, "12.50");
        assert_eq!(params.description, "test");
    }

    #[test]
    fn pagination_translates_to_limit_and_offset() {
        let cases = [(1, 5, 5, 0), (2, 5, 5, 5), (3, 10, 10, 20), (4, 7, 7, 21)];

        for (page_id, page_size, limit, offset) in cases {
            let params = ListProductsRequest { page_id, page_size }.to_params();
            assert_eq!(params, ListProductsParams { limit, offset });
        }
    }

    #[test]
    fn pagination_offset_does_not_overflow() {
        let params = ListProductsRequest {
            page_id: i32::MAX,
            page_size: MAX_PAGE_SIZE,
        }
        .to_params();

        assert_eq!(params.offset, (i64::from(i32::MAX) - 1) * 10);
    }

    #[test]
    fn pagination_bounds() {
        let valid = |page_id, page_size| ListProductsRequest { page_id, page_size }.validate();

        assert!(valid(1, 5).is_ok());
        assert!(valid(1, 10).is_ok());
        assert_eq!(valid(0, 5).unwrap_err().field, "page_id");
        assert_eq!(valid(-3, 5).unwrap_err().field, "page_id");
        assert_eq!(valid(1, 4).unwrap_err().field, "page_size");
        assert_eq!(valid(1, 11).unwrap_err().field, "page_size");
    }

    #[test]
    fn status_update_rejects_inactive_and_bad_ids() {
        let req = |id, status| UpdateProductStatusRequest { id, status }.validate();

        assert!(req(1, ProductStatus::Available).is_ok());
        assert!(req(1, ProductStatus::OutOfStock).is_ok());
        assert_eq!(req(1, ProductStatus::Inactive).unwrap_err().field, "status");
        assert_eq!(req(0, ProductStatus::Available).unwrap_err().field, "id");
    }

    #[test]
    fn status_update_request_parses_wire_values() {
        let req: UpdateProductStatusRequest =
            serde_json::from_str(r#"{"id": 7, "status": "out_of_stock"}"#).unwrap();
        assert_eq!(req.status, ProductStatus::OutOfStock);
        assert_eq!(
            req.to_params(),
            UpdateProductStatusParams {
                id: 7,
                status: ProductStatus::OutOfStock
            }
        );

        let bad = serde_json::from_str::<UpdateProductStatusRequest>(
            r#"{"id": 7, "status": "sold"}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn keyed_requests_require_positive_ids() {
        assert!(GetProductRequest { id: 1 }.validate().is_ok());
        assert!(GetProductRequest { id: 0 }.validate().is_err());
        assert!(DeleteProductRequest { id: 42 }.validate().is_ok());
        assert!(DeleteProductRequest { id: -1 }.validate().is_err());
    }
}
