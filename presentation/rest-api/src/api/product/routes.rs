use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::currency::converter::PriceConverter;
use business::domain::currency::errors::CurrencyError;
use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{IntoProblemResponse, ProblemResponse};
use crate::api::product::dto::{
    ProductRequest, ProductResponse, ProductsResponse, to_product_response, to_products_response,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    list_use_case: Arc<dyn ListProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    converter: Arc<PriceConverter>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        list_use_case: Arc<dyn ListProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        converter: Arc<PriceConverter>,
    ) -> Self {
        Self {
            create_use_case,
            list_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            converter,
        }
    }

    fn currency_problem(err: CurrencyError, instance: &str) -> Json<ProblemResponse> {
        let (_, json) = ProductError::Currency(err).into_problem_response(instance);
        json
    }
}

/// Checks the paging bounds the HTTP contract promises before any request
/// reaches the service layer.
fn validate_page_bounds(page: i64, size: i64) -> Vec<&'static str> {
    let mut violations = Vec::new();
    if page < 0 {
        violations.push("attribute page must be positive number");
    }
    if page > 100 {
        violations.push("attribute page must be below than 100");
    }
    if size < 1 {
        violations.push("attribute size must be greater than 1");
    }
    if size > 100 {
        violations.push("attribute size must be below than 100");
    }
    violations
}

/// Product catalog API
///
/// Endpoints for listing, creating, updating, and deleting catalog products.
#[OpenApi]
impl ProductApi {
    /// List products
    ///
    /// Returns one page of products sorted by id ascending, optionally
    /// filtered by a case-insensitive name substring.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(
        &self,
        page: Query<Option<i64>>,
        size: Query<Option<i64>>,
        name: Query<Option<String>>,
    ) -> GetAllProductsResponse {
        let page = page.0.unwrap_or(0);
        let size = size.0.unwrap_or(10);

        let violations = validate_page_bounds(page, size);
        if !violations.is_empty() {
            return GetAllProductsResponse::BadRequest(Json(ProblemResponse {
                status: 400,
                detail: violations.join(", "),
                instance: "/products".to_string(),
            }));
        }

        let params = ListProductsParams {
            page: page as u32,
            size: size as u32,
            name: name.0,
        };

        match self.list_use_case.execute(params).await {
            Ok(products) => match to_products_response(products, &self.converter).await {
                Ok(body) => GetAllProductsResponse::Ok(Json(body)),
                Err(err) => GetAllProductsResponse::InternalError(Self::currency_problem(
                    err,
                    "/products",
                )),
            },
            Err(err) => {
                let (_, json) = err.into_problem_response("/products");
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by id
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<i64>) -> GetProductByIdResponse {
        let instance = format!("/products/{}", id.0);

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            Ok(product) => match to_product_response(product, &self.converter).await {
                Ok(body) => GetProductByIdResponse::Ok(Json(body)),
                Err(err) => {
                    GetProductByIdResponse::InternalError(Self::currency_problem(err, &instance))
                }
            },
            Err(err) => {
                let (status, json) = err.into_problem_response(&instance);
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a new product
    ///
    /// Persists the product and publishes a CREATE event to the products
    /// topic.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<ProductRequest>) -> CreateProductResponse {
        let draft = match body.0.into_draft() {
            Ok(draft) => draft,
            Err(err) => {
                let (_, json) = err.into_problem_response("/products");
                return CreateProductResponse::BadRequest(json);
            }
        };

        match self.create_use_case.execute(draft).await {
            Ok(product) => match to_product_response(product, &self.converter).await {
                Ok(body) => CreateProductResponse::Created(Json(body)),
                Err(err) => {
                    CreateProductResponse::InternalError(Self::currency_problem(err, "/products"))
                }
            },
            Err(err) => {
                let (status, json) = err.into_problem_response("/products");
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Overwrites all mutable fields of an existing product and publishes an
    /// UPDATE event.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<i64>,
        body: Json<ProductRequest>,
    ) -> UpdateProductResponse {
        let instance = format!("/products/{}", id.0);

        let draft = match body.0.into_draft() {
            Ok(draft) => draft,
            Err(err) => {
                let (_, json) = err.into_problem_response(&instance);
                return UpdateProductResponse::BadRequest(json);
            }
        };

        match self
            .update_use_case
            .execute(UpdateProductParams { id: id.0, draft })
            .await
        {
            Ok(product) => match to_product_response(product, &self.converter).await {
                Ok(body) => UpdateProductResponse::Ok(Json(body)),
                Err(err) => {
                    UpdateProductResponse::InternalError(Self::currency_problem(err, &instance))
                }
            },
            Err(err) => {
                let (status, json) = err.into_problem_response(&instance);
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Removes the product and publishes a DELETE event carrying only the id.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<i64>) -> DeleteProductResponse {
        let instance = format!("/products/{}", id.0);

        match self
            .delete_use_case
            .execute(DeleteProductParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_problem_response(&instance);
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ProblemResponse>),
    #[oai(status = 500)]
    InternalError(Json<ProblemResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ProblemResponse>),
    #[oai(status = 500)]
    InternalError(Json<ProblemResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ProblemResponse>),
    #[oai(status = 500)]
    InternalError(Json<ProblemResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ProblemResponse>),
    #[oai(status = 404)]
    NotFound(Json<ProblemResponse>),
    #[oai(status = 500)]
    InternalError(Json<ProblemResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ProblemResponse>),
    #[oai(status = 500)]
    InternalError(Json<ProblemResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_bounds_within_contract() {
        assert!(validate_page_bounds(0, 1).is_empty());
        assert!(validate_page_bounds(100, 100).is_empty());
        assert!(validate_page_bounds(3, 10).is_empty());
    }

    #[test]
    fn should_reject_negative_page() {
        let violations = validate_page_bounds(-1, 10);

        assert_eq!(violations, vec!["attribute page must be positive number"]);
    }

    #[test]
    fn should_reject_page_above_limit() {
        let violations = validate_page_bounds(101, 10);

        assert_eq!(violations, vec!["attribute page must be below than 100"]);
    }

    #[test]
    fn should_reject_size_outside_limits() {
        assert_eq!(
            validate_page_bounds(0, 0),
            vec!["attribute size must be greater than 1"]
        );
        assert_eq!(
            validate_page_bounds(0, 101),
            vec!["attribute size must be below than 100"]
        );
    }

    #[test]
    fn should_collect_all_violations() {
        let violations = validate_page_bounds(-5, 0);

        assert_eq!(violations.len(), 2);
    }
}
