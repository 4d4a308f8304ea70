use bigdecimal::BigDecimal;
use poem_openapi::Object;

use business::domain::currency::converter::PriceConverter;
use business::domain::currency::errors::CurrencyError;
use business::domain::product::errors::ProductError;
use business::domain::product::model::{Product, ProductDraft};

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductRequest {
    /// Business code, exactly 10 characters, unique across the catalog
    pub code: String,
    /// Product name (cannot be blank)
    pub name: String,
    /// Price in EUR (non-negative)
    pub price_eur: BigDecimal,
    /// Optional free-form description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Whether the product is currently available
    pub is_available: bool,
}

impl ProductRequest {
    pub fn into_draft(self) -> Result<ProductDraft, ProductError> {
        ProductDraft::new(
            self.code,
            self.name,
            self.price_eur,
            self.description,
            self.is_available,
        )
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: i64,
    /// Business code
    pub code: String,
    /// Product name
    pub name: String,
    /// Price in EUR
    pub price_eur: BigDecimal,
    /// Price in USD computed from the cached exchange rate
    pub price_usd: BigDecimal,
    /// Optional free-form description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Whether the product is currently available
    pub is_available: bool,
}

#[derive(Debug, Clone, Object)]
pub struct ProductsResponse {
    pub products: Vec<ProductResponse>,
}

/// Builds the response DTO, computing the USD price from the cached rate.
pub async fn to_product_response(
    product: Product,
    converter: &PriceConverter,
) -> Result<ProductResponse, CurrencyError> {
    let price_usd = converter.to_usd(&product.price_eur).await?;

    Ok(ProductResponse {
        id: product.id,
        code: product.code,
        name: product.name,
        price_eur: product.price_eur,
        price_usd,
        description: product.description,
        is_available: product.is_available,
    })
}

pub async fn to_products_response(
    products: Vec<Product>,
    converter: &PriceConverter,
) -> Result<ProductsResponse, CurrencyError> {
    let mut responses = Vec::with_capacity(products.len());
    for product in products {
        responses.push(to_product_response(product, converter).await?);
    }
    Ok(ProductsResponse {
        products: responses,
    })
}
