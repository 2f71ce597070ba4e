use db::models::product::Product;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
}
