use async_trait::async_trait;
use mockall::mock;

use super::product::{ProductClient, ProductClientResult};
use crate::domain::product::Product;

mock! {
    pub ProductClient {}

    #[async_trait]
    impl ProductClient for ProductClient {
        async fn get_product(&self, product_id: &str) -> ProductClientResult<Option<Product>>;
        async fn update_product_price(&self, product_id: &str, price: f64) -> ProductClientResult<()>;
    }
}
