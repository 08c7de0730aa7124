use std::sync::Arc;

use business::domain::cart::engine::CartEngine;
use business::domain::cart::errors::CartError;
use business::domain::cart::model::Cart;
use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::model::CatalogSnapshot;
use business::domain::catalog::use_cases::get_all::GetCatalogUseCase;
use business::domain::catalog::use_cases::get_by_id::{
    GetProductDetailParams, GetProductDetailUseCase,
};
use business::domain::product::value_objects::ProductId;

use crate::setup::dependency_injection::DependencyContainer;

use super::cart::CartView;
use super::catalog::{ProductDetailView, ProductListItem};
use super::errors::StorefrontError;

/// Headless storefront: the product list, product detail and cart screens.
///
/// Holds only projections; the cart itself lives in the injected engine.
pub struct Storefront {
    cart_engine: Arc<dyn CartEngine>,
    get_catalog: Arc<dyn GetCatalogUseCase>,
    get_product_detail: Arc<dyn GetProductDetailUseCase>,
    catalog: CatalogSnapshot,
    cart: CartView,
}

impl Storefront {
    pub fn new(container: &DependencyContainer) -> Self {
        Self {
            cart_engine: container.cart_engine.clone(),
            get_catalog: container.get_catalog.clone(),
            get_product_detail: container.get_product_detail.clone(),
            catalog: CatalogSnapshot::default(),
            cart: CartView::default(),
        }
    }

    /// Restores the cart and fetches the catalog concurrently.
    pub async fn load(&mut self) {
        let (catalog, cart) = tokio::join!(
            self.get_catalog.execute(),
            self.cart_engine.initialize()
        );
        self.catalog = catalog;
        self.refresh(&cart);
    }

    pub fn product_list(&self) -> Vec<ProductListItem> {
        self.catalog
            .products
            .iter()
            .map(ProductListItem::from)
            .collect()
    }

    /// Set when the catalog could not be fetched; the list is then empty.
    pub fn catalog_error(&self) -> Option<&CatalogError> {
        self.catalog.error.as_ref()
    }

    pub async fn product_detail(&self, id: &ProductId) -> Result<ProductDetailView, CatalogError> {
        let product = self
            .get_product_detail
            .execute(GetProductDetailParams {
                catalog: &self.catalog,
                id: id.clone(),
            })
            .await?;
        Ok(ProductDetailView::from(&product))
    }

    /// Only products present in the displayed list can be added.
    pub async fn add_to_cart(&mut self, id: &ProductId) -> Result<&CartView, StorefrontError> {
        let product = self
            .get_product_detail
            .execute(GetProductDetailParams {
                catalog: &self.catalog,
                id: id.clone(),
            })
            .await?;
        let cart = self.cart_engine.add_line(&product).await?;
        self.refresh(&cart);
        Ok(&self.cart)
    }

    pub async fn remove_from_cart(&mut self, id: &ProductId) -> Result<&CartView, CartError> {
        let cart = self.cart_engine.remove_line(id).await?;
        self.refresh(&cart);
        Ok(&self.cart)
    }

    pub fn cart_view(&self) -> &CartView {
        &self.cart
    }

    fn refresh(&mut self, cart: &Cart) {
        let total = self.cart_engine.compute_total(cart);
        self.cart = CartView::project(cart, &total);
    }
}
