use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::model::CartItem;
use business::domain::cart::use_cases::add_product::{AddProductParams, AddProductUseCase};
use business::domain::cart::use_cases::get_cart::GetCartUseCase;
use business::domain::cart::use_cases::remove_product::{
    RemoveProductParams, RemoveProductUseCase,
};
use business::domain::cart::use_cases::update_amount::{
    UpdateProductAmountParams, UpdateProductAmountUseCase,
};

use crate::api::cart::dto::{CartItemResponse, UpdateAmountRequest};
use crate::api::tags::ApiTags;

pub struct CartApi {
    add_use_case: Arc<dyn AddProductUseCase>,
    remove_use_case: Arc<dyn RemoveProductUseCase>,
    update_use_case: Arc<dyn UpdateProductAmountUseCase>,
    get_use_case: Arc<dyn GetCartUseCase>,
}

impl CartApi {
    pub fn new(
        add_use_case: Arc<dyn AddProductUseCase>,
        remove_use_case: Arc<dyn RemoveProductUseCase>,
        update_use_case: Arc<dyn UpdateProductAmountUseCase>,
        get_use_case: Arc<dyn GetCartUseCase>,
    ) -> Self {
        Self {
            add_use_case,
            remove_use_case,
            update_use_case,
            get_use_case,
        }
    }

    fn to_response(items: Vec<CartItem>) -> Vec<CartItemResponse> {
        items.into_iter().map(|item| item.into()).collect()
    }
}

/// Shopping cart API
///
/// Every mutating endpoint answers with the post-operation cart snapshot.
/// Rejected mutations leave the snapshot unchanged and surface a message
/// through the notification channel; they are not HTTP errors.
#[OpenApi]
impl CartApi {
    /// Current cart snapshot
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get(&self) -> Json<Vec<CartItemResponse>> {
        Json(Self::to_response(self.get_use_case.execute().await))
    }

    /// Add one unit of a product
    ///
    /// A first add creates the line at quantity 1; a repeated add bumps the
    /// existing line by one, re-validated against current stock.
    #[oai(path = "/cart/:product_id", method = "post", tag = "ApiTags::Cart")]
    async fn add(&self, product_id: Path<u64>) -> Json<Vec<CartItemResponse>> {
        let items = self
            .add_use_case
            .execute(AddProductParams {
                product_id: product_id.0,
            })
            .await;
        Json(Self::to_response(items))
    }

    /// Remove a product's line
    #[oai(path = "/cart/:product_id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove(&self, product_id: Path<u64>) -> Json<Vec<CartItemResponse>> {
        let items = self
            .remove_use_case
            .execute(RemoveProductParams {
                product_id: product_id.0,
            })
            .await;
        Json(Self::to_response(items))
    }

    /// Set a line's quantity
    ///
    /// The requested quantity is validated against a fresh stock read; an
    /// amount of zero is ignored.
    #[oai(path = "/cart/:product_id", method = "put", tag = "ApiTags::Cart")]
    async fn update(
        &self,
        product_id: Path<u64>,
        body: Json<UpdateAmountRequest>,
    ) -> Json<Vec<CartItemResponse>> {
        let items = self
            .update_use_case
            .execute(UpdateProductAmountParams {
                product_id: product_id.0,
                amount: body.0.amount,
            })
            .await;
        Json(Self::to_response(items))
    }
}
