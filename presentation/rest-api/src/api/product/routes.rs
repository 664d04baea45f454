use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::product::use_cases::add_review::{AddReviewParams, AddReviewUseCase};
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::dispatch::{
    DispatchProductParams, DispatchProductUseCase,
};
use business::domain::product::use_cases::get_all::{
    GetAllProductsParams, GetAllProductsUseCase,
};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_vendor_products::{
    GetVendorProductsParams, GetVendorProductsUseCase, VendorListing,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateReviewRequest, MessageResponse, ProductDetailResponse, ProductResponse,
    UpdateProductRequest,
};
use crate::api::security::CatalogBearer;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    dispatch_use_case: Arc<dyn DispatchProductUseCase>,
    add_review_use_case: Arc<dyn AddReviewUseCase>,
    vendor_products_use_case: Arc<dyn GetVendorProductsUseCase>,
}

impl ProductApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        dispatch_use_case: Arc<dyn DispatchProductUseCase>,
        add_review_use_case: Arc<dyn AddReviewUseCase>,
        vendor_products_use_case: Arc<dyn GetVendorProductsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            dispatch_use_case,
            add_review_use_case,
            vendor_products_use_case,
        }
    }

    async fn vendor_listing(
        &self,
        auth: CatalogBearer,
        listing: VendorListing,
    ) -> ProductListResponse {
        let params = GetVendorProductsParams {
            user_id: auth.0.id,
            listing,
        };

        match self.vendor_products_use_case.execute(params).await {
            Ok(products) => {
                ProductListResponse::Ok(Json(products.into_iter().map(|p| p.into()).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ProductListResponse::NotFound(json)
            }
        }
    }
}

/// An id that is not a UUID cannot name a stored product.
fn parse_product_id(raw: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw).map_err(|_| Json(ErrorResponse::new("NotFound", "product.not_found")))
}

/// Product catalog API
///
/// Public catalog browsing plus vendor-side product lifecycle management.
#[OpenApi]
impl ProductApi {
    /// List available products
    ///
    /// Returns products with stock left, optionally narrowed to names
    /// containing `keyword` (case-insensitive).
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self, keyword: Query<Option<String>>) -> ProductListResponse {
        let params = GetAllProductsParams { keyword: keyword.0 };

        match self.get_all_use_case.execute(params).await {
            Ok(products) => {
                ProductListResponse::Ok(Json(products.into_iter().map(|p| p.into()).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ProductListResponse::NotFound(json)
            }
        }
    }

    /// Create a product
    ///
    /// Creates a placeholder product owned by the caller, to be filled in
    /// with a later update.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, auth: CatalogBearer) -> CreateProductResponse {
        let params = CreateProductParams { user_id: auth.0.id };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateProductResponse::NotFound(json)
            }
        }
    }

    /// Products the caller is still selling
    #[oai(
        path = "/products/mywaitingproducts",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn my_waiting_products(&self, auth: CatalogBearer) -> ProductListResponse {
        self.vendor_listing(auth, VendorListing::Waitlisted).await
    }

    /// Sold-out products of the caller awaiting dispatch
    #[oai(path = "/products/dispatchready", method = "get", tag = "ApiTags::Products")]
    async fn dispatch_ready_products(&self, auth: CatalogBearer) -> ProductListResponse {
        self.vendor_listing(auth, VendorListing::DispatchReady).await
    }

    /// Products of the caller already dispatched
    #[oai(path = "/products/dispatched", method = "get", tag = "ApiTags::Products")]
    async fn dispatched_products(&self, auth: CatalogBearer) -> ProductListResponse {
        self.vendor_listing(auth, VendorListing::Dispatched).await
    }

    /// Mark a product as dispatched
    #[oai(
        path = "/products/dispatchProduct/:id",
        method = "put",
        tag = "ApiTags::Products"
    )]
    async fn dispatch_product(
        &self,
        auth: CatalogBearer,
        id: Path<String>,
    ) -> ProductResponseResult {
        let uuid = match parse_product_id(&id.0) {
            Ok(uuid) => uuid,
            Err(json) => return ProductResponseResult::NotFound(json),
        };
        let params = DispatchProductParams {
            id: uuid,
            user_id: auth.0.id,
        };

        match self.dispatch_use_case.execute(params).await {
            Ok(product) => ProductResponseResult::Ok(Json(product.into())),
            Err(err) => ProductResponseResult::NotFound(err.into_error_response().1),
        }
    }

    /// Get a product by ID
    ///
    /// Returns the product together with its vendor's public profile.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let uuid = match parse_product_id(&id.0) {
            Ok(uuid) => uuid,
            Err(json) => return GetProductByIdResponse::NotFound(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(view) => GetProductByIdResponse::Ok(Json(view.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProductByIdResponse::NotFound(json)
            }
        }
    }

    /// Update a product
    ///
    /// Replaces the editable fields of a product owned by the caller.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        auth: CatalogBearer,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> ProductResponseResult {
        let uuid = match parse_product_id(&id.0) {
            Ok(uuid) => uuid,
            Err(json) => return ProductResponseResult::NotFound(json),
        };
        let params = UpdateProductParams {
            id: uuid,
            user_id: auth.0.id,
            details: body.0.into(),
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => ProductResponseResult::Ok(Json(product.into())),
            Err(err) => ProductResponseResult::NotFound(err.into_error_response().1),
        }
    }

    /// Delete a product
    ///
    /// Cancels a product owned by the caller. The record is kept.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, auth: CatalogBearer, id: Path<String>) -> MessageResult {
        let uuid = match parse_product_id(&id.0) {
            Ok(uuid) => uuid,
            Err(json) => return MessageResult::NotFound(json),
        };
        let params = DeleteProductParams {
            id: uuid,
            user_id: auth.0.id,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => MessageResult::Ok(Json(MessageResponse::new("Product removed"))),
            Err(err) => MessageResult::NotFound(err.into_error_response().1),
        }
    }

    /// Review a product
    ///
    /// Each user may review a product once.
    #[oai(path = "/products/:id/reviews", method = "post", tag = "ApiTags::Products")]
    async fn add_review(
        &self,
        auth: CatalogBearer,
        id: Path<String>,
        body: Json<CreateReviewRequest>,
    ) -> AddReviewResponse {
        let uuid = match parse_product_id(&id.0) {
            Ok(uuid) => uuid,
            Err(json) => return AddReviewResponse::NotFound(json),
        };
        let Some(rating) = body.0.numeric_rating() else {
            return AddReviewResponse::BadRequest(Json(ErrorResponse::new(
                "ValidationError",
                "review.invalid_rating",
            )));
        };
        let params = AddReviewParams {
            product_id: uuid,
            user_id: auth.0.id,
            user_name: auth.0.name,
            rating,
            comment: body.0.comment.unwrap_or_default(),
        };

        match self.add_review_use_case.execute(params).await {
            Ok(()) => AddReviewResponse::Created(Json(MessageResponse::new("Review added"))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddReviewResponse::BadRequest(json),
                    _ => AddReviewResponse::NotFound(json),
                }
            }
        }
    }
}

// Store failures share the 404 of a missing product; see `error_mapper`.
#[derive(poem_openapi::ApiResponse)]
pub enum ProductListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductDetailResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProductResponseResult {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum MessageResult {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddReviewResponse {
    #[oai(status = 201)]
    Created(Json<MessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::errors::RepositoryError;
    use business::domain::product::errors::ProductError;
    use business::domain::product::model::Product;
    use business::domain::product::use_cases::get_by_id::ProductWithOwner;
    use business::domain::shared::value_objects::UserId;
    use mockall::mock;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem::{Endpoint, EndpointExt, Route};
    use poem_openapi::OpenApiService;
    use serde_json::json;

    use crate::api::security::test_tokens::{SECRET, sign};
    use crate::config::auth_config::AuthConfig;

    mock! {
        pub CreateUc {}
        #[async_trait]
        impl CreateProductUseCase for CreateUc {
            async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
        }
    }

    mock! {
        pub GetAllUc {}
        #[async_trait]
        impl GetAllProductsUseCase for GetAllUc {
            async fn execute(&self, params: GetAllProductsParams) -> Result<Vec<Product>, ProductError>;
        }
    }

    mock! {
        pub GetByIdUc {}
        #[async_trait]
        impl GetProductByIdUseCase for GetByIdUc {
            async fn execute(&self, params: GetProductByIdParams) -> Result<ProductWithOwner, ProductError>;
        }
    }

    mock! {
        pub UpdateUc {}
        #[async_trait]
        impl UpdateProductUseCase for UpdateUc {
            async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
        }
    }

    mock! {
        pub DeleteUc {}
        #[async_trait]
        impl DeleteProductUseCase for DeleteUc {
            async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
        }
    }

    mock! {
        pub DispatchUc {}
        #[async_trait]
        impl DispatchProductUseCase for DispatchUc {
            async fn execute(&self, params: DispatchProductParams) -> Result<Product, ProductError>;
        }
    }

    mock! {
        pub AddReviewUc {}
        #[async_trait]
        impl AddReviewUseCase for AddReviewUc {
            async fn execute(&self, params: AddReviewParams) -> Result<(), ProductError>;
        }
    }

    mock! {
        pub VendorUc {}
        #[async_trait]
        impl GetVendorProductsUseCase for VendorUc {
            async fn execute(&self, params: GetVendorProductsParams) -> Result<Vec<Product>, ProductError>;
        }
    }

    /// Use cases without expectations fail the test if a route reaches them.
    #[derive(Default)]
    struct UseCases {
        create: MockCreateUc,
        get_all: MockGetAllUc,
        get_by_id: MockGetByIdUc,
        update: MockUpdateUc,
        delete: MockDeleteUc,
        dispatch: MockDispatchUc,
        add_review: MockAddReviewUc,
        vendor: MockVendorUc,
    }

    impl UseCases {
        fn client(self) -> TestClient<impl Endpoint> {
            let api = ProductApi::new(
                Arc::new(self.create),
                Arc::new(self.get_all),
                Arc::new(self.get_by_id),
                Arc::new(self.update),
                Arc::new(self.delete),
                Arc::new(self.dispatch),
                Arc::new(self.add_review),
                Arc::new(self.vendor),
            );
            let service = OpenApiService::new(api, "Catalog API", "test");
            TestClient::new(Route::new().nest("/", service).data(AuthConfig {
                jwt_secret: SECRET.to_string(),
            }))
        }
    }

    fn bearer(user: &str) -> String {
        format!("Bearer {}", sign(user, &format!("{user} name"), 3600, SECRET))
    }

    fn vendor_product() -> Product {
        Product::new(UserId::new("vendor-a"))
    }

    #[tokio::test]
    async fn should_list_products_matching_keyword() {
        let mut use_cases = UseCases::default();
        use_cases
            .get_all
            .expect_execute()
            .withf(|p| p.keyword.as_deref() == Some("lamp"))
            .returning(|_| Ok(vec![vendor_product()]));
        let client = use_cases.client();

        let response = client.get("/products").query("keyword", &"lamp").send().await;

        response.assert_status_is_ok();
        let json = response.json().await;
        let products = json.value().array();
        products.assert_len(1);
        products.get(0).object().get("user").assert_string("vendor-a");
    }

    #[tokio::test]
    async fn should_answer_not_found_when_store_fails() {
        let mut use_cases = UseCases::default();
        use_cases
            .get_all
            .expect_execute()
            .returning(|_| Err(ProductError::Repository(RepositoryError::DatabaseError)));
        let client = use_cases.client();

        let response = client.get("/products").send().await;

        response.assert_status(StatusCode::NOT_FOUND);
        let json = response.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("repository.persistence");
    }

    #[tokio::test]
    async fn should_return_product_with_owner() {
        let product = vendor_product();
        let id = product.id;
        let mut use_cases = UseCases::default();
        use_cases
            .get_by_id
            .expect_execute()
            .withf(move |p| p.id == id)
            .returning(move |_| {
                Ok(ProductWithOwner {
                    product: product.clone(),
                    owner: None,
                })
            });
        let client = use_cases.client();

        let response = client.get(format!("/products/{id}")).send().await;

        response.assert_status_is_ok();
        let json = response.json().await;
        let body = json.value().object();
        body.get("id").assert_string(&id.to_string());
        body.get("owner").assert_null();
    }

    #[tokio::test]
    async fn should_return_not_found_for_malformed_id() {
        let client = UseCases::default().client();

        let response = client.get("/products/not-a-uuid").send().await;

        response.assert_status(StatusCode::NOT_FOUND);
        let json = response.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("product.not_found");
    }

    #[tokio::test]
    async fn should_reject_mutation_without_bearer_token() {
        let client = UseCases::default().client();

        let response = client.post("/products").send().await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_reject_token_signed_with_other_secret() {
        let client = UseCases::default().client();
        let token = sign("vendor-a", "Ada", 3600, "other-secret");

        let response = client
            .post("/products")
            .header("authorization", format!("Bearer {token}"))
            .send()
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_create_product_for_caller() {
        let mut use_cases = UseCases::default();
        use_cases
            .create
            .expect_execute()
            .withf(|p| p.user_id == UserId::new("vendor-a"))
            .times(1)
            .returning(|p| Ok(Product::new(p.user_id)));
        let client = use_cases.client();

        let response = client
            .post("/products")
            .header("authorization", bearer("vendor-a"))
            .send()
            .await;

        response.assert_status(StatusCode::CREATED);
        let json = response.json().await;
        let body = json.value().object();
        body.get("user").assert_string("vendor-a");
        body.get("name").assert_string("Sample name");
        body.get("remainingQuantity").assert_null();
    }

    #[tokio::test]
    async fn should_hide_foreign_product_on_update() {
        let id = uuid::Uuid::new_v4();
        let mut use_cases = UseCases::default();
        use_cases
            .update
            .expect_execute()
            .withf(move |p| {
                p.id == id
                    && p.user_id == UserId::new("vendor-b")
                    && p.details.name.as_deref() == Some("Lamp")
                    && p.details.price.is_none()
            })
            .returning(|_| Err(ProductError::not_owner()));
        let client = use_cases.client();

        let response = client
            .put(format!("/products/{id}"))
            .header("authorization", bearer("vendor-b"))
            .body_json(&json!({ "name": "Lamp" }))
            .send()
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let json = response.json().await;
        let body = json.value().object();
        body.get("name").assert_string("NotFound");
        body.get("message").assert_string("product.not_found");
    }

    #[tokio::test]
    async fn should_hide_foreign_product_on_delete() {
        let id = uuid::Uuid::new_v4();
        let mut use_cases = UseCases::default();
        use_cases
            .delete
            .expect_execute()
            .withf(move |p| p.id == id && p.user_id == UserId::new("vendor-b"))
            .returning(|_| Err(ProductError::not_owner()));
        let client = use_cases.client();

        let response = client
            .delete(format!("/products/{id}"))
            .header("authorization", bearer("vendor-b"))
            .send()
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let json = response.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("product.not_found");
    }

    #[tokio::test]
    async fn should_confirm_owner_delete() {
        let id = uuid::Uuid::new_v4();
        let mut use_cases = UseCases::default();
        use_cases.delete.expect_execute().returning(|_| Ok(()));
        let client = use_cases.client();

        let response = client
            .delete(format!("/products/{id}"))
            .header("authorization", bearer("vendor-a"))
            .send()
            .await;

        response.assert_status_is_ok();
        let json = response.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("Product removed");
    }

    #[tokio::test]
    async fn should_add_review_with_caller_identity() {
        let id = uuid::Uuid::new_v4();
        let mut use_cases = UseCases::default();
        use_cases
            .add_review
            .expect_execute()
            .withf(move |p| {
                p.product_id == id
                    && p.user_id == UserId::new("buyer-1")
                    && p.user_name == "buyer-1 name"
                    && p.rating == 4.0
                    && p.comment == "Solid"
            })
            .times(1)
            .returning(|_| Ok(()));
        let client = use_cases.client();

        let response = client
            .post(format!("/products/{id}/reviews"))
            .header("authorization", bearer("buyer-1"))
            .body_json(&json!({ "rating": "4", "comment": "Solid" }))
            .send()
            .await;

        response.assert_status(StatusCode::CREATED);
        let json = response.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("Review added");
    }

    #[tokio::test]
    async fn should_reject_second_review_from_same_user() {
        let id = uuid::Uuid::new_v4();
        let mut use_cases = UseCases::default();
        use_cases
            .add_review
            .expect_execute()
            .returning(|_| Err(ProductError::AlreadyReviewed));
        let client = use_cases.client();

        let response = client
            .post(format!("/products/{id}/reviews"))
            .header("authorization", bearer("buyer-1"))
            .body_json(&json!({ "rating": 5, "comment": "Again" }))
            .send()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let json = response.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("product.already_reviewed");
    }

    #[tokio::test]
    async fn should_reject_review_with_non_numeric_rating() {
        let id = uuid::Uuid::new_v4();
        let client = UseCases::default().client();

        for body in [json!({ "rating": "great" }), json!({ "comment": "no rating" })] {
            let response = client
                .post(format!("/products/{id}/reviews"))
                .header("authorization", bearer("buyer-1"))
                .body_json(&body)
                .send()
                .await;

            response.assert_status(StatusCode::BAD_REQUEST);
            let json = response.json().await;
            json.value()
                .object()
                .get("message")
                .assert_string("review.invalid_rating");
        }
    }

    #[tokio::test]
    async fn should_dispatch_product_with_foreign_token() {
        let product = vendor_product();
        let id = product.id;
        let mut use_cases = UseCases::default();
        use_cases
            .dispatch
            .expect_execute()
            .withf(move |p| p.id == id && p.user_id == UserId::new("courier-9"))
            .returning(move |_| {
                let mut dispatched = product.clone();
                dispatched.dispatch();
                Ok(dispatched)
            });
        let client = use_cases.client();

        let response = client
            .put(format!("/products/dispatchProduct/{id}"))
            .header("authorization", bearer("courier-9"))
            .send()
            .await;

        response.assert_status_is_ok();
        let json = response.json().await;
        let body = json.value().object();
        body.get("user").assert_string("vendor-a");
        body.get("status").assert_string("Dispatched");
    }

    #[tokio::test]
    async fn should_route_vendor_views_to_their_listing() {
        let views = [
            ("/products/mywaitingproducts", VendorListing::Waitlisted),
            ("/products/dispatchready", VendorListing::DispatchReady),
            ("/products/dispatched", VendorListing::Dispatched),
        ];

        for (path, listing) in views {
            let mut use_cases = UseCases::default();
            use_cases
                .vendor
                .expect_execute()
                .withf(move |p| p.listing == listing && p.user_id == UserId::new("vendor-a"))
                .times(1)
                .returning(|_| Ok(vec![vendor_product()]));
            let client = use_cases.client();

            let response = client
                .get(path)
                .header("authorization", bearer("vendor-a"))
                .send()
                .await;

            response.assert_status_is_ok();
            let json = response.json().await;
            json.value().array().assert_len(1);
        }
    }
}
