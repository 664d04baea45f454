use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;

use business::application::product::add_review::AddReviewUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::dispatch::DispatchProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_vendor_products::GetVendorProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::product::ownership::MutationPolicy;

use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::ProductApi;
use crate::config::lifecycle_config::LifecycleConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool, lifecycle: &LifecycleConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool));

        let dispatch_policy = lifecycle.dispatch_policy();
        tracing::info!(
            "Dispatch requires ownership: {}",
            dispatch_policy.requires_ownership
        );

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            user_repository,
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            policy: MutationPolicy::OWNER_ONLY,
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            policy: MutationPolicy::OWNER_ONLY,
            logger: logger.clone(),
        });
        let dispatch_use_case = Arc::new(DispatchProductUseCaseImpl {
            repository: product_repository.clone(),
            policy: dispatch_policy,
            logger: logger.clone(),
        });
        let add_review_use_case = Arc::new(AddReviewUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let vendor_products_use_case = Arc::new(GetVendorProductsUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let product_api = ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            dispatch_use_case,
            add_review_use_case,
            vendor_products_use_case,
        );

        Ok(Self {
            health_api: HealthApi,
            product_api,
        })
    }
}
