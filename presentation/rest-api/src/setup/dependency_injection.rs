use std::sync::Arc;

use hnb::client::HnbApiClient;
use logger::TracingLogger;
use messaging::NatsEventPublisher;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::currency::refresh::RefreshCurrencyRateUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::list::ListProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::currency::cache::CurrencyCache;
use business::domain::currency::converter::PriceConverter;
use business::domain::currency::use_cases::refresh::RefreshCurrencyRateUseCase;

use crate::config::hnb_config::HnbConfig;
use crate::config::messaging_config::MessagingConfig;
use crate::config::scheduler_config::SchedulerConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub refresh_use_case: Arc<dyn RefreshCurrencyRateUseCase>,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool));

        let hnb_config = HnbConfig::from_env();
        let rate_source = Arc::new(HnbApiClient::new(hnb_config.currency_usd_url));

        let messaging_config = MessagingConfig::from_env();
        let nats_client = async_nats::connect(&messaging_config.nats_url).await?;
        let publisher = Arc::new(NatsEventPublisher::new(
            nats_client,
            messaging_config.products_topic,
        ));

        // Currency components
        let cache = Arc::new(CurrencyCache::new(rate_source, logger.clone()));
        let converter = Arc::new(PriceConverter::new(cache.clone()));

        let scheduler_config = SchedulerConfig::from_env();
        let refresh_use_case = Arc::new(RefreshCurrencyRateUseCaseImpl {
            cache,
            logger: logger.clone(),
            enabled: scheduler_config.enabled,
        });

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            publisher: publisher.clone(),
            logger: logger.clone(),
        });
        let list_use_case = Arc::new(ListProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            publisher: publisher.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            publisher,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            list_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            converter,
        );

        Ok(Self {
            health_api,
            product_api,
            refresh_use_case,
        })
    }
}
