use std::sync::Arc;

use quotebox_service::QuoteService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<QuoteService>,
}
impl AppState {
	pub async fn new(config: quotebox_config::Config) -> color_eyre::Result<Self> {
		let service = QuoteService::connect(config).await?;

		Ok(Self::from_service(service))
	}

	pub fn from_service(service: QuoteService) -> Self {
		Self { service: Arc::new(service) }
	}
}
