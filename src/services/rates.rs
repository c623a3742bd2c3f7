//! Spot-price client for the third-party precious-metal rates API.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;

use crate::{
    config::AppConfig,
    error::{AppError, AppResult},
};

/// Troy ounce to gram divisor used by the provider.
pub const GRAMS_PER_TROY_OUNCE: Decimal = Decimal::from_parts(311035, 0, 0, false, 4);

#[derive(Debug, Clone)]
pub struct MetalRates {
    pub gold_rate: Decimal,
    pub gold_rate_per_gram: Decimal,
    pub platinum_rate: Decimal,
    pub platinum_rate_per_gram: Decimal,
}

#[derive(Debug, Deserialize)]
struct SpotResponse {
    price: Decimal,
}

#[derive(Debug, Clone)]
pub struct RatesClient {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl RatesClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let base_url = config
            .rates_url
            .as_deref()
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("RATES_API_URL is not set")))?;
        let access_token = config
            .rates_token
            .as_deref()
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("RATES_ACCESS_TOKEN is not set")))?;
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.http_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
        })
    }

    /// Spot price per troy ounce in INR for a metal symbol (`XAU`, `XPT`).
    async fn spot(&self, symbol: &str) -> AppResult<Decimal> {
        let url = format!("{}/{}/INR", self.base_url, symbol);
        let response = self
            .client
            .get(url)
            .header("x-access-token", &self.access_token)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AppError::Backend {
                status: status.as_u16(),
                message,
            });
        }
        let spot: SpotResponse = response.json().await?;
        Ok(spot.price)
    }

    pub async fn fetch_rates(&self) -> AppResult<MetalRates> {
        let gold_rate = self.spot("XAU").await?;
        let platinum_rate = self.spot("XPT").await?;
        Ok(MetalRates {
            gold_rate,
            gold_rate_per_gram: per_gram(gold_rate),
            platinum_rate,
            platinum_rate_per_gram: per_gram(platinum_rate),
        })
    }
}

/// Convert a per-ounce rate to per-gram, rounded to 2 dp (half up).
pub fn per_gram(rate_per_ounce: Decimal) -> Decimal {
    (rate_per_ounce / GRAMS_PER_TROY_OUNCE)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
