//! HTTP client for the LingUp backend.
//!
//! Every call races the configured timeout and maps transport failures into
//! [`ApiError`]; decoding and list leniency live in `lingup_core::api`.

use std::future::Future;

use futures::future::{Either, select};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;

use lingup_core::api::{
    ConfirmationFields, ContactRequest, PaymentCard, PricePlan, SkillRow, TimerPayload,
    decode_list, endpoints,
};
use lingup_core::config::ApiConfig;
use lingup_core::{ApiError, Language};

#[derive(Debug, Clone, PartialEq)]
pub struct Api {
    config: ApiConfig,
}

impl Api {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    /// `GET /api/skill*` for the given language.
    pub async fn skills(&self, lang: Language) -> Result<Vec<SkillRow>, ApiError> {
        let rows: Vec<SkillRow> = self.get_json(endpoints::skills(lang)).await?;
        tracing::debug!("fetched {} skill rows ({})", rows.len(), lang.code());
        Ok(rows)
    }

    /// Remaining promo seconds, `None` when the value is not a number.
    pub async fn timer(&self) -> Result<Option<i64>, ApiError> {
        let payload: TimerPayload = self.get_json(endpoints::TIMER).await?;
        Ok(payload.seconds())
    }

    pub async fn send_contact(&self, request: &ContactRequest) -> Result<(), ApiError> {
        let url = self.url(endpoints::CONTACT);
        let send = async {
            let response = Request::post(&url)
                .json(request)
                .map_err(map_transport)?
                .send()
                .await
                .map_err(map_transport)?;
            ensure_ok(response).await.map(drop)
        };
        self.with_timeout(send).await
    }

    pub async fn payment_cards(&self) -> Result<Vec<PaymentCard>, ApiError> {
        let payload: serde_json::Value = self.get_json(endpoints::PAYMENTS).await?;
        Ok(decode_list(payload))
    }

    pub async fn price_plans(&self) -> Result<Vec<PricePlan>, ApiError> {
        let payload: serde_json::Value = self.get_json(endpoints::PRICE_LIST).await?;
        Ok(decode_list(payload))
    }

    /// Multipart `POST /api/confirmations/` with the receipt as `check_image`.
    pub async fn send_confirmation(
        &self,
        fields: &ConfirmationFields,
        receipt: &web_sys::File,
    ) -> Result<(), ApiError> {
        let form = web_sys::FormData::new().map_err(map_js)?;
        for (name, value) in fields.parts() {
            form.append_with_str(name, value).map_err(map_js)?;
        }
        form.append_with_blob_and_filename(
            ConfirmationFields::RECEIPT_FIELD,
            receipt,
            &receipt.name(),
        )
        .map_err(map_js)?;

        // The browser sets the multipart boundary; no explicit Content-Type.
        let url = self.url(endpoints::CONFIRMATIONS);
        let send = async {
            let response = Request::post(&url)
                .body(form)
                .map_err(map_transport)?
                .send()
                .await
                .map_err(map_transport)?;
            ensure_ok(response).await.map(drop)
        };
        self.with_timeout(send).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        let fetch = async {
            let response = Request::get(&url)
                .header("Accept", "application/json")
                .send()
                .await
                .map_err(map_transport)?;
            let response = ensure_ok(response).await?;
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        };
        self.with_timeout(fetch).await.inspect_err(|e| {
            tracing::warn!("GET {url} failed: {e}");
        })
    }

    async fn with_timeout<T, F>(&self, fut: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let ms = self.config.request_timeout_ms;
        let fut = std::pin::pin!(fut);
        let deadline = std::pin::pin!(TimeoutFuture::new(ms));
        match select(fut, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(ApiError::Timeout(ms)),
        }
    }
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

fn map_transport(err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
        other => ApiError::Network(other.to_string()),
    }
}

fn map_js(value: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(
        value
            .as_string()
            .unwrap_or_else(|| "browser rejected the request body".to_owned()),
    )
}
