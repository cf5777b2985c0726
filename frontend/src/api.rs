//! One-shot HTTP transport for the tool endpoints.
//!
//! Exactly one request per call, no retry, no cancellation. Responses are
//! funneled through the shared classification: non-2xx statuses map to
//! `ToolError` via `classify_status` (403 → insufficient credits), a 2xx
//! body with `success: false` counts as a request failure, and transport
//! errors surface the screen's static fallback string.

use gloo_console::error;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use common::error::{classify_status, ToolError};
use common::responses::{CreditsResponse, Envelope, ErrorBody};

use crate::config;

/// POSTs a JSON payload and decodes an enveloped JSON response.
pub async fn post_json<B, R>(path: &str, body: &B, fallback: &str) -> Result<R, ToolError>
where
    B: Serialize,
    R: DeserializeOwned + Envelope,
{
    let url = config::api_url(path);
    let request = Request::post(&url).json(body).map_err(|err| {
        error!("failed to encode request body", err.to_string());
        ToolError::RequestFailed(fallback.to_string())
    })?;
    let response = send(request, fallback).await?;
    read_envelope(response, fallback).await
}

/// POSTs multipart form data and decodes an enveloped JSON response.
pub async fn post_form<R>(path: &str, form: FormData, fallback: &str) -> Result<R, ToolError>
where
    R: DeserializeOwned + Envelope,
{
    let url = config::api_url(path);
    let request = Request::post(&url).body(form).map_err(|err| {
        error!("failed to attach form data", err.to_string());
        ToolError::RequestFailed(fallback.to_string())
    })?;
    let response = send(request, fallback).await?;
    read_envelope(response, fallback).await
}

/// POSTs multipart form data and returns the raw response bytes (converted
/// files). Error bodies are JSON even on blob endpoints; they are read as
/// text and mined for a message before classification.
pub async fn post_form_blob(path: &str, form: FormData, fallback: &str) -> Result<Vec<u8>, ToolError> {
    let url = config::api_url(path);
    let request = Request::post(&url).body(form).map_err(|err| {
        error!("failed to attach form data", err.to_string());
        ToolError::RequestFailed(fallback.to_string())
    })?;
    let response = send(request, fallback).await?;
    read_bytes(response, fallback).await
}

/// POSTs a JSON payload and returns the raw response bytes (generated
/// PDFs).
pub async fn post_json_blob<B>(path: &str, body: &B, fallback: &str) -> Result<Vec<u8>, ToolError>
where
    B: Serialize,
{
    let url = config::api_url(path);
    let request = Request::post(&url).json(body).map_err(|err| {
        error!("failed to encode request body", err.to_string());
        ToolError::RequestFailed(fallback.to_string())
    })?;
    let response = send(request, fallback).await?;
    read_bytes(response, fallback).await
}

/// Balance lookup for the sidebar card. Best effort: any failure renders
/// as an unknown balance, never as a screen error.
pub async fn fetch_credits(user_id: &str) -> Option<u64> {
    let url = config::api_url(&format!("/api/users/{}/credits", user_id));
    match Request::get(&url).send().await {
        Ok(response) if response.ok() => match response.json::<CreditsResponse>().await {
            Ok(payload) if payload.success => payload.data.map(|d| d.credit_balance),
            Ok(_) => None,
            Err(err) => {
                error!("credit balance body unreadable", err.to_string());
                None
            }
        },
        Ok(response) => {
            error!("credit balance lookup failed", response.status());
            None
        }
        Err(err) => {
            error!("credit balance lookup failed", err.to_string());
            None
        }
    }
}

async fn send(request: gloo_net::http::Request, fallback: &str) -> Result<Response, ToolError> {
    request.send().await.map_err(|err| {
        error!("request failed", err.to_string());
        ToolError::RequestFailed(fallback.to_string())
    })
}

async fn read_envelope<R>(response: Response, fallback: &str) -> Result<R, ToolError>
where
    R: DeserializeOwned + Envelope,
{
    if !response.ok() {
        return Err(classify(response, fallback).await);
    }
    match response.json::<R>().await {
        Ok(payload) if payload.is_success() => Ok(payload),
        Ok(_) => Err(ToolError::RequestFailed(fallback.to_string())),
        Err(err) => {
            error!("response body unreadable", err.to_string());
            Err(ToolError::RequestFailed(fallback.to_string()))
        }
    }
}

async fn read_bytes(response: Response, fallback: &str) -> Result<Vec<u8>, ToolError> {
    if !response.ok() {
        return Err(classify(response, fallback).await);
    }
    response.binary().await.map_err(|err| {
        error!("response body unreadable", err.to_string());
        ToolError::RequestFailed(fallback.to_string())
    })
}

async fn classify(response: Response, fallback: &str) -> ToolError {
    let status = response.status();
    let server_message = match response.text().await {
        Ok(body) => serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.first_message()),
        Err(_) => None,
    };
    classify_status(status, server_message, fallback)
}
