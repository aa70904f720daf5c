//! Backend API Wrappers
//!
//! Thin fetch bindings to the SafeEats REST backend. Every wrapper returns
//! `Result<T, String>`; transport and decode failures are flattened into the
//! error string and never escape as exceptions.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Headers, Request, RequestInit, Response};

use crate::models::{
    BulkIngestResult, MenuItem, MenuItemPayload, ParsedIngredientsResult, Restaurant, User,
};

const AUTH_TOKEN_KEY: &str = "auth_token";

fn base_url() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();
    if hostname == "localhost" {
        "http://localhost:8000".to_string()
    } else {
        "https://restaurant-allergy-manager-backend.onrender.com".to_string()
    }
}

fn auth_token() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(AUTH_TOKEN_KEY)
        .ok()?
}

// ========================
// Request Body Structs
// ========================

#[derive(Serialize)]
struct ParseIngredientsBody<'a> {
    ingredients: &'a str,
}

// ========================
// Fetch Plumbing
// ========================

enum Body {
    None,
    Json(String),
    Form(FormData),
}

async fn send(method: &str, path: &str, body: Body) -> Result<Response, String> {
    let headers = Headers::new().map_err(|e| format!("{e:?}"))?;
    headers
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    if let Some(token) = auth_token() {
        headers
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(|e| format!("{e:?}"))?;
    }

    let init = RequestInit::new();
    init.set_method(method);
    match body {
        Body::None => {}
        Body::Json(json) => {
            headers
                .set("Content-Type", "application/json")
                .map_err(|e| format!("{e:?}"))?;
            init.set_body(&JsValue::from_str(&json));
        }
        // The browser supplies the multipart content type itself
        Body::Form(form) => init.set_body(&form),
    }
    init.set_headers(&headers);

    let url = format!("{}{path}", base_url());
    let request = Request::new_with_str_and_init(&url, &init).map_err(|e| format!("{e:?}"))?;
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    response
        .dyn_into::<Response>()
        .map_err(|e| format!("{e:?}"))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    let promise = response.json().map_err(|e| format!("{e:?}"))?;
    let value = JsFuture::from(promise).await.map_err(|e| format!("{e:?}"))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

// ========================
// Auth
// ========================

/// Current user, or `Ok(None)` when there is no session to resolve (missing
/// or rejected token). Transport and backend failures are errors; callers
/// must not mistake them for "signed out".
pub async fn get_current_user() -> Result<Option<User>, String> {
    if auth_token().is_none() {
        return Ok(None);
    }
    let response = send("GET", "/auth/user", Body::None).await?;
    match response.status() {
        200 => decode(response).await.map(Some),
        401 | 403 => Ok(None),
        status => Err(format!("Failed to get user data ({status})")),
    }
}

// ========================
// Restaurants & Menu
// ========================

pub async fn get_restaurants() -> Result<Vec<Restaurant>, String> {
    let response = send("GET", "/restaurants", Body::None).await?;
    if response.status() != 200 {
        return Err(format!("Failed to fetch restaurants ({})", response.status()));
    }
    decode(response).await
}

/// Create one menu item; 200/201 both count as created
pub async fn add_menu_item(restaurant_id: &str, item: &MenuItemPayload) -> Result<MenuItem, String> {
    let json = serde_json::to_string(item).map_err(|e| e.to_string())?;
    let response = send(
        "POST",
        &format!("/restaurants/{restaurant_id}/menu"),
        Body::Json(json),
    )
    .await?;
    if response.status() != 200 && response.status() != 201 {
        return Err(format!("Failed to add menu item ({})", response.status()));
    }
    decode(response).await
}

// ========================
// AI
// ========================

pub async fn parse_ingredients_with_ai(text: &str) -> Result<ParsedIngredientsResult, String> {
    let json = serde_json::to_string(&ParseIngredientsBody { ingredients: text })
        .map_err(|e| e.to_string())?;
    let response = send("POST", "/ai/parse-ingredients", Body::Json(json)).await?;
    if response.status() != 200 {
        return Err(format!("Failed to parse ingredients ({})", response.status()));
    }
    decode(response).await
}

pub async fn ingest_menu_image(file: &File) -> Result<BulkIngestResult, String> {
    let form = FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_blob("file", file)
        .map_err(|e| format!("{e:?}"))?;
    let response = send("POST", "/ai/ingest-menu", Body::Form(form)).await?;
    if !response.ok() {
        return Err(format!("Failed to ingest menu image ({})", response.status()));
    }
    decode(response).await
}
