//! HTTP front-end for directory searches

use std::{
    future::{self, Future},
    io,
    sync::Arc,
};

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use log::{error, info, warn};

use crate::{
    client::{Directory, LdapDirectory},
    config::WebConfig,
    error::Result,
    page::SearchPage,
    request::{parse_fields, Scope, SearchQuery, ALL_FIELDS, DEFAULT_FILTER},
};

/// Query string of the search page. The first occurrence of a parameter wins,
/// missing and empty values fall back to defaults.
#[derive(Debug, Default, PartialEq)]
pub struct SearchParams {
    pub filter: Option<String>,
    pub fields: Option<String>,
    pub base_dn: Option<String>,
}

impl SearchParams {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = SearchParams::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "filter" => &mut params.filter,
                "fields" => &mut params.fields,
                "base-dn" => &mut params.base_dn,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(|| default.to_owned())
}

#[derive(Clone)]
struct AppState {
    directory: Arc<dyn Directory>,
    top_dn: Arc<str>,
}

/// Build the router: `/` renders search results, every other path is 404
pub fn router(directory: Arc<dyn Directory>, config: &WebConfig) -> Router {
    let state = AppState {
        directory,
        top_dn: config.top_dn.as_str().into(),
    };
    Router::new()
        .route("/", get(search_page))
        .fallback(not_found)
        .with_state(state)
}

fn bad_request(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        message,
    )
        .into_response()
}

async fn search_page(State(state): State<AppState>, Query(pairs): Query<Vec<(String, String)>>) -> Response {
    let params = SearchParams::from_pairs(pairs);
    let filter = or_default(params.filter, DEFAULT_FILTER);
    let fields = or_default(params.fields, ALL_FIELDS);
    let base_dn = or_default(params.base_dn, &state.top_dn);

    let query = SearchQuery::new(&base_dn)
        .scope(Scope::Subtree)
        .filter(&filter)
        .attributes(parse_fields(&fields));

    // reject malformed filters before opening a connection
    if let Err(e) = query.to_request() {
        warn!("Rejected filter {}: {}", filter, e);
        return bad_request(e.to_string());
    }

    let entries = match state.directory.search(&query).await {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Search in {} with filter {} failed: {}", base_dn, filter, e);
            return bad_request(e.to_string());
        }
    };

    match SearchPage::new(&filter, &fields, &base_dn, &state.top_dn, &entries).to_html() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Serve the front-end until Ctrl-C is received
pub async fn serve(config: WebConfig) -> Result<()> {
    let directory = Arc::new(LdapDirectory::new(config.directory.clone()));
    let app = router(directory, &config);

    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    info!(
        "Listening at http://{}, directory {}:{}",
        listener.local_addr()?,
        config.directory.host_name(),
        config.directory.port_number()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(tokio::signal::ctrl_c()))
        .await?;

    Ok(())
}

/// Resolves when the signal fires. Never resolves if the signal handler cannot be installed.
async fn shutdown_signal<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("Shutting down"),
        Err(e) => {
            warn!("Cannot listen for Ctrl-C, graceful shutdown disabled: {}", e);
            future::pending::<()>().await;
        }
    }
}
