//! HTTP server wiring.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};
use actix_web::{App, HttpServer, web};
use tracing::info;

use crate::domain::ports::ListingRepository;
use crate::domain::{ListingCommandService, ListingQueryService};
use crate::inbound::http;
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{
    DbPool, DieselListingRepository, InMemoryListingRepository, build_pool,
};

pub mod config;

pub use config::ServerConfig;

/// Build the session middleware shared by both adapters.
fn session_middleware(key: Key, cookie_secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .build()
}

/// Wire the listing services over any repository implementation.
pub fn build_state_with_repository<R>(repository: Arc<R>) -> HttpState
where
    R: ListingRepository + 'static,
{
    HttpState::new(
        Arc::new(ListingQueryService::new(repository.clone())),
        Arc::new(ListingCommandService::new(repository)),
    )
}

/// Wire the listing services over the configured entity store.
pub fn build_state(pool: Option<DbPool>) -> HttpState {
    match pool {
        Some(pool) => build_state_with_repository(Arc::new(DieselListingRepository::new(pool))),
        None => build_state_with_repository(Arc::new(InMemoryListingRepository::new())),
    }
}

/// Run the HTTP server until shutdown.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let pool = match &config.database_url {
        Some(url) => {
            let pool = build_pool(url, config.pool_max_size)
                .await
                .map_err(std::io::Error::other)?;
            info!("using PostgreSQL entity store");
            Some(pool)
        }
        None => {
            info!("no DATABASE_URL configured; using in-memory entity store");
            None
        }
    };

    let state = build_state(pool);
    let key = config.session_key.clone();
    let cookie_secure = config.cookie_secure;

    info!(addr = %config.bind_addr, "starting marketplace server");
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(session_middleware(key.clone(), cookie_secure))
            .configure(http::configure)
    })
    .bind(config.bind_addr)?
    .run()
    .await
}
