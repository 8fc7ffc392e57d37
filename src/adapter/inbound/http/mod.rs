//! HTTP inbound adapter: axum routes over the application services.

pub mod error;
pub mod handlers;
pub mod views;

use std::future::Future;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::application::DataContext;
use crate::error::Result;
use crate::port::outbound::catalog::Catalog;
use crate::port::outbound::directory::ManagerDirectory;

/// Build the application router over `ctx`.
pub fn router<C, M>(ctx: DataContext<C, M>) -> Router
where
    C: Catalog + 'static,
    M: ManagerDirectory + 'static,
{
    Router::new()
        .route("/", get(handlers::home))
        .route("/stores", get(handlers::list_stores::<C, M>))
        .route(
            "/stores/edit/{sid}",
            get(handlers::edit_store_form::<C, M>).post(handlers::edit_store_submit::<C, M>),
        )
        .route("/products", get(handlers::list_products::<C, M>))
        .route("/products/delete/{pid}", get(handlers::delete_product::<C, M>))
        .route("/managers", get(handlers::list_managers::<C, M>))
        .route(
            "/managers/add",
            get(handlers::add_manager_form).post(handlers::add_manager_submit::<C, M>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

/// Serve the router on `listener` until `shutdown` resolves.
///
/// # Errors
/// Returns an error if the server fails while accepting connections.
pub async fn serve<C, M, F>(listener: TcpListener, ctx: DataContext<C, M>, shutdown: F) -> Result<()>
where
    C: Catalog + 'static,
    M: ManagerDirectory + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(ctx))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
