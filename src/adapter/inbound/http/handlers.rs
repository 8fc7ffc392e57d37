//! Route handlers.
//!
//! Each handler builds the matching application service over the shared
//! [`DataContext`], runs one workflow and renders the outcome.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use super::error::HttpError;
use super::views;
use crate::application::{DataContext, ManagerService, ProductService, StoreService};
use crate::domain::{ManagerDraft, ProductId, StoreEdit, StoreId, ValidationReport};
use crate::port::inbound::workflow::{ManagerCreateOutcome, ProductDeleteOutcome, StoreEditOutcome};
use crate::port::outbound::catalog::Catalog;
use crate::port::outbound::directory::ManagerDirectory;

type HandlerResult = Result<Response, HttpError>;

/// Store edit form body. Missing fields arrive as empty strings and fail
/// validation like any other empty input.
#[derive(Debug, Deserialize)]
pub struct StoreForm {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub mgrid: String,
}

impl From<StoreForm> for StoreEdit {
    fn from(form: StoreForm) -> Self {
        StoreEdit::new(form.location, form.mgrid)
    }
}

pub async fn home() -> Html<String> {
    Html(views::home())
}

pub async fn list_stores<C, M>(State(ctx): State<DataContext<C, M>>) -> HandlerResult
where
    C: Catalog,
    M: ManagerDirectory,
{
    let stores = StoreService::new(&ctx).list().await?;
    Ok(Html(views::stores(&stores)).into_response())
}

pub async fn edit_store_form<C, M>(
    State(ctx): State<DataContext<C, M>>,
    Path(sid): Path<String>,
) -> HandlerResult
where
    C: Catalog,
    M: ManagerDirectory,
{
    let store = StoreService::new(&ctx).get(&StoreId::from(sid)).await?;
    Ok(Html(views::store_edit(&store, &ValidationReport::new())).into_response())
}

pub async fn edit_store_submit<C, M>(
    State(ctx): State<DataContext<C, M>>,
    Path(sid): Path<String>,
    Form(form): Form<StoreForm>,
) -> HandlerResult
where
    C: Catalog,
    M: ManagerDirectory,
{
    let outcome = StoreService::new(&ctx)
        .edit(&StoreId::from(sid), form.into())
        .await?;
    Ok(match outcome {
        StoreEditOutcome::Updated => Redirect::to("/stores").into_response(),
        StoreEditOutcome::Rejected { store, report } => {
            Html(views::store_edit(&store, &report)).into_response()
        }
    })
}

pub async fn list_products<C, M>(State(ctx): State<DataContext<C, M>>) -> HandlerResult
where
    C: Catalog,
    M: ManagerDirectory,
{
    let listings = ProductService::new(&ctx).list().await?;
    Ok(Html(views::products(&listings)).into_response())
}

pub async fn delete_product<C, M>(
    State(ctx): State<DataContext<C, M>>,
    Path(pid): Path<String>,
) -> HandlerResult
where
    C: Catalog,
    M: ManagerDirectory,
{
    let outcome = ProductService::new(&ctx)
        .delete(&ProductId::from(pid))
        .await?;
    Ok(match outcome {
        ProductDeleteOutcome::Deleted | ProductDeleteOutcome::Missing => {
            Redirect::to("/products").into_response()
        }
        ProductDeleteOutcome::InUse { product_id, .. } => {
            Html(views::product_in_use(&product_id)).into_response()
        }
    })
}

pub async fn list_managers<C, M>(State(ctx): State<DataContext<C, M>>) -> HandlerResult
where
    C: Catalog,
    M: ManagerDirectory,
{
    let managers = ManagerService::new(&ctx).list().await?;
    Ok(Html(views::managers(&managers)).into_response())
}

pub async fn add_manager_form() -> Html<String> {
    Html(views::manager_add(
        &ManagerDraft::default(),
        &ValidationReport::new(),
    ))
}

pub async fn add_manager_submit<C, M>(
    State(ctx): State<DataContext<C, M>>,
    Form(draft): Form<ManagerDraft>,
) -> HandlerResult
where
    C: Catalog,
    M: ManagerDirectory,
{
    let outcome = ManagerService::new(&ctx).create(draft).await?;
    Ok(match outcome {
        ManagerCreateOutcome::Created(_) => Redirect::to("/managers").into_response(),
        ManagerCreateOutcome::Rejected { draft, report } => {
            Html(views::manager_add(&draft, &report)).into_response()
        }
    })
}
