//! Project handlers

use crate::error::AppError;
use crate::extractors::PageContext;
use crate::handlers::pages;
use crate::views;
use crate::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use portfolio_core::{NewProject, ProjectId};
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Debug, Default, Deserialize)]
pub struct ProjectForm {
    title: Option<String>,
    description: Option<String>,
    image_filename: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    ctx: PageContext,
) -> Result<Html<String>, AppError> {
    let projects = state.projects.list_projects().await?;
    Ok(Html(views::project_list(&ctx, &projects)))
}

pub async fn add_form(ctx: PageContext) -> Html<String> {
    Html(views::add_project_form(&ctx))
}

/// Insert the submitted project and go back to the list.
///
/// An incomplete submission (including a missing or unreadable body) just
/// shows the empty form again.
pub async fn add(
    State(state): State<AppState>,
    ctx: PageContext,
    form: Option<Form<ProjectForm>>,
) -> Result<Response, AppError> {
    let form = form.map(|Form(f)| f).unwrap_or_default();

    match NewProject::from_fields(form.title, form.description, form.image_filename) {
        Some(project) => {
            let id = state.projects.insert_project(&project).await?;
            info!("Project {} added: {}", id, project.title);
            Ok(Redirect::to("/projects").into_response())
        }
        None => {
            debug!("Incomplete project submission ignored");
            Ok(Html(views::add_project_form(&ctx)).into_response())
        }
    }
}

/// Delete a project and go back to the list, whether or not it existed.
pub async fn delete(
    State(state): State<AppState>,
    ctx: PageContext,
    id: Result<Path<ProjectId>, PathRejection>,
) -> Result<Response, AppError> {
    let Ok(Path(id)) = id else {
        return Ok(pages::not_found(ctx).await.into_response());
    };

    let removed = state.projects.delete_project(id).await?;
    if removed == 0 {
        debug!("Delete requested for missing project {}", id);
    }

    Ok(Redirect::to("/projects").into_response())
}
