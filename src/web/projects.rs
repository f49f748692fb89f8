/// Project gallery endpoints
///
/// Listing, creation (multipart form with multiple image uploads), and
/// deletion. Creation validates presence of title and description; failures
/// come back as a flash notice on the form, never as a server error. Deletion
/// is idempotent: a missing id gets the same success notice as a real one.

use crate::{
    error::AppError,
    portfolio::ProjectForm,
    web::{flash, render, AppState},
};
use axum::{
    extract::{Multipart, Path, State},
    response::{Html, Redirect},
};
use axum_extra::extract::cookie::CookieJar;

/// Public URL prefix where stored gallery images are served from
pub const UPLOADS_PUBLIC_PATH: &str = "/static/images/projects";

/// GET /projects
///
/// All projects, newest first, each with its image gallery and a delete button.
pub async fn list_projects(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), AppError> {
    let projects = state.store.list_projects().await?;
    let (jar, notice) = flash::take(jar);

    let mut body = String::from(
        "<h1>Projects</h1>\n<p><a href=\"/projects/add\">Add a project</a></p>\n",
    );

    if projects.is_empty() {
        body.push_str("<p>No projects yet.</p>");
    }

    for project in &projects {
        body.push_str(&format!(
            "<article class=\"project\">\n<h2>{}</h2>\n<p>{}</p>\n",
            render::escape(&project.title),
            render::escape(&project.description),
        ));

        if let Some(link) = &project.link {
            let href = render::escape(link);
            body.push_str(&format!("<p><a href=\"{href}\">{href}</a></p>\n"));
        }
        if let Some(tags) = &project.tags {
            body.push_str(&format!(
                "<p class=\"tags\">{}</p>\n",
                render::escape(tags)
            ));
        }

        for image in &project.images {
            body.push_str(&format!(
                "<img src=\"{UPLOADS_PUBLIC_PATH}/{}\" alt=\"\">\n",
                render::escape(image)
            ));
        }

        body.push_str(&format!(
            "<form method=\"post\" action=\"/projects/delete/{}\">\
             <button type=\"submit\">Delete</button></form>\n</article>\n",
            project.id
        ));
    }

    Ok((jar, render::page("Projects", notice.as_ref(), &body)))
}

/// GET /projects/add
pub async fn add_project_form(jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, notice) = flash::take(jar);

    let body = "<h1>Add a project</h1>\n\
        <form method=\"post\" action=\"/projects/add\" enctype=\"multipart/form-data\">\n\
        <label>Title <input type=\"text\" name=\"title\"></label>\n\
        <label>Description <textarea name=\"description\"></textarea></label>\n\
        <label>Link <input type=\"url\" name=\"link\"></label>\n\
        <label>Tags <input type=\"text\" name=\"tags\"></label>\n\
        <label>Images <input type=\"file\" name=\"images\" multiple></label>\n\
        <button type=\"submit\">Save</button>\n\
        </form>";

    (jar, render::page("Add project", notice.as_ref(), body))
}

/// POST /projects/add
///
/// Multipart fields: title, description, link, tags, images[]. Image parts
/// are written to disk as they stream in; if validation then fails, the
/// just-written files are unlinked again and the user is redirected back to
/// the form with an error notice.
pub async fn submit_project(
    State(state): State<AppState>,
    jar: CookieJar,
    mut multipart: Multipart,
) -> Result<(CookieJar, Redirect), AppError> {
    let mut form = ProjectForm::default();
    let mut saved_images = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => form.title = field.text().await?,
            "description" => form.description = field.text().await?,
            "link" => form.link = field.text().await?,
            "tags" => form.tags = field.text().await?,
            "images" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                if let Some(stored) = state.images.save(&filename, &bytes)? {
                    saved_images.push(stored);
                }
            }
            other => {
                tracing::debug!("Ignoring unknown form field: {}", other);
            }
        }
    }

    if let Err(e) = form.validate() {
        // Identical uploads alias to one stored file; only unlink what no
        // existing gallery references.
        for stored in &saved_images {
            if !state.store.image_in_use(stored).await? {
                state.images.remove(stored);
            }
        }
        return Ok((flash::error(jar, &e.to_string()), Redirect::to("/projects/add")));
    }

    let project_id = state.store.create_project(&form, &saved_images).await?;
    tracing::info!(
        "Created project {} ({:?}) with {} image(s)",
        project_id,
        form.title.trim(),
        saved_images.len()
    );

    Ok((
        flash::success(jar, "Project added successfully!"),
        Redirect::to("/projects"),
    ))
}

/// POST /projects/delete/{id}
///
/// Removes the project row (image rows cascade) and unlinks the stored files
/// that no other gallery still references. Always redirects to the listing
/// with a success notice, even if the id did not exist.
pub async fn delete_project(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Result<(CookieJar, Redirect), AppError> {
    match state.store.delete_project(id).await? {
        Some(unreferenced) => {
            for image in &unreferenced {
                state.images.remove(image);
            }
            tracing::info!(
                "Deleted project {} and {} unreferenced image file(s)",
                id,
                unreferenced.len()
            );
        }
        None => {
            tracing::debug!("Delete requested for missing project {}", id);
        }
    }

    Ok((
        flash::success(jar, "Project deleted successfully!"),
        Redirect::to("/projects"),
    ))
}
