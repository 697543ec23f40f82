//! Project pages

use super::layout::{escape, render};
use crate::extractors::PageContext;
use portfolio_core::Project;
use url::Url;

const IMAGE_BASE: &str = "http://localhost/static/images/";

pub fn project_list(ctx: &PageContext, projects: &[Project]) -> String {
    let body = if projects.is_empty() {
        r#"      <p class="empty">No projects yet.</p>"#.to_string()
    } else {
        projects.iter().map(project_card).collect::<Vec<_>>().join("\n")
    };

    render(
        ctx,
        "Projects",
        &format!(
            r#"    <section>
      <h1>Projects</h1>
      <p><a class="button" href="/add_project">Add a project</a></p>
      <div class="project-grid">
{body}
      </div>
    </section>"#
        ),
    )
}

fn project_card(project: &Project) -> String {
    format!(
        r#"        <article class="project-card">
          <img src="{image}" alt="{title}">
          <h2>{title}</h2>
          <p>{description}</p>
          <time datetime="{created}">{created_display}</time>
          <form method="post" action="/delete_project/{id}">
            <button type="submit">Delete</button>
          </form>
        </article>"#,
        image = escape(&image_src(&project.image_filename)),
        title = escape(&project.title),
        description = escape(&project.description),
        created = project.created_at.to_rfc3339(),
        created_display = project.created_at.format("%B %-d, %Y"),
        id = project.id,
    )
}

/// Site-relative URL of a project image, with the filename encoded as a
/// single path segment.
fn image_src(filename: &str) -> String {
    let Ok(mut url) = Url::parse(IMAGE_BASE) else {
        return format!("/static/images/{}", filename);
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(filename);
    }
    url.path().to_string()
}

pub fn add_project_form(ctx: &PageContext) -> String {
    render(
        ctx,
        "Add Project",
        r#"    <section>
      <h1>Add a Project</h1>
      <form method="post" action="/add_project">
        <label for="title">Title</label>
        <input id="title" name="title" type="text" required>
        <label for="description">Description</label>
        <textarea id="description" name="description" rows="6" required></textarea>
        <label for="image_filename">Image filename</label>
        <input id="image_filename" name="image_filename" type="text" required>
        <button type="submit">Add project</button>
      </form>
    </section>"#,
    )
}
