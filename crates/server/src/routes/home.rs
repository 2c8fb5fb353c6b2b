//! Landing page route handler.

use askama::Template;
use askama_web::WebTemplate;

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct HomeTemplate;

/// Display the landing page.
pub async fn home() -> HomeTemplate {
    HomeTemplate
}
