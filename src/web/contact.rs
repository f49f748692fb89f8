/// Contact form endpoints
///
/// Messages are write-only from the application's perspective: the POST
/// stores a row and nothing ever renders it back. Same validate/flash/redirect
/// pattern as project creation.

use crate::{
    error::AppError,
    portfolio::ContactForm,
    web::{flash, render, AppState},
};
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use axum_extra::extract::cookie::CookieJar;

/// GET /contact
pub async fn contact_form(jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, notice) = flash::take(jar);

    let body = "<h1>Contact</h1>\n\
        <form method=\"post\" action=\"/contact\">\n\
        <label>Name <input type=\"text\" name=\"name\"></label>\n\
        <label>Email <input type=\"email\" name=\"email\"></label>\n\
        <label>Subject <input type=\"text\" name=\"subject\"></label>\n\
        <label>Message <textarea name=\"message\"></textarea></label>\n\
        <button type=\"submit\">Send</button>\n\
        </form>";

    (jar, render::page("Contact", notice.as_ref(), body))
}

/// POST /contact
pub async fn submit_contact(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ContactForm>,
) -> Result<(CookieJar, Redirect), AppError> {
    if let Err(e) = form.validate() {
        return Ok((flash::error(jar, &e.to_string()), Redirect::to("/contact")));
    }

    let message_id = state.store.create_message(&form).await?;
    tracing::info!("Stored contact message {} from {}", message_id, form.email.trim());

    Ok((
        flash::success(jar, "Thanks for reaching out! I'll get back to you soon."),
        Redirect::to("/contact"),
    ))
}
