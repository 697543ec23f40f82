//! Contact form handlers
//!
//! Submissions are logged and dropped; nothing is stored or sent.

use crate::extractors::PageContext;
use crate::views;
use axum::{
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    name: Option<String>,
    email: Option<String>,
    subject: Option<String>,
    message: Option<String>,
}

pub async fn form(ctx: PageContext) -> Html<String> {
    Html(views::contact(&ctx))
}

pub async fn submit(form: Option<Form<ContactForm>>) -> Redirect {
    let form = form.map(|Form(f)| f).unwrap_or_default();

    info!(
        sender = form.name.as_deref().unwrap_or(""),
        email = form.email.as_deref().unwrap_or(""),
        subject = form.subject.as_deref().unwrap_or(""),
        message_len = form.message.as_deref().map(str::len).unwrap_or(0),
        "Contact form submitted"
    );

    Redirect::to("/thankyou")
}
