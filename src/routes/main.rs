use actix_web::{HttpResponse, Responder, get, post, web};
use chrono::{Datelike, Utc};
use tera::{Context, Tera};

use crate::dto::main::LandingPageData;
use crate::forms::lead::LeadForm;
use crate::repository::http::HttpLeadRepository;
use crate::repository::{LeadReader, LeadWriter};
use crate::routes::render_template;
use crate::services::page::LeadPage;

#[get("/")]
pub async fn show_index(
    repo: web::Data<HttpLeadRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = LeadPage::open(repo.get_ref()).await;

    render_page(&tera, &page)
}

#[post("/leads")]
pub async fn submit_lead(
    repo: web::Data<HttpLeadRepository>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<LeadForm>,
) -> impl Responder {
    let mut page = LeadPage::open(repo.get_ref()).await;

    match page.apply_form(form) {
        Ok(()) => {
            page.submit().await;
        }
        Err(err) => log::warn!("Lead form contained a rejected value: {err}"),
    }

    render_page(&tera, &page)
}

fn render_page<R>(tera: &Tera, page: &LeadPage<'_, R>) -> HttpResponse
where
    R: LeadReader + LeadWriter + ?Sized,
{
    let data = LandingPageData::from_page(page, Utc::now().year());

    let mut context = Context::new();
    context.insert("page", &data);

    render_template(tera, "main/index.html", &context)
}
