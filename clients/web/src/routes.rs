use actix_cors::Cors;
use actix_web::{
    get, post,
    web::{self, Data, Redirect},
    Either, Responder,
};
use actix_web_lab::respond::Html;
use database::{
    consts::consts::PersonId,
    model::person::Person,
    service::{PersonService, Submission},
};
use serde::Deserialize;

use crate::{
    error::WebError,
    views::{self, FormMode},
};

const LIST_PATH: &str = "/person/list";

type FormResponse = Result<Either<Redirect, Html>, WebError>;

fn to_list() -> Redirect {
    Redirect::to(LIST_PATH).see_other()
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct DeleteForm {
    #[serde(default)]
    command: String,
    person_id: PersonId,
}

#[get("/")]
async fn home() -> impl Responder {
    to_list()
}

#[get("/list")]
async fn list(service: Data<PersonService>) -> Result<Html, WebError> {
    let people = service.list_people().await?;

    Ok(Html(views::list_page(&people)))
}

#[get("/create")]
async fn create_form() -> impl Responder {
    Html(views::person_form(FormMode::Create, &Person::default(), &[]))
}

#[post("/create")]
async fn create(service: Data<PersonService>, form: web::Form<Person>) -> FormResponse {
    let person = form.into_inner();

    match service.submit_create(&person).await? {
        Submission::Saved(_) => Ok(Either::Left(to_list())),
        Submission::Rejected(errors) => Ok(Either::Right(Html(views::person_form(
            FormMode::Create,
            &person,
            &errors,
        )))),
    }
}

#[get("/edit/{person_id}")]
async fn edit_form(
    service: Data<PersonService>,
    path: web::Path<i32>,
) -> Result<Html, WebError> {
    let person = service.read_person(PersonId(path.into_inner())).await?;

    Ok(Html(views::person_form(FormMode::Edit, &person, &[])))
}

#[post("/edit")]
async fn edit(service: Data<PersonService>, form: web::Form<Person>) -> FormResponse {
    let person = form.into_inner();

    match service.submit_update(&person).await? {
        Submission::Saved(_) => Ok(Either::Left(to_list())),
        Submission::Rejected(errors) => Ok(Either::Right(Html(views::person_form(
            FormMode::Edit,
            &person,
            &errors,
        )))),
    }
}

#[get("/delete/{person_id}")]
async fn delete_form(
    service: Data<PersonService>,
    path: web::Path<i32>,
) -> Result<Html, WebError> {
    let person = service.read_person(PersonId(path.into_inner())).await?;

    Ok(Html(views::delete_page(&person)))
}

/// Deletes or cancels, redirecting to the listing either way
#[post("/delete")]
async fn delete(
    service: Data<PersonService>,
    form: web::Form<DeleteForm>,
) -> Result<Redirect, WebError> {
    service
        .confirm_delete(&form.command, form.person_id)
        .await?;

    Ok(to_list())
}

/// Person listing as JSON for the browser frontend
#[get("/person/list")]
async fn list_json(service: Data<PersonService>) -> Result<web::Json<Vec<Person>>, WebError> {
    Ok(web::Json(service.list_people().await?))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(
            web::scope("/person")
                .service(list)
                .service(create_form)
                .service(create)
                .service(edit_form)
                .service(edit)
                .service(delete_form)
                .service(delete),
        )
        .service(
            web::scope("/api")
                .wrap(Cors::permissive())
                .service(list_json),
        );
}
