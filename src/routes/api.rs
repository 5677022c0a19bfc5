//! Resource routes, mounted under `/api`.
//!
//! Literal segments (`featured`, `count`, `slug/..`) are matched before `:id`.

use crate::handlers::{
    applications, articles, contact, jobs, newsletter, projects, resource, settings, showcase,
};
use crate::model::{
    Article, Category, ContactSubmission, Job, JobApplication, NewsletterSubscription, Project,
    Resource, Service, Setting, TeamMember, Testimonial, User,
};
use crate::state::AppState;
use axum::{
    routing::{get, post, MethodRouter},
    Router,
};

/// GET, PUT, PATCH and DELETE on `/:id`. PUT and PATCH both apply a partial update.
fn item<R: Resource>() -> MethodRouter<AppState> {
    get(resource::read::<R>)
        .put(resource::update::<R>)
        .patch(resource::update::<R>)
        .delete(resource::delete::<R>)
}

/// GET (filtered list) and POST (create) on the collection.
fn collection<R: Resource>() -> MethodRouter<AppState> {
    get(resource::list::<R>).post(resource::create::<R>)
}

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/articles", collection::<Article>())
        .route("/articles/featured", get(articles::featured))
        .route("/articles/count", get(resource::count::<Article>))
        .route("/articles/slug/:slug", get(resource::read_by_slug::<Article>))
        .route("/articles/category/:category_id", get(articles::by_category))
        .route("/articles/:id", item::<Article>())
        .route("/services", collection::<Service>())
        .route("/services/featured", get(showcase::featured_services))
        .route("/services/slug/:slug", get(resource::read_by_slug::<Service>))
        .route("/services/:id", item::<Service>())
        .route("/projects", collection::<Project>())
        .route("/projects/featured", get(projects::featured))
        .route("/projects/slug/:slug", get(resource::read_by_slug::<Project>))
        .route("/projects/category/:category", get(projects::by_category))
        .route("/projects/status/:status", get(projects::by_status))
        .route("/projects/:id", item::<Project>())
        .route("/jobs", collection::<Job>())
        .route("/jobs/open", get(jobs::open))
        .route("/jobs/slug/:slug", get(resource::read_by_slug::<Job>))
        .route("/jobs/type/:type", get(jobs::by_type))
        .route("/jobs/department/:department", get(jobs::by_department))
        .route("/jobs/:id/applications", get(jobs::applications))
        .route("/jobs/:id", item::<Job>())
        .route("/applications", collection::<JobApplication>())
        .route("/applications/count", get(resource::count::<JobApplication>))
        .route("/applications/status/:status", get(applications::by_status))
        .route("/applications/:id", item::<JobApplication>())
        .route("/team", collection::<TeamMember>())
        .route("/team/:id", item::<TeamMember>())
        .route("/testimonials", collection::<Testimonial>())
        .route("/testimonials/featured", get(showcase::featured_testimonials))
        .route("/testimonials/:id", item::<Testimonial>())
        .route(
            "/contact",
            get(resource::list::<ContactSubmission>).post(contact::submit),
        )
        .route("/contact/count", get(resource::count::<ContactSubmission>))
        .route("/contact/status/:status", get(contact::by_status))
        .route("/contact/:id", item::<ContactSubmission>())
        .route(
            "/newsletter",
            get(resource::list::<NewsletterSubscription>).post(newsletter::subscribe),
        )
        .route("/newsletter/unsubscribe", post(newsletter::unsubscribe))
        .route("/newsletter/count", get(resource::count::<NewsletterSubscription>))
        .route("/newsletter/:id", item::<NewsletterSubscription>())
        .route("/categories", collection::<Category>())
        .route("/categories/slug/:slug", get(resource::read_by_slug::<Category>))
        .route("/categories/:id", item::<Category>())
        .route("/settings", collection::<Setting>())
        .route("/settings/map", get(settings::map))
        .route(
            "/settings/key/:key",
            get(settings::read_by_key)
                .put(settings::update_by_key)
                .delete(settings::delete_by_key),
        )
        .route("/settings/:id", item::<Setting>())
        .route("/users", collection::<User>())
        .route("/users/:id", item::<User>())
        .with_state(state)
}
