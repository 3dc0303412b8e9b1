use axum::{response::IntoResponse, Json};

use crate::{
    model::api::{ErrorDto, HomeDto, LinkDto},
    server::{
        controller::util::current_user::CurrentUser,
        error::Error,
        model::kind::App,
        util::links::{app_path, create_path, list_path},
    },
};

pub static HOME_TAG: &str = "home";

fn app_links() -> Vec<LinkDto> {
    App::ALL
        .into_iter()
        .map(|app| LinkDto {
            title: format!("{} App", app.title()),
            href: app_path(app),
        })
        .collect()
}

/// List and create links for every entity of `app`.
fn entity_links(app: App) -> Vec<LinkDto> {
    app.entities()
        .iter()
        .flat_map(|kind| {
            [
                LinkDto {
                    title: kind.plural_title().to_string(),
                    href: list_path(*kind),
                },
                LinkDto {
                    title: format!("Create {} {}", kind.article(), kind.title()),
                    href: create_path(*kind),
                },
            ]
        })
        .collect()
}

/// Site home with links to both apps
#[utoipa::path(
    get,
    path = "/",
    tag = HOME_TAG,
    responses(
        (status = 200, description = "Home page", body = HomeDto),
        (status = 303, description = "Login required"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn home(current: CurrentUser) -> Result<impl IntoResponse, Error> {
    Ok(Json(HomeDto {
        title: "Home".to_string(),
        username: current.user.username,
        links: app_links(),
    }))
}

#[utoipa::path(
    get,
    path = "/simple/",
    tag = HOME_TAG,
    responses(
        (status = 200, description = "Simple app home", body = HomeDto),
        (status = 303, description = "Login required")
    ),
)]
pub async fn simple_home(current: CurrentUser) -> Result<impl IntoResponse, Error> {
    Ok(Json(app_home(App::Simple, current)))
}

#[utoipa::path(
    get,
    path = "/complex/",
    tag = HOME_TAG,
    responses(
        (status = 200, description = "Complex app home", body = HomeDto),
        (status = 303, description = "Login required")
    ),
)]
pub async fn complex_home(current: CurrentUser) -> Result<impl IntoResponse, Error> {
    Ok(Json(app_home(App::Complex, current)))
}

fn app_home(app: App, current: CurrentUser) -> HomeDto {
    HomeDto {
        title: format!("{} App", app.title()),
        username: current.user.username,
        links: entity_links(app),
    }
}

#[cfg(test)]
mod tests {
    use crate::server::model::kind::App;

    use super::entity_links;

    #[test]
    /// Expect a list and a create link per entity
    fn links_every_entity() {
        let links = entity_links(App::Complex);

        assert_eq!(links.len(), 8);
        assert_eq!(links[0].href, "/complex/sensors/");
        assert_eq!(links[1].href, "/complex/sensors/create/");
        assert_eq!(links[3].title, "Create an Event");
    }
}
