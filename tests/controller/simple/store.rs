//! Store endpoints: permission checks, tenancy, CSRF and soft delete.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use popular::server::{
    controller::simple::store::{
        create_store, create_store_form, delete_store, delete_store_form, get_store,
        get_stores_page, list_stores, update_store, update_store_form,
    },
    controller::util::current_user::CurrentUser,
    form::{simple::StoreForm, ConfirmForm},
    model::{app::AppState, session::user::SessionUserId},
    service::permission::PermissionService,
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use super::*;

fn store_form(name: &str, location: &str, csrf: Option<String>) -> StoreForm {
    StoreForm {
        name: Some(name.to_string()),
        location: Some(location.to_string()),
        csrfmiddlewaretoken: csrf,
    }
}

mod create {
    use super::*;

    #[tokio::test]
    /// Expect 303 to the login page for a user without `simple.add_store`
    async fn requires_add_permission() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_simple_tables().build().await?;
        let user = test.user().insert_user("viewer").await?;
        let (state, current) = test.login_as(user.id, "/simple/stores/create/").await;

        let resp = create_store_form(State(state), test.session.clone(), current)
            .await
            .err()
            .unwrap()
            .into_response();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            location(&resp),
            "/auth/login/?next=/simple/stores/create/"
        );

        Ok(())
    }

    #[tokio::test]
    /// Expect the create form to carry the defaults and the session token
    async fn form_has_defaults() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_simple_tables().build().await?;
        let user = test
            .user()
            .insert_user_with_permissions("clerk", &[("simple", "add_store")])
            .await?;
        let (state, current) = test.login_as(user.id, "/simple/stores/create/").await;

        let resp = create_store_form(State(state), test.session.clone(), current)
            .await
            .unwrap()
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["title"], "Create a Store");
        assert_eq!(body["initial"]["name"], "myStore");
        assert_eq!(body["initial"]["location"], "El Cerrito");
        assert_eq!(body["csrf_token"], test.csrf_token().await.unwrap());

        Ok(())
    }

    #[tokio::test]
    /// Expect 303 to the created page with links stored on the new store
    async fn creates_and_redirects() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_simple_tables().build().await?;
        let user = test
            .user()
            .insert_user_with_permissions("clerk", &[("simple", "add_store")])
            .await?;
        let (state, current) = test.login_as(user.id, "/simple/stores/create/").await;
        let csrf = test.csrf_token().await;

        let resp = create_store(
            State(state.clone()),
            test.session.clone(),
            current,
            Form(store_form("Corner", "Berkeley", csrf)),
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let created = location(&resp).to_string();
        assert!(created.starts_with("/simple/created/"));

        let id: i32 = created
            .trim_start_matches("/simple/created/")
            .trim_end_matches('/')
            .parse()
            .unwrap();
        let (state, current) = test.login_as(user.id, "/").await;
        let resp = get_store(State(state), current, Path(id))
            .await
            .unwrap()
            .into_response();
        let body = json_body(resp).await;
        assert_eq!(body["title"], "Simple: Store Detail");
        assert_eq!(body["item"]["link"], format!("/simple/stores/{}/", id));
        assert_eq!(body["item"]["ulink"], format!("/simple/stores/update/{}/", id));
        assert_eq!(body["item"]["dlink"], format!("/simple/stores/delete/{}/", id));

        Ok(())
    }

    #[tokio::test]
    /// Expect membership of the seeded `add` group to grant create
    async fn group_grants_permission() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_simple_tables().build().await?;
        PermissionService::new(&test.db)
            .seed_default_groups()
            .await
            .unwrap();
        let user = test.user().insert_user("member").await?;
        let group = entity::prelude::AuthGroup::find()
            .filter(entity::auth_group::Column::Name.eq("add"))
            .one(&test.db)
            .await?
            .unwrap();
        test.user().add_user_to_group(user.id, group.id).await?;
        let (state, current) = test.login_as(user.id, "/simple/stores/create/").await;
        let csrf = test.csrf_token().await;

        let resp = create_store(
            State(state),
            test.session.clone(),
            current,
            Form(store_form("Grouped", "Albany", csrf)),
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);

        Ok(())
    }

    #[tokio::test]
    /// Expect 403 when the form carries no CSRF token, and nothing created
    async fn requires_csrf_token() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_simple_tables().build().await?;
        let user = test.user().insert_superuser("admin").await?;
        let (state, current) = test.login_as(user.id, "/simple/stores/create/").await;

        let resp = create_store(
            State(state),
            test.session.clone(),
            current,
            Form(store_form("Corner", "Berkeley", None)),
        )
        .await
        .err()
        .unwrap()
        .into_response();

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert_eq!(entity::prelude::SimpleStore::find().count(&test.db).await?, 0);

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 with the duplicate message on the clashing field
    async fn duplicate_name_is_a_field_error() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_simple_tables().build().await?;
        let user = test.user().insert_superuser("admin").await?;
        test.simple().insert_store(user.id, "Corner", "Berkeley").await?;
        let (state, current) = test.login_as(user.id, "/simple/stores/create/").await;
        let csrf = test.csrf_token().await;

        let resp = create_store(
            State(state),
            test.session.clone(),
            current,
            Form(store_form("Corner", "Oakland", csrf)),
        )
        .await
        .err()
        .unwrap()
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = json_body(resp).await;
        assert_eq!(
            body["errors"]["name"][0],
            "Name already selected, please choose another."
        );

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 listing every bad field at once
    async fn reports_all_field_errors() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_simple_tables().build().await?;
        let user = test.user().insert_superuser("admin").await?;
        let (state, current) = test.login_as(user.id, "/simple/stores/create/").await;
        let csrf = test.csrf_token().await;

        let resp = create_store(
            State(state),
            test.session.clone(),
            current,
            Form(store_form("   ", &"x".repeat(21), csrf)),
        )
        .await
        .err()
        .unwrap()
        .into_response();

        let body = json_body(resp).await;
        assert_eq!(body["errors"]["name"][0], "This field is required.");
        assert_eq!(
            body["errors"]["location"][0],
            "Ensure this value has at most 20 characters (it has 21)."
        );

        Ok(())
    }
}

mod read {
    use super::*;

    #[tokio::test]
    /// Expect 404 when the user has no stores to list
    async fn empty_list_is_not_found() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_simple_tables().build().await?;
        let user = test.user().insert_user("qa").await?;
        let other = test.user().insert_user("other").await?;
        test.simple().insert_store(other.id, "Theirs", "Oakland").await?;
        let (state, current) = test.login_as(user.id, "/simple/stores/").await;

        let resp = list_stores(State(state), current)
            .await
            .err()
            .unwrap()
            .into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    /// Expect a full first page to link to the next and a later page to link back
    async fn pages_link_to_neighbours() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_simple_tables().build().await?;
        let user = test.user().insert_user("qa").await?;
        for n in 0..12 {
            test.simple()
                .insert_store(user.id, &format!("store{}", n), &format!("loc{}", n))
                .await?;
        }

        let (state, current) = test.login_as(user.id, "/simple/stores/").await;
        let first = json_body(
            list_stores(State(state), current)
                .await
                .unwrap()
                .into_response(),
        )
        .await;
        assert_eq!(first["title"], "Simple: Active Stores");
        assert_eq!(first["items"].as_array().unwrap().len(), 10);
        assert_eq!(first["prev"], serde_json::Value::Null);
        assert_eq!(first["next"], "/simple/stores/page/1/");
        assert_eq!(first["aggr"], serde_json::Value::Null);

        let (state, current) = test.login_as(user.id, "/simple/stores/page/1/").await;
        let second = json_body(
            get_stores_page(State(state), current, Path(1))
                .await
                .unwrap()
                .into_response(),
        )
        .await;
        assert_eq!(second["items"].as_array().unwrap().len(), 2);
        assert_eq!(second["prev"], "/simple/stores/page/0/");
        assert_eq!(second["next"], serde_json::Value::Null);

        Ok(())
    }

    #[tokio::test]
    /// Expect a page number far past the end to list nothing rather than fail
    async fn huge_page_number_is_empty() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_simple_tables().build().await?;
        let user = test.user().insert_user("qa").await?;
        test.simple().insert_store(user.id, "Corner", "Berkeley").await?;
        let (state, current) = test.login_as(user.id, "/").await;

        let resp = get_stores_page(State(state), current, Path(922_337_203_685_477_581))
            .await
            .unwrap()
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert!(body["items"].as_array().unwrap().is_empty());
        assert_eq!(body["next"], serde_json::Value::Null);

        Ok(())
    }

    #[tokio::test]
    /// Expect 303 to the eperm page for another user's store
    async fn foreign_detail_redirects_to_eperm() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_simple_tables().build().await?;
        let user = test.user().insert_user("qa").await?;
        let other = test.user().insert_user("other").await?;
        let theirs = test.simple().insert_store(other.id, "Theirs", "Oakland").await?;
        let (state, current) = test.login_as(user.id, "/").await;

        let resp = get_store(State(state), current, Path(theirs.id))
            .await
            .unwrap()
            .into_response();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), format!("/simple/eperm/{}/", theirs.id));

        Ok(())
    }
}

mod update {
    use super::*;

    #[tokio::test]
    /// Expect 404 when updating another user's store, which stays unchanged
    async fn foreign_store_is_not_found() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_simple_tables().build().await?;
        let user = test
            .user()
            .insert_user_with_permissions("editor", &[("simple", "change_store")])
            .await?;
        let other = test.user().insert_user("other").await?;
        let theirs = test.simple().insert_store(other.id, "Theirs", "Oakland").await?;
        let (state, current) = test.login_as(user.id, "/").await;
        let csrf = test.csrf_token().await;

        let resp = update_store(
            State(state),
            test.session.clone(),
            current,
            Path(theirs.id),
            Form(store_form("Mine now", "Oakland", csrf)),
        )
        .await
        .err()
        .unwrap()
        .into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let unchanged = entity::prelude::SimpleStore::find_by_id(theirs.id)
            .one(&test.db)
            .await?
            .unwrap();
        assert_eq!(unchanged.name, "Theirs");

        Ok(())
    }

    #[tokio::test]
    /// Expect 303 to the updated page after a change
    async fn updates_own_store() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_simple_tables().build().await?;
        let user = test
            .user()
            .insert_user_with_permissions("editor", &[("simple", "store.full_access")])
            .await?;
        let store = test.simple().insert_store(user.id, "Old", "Berkeley").await?;
        let (state, current) = test.login_as(user.id, "/").await;
        let csrf = test.csrf_token().await;

        let resp = update_store(
            State(state),
            test.session.clone(),
            current,
            Path(store.id),
            Form(store_form("New", "Berkeley", csrf)),
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(location(&resp), format!("/simple/updated/{}/", store.id));
        let updated = entity::prelude::SimpleStore::find_by_id(store.id)
            .one(&test.db)
            .await?
            .unwrap();
        assert_eq!(updated.name, "New");

        Ok(())
    }
}

mod delete {
    use super::*;

    #[tokio::test]
    /// Expect the row to be kept with `deleted` set and hidden from reads
    async fn soft_deletes() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_simple_tables().build().await?;
        let user = test
            .user()
            .insert_user_with_permissions("remover", &[("simple", "delete_store")])
            .await?;
        let store = test.simple().insert_store(user.id, "Gone", "Berkeley").await?;
        let (state, current) = test.login_as(user.id, "/").await;
        let csrf = test.csrf_token().await;

        let resp = delete_store(
            State(state),
            test.session.clone(),
            current,
            Path(store.id),
            Form(ConfirmForm {
                csrfmiddlewaretoken: csrf,
            }),
        )
        .await
        .unwrap()
        .into_response();
        assert_eq!(location(&resp), format!("/simple/deleted/{}/", store.id));

        let row = entity::prelude::SimpleStore::find_by_id(store.id)
            .one(&test.db)
            .await?
            .unwrap();
        assert!(row.deleted);

        let (state, current) = test.login_as(user.id, "/").await;
        let resp = get_store(State(state), current, Path(store.id))
            .await
            .unwrap()
            .into_response();
        assert_eq!(location(&resp), format!("/simple/eperm/{}/", store.id));

        let (state, current) = test.login_as(user.id, "/").await;
        let resp = delete_store_form(State(state), test.session.clone(), current, Path(store.id))
            .await
            .err()
            .unwrap()
            .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    /// Expect an account deactivated after login to be sent back to the login page
    async fn inactive_user_is_logged_out() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_simple_tables().build().await?;
        let user = test
            .user()
            .insert_user_with_flags("dormant", false, true, true)
            .await?;
        test.simple().insert_store(user.id, "Kept", "Berkeley").await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let state = test.to_app_state::<AppState>();
        let resp = CurrentUser::from_session(&state, &test.session, "/simple/stores/".to_string())
            .await
            .err()
            .unwrap()
            .into_response();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/auth/login/?next=/simple/stores/");
        assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

        Ok(())
    }
}

mod roles {
    use super::*;

    /// Seeded group and whether it may (add, change, delete) stores.
    const MATRIX: [(&str, [bool; 3]); 5] = [
        ("view", [false, false, false]),
        ("add", [true, false, false]),
        ("change", [false, true, false]),
        ("delete", [false, false, true]),
        ("full_access", [true, true, true]),
    ];

    #[tokio::test]
    /// Expect each seeded group to open exactly the forms its name grants, and every group to list
    async fn seeded_group_matrix() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_simple_tables().build().await?;
        PermissionService::new(&test.db)
            .seed_default_groups()
            .await
            .unwrap();

        for (group_name, [can_add, can_change, can_delete]) in MATRIX {
            let user = test.user().insert_user(&format!("{}_member", group_name)).await?;
            let group = entity::prelude::AuthGroup::find()
                .filter(entity::auth_group::Column::Name.eq(group_name))
                .one(&test.db)
                .await?
                .unwrap();
            test.user().add_user_to_group(user.id, group.id).await?;
            let store = test
                .simple()
                .insert_store(user.id, &format!("S-{}", group_name), &format!("L-{}", group_name))
                .await?;

            let (state, current) = test.login_as(user.id, "/simple/stores/").await;
            let resp = list_stores(State(state), current).await.into_response();
            assert_eq!(resp.status(), StatusCode::OK, "{} list", group_name);

            let (state, current) = test.login_as(user.id, "/simple/stores/create/").await;
            let resp = create_store_form(State(state), test.session.clone(), current)
                .await
                .into_response();
            assert_eq!(resp.status() == StatusCode::OK, can_add, "{} add", group_name);

            let (state, current) = test.login_as(user.id, "/").await;
            let resp = update_store_form(State(state), test.session.clone(), current, Path(store.id))
                .await
                .into_response();
            assert_eq!(resp.status() == StatusCode::OK, can_change, "{} change", group_name);

            let (state, current) = test.login_as(user.id, "/").await;
            let resp = delete_store_form(State(state), test.session.clone(), current, Path(store.id))
                .await
                .into_response();
            assert_eq!(resp.status() == StatusCode::OK, can_delete, "{} delete", group_name);
            if !can_delete {
                assert_eq!(resp.status(), StatusCode::SEE_OTHER);
            }
        }

        Ok(())
    }
}
