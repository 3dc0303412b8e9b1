//! URL paths derived from entity kinds and record ids.

use crate::server::model::kind::{App, EntityKind};

/// Detail, update and delete paths for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityLinks {
    pub link: String,
    pub ulink: String,
    pub dlink: String,
}

impl EntityLinks {
    pub fn new(kind: EntityKind, id: i32) -> Self {
        let base = list_path(kind);

        Self {
            link: format!("{}{}/", base, id),
            ulink: format!("{}update/{}/", base, id),
            dlink: format!("{}delete/{}/", base, id),
        }
    }
}

/// Pages addressed by the id of the record they report on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordPage {
    Created,
    Updated,
    Deleted,
    /// Shown when a detail request names a record the user can't see
    Eperm,
    Nonexistent,
}

impl RecordPage {
    pub fn segment(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
            Self::Eperm => "eperm",
            Self::Nonexistent => "nonexistent",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Created => "Data Submission",
            Self::Updated => "Data Modification",
            Self::Deleted => "Data Deletion",
            Self::Eperm => "Permission Denied",
            Self::Nonexistent => "Non-Existent Object",
        }
    }

    pub fn path(&self, app: App, id: i32) -> String {
        format!("/{}/{}/{}/", app.label(), self.segment(), id)
    }
}

pub fn app_path(app: App) -> String {
    format!("/{}/", app.label())
}

pub fn list_path(kind: EntityKind) -> String {
    format!("/{}/{}/", kind.app().label(), kind.plural())
}

pub fn page_path(kind: EntityKind, page: u64) -> String {
    format!("{}page/{}/", list_path(kind), page)
}

pub fn aggregate_path(kind: EntityKind, page: u64) -> String {
    format!("{}aggr/{}/", list_path(kind), page)
}

pub fn create_path(kind: EntityKind) -> String {
    format!("{}create/", list_path(kind))
}

/// Login page that returns to `next` after signing in.
///
/// Each path segment of `next` is form-urlencoded; the `/` separators stay readable.
pub fn login_redirect_path(next: &str) -> String {
    let encoded = next
        .split('/')
        .map(|segment| url::form_urlencoded::byte_serialize(segment.as_bytes()).collect::<String>())
        .collect::<Vec<_>>()
        .join("/");

    format!("/auth/login/?next={}", encoded)
}
