//! The two apps, their entities and the permission names derived from them.

use std::fmt;

/// Top-level app an entity belongs to; also the URL prefix and permission app label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum App {
    Simple,
    Complex,
}

impl App {
    pub const ALL: [App; 2] = [App::Simple, App::Complex];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Complex => "complex",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Complex => "Complex",
        }
    }

    pub fn entities(&self) -> &'static [EntityKind] {
        match self {
            Self::Simple => &[EntityKind::Store, EntityKind::Widget, EntityKind::Inventory],
            Self::Complex => &[
                EntityKind::Sensor,
                EntityKind::Event,
                EntityKind::Device,
                EntityKind::Meter,
            ],
        }
    }
}

/// Write actions guarded by a permission. Reading only needs a login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Add,
    Change,
    Delete,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Add, Action::Change, Action::Delete];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Change => "change",
            Self::Delete => "delete",
        }
    }

    /// Title of the form guarding this action, e.g. `Create an Inventory`
    pub fn form_title(&self, kind: EntityKind) -> String {
        match self {
            Self::Add => format!("Create {} {}", kind.article(), kind.title()),
            Self::Change => format!("Update an Existing {}", kind.title()),
            Self::Delete => format!("Delete an Existing {}", kind.title()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Store,
    Widget,
    Inventory,
    Sensor,
    Event,
    Device,
    Meter,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Store,
        EntityKind::Widget,
        EntityKind::Inventory,
        EntityKind::Sensor,
        EntityKind::Event,
        EntityKind::Device,
        EntityKind::Meter,
    ];

    pub fn app(&self) -> App {
        match self {
            Self::Store | Self::Widget | Self::Inventory => App::Simple,
            Self::Sensor | Self::Event | Self::Device | Self::Meter => App::Complex,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Store => "store",
            Self::Widget => "widget",
            Self::Inventory => "inventory",
            Self::Sensor => "sensor",
            Self::Event => "event",
            Self::Device => "device",
            Self::Meter => "meter",
        }
    }

    /// URL path segment for the entity's routes
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Store => "stores",
            Self::Widget => "widgets",
            Self::Inventory => "inventories",
            Self::Sensor => "sensors",
            Self::Event => "events",
            Self::Device => "devices",
            Self::Meter => "meters",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Store => "Store",
            Self::Widget => "Widget",
            Self::Inventory => "Inventory",
            Self::Sensor => "Sensor",
            Self::Event => "Event",
            Self::Device => "Device",
            Self::Meter => "Meter",
        }
    }

    pub fn plural_title(&self) -> &'static str {
        match self {
            Self::Store => "Stores",
            Self::Widget => "Widgets",
            Self::Inventory => "Inventories",
            Self::Sensor => "Sensors",
            Self::Event => "Events",
            Self::Device => "Devices",
            Self::Meter => "Meters",
        }
    }

    pub fn article(&self) -> &'static str {
        match self {
            Self::Inventory | Self::Event => "an",
            _ => "a",
        }
    }

    /// `Simple: Active Stores`
    pub fn list_title(&self) -> String {
        format!("{}: Active {}", self.app().title(), self.plural_title())
    }

    /// `Simple: Store Detail`
    pub fn detail_title(&self) -> String {
        format!("{}: {} Detail", self.app().title(), self.title())
    }

    /// Whether the list links to a per-page aggregate
    pub fn has_aggregate(&self) -> bool {
        matches!(self, Self::Widget | Self::Inventory)
    }

    /// Permission codename such as `add_store`
    pub fn codename(&self, action: Action) -> String {
        format!("{}_{}", action.label(), self.name())
    }

    /// Codename of the permission implying add, change and delete, e.g. `store.full_access`
    pub fn full_access_codename(&self) -> String {
        format!("{}.full_access", self.name())
    }

    /// Fully qualified permission such as `simple.add_store`
    pub fn permission(&self, action: Action) -> String {
        format!("{}.{}", self.app().label(), self.codename(action))
    }

    pub fn full_access_permission(&self) -> String {
        format!("{}.{}", self.app().label(), self.full_access_codename())
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
