//! Device-role ranking inside a group.
//!
//! Products are classified by keyword rules tested in order; the first rule that
//! matches decides the role. Control panels come first, then peripherals,
//! wiring and enclosures, and service tools last.

use serde::Serialize;

use crate::product::CatalogProduct;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceRole {
    ControlPanel,
    Controller,
    Expander,
    Sensor,
    DisplayPanel,
    CallPoint,
    ControlBlock,
    CommModule,
    Sounder,
    PowerSupply,
    Cable,
    Enclosure,
    ServiceTool,
    Featured,
    Other,
}

impl DeviceRole {
    /// Sort rank within a group; lower sorts first.
    pub fn rank(self) -> u8 {
        match self {
            DeviceRole::ControlPanel => 1,
            DeviceRole::Controller => 2,
            DeviceRole::Expander => 3,
            DeviceRole::Sensor => 4,
            DeviceRole::DisplayPanel => 5,
            DeviceRole::CallPoint => 6,
            DeviceRole::ControlBlock => 7,
            DeviceRole::CommModule => 8,
            DeviceRole::Sounder => 9,
            DeviceRole::PowerSupply => 10,
            DeviceRole::Cable => 11,
            DeviceRole::Enclosure => 12,
            DeviceRole::Other => 13,
            DeviceRole::Featured => 15,
            DeviceRole::ServiceTool => 20,
        }
    }
}

/// A single keyword test against the lowercased product text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Name contains the term.
    Name(&'static str),
    /// Description contains the term.
    Description(&'static str),
    /// Name contains the first term but not the second.
    NameWithout(&'static str, &'static str),
    /// Product is flagged as featured.
    Featured,
}

#[derive(Debug, Clone, Copy)]
pub struct RoleRule {
    pub role: DeviceRole,
    pub any_of: &'static [Matcher],
}

use Matcher::{Description as D, Name as N};

/// The classification cascade, in evaluation order.
pub const ROLE_RULES: &[RoleRule] = &[
    RoleRule {
        role: DeviceRole::ControlPanel,
        any_of: &[
            N("пкп"),
            N("приемно-контрольный"),
            N("прибор приемно-контрольный"),
            N("security hub"),
            N("astra-812"),
            N("астра-812"),
            D("приемно-контрольный прибор"),
            D("ппкуп"),
        ],
    },
    RoleRule {
        role: DeviceRole::Controller,
        any_of: &[
            N("контроллер"),
            N("controller"),
            Matcher::NameWithout("прибор", "приемно"),
        ],
    },
    RoleRule {
        role: DeviceRole::Expander,
        any_of: &[N("расширитель"), N("расширение"), N("рпа"), D("расширитель")],
    },
    RoleRule {
        role: DeviceRole::Sensor,
        any_of: &[
            N("датчик"),
            N("sensor"),
            N("извещатель"),
            D("датчик"),
            D("извещатель"),
        ],
    },
    RoleRule {
        role: DeviceRole::DisplayPanel,
        any_of: &[N("панель"), N("hmi"), N("индикатор"), D("панель")],
    },
    RoleRule {
        role: DeviceRole::CallPoint,
        any_of: &[
            N("кнопка"),
            N("ручной"),
            N("button"),
            D("кнопка"),
            D("ручной извещатель"),
        ],
    },
    RoleRule {
        role: DeviceRole::ControlBlock,
        any_of: &[N("блок"), N("реле"), N("relay"), D("блок"), D("реле")],
    },
    RoleRule {
        role: DeviceRole::CommModule,
        any_of: &[
            N("модуль"),
            N("module"),
            N("gsm"),
            N("lan"),
            N("rs-485"),
            D("модуль"),
        ],
    },
    RoleRule {
        role: DeviceRole::Sounder,
        any_of: &[
            N("сирена"),
            N("siren"),
            N("оповещатель"),
            D("сирена"),
            D("оповещатель"),
        ],
    },
    RoleRule {
        role: DeviceRole::PowerSupply,
        any_of: &[
            N("блок питания"),
            N("power supply"),
            N("источник питания"),
            D("блок питания"),
        ],
    },
    RoleRule {
        role: DeviceRole::Cable,
        any_of: &[N("кабель"), N("cable"), N("провод"), D("кабель")],
    },
    RoleRule {
        role: DeviceRole::Enclosure,
        any_of: &[
            N("корпус"),
            N("шкаф"),
            N("cabinet"),
            N("ящик"),
            D("корпус"),
            D("шкаф"),
        ],
    },
    RoleRule {
        role: DeviceRole::ServiceTool,
        any_of: &[
            N("пульт"),
            N("тестер"),
            N("сервис"),
            D("сервисное"),
            D("тестирование"),
        ],
    },
    RoleRule {
        role: DeviceRole::Featured,
        any_of: &[Matcher::Featured],
    },
];

/// Lowercased text of one product, computed once per classification.
struct Haystack<'a> {
    name: String,
    description: String,
    product: &'a CatalogProduct,
}

impl Matcher {
    fn matches(&self, hay: &Haystack<'_>) -> bool {
        match *self {
            Matcher::Name(term) => hay.name.contains(term),
            Matcher::Description(term) => hay.description.contains(term),
            Matcher::NameWithout(term, unless) => {
                hay.name.contains(term) && !hay.name.contains(unless)
            }
            Matcher::Featured => hay.product.is_featured,
        }
    }
}

impl RoleRule {
    fn matches(&self, hay: &Haystack<'_>) -> bool {
        self.any_of.iter().any(|m| m.matches(hay))
    }
}

/// Role of a product; [`DeviceRole::Other`] when no rule matches.
pub fn classify(product: &CatalogProduct) -> DeviceRole {
    let hay = Haystack {
        name: product.name.to_lowercase(),
        description: product.description_or_empty().to_lowercase(),
        product,
    };
    ROLE_RULES
        .iter()
        .find(|rule| rule.matches(&hay))
        .map(|rule| rule.role)
        .unwrap_or(DeviceRole::Other)
}
