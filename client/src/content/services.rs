//! Service groups shown in the services section.

use super::icons;

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

/// A named bundle of offered work, rendered as one `ServiceCard`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceGroup {
    pub icon: &'static str,
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const CONSTRUCTION: ServiceGroup = ServiceGroup {
    icon: icons::BUILDING,
    title: "Stavební práce",
    items: &[
        "Provádění staveb, jejich změn a odstraňování",
        "Zednické a zámečnické práce",
        "Zemní práce a zakládání staveb",
        "Fasády a dokončovací práce",
    ],
};

pub const INSTALLATIONS: ServiceGroup = ServiceGroup {
    icon: icons::TOOL,
    title: "Technické instalace",
    items: &[
        "Vodoinstalatérství a topenářství",
        "Montáž a opravy chladících zařízení a tepelných čerpadel",
        "Výroba a instalace elektrických strojů a přístrojů",
    ],
};

pub const INSPECTIONS: ServiceGroup = ServiceGroup {
    icon: icons::CERTIFICATE,
    title: "Revize a projektování",
    items: &[
        "Revize a zkoušky plynových a elektrických zařízení",
        "Revize tlakových zařízení a nádob na plyny",
        "Projektová činnost ve výstavbě",
        "Projektování elektrických zařízení",
        "Nakládání s nebezpečnými odpady",
    ],
};

/// All service groups in display order.
pub const SERVICE_GROUPS: &[ServiceGroup] = &[CONSTRUCTION, INSTALLATIONS, INSPECTIONS];

pub const SERVICES_HEADING: &str = "Naše služby";
pub const SERVICES_LEAD: &str = "Poskytujeme široké spektrum odborných prací od základů až po finální revize. \
                                 Zajišťujeme kompletní servis pro Váš projekt.";
