//! Company identity, copy, and contact details.

#[cfg(test)]
#[path = "company_test.rs"]
mod company_test;

pub const COMPANY_NAME: &str = "STAVLAV, s.r.o.";
/// Brand wordmark, rendered as `STAVLAV` + highlighted legal suffix.
pub const BRAND: &str = "STAVLAV";
pub const BRAND_SUFFIX: &str = "s.r.o.";
pub const ADDRESS: &str = "Jamská 2486/8, 591 01 Žďár n. S.";
pub const COMPANY_ID: &str = "22828505";
pub const COMPANY_EMAIL: &str = "firma@stavlav.cz";

/// Hero banner copy.
pub struct HeroCopy {
    pub heading: &'static str,
    pub tagline: &'static str,
    pub lead: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
    pub image_alt: &'static str,
}

pub const HERO: HeroCopy = HeroCopy {
    heading: "STAVBY LAVICKÝ",
    tagline: "Na nás se můžete spolehnout.",
    lead: "Komplexní řešení pro vaše stavební a montážní projekty ve Žďáru nad Sázavou a okolí.",
    primary_cta: "Prozkoumat služby",
    secondary_cta: "Rychlý kontakt",
    image_alt: "Stavební projekt",
};

/// About section copy.
pub struct AboutCopy {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub image_alt: &'static str,
}

pub const ABOUT: AboutCopy = AboutCopy {
    heading: "Rodinná firma s tradicí a osobním přístupem",
    paragraphs: &[
        "Jsme STAVLAV, s.r.o., stavební firma ze Žďáru nad Sázavou, založená na pevných rodinných hodnotách – \
         spolehlivosti, odbornosti a poctivém řemesle. Naše jméno, odvozené od \"Stavby Lavický\", je pro nás \
         závazkem kvality.",
        "Díky širokému záběru služeb jsme schopni realizovat Váš projekt komplexně, od projektové dokumentace přes \
         hrubou stavbu až po specializované technické instalace a revize. Každý projekt je pro nás jedinečný a \
         věnujeme mu maximální péči a pozornost.",
    ],
    image_alt: "Realizace stavby",
};

pub const CONTACT_HEADING: &str = "Kontaktujte nás";
pub const CONTACT_LEAD: &str =
    "Máte dotaz nebo zájem o nezávaznou konzultaci? Neváhejte se nám ozvat. Jsme tu pro Vás.";

/// A company executive listed in the contact section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Executive {
    pub name: &'static str,
    /// Domestic number as displayed, grouped by spaces.
    pub phone: &'static str,
    pub email: &'static str,
}

impl Executive {
    pub fn tel_href(&self) -> String {
        tel_href(self.phone)
    }

    pub fn mailto_href(&self) -> String {
        mailto_href(self.email)
    }
}

pub const EXECUTIVES: &[Executive] = &[
    Executive { name: "František Lavický", phone: "733 682 202", email: "lavicky@stavlav.cz" },
    Executive { name: "ing. Pavel Lavický", phone: "739 971 141", email: "p.lavicky@stavlav.cz" },
];

/// Czech country calling code prefixed to displayed numbers.
const COUNTRY_CODE: &str = "+420";

/// `tel:` URI for a displayed Czech number (`733 682 202` -> `tel:+420733682202`).
pub fn tel_href(display: &str) -> String {
    let digits: String = display.chars().filter(char::is_ascii_digit).collect();
    format!("tel:{COUNTRY_CODE}{digits}")
}

pub fn mailto_href(address: &str) -> String {
    format!("mailto:{address}")
}

/// Footer credit for the site author.
pub const CREDIT_NAME: &str = "DigitalFusion";
pub const CREDIT_URL: &str = "https://digitalfusion.cz";

/// Footer copyright line for the given year.
pub fn copyright_line(year: i32) -> String {
    format!("© {year} {COMPANY_NAME} Všechna práva vyhrazena.")
}
