//! Static page content

/// Kind of card, matches the markup classes picked up by the reveal watcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Service,
    WhyUs,
    Value,
    Pricing,
    Info,
    Category,
}

impl CardKind {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Service => "service-card",
            Self::WhyUs => "why-us-item",
            Self::Value => "value-card",
            Self::Pricing => "pricing-card",
            Self::Info => "info-card",
            Self::Category => "category-card",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub kind: CardKind,
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub cards: &'static [Card],
    /// Whether the contact form is rendered below the cards
    pub has_form: bool,
}

pub const SITE_NAME: &str = "Johan Nes Service";

pub const PHONE_HREF: &str = "tel:+4791234567";
pub const PHONE_LABEL: &str = "912 34 567";
pub const EMAIL_HREF: &str = "mailto:post@johannesservice.no";
pub const EMAIL_LABEL: &str = "post@johannesservice.no";

/// Links in the navigation menu
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Heim", "#hjem"),
    ("Tenester", "#tenester"),
    ("Kvifor oss", "#kvifor-oss"),
    ("Prisar", "#prisar"),
    ("Kontakt", "#kontakt"),
];

pub const SUCCESS_PANEL: &str =
    "Takk for førespurnaden! Vi tek kontakt med deg så snart som mogleg.";
pub const ERROR_PANEL: &str =
    "Noko gjekk gale ved sending. Prøv igjen, eller ring oss direkte.";

pub const SECTIONS: &[Section] = &[
    Section {
        id: "hjem",
        title: "Handverk du kan stole på",
        intro: "Snikkar- og vedlikehaldsarbeid for hus og hytte i heile distriktet.",
        cards: &[],
        has_form: false,
    },
    Section {
        id: "tenester",
        title: "Tenester",
        intro: "Vi tek oppdrag i alle storleikar.",
        cards: &[
            Card {
                kind: CardKind::Service,
                title: "Tak og kledning",
                body: "Omlegging av tak, ny kledning og etterisolering.",
            },
            Card {
                kind: CardKind::Service,
                title: "Bad og kjøkken",
                body: "Totalrenovering frå riving til ferdig rom.",
            },
            Card {
                kind: CardKind::Service,
                title: "Tilbygg",
                body: "Planlegging og bygging av tilbygg og påbygg.",
            },
            Card {
                kind: CardKind::Category,
                title: "Vedlikehald",
                body: "Små og store reparasjonar, vindauge og dører.",
            },
        ],
        has_form: false,
    },
    Section {
        id: "kvifor-oss",
        title: "Kvifor velje oss",
        intro: "Lokalkjende handverkarar med lang erfaring.",
        cards: &[
            Card {
                kind: CardKind::WhyUs,
                title: "Fast pris",
                body: "Du får skriftleg tilbod før vi startar.",
            },
            Card {
                kind: CardKind::WhyUs,
                title: "Rask respons",
                body: "Vi svarar på førespurnader innan ein arbeidsdag.",
            },
            Card {
                kind: CardKind::Value,
                title: "Kvalitet",
                body: "Godkjent føretak med fagbrev i alle ledd.",
            },
        ],
        has_form: false,
    },
    Section {
        id: "prisar",
        title: "Prisar",
        intro: "Alle prisar er inkludert meirverdiavgift.",
        cards: &[
            Card {
                kind: CardKind::Pricing,
                title: "Timepris",
                body: "Frå 750 kr per time.",
            },
            Card {
                kind: CardKind::Pricing,
                title: "Synfaring",
                body: "Gratis innanfor 30 km.",
            },
        ],
        has_form: false,
    },
    Section {
        id: "kontakt",
        title: "Kontakt oss",
        intro: "Fyll ut skjemaet, så tek vi kontakt.",
        cards: &[
            Card {
                kind: CardKind::Info,
                title: "Telefon",
                body: PHONE_LABEL,
            },
            Card {
                kind: CardKind::Info,
                title: "E-post",
                body: EMAIL_LABEL,
            },
        ],
        has_form: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_nav_link_has_a_section() {
        for (_, href) in NAV_LINKS {
            let id = href.trim_start_matches('#');
            assert!(
                SECTIONS.iter().any(|s| s.id == id),
                "missing section for {href}"
            );
        }
    }

    #[test]
    fn test_exactly_one_form_section() {
        assert_eq!(SECTIONS.iter().filter(|s| s.has_form).count(), 1);
    }

    #[test]
    fn test_card_classes() {
        assert_eq!(CardKind::Service.class(), "service-card");
        assert_eq!(CardKind::Info.class(), "info-card");
    }
}
