//! Literal content rendered by the page sections.
//!
//! All slices are compiled in and never change after the first render. Display
//! order is slice order.

use crate::config::BusinessConfig;
use crate::icon::IconKind;
use serde::Serialize;

/// Section ids the page defines. Nav and footer anchors should point at one of these.
pub const SECTION_IDS: &[&str] = &["home", "services", "reviews", "contact"];

/// One top-level navigation entry. The anchor id is the lower-cased label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Link text
    pub label: &'static str,
}

impl NavItem {
    /// Fragment id this item scrolls to, e.g. `services`.
    pub fn anchor(&self) -> String {
        self.label.to_ascii_lowercase()
    }

    /// `href` value, e.g. `#services`.
    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home" },
    NavItem { label: "About" },
    NavItem { label: "Services" },
    NavItem { label: "Reviews" },
    NavItem { label: "Contact" },
];

/// Hero stats strip entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatItem {
    pub icon: IconKind,
    pub label: &'static str,
}

pub const STATS: &[StatItem] = &[
    StatItem {
        icon: IconKind::Award,
        label: "15+ Years",
    },
    StatItem {
        icon: IconKind::Users,
        label: "5000+ Clients",
    },
    StatItem {
        icon: IconKind::Star,
        label: "5.0 Rating",
    },
];

/// Small card floating over the hero visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FloatingBadge {
    pub icon: IconKind,
    pub label: &'static str,
}

pub const FLOATING_BADGES: &[FloatingBadge] = &[
    FloatingBadge {
        icon: IconKind::Clock,
        label: "24/7 Available",
    },
    FloatingBadge {
        icon: IconKind::Shield,
        label: "Licensed Pro",
    },
];

/// A service offered, rendered as one card in the services grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceCard {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[ServiceCard] = &[
    ServiceCard {
        icon: IconKind::Droplet,
        title: "Leak Repair",
        description: "Advanced leak detection and repair using cutting-edge technology",
    },
    ServiceCard {
        icon: IconKind::Wrench,
        title: "Drain Solutions",
        description: "Professional drain cleaning and maintenance services",
    },
    ServiceCard {
        icon: IconKind::Flame,
        title: "Water Heaters",
        description: "Expert installation of modern tankless and traditional systems",
    },
    ServiceCard {
        icon: IconKind::Zap,
        title: "Emergency",
        description: "Round-the-clock emergency plumbing support",
    },
];

/// A customer review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TestimonialCard {
    pub name: &'static str,
    pub location: &'static str,
    pub review: &'static str,
}

/// Every testimonial shows a full five-star row.
pub const TESTIMONIAL_STARS: usize = 5;

pub const TESTIMONIALS: &[TestimonialCard] = &[
    TestimonialCard {
        name: "Sarah Johnson",
        location: "Downtown LA",
        review: "Absolutely phenomenal service! The team arrived promptly and resolved our emergency with incredible professionalism. Highly recommended!",
    },
    TestimonialCard {
        name: "Michael Chen",
        location: "West Hollywood",
        review: "From consultation to completion, everything was flawless. The attention to detail and quality of work exceeded all expectations.",
    },
    TestimonialCard {
        name: "Emily Rodriguez",
        location: "Santa Monica",
        review: "Best plumbing service in LA! Their expertise and customer care are unmatched. Will definitely use them for all future needs.",
    },
];

/// One row of the contact panel. Rows without a link render as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMethod {
    pub icon: IconKind,
    pub label: &'static str,
    pub value: &'static str,
    pub link: Option<String>,
}

/// Phone, email and location rows for the given business.
pub fn contact_methods(config: &BusinessConfig) -> Vec<ContactMethod> {
    vec![
        ContactMethod {
            icon: IconKind::Phone,
            label: "Phone",
            value: config.phone,
            link: Some(config.tel_href()),
        },
        ContactMethod {
            icon: IconKind::Mail,
            label: "Email",
            value: config.email,
            link: Some(config.mailto_href()),
        },
        ContactMethod {
            icon: IconKind::MapPin,
            label: "Location",
            value: config.city,
            link: None,
        },
    ]
}

/// Footer social icon. Destinations are not resolved yet, so every href is `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub icon: IconKind,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: IconKind::Facebook,
        href: "#",
    },
    SocialLink {
        icon: IconKind::Twitter,
        href: "#",
    },
    SocialLink {
        icon: IconKind::Instagram,
        href: "#",
    },
    SocialLink {
        icon: IconKind::Linkedin,
        href: "#",
    },
];

/// Footer "Quick Links" entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const FOOTER_LINKS: &[FooterLink] = &[
    FooterLink {
        label: "Home",
        href: "#home",
    },
    FooterLink {
        label: "About",
        href: "#about",
    },
    FooterLink {
        label: "Services",
        href: "#services",
    },
    FooterLink {
        label: "Contact",
        href: "#contact",
    },
];
