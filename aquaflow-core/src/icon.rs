//! Icon kinds used across the page.
//!
//! Content records name their icon with an [`IconKind`] instead of carrying a
//! render function. Each kind maps to fixed SVG path data drawn on a 24×24
//! stroke grid (Lucide geometry; circles and rects are expressed as paths so a
//! single `<path>` element type renders every icon).

use serde::Serialize;

/// Every icon the page can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    /// Water drop (brand mark, leak repair)
    Droplet,
    /// Wrench (drain solutions)
    Wrench,
    /// Flame (water heaters)
    Flame,
    /// Lightning bolt (emergency, hero badge)
    Zap,
    /// Handset
    Phone,
    /// Envelope
    Mail,
    /// Map pin
    MapPin,
    /// Facebook logo
    Facebook,
    /// Twitter logo
    Twitter,
    /// Instagram logo
    Instagram,
    /// LinkedIn logo
    Linkedin,
    /// Clock face
    Clock,
    /// Shield
    Shield,
    /// Five-point star
    Star,
    /// Award ribbon
    Award,
    /// Group of people
    Users,
    /// Right arrow
    ArrowRight,
    /// Hamburger menu
    Menu,
    /// Close cross
    X,
}

const DROPLET: &[&str] = &[
    "M12 22a7 7 0 0 0 7-7c0-2-1-3.9-3-5.5s-3.5-4-4-6.5c-.5 2.5-2 4.9-4 6.5C6 11.1 5 13 5 15a7 7 0 0 0 7 7z",
];

const WRENCH: &[&str] = &[
    "M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z",
];

const FLAME: &[&str] = &[
    "M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.072-2.143-.224-4.054 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.153.433-2.294 1-3a2.5 2.5 0 0 0 2.5 2.5z",
];

const ZAP: &[&str] = &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"];

const PHONE: &[&str] = &[
    "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
];

const MAIL: &[&str] = &[
    "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
    "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
];

const MAP_PIN: &[&str] = &[
    "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z",
    "M15 10a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
];

const FACEBOOK: &[&str] = &["M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"];

const TWITTER: &[&str] = &[
    "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
];

const INSTAGRAM: &[&str] = &[
    "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
    "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
    "M17.5 6.5h.01",
];

const LINKEDIN: &[&str] = &[
    "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
    "M2 9h4v12H2z",
    "M6 4a2 2 0 1 1-4 0 2 2 0 0 1 4 0z",
];

const CLOCK: &[&str] = &["M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z", "M12 6v6l4 2"];

const SHIELD: &[&str] = &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"];

const STAR: &[&str] = &[
    "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
];

const AWARD: &[&str] = &[
    "M18 8a6 6 0 1 1-12 0 6 6 0 0 1 12 0z",
    "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11",
];

const USERS: &[&str] = &[
    "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
    "M13 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0z",
    "M22 21v-2a4 4 0 0 0-3-3.87",
    "M16 3.13a4 4 0 0 1 0 7.75",
];

const ARROW_RIGHT: &[&str] = &["M5 12h14", "m12 5 7 7-7 7"];

const MENU: &[&str] = &["M4 12h16", "M4 6h16", "M4 18h16"];

const X: &[&str] = &["M18 6 6 18", "m6 6 12 12"];

impl IconKind {
    /// SVG path data (`d` attributes), drawn in order.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::Droplet => DROPLET,
            IconKind::Wrench => WRENCH,
            IconKind::Flame => FLAME,
            IconKind::Zap => ZAP,
            IconKind::Phone => PHONE,
            IconKind::Mail => MAIL,
            IconKind::MapPin => MAP_PIN,
            IconKind::Facebook => FACEBOOK,
            IconKind::Twitter => TWITTER,
            IconKind::Instagram => INSTAGRAM,
            IconKind::Linkedin => LINKEDIN,
            IconKind::Clock => CLOCK,
            IconKind::Shield => SHIELD,
            IconKind::Star => STAR,
            IconKind::Award => AWARD,
            IconKind::Users => USERS,
            IconKind::ArrowRight => ARROW_RIGHT,
            IconKind::Menu => MENU,
            IconKind::X => X,
        }
    }

    /// Accessible name, used as `aria-label` on icon-only links.
    pub fn label(self) -> &'static str {
        match self {
            IconKind::Droplet => "Droplet",
            IconKind::Wrench => "Wrench",
            IconKind::Flame => "Flame",
            IconKind::Zap => "Lightning",
            IconKind::Phone => "Phone",
            IconKind::Mail => "Email",
            IconKind::MapPin => "Location",
            IconKind::Facebook => "Facebook",
            IconKind::Twitter => "Twitter",
            IconKind::Instagram => "Instagram",
            IconKind::Linkedin => "LinkedIn",
            IconKind::Clock => "Clock",
            IconKind::Shield => "Shield",
            IconKind::Star => "Star",
            IconKind::Award => "Award",
            IconKind::Users => "Users",
            IconKind::ArrowRight => "Arrow right",
            IconKind::Menu => "Open menu",
            IconKind::X => "Close menu",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[IconKind] = &[
        IconKind::Droplet,
        IconKind::Wrench,
        IconKind::Flame,
        IconKind::Zap,
        IconKind::Phone,
        IconKind::Mail,
        IconKind::MapPin,
        IconKind::Facebook,
        IconKind::Twitter,
        IconKind::Instagram,
        IconKind::Linkedin,
        IconKind::Clock,
        IconKind::Shield,
        IconKind::Star,
        IconKind::Award,
        IconKind::Users,
        IconKind::ArrowRight,
        IconKind::Menu,
        IconKind::X,
    ];

    #[test]
    fn every_icon_has_path_data() {
        for kind in ALL {
            let paths = kind.paths();
            assert!(!paths.is_empty(), "{kind:?} has no paths");
            for d in paths {
                assert!(
                    d.starts_with('M') || d.starts_with('m'),
                    "{kind:?} path does not start with a moveto: {d}"
                );
            }
        }
    }

    #[test]
    fn labels_are_non_empty() {
        for kind in ALL {
            assert!(!kind.label().is_empty());
        }
    }

    #[test]
    fn serializes_kebab_case() {
        let json = serde_json::to_string(&IconKind::ArrowRight).unwrap();
        assert_eq!(json, "\"arrow-right\"");
    }
}
