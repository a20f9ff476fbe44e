//! Static slide content and deck assembly.

use folio_types::{Accent, Deck, Slide, SlideContent};

pub const BRAND: &str = "HASEKUI";

#[must_use]
pub fn hero() -> SlideContent {
    SlideContent::new(BRAND)
        .subtitle("Artificial Genesis")
        .body(&["Scroll to begin"])
        .accent(Accent::Green)
}

/// One panel per service offered.
#[must_use]
pub fn services() -> [SlideContent; 2] {
    [
        SlideContent::new("Website")
            .kicker("01")
            .subtitle("A work of art")
            .body(&[
                "We learn your brand identity and vision, then build your",
                "website from the ground up. Rejecting the ordinary, we craft",
                "every page the way an artist would.",
            ])
            .accent(Accent::Green),
        SlideContent::new("AI Automation Solutions")
            .kicker("02")
            .body(&[
                "We automate the tedious work that eats your hours with AI and",
                "wire it straight into your website, saving you both time and",
                "money.",
            ])
            .accent(Accent::Cyan),
    ]
}

/// Showcase projects, presented as one horizontal carousel.
#[must_use]
pub fn portfolio() -> [SlideContent; 4] {
    [
        SlideContent::new("SYMBIOSIS")
            .kicker("Portfolio")
            .subtitle("Future Landscapes")
            .body(&["Bio-architecture concept site", "EXPLORE"])
            .accent(Accent::Green),
        SlideContent::new("QUANTUM CORE")
            .kicker("Portfolio")
            .subtitle("Engine")
            .body(&["TORQUE   TEMP   RPM", "Live telemetry product page"])
            .accent(Accent::Amber),
        SlideContent::new("XC-07")
            .kicker("Portfolio")
            .subtitle("Crypto")
            .body(&["PRICE $0.42   MKT CAP $842M", "Token launch landing page"])
            .accent(Accent::Violet),
        SlideContent::new("EVERNEST")
            .kicker("Portfolio")
            .subtitle("Living")
            .body(&["RESIDENTIAL   COMMERCIAL", "Real estate showcase"])
            .accent(Accent::Pink),
    ]
}

#[must_use]
pub fn process() -> SlideContent {
    SlideContent::new("How does it work?")
        .subtitle("From idea to reality in just 4 days.")
        .body(&[
            "1  Tell us your idea",
            "   We listen to your vision, understand your goals and lay the",
            "   foundations of your project together.",
            "2  Let us create an experience for you",
            "   We go beyond the ordinary, blending design and technology into",
            "   a unique digital atmosphere for your brand.",
            "3  We deliver it up and running",
            "   A flawless, fast and striking project, ready to go live.",
        ])
        .accent(Accent::White)
}

#[must_use]
pub fn contact() -> SlideContent {
    SlideContent::new("Let's Talk")
        .kicker("I Have an Idea")
        .body(&["Press Enter to open the contact form"])
        .accent(Accent::Pink)
}

/// Assemble the fixed deck: hero, services, portfolio carousel, process, contact.
#[must_use]
pub fn build_deck() -> Deck {
    let [web, automation] = services();
    Deck::new(
        Slide::vertical(hero()),
        [
            Slide::vertical(web),
            Slide::vertical(automation),
            Slide::horizontal(portfolio()),
            Slide::vertical(process()),
            Slide::vertical(contact()),
        ],
    )
}

/// Navbar link: label plus the section it navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub hotkey: char,
    pub section: usize,
}

/// Navbar links resolved against `deck`.
#[must_use]
pub fn nav_links(deck: &Deck) -> [NavLink; 3] {
    let portfolio = deck.first_horizontal().unwrap_or(0);
    [
        NavLink {
            label: "Services",
            hotkey: 's',
            section: 1.min(deck.last_section()),
        },
        NavLink {
            label: "Portfolio",
            hotkey: 'p',
            section: portfolio,
        },
        NavLink {
            label: "Contact",
            hotkey: 'c',
            section: deck.last_section(),
        },
    ]
}
