//! Static site copy for the Li-Stick pages.

use crate::carousel::Slide;

/// Hero block at the top of each page.
#[derive(Debug, Clone, Copy)]
pub struct Hero {
    pub badge: &'static str,
    pub title: &'static str,
    pub highlight: Option<&'static str>,
    /// Words cycled after the title.
    pub rotating: &'static [&'static str],
    pub subtitle: &'static str,
}

/// Title plus one line of description.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Sdg {
    pub id: u8,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct RoadmapItem {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub desc: &'static str,
    pub badge: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub subtitle: &'static str,
}

/// Seconds between rotating hero words.
pub const ROTATE_EVERY_SECS: u64 = 3;

pub const CONTACT_EMAIL: &str = "hello@li-stick.com";
pub const CONTACT_PHONE: &str = "+961 81 699 932";
pub const CONTACT_LOCATION: &str = "Beirut, Lebanon";
pub const COPYRIGHT: &str = "© Li-Stick. All rights reserved.";

// ============================================================================
// Home
// ============================================================================

pub const HOME_HERO: Hero = Hero {
    badge: "LiStick",
    title: "VISION-POWERED",
    highlight: Some("FREEDOM"),
    rotating: &[
        "Safety",
        "Guidance",
        "Confidence",
        "Reliability",
        "Accessibility",
        "Precision",
    ],
    subtitle: "LiStick empowers the visually impaired with safer, smarter, and more confident navigation.",
};

pub const PROBLEM_TITLE: &str = "Daily Mobility is Breaking Under Obstacles.";
pub const PROBLEM_TEXT: &str = "Streets, stairs, and buses hide head-level hazards that white canes often miss. For people with vision loss, this turns routine trips into risky missions.";
pub const PROBLEM_QUOTE: &str =
    "“Millions face avoidable collisions from undetected overhead obstacles.”";

pub const PROBLEM_STATS: &[Stat] = &[
    Stat {
        label: "People who are blind (global)",
        value: "43,000,000",
    },
    Stat {
        label: "Moderate-to-severe visual impairment",
        value: "300,000,000",
    },
    Stat {
        label: "Collisions from head-level obstacles",
        value: "40%",
    },
];

pub const SHOWCASE_TITLE: &str = "Meet Li-Stick";
pub const SHOWCASE_TEXT: &str = "A revolutionary assistive device meticulously engineered for reliability, accessibility, and seamless daily use.";

pub const FEATURE_HIGHLIGHTS: &[Card] = &[
    Card {
        title: "Advanced Obstacle Detection",
        desc: "Real-time ultrasonic sensing technology with 360° awareness keeps you informed of potential hazards ahead.",
    },
    Card {
        title: "Precise GPS Tracking",
        desc: "Military-grade location services with real-time caregiver visibility for ultimate peace of mind.",
    },
    Card {
        title: "Li-Fi Communication",
        desc: "Lightning-fast, ultra-secure light-based data transfer between your cane and smart hub.",
    },
    Card {
        title: "Safety-First Design",
        desc: "Triple-redundant safety systems with crystal-clear audio alerts inspire complete user confidence.",
    },
    Card {
        title: "Precision Navigation",
        desc: "Seamless indoor-outdoor guidance with centimeter-level accuracy and intuitive waypoint system.",
    },
    Card {
        title: "Ergonomic Excellence",
        desc: "Thoughtfully designed grip with haptic feedback and intuitive controls for comfortable all-day use.",
    },
];

/// Product shots for the home gallery carousel.
pub fn home_slides() -> Vec<Slide> {
    [
        (
            "assets/images/pic1.jpg",
            "Overhead hazard detection",
            "Ultrasonic and water level sensor fusion",
        ),
        ("assets/images/pic2.jpg", "Seamless guidance", "Buzzer and audio"),
        (
            "assets/images/pic3.jpg",
            "Emergency-ready",
            "Li-Fi, GPS, and caregiver mobile app",
        ),
    ]
    .into_iter()
    .map(|(image, title, caption)| {
        Slide::new(image)
            .with_title(title)
            .with_caption(caption)
            .with_alt(format!("Li-Stick showcase: {}", title))
    })
    .collect()
}

// ============================================================================
// About
// ============================================================================

pub const ABOUT_HERO: Hero = Hero {
    badge: "LiStick",
    title: "Let’s Shape the Future of Mobility.",
    highlight: Some("Together in"),
    rotating: &["Innovation", "Impact", "Accessibility", "Collaboration"],
    subtitle: "Whether you’re a researcher, partner, or accessibility advocate, we’d love to hear from you.",
};

pub const STORY: &[&str] = &[
    "LiStick began as a university project with a simple yet profound goal: to empower visually impaired individuals with unprecedented freedom through safe, reliable, and intelligent navigation technology.",
    "What started in a lab has grown into a mission. Today, we're a dedicated team collaborating with NGOs, universities, and the BVI community to turn that vision into a reality.",
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Gio Rizk",
        role: "Li-Stick Co-Founder",
        subtitle: "Head of Li-Stick Software Department",
    },
    TeamMember {
        name: "Marc Salameh",
        role: "Li-Stick Co-Founder",
        subtitle: "Computer Engineer - Functional Consultant",
    },
    TeamMember {
        name: "Rima Mghames",
        role: "Li-Stick Co-Founder",
        subtitle: "Head of Li-Stick Health Department",
    },
];

// ============================================================================
// Features
// ============================================================================

pub const FEATURES_HERO: Hero = Hero {
    badge: "Feature Overview",
    title: "Built-in Intelligence. Everyday Safety.",
    highlight: None,
    rotating: &[],
    subtitle: "Explore the hardware and software that power LiStick, engineered for independence, safety, and confidence.",
};

pub const FEATURES_DESCRIPTION: &str = "These modules work together to detect obstacles, share location and communicate with the app.";

/// Hardware modules for the split feature carousel.
pub fn feature_slides() -> Vec<Slide> {
    let slide = |title: &str, caption: &str, bullets: &[&str]| {
        Slide::new("assets/images/pic4.png")
            .with_title(title)
            .with_caption(caption)
            .with_alt(format!("LiStick cane, {}", title))
            .with_bullets(bullets.iter().copied())
    };
    vec![
        slide(
            "Emergency Button",
            "Instant SOS with live GPS for caregivers.",
            &["Top of the handle", "Sends location alerts"],
        ),
        slide(
            "Freeze Button",
            "Pause motion feedback for safe stops.",
            &["Next to the emergency button", "Silences guidance while standing"],
        ),
        slide(
            "Dual Speakers & Buzzer",
            "Clear audio/haptic alerts for hazards.",
            &["Two speakers along the shaft", "Buzzer for close-range warnings"],
        ),
        slide(
            "GPS Module",
            "Reliable positioning for tracking & SOS.",
            &["Live tracking in the caregiver app"],
        ),
        slide(
            "Ultrasonic Sensors",
            "Detects near/mid-range obstacles.",
            &["Head-level and ground-level coverage"],
        ),
        slide(
            "Water Sensor (Tip)",
            "Warns on puddles/flooded areas.",
            &["Mounted at the cane tip"],
        ),
    ]
}

// ============================================================================
// Impact
// ============================================================================

pub const IMPACT_HERO: Hero = Hero {
    badge: "Impact",
    title: "Driving Change Through",
    highlight: Some("Sustainable Innovation"),
    rotating: &[],
    subtitle: "LiStick actively contributes to the UN Sustainable Development Goals (SDGs) by promoting inclusive, safe, and sustainable innovation.",
};

pub const SDGS: &[Sdg] = &[
    Sdg {
        id: 3,
        title: "Good Health & Well-Being",
        desc: "Enhancing safety and independence for the visually impaired.",
    },
    Sdg {
        id: 9,
        title: "Industry, Innovation & Infrastructure",
        desc: "Building resilient, accessible assistive technology solutions.",
    },
    Sdg {
        id: 10,
        title: "Reduced Inequalities",
        desc: "Empowering underserved and marginalized communities.",
    },
    Sdg {
        id: 11,
        title: "Sustainable Cities & Communities",
        desc: "Supporting inclusive mobility and urban accessibility.",
    },
    Sdg {
        id: 17,
        title: "Partnerships for the Goals",
        desc: "Collaborating with academia, industry, and healthcare.",
    },
];

pub const IMPACT_CTA: Card = Card {
    title: "Partner with us to scale accessible mobility",
    desc: "Let’s co-create pilots, research, and standards that move cities and people forward.",
};

// ============================================================================
// Future plans
// ============================================================================

pub const FUTURE_HERO: Hero = Hero {
    badge: "Roadmap",
    title: "What’s Next for",
    highlight: Some("Li-Stick"),
    rotating: &[],
    subtitle: "The upgrades we are building toward, from smarter sensing to a wider app ecosystem.",
};

pub const ROADMAP: &[RoadmapItem] = &[
    RoadmapItem {
        title: "Vision-Based Obstacle Detection",
        subtitle: "OCULI smart sensor • AI scene analysis • Dual-camera setup",
        desc: "Replace traditional ultrasonic sensors with intelligent vision sensors capable of detecting both ground-level and head-level obstacles.",
        badge: "Core MVP",
    },
    RoadmapItem {
        title: "Li-Fi, GSM/LTE, and Wi-Fi Connectivity",
        subtitle: "Indoor + outdoor communication • Real-time alerts",
        desc: "Continuous location tracking, SOS alerts, and cloud connectivity even outside Li-Fi coverage zones.",
        badge: "Connectivity",
    },
    RoadmapItem {
        title: "Smart Voice & Audio Feedback System",
        subtitle: "Dual speakers • Bluetooth earphones • Accessibility voice prompts",
        desc: "Intelligent voice feedback that adapts to context, with Bluetooth audio for private listening.",
        badge: "UX Upgrade",
    },
    RoadmapItem {
        title: "Emergency & Safety Intelligence",
        subtitle: "Double-press SOS • Caregiver call sequence • App alert",
        desc: "A single press sends location alerts, a double press calls caregivers in preset order.",
        badge: "Safety",
    },
    RoadmapItem {
        title: "Fall & Health Monitoring",
        subtitle: "Gyroscope + Heart-Rate sensors • Real-time alerts",
        desc: "Fall detection and heart-rate monitoring that notify caregivers with live location and timestamp.",
        badge: "Health",
    },
    RoadmapItem {
        title: "Enhanced GPS & Location Awareness",
        subtitle: "Accurate live tracking • Self-location voice mode",
        desc: "A faster GPS chip and app-based live tracking. The cane announces its location on request.",
        badge: "Navigation",
    },
    RoadmapItem {
        title: "LED Visibility & Flashlight System",
        subtitle: "Night safety • Camera lighting support",
        desc: "High-power LED indicators for night visibility and a flashlight to help the camera in the dark.",
        badge: "Visibility",
    },
    RoadmapItem {
        title: "Upgraded Power & Battery Design",
        subtitle: "High-capacity 20 000 mAh • Smart energy routing",
        desc: "A rechargeable PD power bank that runs every module at once without frequent charging.",
        badge: "Hardware",
    },
    RoadmapItem {
        title: "App Ecosystem Expansion",
        subtitle: "Caregiver dashboard • Live camera view • Alerts & history",
        desc: "Real-time map tracking, emergency pins, and the cane camera feed in the mobile app.",
        badge: "Software",
    },
    RoadmapItem {
        title: "Modular Premium Editions",
        subtitle: "Snap-in accessories • Custom configurations",
        desc: "An accessory rail for extended batteries, Li-Fi beacon modules, or haptic handles.",
        badge: "Design",
    },
];

// ============================================================================
// Contact
// ============================================================================

pub const CONTACT_HERO: Hero = Hero {
    badge: "Contact",
    title: "Get in touch",
    highlight: None,
    rotating: &[],
    subtitle: "Questions, pilots or partnerships. Send us a message and we will get back to you.",
};

pub const THANK_YOU_TITLE: &str = "Message received!";
pub const THANK_YOU_TEXT: &str = "Thanks for reaching out. We’ll be in touch shortly.";

/// Word shown in a hero's rotating slot after `elapsed_secs`.
pub fn rotating_word(hero: &Hero, elapsed_secs: u64) -> Option<&'static str> {
    if hero.rotating.is_empty() {
        return None;
    }
    let i = (elapsed_secs / ROTATE_EVERY_SECS) as usize % hero.rotating.len();
    Some(hero.rotating[i])
}
