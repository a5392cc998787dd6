// src/constants.rs
// Fixed option lists and link tables used by the templates.

pub const SITE_NAME: &str = "John Estate";

pub const CITIES: &[&str] = &[
    "Los Angeles",
    "Chicago",
    "Philadelphia",
    "San Francisco",
    "Miami",
    "Houston",
    "New York",
    "Boston",
    "Seattle",
    "Denver",
];

pub const AMENITIES: &[&str] = &[
    "Air Conditioning",
    "Swimming Pool",
    "Central Heating",
    "Laundry Room",
    "Gym",
    "Alarm",
    "Window Covering",
    "WiFi",
    "TV Cable",
    "Dryer",
    "Microwave",
    "Washer",
    "Refrigerator",
    "Outdoor Shower",
];

/// Upper end of the bedroom and bathroom selects.
pub const MAX_ROOM_OPTION: u32 = 10;

pub const RECENT_PROPERTIES_LIMIT: usize = 9;
pub const FEATURED_PROPERTIES_LIMIT: usize = 6;
pub const AGENTS_LIMIT: usize = 6;
pub const BLOG_POSTS_LIMIT: usize = 3;

pub const PROPERTY_PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=800&h=600&fit=crop&crop=center";
pub const AVATAR_PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=200&h=200&fit=crop&crop=face";
pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=1920&h=1080&fit=crop&crop=center";
pub const RENT_BANNER_IMAGE: &str =
    "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?w=1920&h=1080&fit=crop&crop=center";

/// Cycled over the popular places cards when a location has no image of its own.
pub const LOCATION_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1496442226666-8d4d0e62e6e9?w=800&h=600&fit=crop&crop=center",
    "https://images.unsplash.com/photo-1512453979798-5ea266f8880c?w=800&h=600&fit=crop&crop=center",
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800&h=600&fit=crop&crop=center",
    "https://images.unsplash.com/photo-1477959858617-67f85cf4f1df?w=800&h=600&fit=crop&crop=center",
    "https://images.unsplash.com/photo-1514565131-fce0801e5785?w=800&h=600&fit=crop&crop=center",
    "https://images.unsplash.com/photo-1513642621452-729a15d5a7ad?w=800&h=600&fit=crop&crop=center",
];

/// (label, href)
pub const NAVIGATION: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Properties", "/properties"),
    ("Places", "/#places"),
    ("Agents", "/#agents"),
    ("Blog", "/#blog"),
];

pub const FOOTER_NAVIGATION: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Properties", "/properties"),
    ("Agents", "/#agents"),
    ("Blog", "/#blog"),
];

pub const FOOTER_COMPANY: &[(&str, &str)] = &[
    ("About Us", "/about"),
    ("Our Team", "/#agents"),
    ("Careers", "/careers"),
    ("Privacy Policy", "/privacy"),
    ("Terms of Service", "/terms"),
];

pub const FOOTER_SUPPORT: &[(&str, &str)] = &[
    ("Help Center", "/help"),
    ("Contact Support", "/contact"),
    ("FAQ", "/faq"),
];

/// (title, blurb) for the "Why Choose Us" section.
pub const SELLING_POINTS: &[(&str, &str)] = &[
    (
        "Find Your Home",
        "Hand-picked listings across the country's busiest markets, updated every week.",
    ),
    (
        "Trusted by thousands",
        "Buyers, sellers and renters have closed with our agents for over fifteen years.",
    ),
    (
        "Financing made easy",
        "We work with local lenders so your offer is ready when the right place shows up.",
    ),
    (
        "24/7 support",
        "Questions at midnight before a showing? Someone on the team will pick up.",
    ),
];

/// (label, value) for the rent banner.
pub const QUICK_STATS: &[(&str, &str)] = &[
    ("Properties Available", "1,000+"),
    ("Happy Customers", "5,000+"),
    ("Years Experience", "15+"),
];
