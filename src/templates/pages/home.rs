// templates/pages/home.rs

use crate::constants::{
    AGENTS_LIMIT, AVATAR_PLACEHOLDER_IMAGE, BLOG_POSTS_LIMIT, FEATURED_PROPERTIES_LIMIT,
    HERO_IMAGE, LOCATION_IMAGES, QUICK_STATS, RECENT_PROPERTIES_LIMIT, RENT_BANNER_IMAGE,
    SELLING_POINTS,
};
use crate::domain::format::{format_date, format_price};
use crate::domain::{Agent, BlogPost, Listing, PopularLocation, SearchCriteria};
use crate::templates::components::{image_or, property_grid, search_form};
use crate::templates::{button_link, desktop_layout, section_heading};
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub criteria: &'a SearchCriteria,
    pub show_advanced: bool,
    /// The whole catalog, or the search result after a search.
    pub properties: &'a [Listing],
    pub searched: bool,
    pub locations: Vec<&'a PopularLocation>,
    pub agents: &'a [Agent],
    pub posts: &'a [BlogPost],
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Home",
        html! {
            (hero(vm))
            (recent_properties(vm))
            (featured_properties(vm.properties))
            (why_choose_us())
            (popular_places(&vm.locations))
            (rent_banner())
            (agents_section(vm.agents))
            (blog_section(vm.posts))
        },
    )
}

fn hero(vm: &HomeVm) -> Markup {
    html! {
        section class="hero" style=(format!("background-image: url({HERO_IMAGE})")) {
            div class="overlay" {}
            div class="container" {
                h1 { "Discover Your Perfect Property" }
                p class="lead" { "Your Gateway to Exceptional Real Estate" }
                (search_form(vm.criteria, vm.show_advanced))
            }
        }
    }
}

fn recent_properties(vm: &HomeVm) -> Markup {
    let (title, subtitle) = if vm.searched {
        ("Search Results", "Properties matching your search")
    } else {
        ("Recent Properties", "Discover our latest property listings")
    };

    html! {
        section id="properties" class="section section-muted" {
            div class="container" {
                (section_heading(title, subtitle))
                @if vm.searched {
                    p class="result-count" {
                        strong { (vm.properties.len()) } " "
                        @if vm.properties.len() == 1 { "property" } @else { "properties" }
                        " found"
                    }
                }
                (property_grid(vm.properties.iter().take(RECENT_PROPERTIES_LIMIT)))
                div class="center" {
                    (button_link("View All Properties", "/properties"))
                }
            }
        }
    }
}

fn featured_properties(properties: &[Listing]) -> Markup {
    let featured: Vec<&Listing> = properties
        .iter()
        .filter(|l| l.featured)
        .take(FEATURED_PROPERTIES_LIMIT)
        .collect();

    html! {
        @if !featured.is_empty() {
            section id="featured" class="section" {
                div class="container" {
                    (section_heading("Featured Properties", "Hand-picked homes from our agents"))
                    (property_grid(featured))
                }
            }
        }
    }
}

fn why_choose_us() -> Markup {
    html! {
        section class="section" {
            div class="container" {
                (section_heading("Why Choose Us", "We offer perfect real estate services"))
                div class="grid grid-4" {
                    @for (title, blurb) in SELLING_POINTS {
                        div class="center" {
                            h3 { (title) }
                            p class="muted" { (blurb) }
                        }
                    }
                }
            }
        }
    }
}

fn popular_places(locations: &[&PopularLocation]) -> Markup {
    html! {
        section id="places" class="section section-muted" {
            div class="container" {
                (section_heading("Popular Places", "Properties In Most Popular Places"))
                div class="grid grid-3" {
                    @for (index, location) in locations.iter().enumerate() {
                        @let fallback = LOCATION_IMAGES[index % LOCATION_IMAGES.len()];
                        div class="card location-card" {
                            div class="location-card-media"
                                style=(format!("background-image: url({})", image_or(&location.image, fallback))) {
                                h3 { (location.name) ", " (location.state) }
                            }
                            div class="card-body" {
                                p class="muted" { (location.properties_count) " Properties" }
                                p class="price" { (format_price(location.average_price)) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn rent_banner() -> Markup {
    html! {
        section class="banner" style=(format!("background-image: url({RENT_BANNER_IMAGE})")) {
            div class="overlay" {}
            div class="container grid grid-2" {
                div {
                    h2 { "Apartment for rent" }
                    p class="price" { "$6,400/month" }
                    p { "We help you find the best places and offers near you." }
                    (button_link("Get Started", "/search?status=for-rent&type=apartment"))
                }
                div class="stats" {
                    h3 { "Quick Stats" }
                    @for (label, value) in QUICK_STATS {
                        div class="stat" {
                            span { (label) }
                            strong { (value) }
                        }
                    }
                }
            }
        }
    }
}

fn agents_section(agents: &[Agent]) -> Markup {
    html! {
        section id="agents" class="section" {
            div class="container" {
                (section_heading("Meet Our Agents", "Professional real estate agents ready to help you"))
                div class="grid grid-3" {
                    @for agent in agents.iter().take(AGENTS_LIMIT) {
                        div class="center agent" {
                            img class="avatar"
                                src=(image_or(&agent.avatar, AVATAR_PLACEHOLDER_IMAGE))
                                alt=(agent.full_name());
                            h3 { (agent.full_name()) }
                            p class="muted" { "Real Estate Agent" }
                            p { span class="star" { "★" } " " (format!("{:.1}", agent.rating)) }
                            p class="muted" { (agent.properties_count) " Properties" }
                        }
                    }
                }
            }
        }
    }
}

fn blog_section(posts: &[BlogPost]) -> Markup {
    html! {
        section id="blog" class="section section-muted" {
            div class="container" {
                (section_heading("Articles & Tips", "Read the latest news from our blog"))
                div class="grid grid-3" {
                    @for post in posts.iter().take(BLOG_POSTS_LIMIT) {
                        article class="card" {
                            div class="blog-card-media" style=(format!("background-image: url({})", post.image)) {}
                            div class="card-body" {
                                p class="muted" {
                                    span class="tag" { (post.category) } " "
                                    (format_date(&post.published_at)) " • " (post.read_time) " min read"
                                }
                                h3 { (post.title) }
                                p { (post.excerpt) }
                                div class="byline" {
                                    img class="avatar-sm"
                                        src=(image_or(&post.author.avatar, AVATAR_PLACEHOLDER_IMAGE))
                                        alt=(post.author.name);
                                    span { "By " (post.author.name) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
