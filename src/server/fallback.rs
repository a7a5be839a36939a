//! static default content, served whenever the store yields nothing usable

use crate::server::model::info::RestaurantInfo;
use crate::server::model::menu::MenuItem;
use crate::server::model::testimonial::Testimonial;

/// Default restaurant profile.
pub(crate) fn restaurant_info() -> RestaurantInfo {
    RestaurantInfo {
        name: "Paprika & Pálinka".to_string(),
        tagline: "Authentic Hungarian flavors in the heart of the city".to_string(),
        address: "60 Andrassy Ave".to_string(),
        city: "Budapest".to_string(),
        phone: "(+36) 1 234 5678".to_string(),
        email: "hello@paprikapalinka.hu".to_string(),
        hours: vec![
            "Mon-Thu: 12:00 - 22:00".to_string(),
            "Fri-Sat: 12:00 - 23:00".to_string(),
            "Sun: 12:00 - 21:00".to_string(),
        ],
        hero_image: Some(
            "https://images.unsplash.com/photo-1544025162-d76694265947?q=80&w=1400&auto=format&fit=crop"
                .to_string(),
        ),
    }
}

/// Default starter menu.
pub(crate) fn menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            name: "Gulyásleves (Goulash)".to_string(),
            description: "Traditional beef and vegetable soup with paprika.".to_string(),
            price: 9.5,
            category: "Starters".to_string(),
            image: Some(
                "https://images.unsplash.com/photo-1604908176997-4316c2b17178?q=80&w=1200&auto=format&fit=crop"
                    .to_string(),
            ),
            spicy: false,
            vegetarian: false,
        },
        MenuItem {
            name: "Chicken Paprikash".to_string(),
            description: "Tender chicken in creamy paprika sauce served with nokedli.".to_string(),
            price: 15.0,
            category: "Mains".to_string(),
            image: Some(
                "https://images.unsplash.com/photo-1559620192-032c4bc4674e?q=80&w=1200&auto=format&fit=crop"
                    .to_string(),
            ),
            spicy: false,
            vegetarian: false,
        },
        MenuItem {
            name: "Fisherman's Soup (Halászlé)".to_string(),
            description: "Spicy river fish soup from the Danube.".to_string(),
            price: 13.0,
            category: "Mains".to_string(),
            image: None,
            spicy: false,
            vegetarian: false,
        },
        MenuItem {
            name: "Dobos Torte".to_string(),
            description: "Layered sponge cake with chocolate buttercream and caramel glaze."
                .to_string(),
            price: 6.5,
            category: "Desserts".to_string(),
            image: Some(
                "https://images.unsplash.com/photo-1541781774459-bb2af2f05b55?q=80&w=1200&auto=format&fit=crop"
                    .to_string(),
            ),
            spicy: false,
            vegetarian: false,
        },
    ]
}

/// Default testimonials.
pub(crate) fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Anna".to_string(),
            rating: 5,
            comment: "The best goulash I've ever had!".to_string(),
            avatar: None,
        },
        Testimonial {
            name: "Bence".to_string(),
            rating: 4,
            comment: "Authentic flavors and cozy atmosphere.".to_string(),
            avatar: None,
        },
        Testimonial {
            name: "Éva".to_string(),
            rating: 5,
            comment: "Dobos torte was heavenly!".to_string(),
            avatar: None,
        },
    ]
}
