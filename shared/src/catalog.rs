//! In-memory stand-in for the places API.
//!
//! Seeded once per mount with the fixed sample dataset and handed to the
//! pages through context. Reads hand out slices; the only mutation is
//! prepending a review when a submission cannot reach the backend.

use std::collections::HashMap;

use crate::date;
use crate::{Place, Review};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    places: Vec<Place>,
    /// Review sequences keyed by place id, newest first.
    reviews: HashMap<String, Vec<Review>>,
}

impl Catalog {
    /// Catalog holding the fixed sample dataset.
    pub fn seeded() -> Self {
        Self {
            places: seed_places(),
            reviews: seed_reviews(),
        }
    }

    /// Catalog with no data at all.
    pub fn empty() -> Self {
        Self {
            places: Vec::new(),
            reviews: HashMap::new(),
        }
    }

    /// Every listing, in seed order.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn place(&self, id: &str) -> Option<&Place> {
        self.places.iter().find(|place| place.id == id)
    }

    /// Reviews for a listing, newest first. Unknown ids yield an empty
    /// slice, never an error.
    pub fn reviews(&self, place_id: &str) -> &[Review] {
        self.reviews
            .get(place_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Prepends a review stamped with today's date, creating the sequence
    /// when the listing has none yet. The stored review is returned so the
    /// caller can render it without re-reading.
    pub fn add_review(
        &mut self,
        place_id: &str,
        rating: u8,
        comment: impl Into<String>,
        author: impl Into<String>,
    ) -> Review {
        let review = Review {
            author: author.into(),
            rating: rating.clamp(1, 5),
            comment: comment.into(),
            date: date::today(),
        };
        self.reviews
            .entry(place_id.to_string())
            .or_default()
            .insert(0, review.clone());
        review
    }
}

// =========================================================
// Seed data
// =========================================================

fn place(
    id: &str,
    title: &str,
    price_per_night: f64,
    icon: &str,
    host: &str,
    max_guests: u32,
    bedrooms: u32,
    bathrooms: u32,
    description: &str,
    amenities: &[&str],
) -> Place {
    Place {
        id: id.to_string(),
        title: title.to_string(),
        price_per_night,
        host: Some(host.to_string()),
        max_guests,
        bedrooms,
        bathrooms,
        description: description.to_string(),
        amenities: amenities.iter().map(ToString::to_string).collect(),
        icon: Some(icon.to_string()),
    }
}

fn review(author: &str, rating: u8, comment: &str, date: &str) -> Review {
    Review {
        author: author.to_string(),
        rating,
        comment: comment.to_string(),
        date: date.to_string(),
    }
}

fn seed_places() -> Vec<Place> {
    vec![
        place(
            "1",
            "Beautiful Beach House",
            150.0,
            "🏖️",
            "Sarah Johnson",
            6,
            3,
            2,
            "Escape to this stunning beachfront house with panoramic ocean views. \
             This spacious 3-bedroom, 2-bathroom home features modern amenities, a \
             fully equipped kitchen, and direct beach access. Perfect for families \
             or groups looking for a peaceful retreat by the sea. Wake up to the \
             sound of waves and enjoy your morning coffee on the private deck \
             overlooking the endless horizon.",
            &[
                "🌊 Beach Access",
                "🍳 Full Kitchen",
                "📶 Free WiFi",
                "🅿️ Free Parking",
                "🏊‍♂️ Pool",
                "🔥 Fireplace",
                "📺 Smart TV",
                "🧺 Washer & Dryer",
            ],
        ),
        place(
            "2",
            "Cozy Mountain Cabin",
            100.0,
            "🏔️",
            "John Mountain",
            4,
            2,
            1,
            "A rustic mountain cabin surrounded by pine trees and hiking trails. \
             Features a cozy fireplace, fully equipped kitchen, and stunning \
             mountain views. Perfect for outdoor enthusiasts and those seeking a \
             peaceful mountain retreat away from the city noise.",
            &[
                "🔥 Fireplace",
                "🥾 Hiking Trails",
                "📶 Free WiFi",
                "🅿️ Free Parking",
                "🌲 Forest View",
                "🍳 Full Kitchen",
                "🛏️ Cozy Beds",
                "☕ Coffee Maker",
            ],
        ),
        place(
            "3",
            "Modern City Apartment",
            200.0,
            "🏙️",
            "Alex Urban",
            4,
            2,
            2,
            "Stylish downtown apartment in the heart of the city. Walking distance \
             to restaurants, shops, and attractions. Features modern amenities, \
             high-speed internet, and city skyline views. Perfect for business \
             travelers and urban explorers.",
            &[
                "🏢 City View",
                "🚇 Metro Access",
                "📶 High-Speed WiFi",
                "🎯 Central Location",
                "🍽️ Restaurants Nearby",
                "🛍️ Shopping",
                "💼 Business Center",
                "🚗 Uber/Taxi Access",
            ],
        ),
    ]
}

fn seed_reviews() -> HashMap<String, Vec<Review>> {
    HashMap::from([
        (
            "1".to_string(),
            vec![
                review(
                    "Michael Chen",
                    5,
                    "Amazing location right on the beach! The house was spotless and \
                     had everything we needed for our family vacation. The kids loved \
                     having direct beach access, and the adults enjoyed the peaceful \
                     atmosphere. Sarah was a wonderful host who responded quickly to \
                     all our questions. Highly recommend!",
                    "January 15, 2025",
                ),
                review(
                    "Emma Rodriguez",
                    5,
                    "Perfect getaway spot! The house is beautifully decorated and very \
                     comfortable. The kitchen was well-equipped for cooking meals, and \
                     the deck was our favorite spot for morning coffee and evening \
                     sunsets. Will definitely be back!",
                    "January 10, 2025",
                ),
                review(
                    "David Thompson",
                    4,
                    "Great place for a weekend retreat. The location is unbeatable and \
                     the house has all the amenities you need. Only minor issue was the \
                     WiFi was a bit slow, but that actually helped us disconnect and \
                     enjoy our time together. Overall, excellent experience.",
                    "January 5, 2025",
                ),
            ],
        ),
        (
            "2".to_string(),
            vec![
                review(
                    "Lisa Park",
                    5,
                    "Perfect mountain retreat! The cabin was cozy and had everything we \
                     needed. The fireplace was amazing for the cold nights, and the \
                     hiking trails right outside were fantastic. John was very helpful \
                     with local recommendations.",
                    "January 12, 2025",
                ),
                review(
                    "Mike Wilson",
                    4,
                    "Great cabin for a mountain getaway. Loved the rustic feel and the \
                     views were spectacular. The kitchen was well-equipped and the beds \
                     were comfortable. Would definitely come back!",
                    "January 8, 2025",
                ),
            ],
        ),
        (
            "3".to_string(),
            vec![
                review(
                    "Sarah Kim",
                    4,
                    "Excellent location in the city center. The apartment was modern \
                     and clean with great amenities. Easy access to restaurants and \
                     attractions. Perfect for our business trip. Alex was very \
                     responsive to our needs.",
                    "January 18, 2025",
                ),
                review(
                    "Tom Garcia",
                    5,
                    "Loved staying here! The city views were incredible and the \
                     location couldn't be better. Walking distance to everything we \
                     wanted to see. The apartment was stylish and comfortable. Highly \
                     recommend for city visits!",
                    "January 14, 2025",
                ),
            ],
        ),
    ])
}
