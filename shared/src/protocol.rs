//! Wire types for the places API.
//!
//! The backend has served two generations of payloads for the same data
//! (`name`/`price`/`host` vs `title`/`price_per_night`/...). The DTOs here
//! accept both via serde aliases and normalize into the domain models, so
//! the rest of the client never sees raw payload shapes.

use serde::{Deserialize, Serialize};

use crate::date;
use crate::{Place, Review};

/// Author shown when a review payload names nobody.
const ANONYMOUS_AUTHOR: &str = "Anonymous";

// =========================================================
// Requests
// =========================================================

/// POST body for the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload. Anything beyond the token (user object and the
/// like) is ignored on purpose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// POST body for creating a review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReviewRequest {
    pub place_id: String,
    pub rating: u8,
    pub comment: String,
}

// =========================================================
// Listing payloads
// =========================================================

/// Listing payload as served by the API, tolerant of both field-name
/// generations. All fields are optional; normalization fills the gaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceDto {
    pub id: Option<String>,
    #[serde(alias = "name")]
    pub title: Option<String>,
    #[serde(alias = "price")]
    pub price_per_night: Option<f64>,
    #[serde(alias = "host_name")]
    pub host: Option<String>,
    #[serde(alias = "guests")]
    pub max_guests: Option<u32>,
    #[serde(alias = "number_of_rooms")]
    pub bedrooms: Option<u32>,
    #[serde(alias = "number_of_bathrooms")]
    pub bathrooms: Option<u32>,
    pub description: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub icon: Option<String>,
    /// Some detail responses inline the reviews instead of waiting for the
    /// dedicated endpoint to be asked.
    pub reviews: Option<Vec<ReviewDto>>,
}

impl PlaceDto {
    /// Normalization for list entries. An entry without an id cannot be
    /// linked to its detail page, so it is dropped rather than guessed at.
    pub fn normalize(mut self) -> Option<Place> {
        let id = self.id.take()?;
        Some(self.into_place(id))
    }

    /// Normalization for detail payloads, which sometimes omit the id the
    /// caller already knows.
    pub fn into_details(mut self, requested_id: &str) -> PlaceDetails {
        let embedded_reviews = self
            .reviews
            .take()
            .map(|dtos| dtos.into_iter().map(ReviewDto::normalize).collect());
        let id = self.id.take().unwrap_or_else(|| requested_id.to_string());
        PlaceDetails {
            place: self.into_place(id),
            embedded_reviews,
        }
    }

    fn into_place(self, id: String) -> Place {
        Place {
            id,
            title: self.title.unwrap_or_else(|| "Untitled".to_string()),
            price_per_night: self.price_per_night.unwrap_or(0.0),
            host: self.host,
            max_guests: self.max_guests.unwrap_or(0),
            bedrooms: self.bedrooms.unwrap_or(0),
            bathrooms: self.bathrooms.unwrap_or(0),
            description: self.description.unwrap_or_default(),
            amenities: self.amenities.unwrap_or_default(),
            icon: self.icon,
        }
    }
}

/// Normalized detail payload: the place plus whatever reviews the API chose
/// to inline.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDetails {
    pub place: Place,
    pub embedded_reviews: Option<Vec<Review>>,
}

// =========================================================
// Review payloads
// =========================================================

/// Review payload as served by the API. `date` is display-formatted when
/// present; otherwise `created_at` carries an ISO timestamp.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewDto {
    #[serde(alias = "user")]
    pub user_name: Option<String>,
    pub rating: Option<u8>,
    #[serde(alias = "text")]
    pub comment: Option<String>,
    pub date: Option<String>,
    pub created_at: Option<String>,
}

impl ReviewDto {
    pub fn normalize(self) -> Review {
        self.normalize_as(ANONYMOUS_AUTHOR)
    }

    /// Like [`normalize`](Self::normalize) with a caller-supplied author
    /// fallback; the API echoes user ids rather than display names on some
    /// write responses.
    pub fn normalize_as(self, fallback_author: &str) -> Review {
        let date = match (self.date, self.created_at) {
            (Some(date), _) => date,
            (None, Some(created_at)) => date::display_date(&created_at),
            (None, None) => String::new(),
        };
        Review {
            author: self
                .user_name
                .unwrap_or_else(|| fallback_author.to_string()),
            rating: self.rating.unwrap_or(0).min(5),
            comment: self.comment.unwrap_or_default(),
            date,
        }
    }
}
