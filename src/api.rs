//! HTTP client for the places API.
//!
//! Stateless translator between the wire protocol and the normalized domain
//! types. Credentials are passed per call rather than stored, so one client
//! value serves the whole app regardless of who is signed in.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use stayhub_shared::config::ApiConfig;
use stayhub_shared::date;
use stayhub_shared::error::{ApiError, ApiResult};
use stayhub_shared::protocol::{
    LoginRequest, LoginResponse, NewReviewRequest, PlaceDetails, PlaceDto, ReviewDto,
};
use stayhub_shared::{Credential, Place, Review};

#[derive(Clone, Debug, PartialEq)]
pub struct PlacesApi {
    config: ApiConfig,
}

impl PlacesApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    /// Headers every call carries: JSON content type, plus the bearer when
    /// a credential is present.
    fn request_headers(credential: Option<&Credential>) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Content-Type", "application/json".to_string())];
        if let Some(credential) = credential {
            headers.push(("Authorization", credential.bearer_value()));
        }
        headers
    }

    fn with_headers(builder: RequestBuilder, credential: Option<&Credential>) -> RequestBuilder {
        Self::request_headers(credential)
            .into_iter()
            .fold(builder, |builder, (name, value)| builder.header(name, &value))
    }

    /// Decodes a 2xx response, classifying everything else into an
    /// [`ApiError`] carrying the body's own message when it has one.
    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status, &body));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))
    }

    /// Exchanges credentials for a bearer token.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Credential> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = Self::with_headers(Request::post(&self.url(&self.config.endpoints.login)), None)
            .json(&body)
            .map_err(|e| ApiError::transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        let payload: LoginResponse = Self::decode(response).await?;
        Ok(Credential::new(
            payload.access_token,
            Some(email.to_string()),
        ))
    }

    /// All listings, normalized. Entries without an id are dropped with a
    /// warning rather than poisoning the whole list.
    pub async fn list_places(&self, credential: Option<&Credential>) -> ApiResult<Vec<Place>> {
        // The backend routes the collection with a trailing slash only.
        let url = format!("{}/", self.url(&self.config.endpoints.places));
        let response = Self::with_headers(Request::get(&url), credential)
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        let dtos: Vec<PlaceDto> = Self::decode(response).await?;
        let total = dtos.len();
        let places: Vec<Place> = dtos.into_iter().filter_map(PlaceDto::normalize).collect();
        if places.len() < total {
            log::warn!(
                "api: dropped {} listing(s) without an id",
                total - places.len()
            );
        }
        Ok(places)
    }

    /// One listing, plus any reviews the payload inlined.
    pub async fn place_details(
        &self,
        credential: Option<&Credential>,
        id: &str,
    ) -> ApiResult<PlaceDetails> {
        let url = format!("{}/{}", self.url(&self.config.endpoints.place_details), id);
        let response = Self::with_headers(Request::get(&url), credential)
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        let dto: PlaceDto = Self::decode(response).await?;
        Ok(dto.into_details(id))
    }

    /// Reviews for one listing, in the order the backend serves them.
    pub async fn list_reviews(
        &self,
        credential: Option<&Credential>,
        place_id: &str,
    ) -> ApiResult<Vec<Review>> {
        let url = format!(
            "{}/{}/reviews",
            self.url(&self.config.endpoints.places),
            place_id
        );
        let response = Self::with_headers(Request::get(&url), credential)
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        let dtos: Vec<ReviewDto> = Self::decode(response).await?;
        Ok(dtos.into_iter().map(ReviewDto::normalize).collect())
    }

    /// Submits a review.
    ///
    /// Requires a credential; the check runs before any request is built,
    /// so an unauthenticated attempt never reaches the network.
    pub async fn post_review(
        &self,
        credential: Option<&Credential>,
        place_id: &str,
        rating: u8,
        comment: &str,
    ) -> ApiResult<Review> {
        let Some(credential) = credential else {
            return Err(ApiError::unauthorized("login required to submit a review"));
        };

        let body = NewReviewRequest {
            place_id: place_id.to_string(),
            rating,
            comment: comment.to_string(),
        };
        let response = Self::with_headers(
            Request::post(&self.url(&self.config.endpoints.reviews)),
            Some(credential),
        )
        .json(&body)
        .map_err(|e| ApiError::transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::transport(e.to_string()))?;

        let dto: ReviewDto = Self::decode(response).await?;
        let mut review = dto.normalize_as(&credential.display_name());
        if review.date.is_empty() {
            review.date = date::today();
        }
        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use stayhub_shared::error::ApiErrorKind;

    #[test]
    fn request_headers_carry_json_content_type_and_bearer() {
        let anonymous = PlacesApi::request_headers(None);
        assert_eq!(
            anonymous,
            vec![("Content-Type", "application/json".to_string())]
        );

        let credential = Credential::new("T".to_string(), None);
        let authed = PlacesApi::request_headers(Some(&credential));
        assert!(authed.contains(&("Content-Type", "application/json".to_string())));
        assert!(authed.contains(&("Authorization", "Bearer T".to_string())));
    }

    #[test]
    fn post_review_rejects_unauthenticated_callers_locally() {
        let api = PlacesApi::new(ApiConfig::new("http://localhost:9"));

        let err = block_on(api.post_review(None, "1", 5, "great stay"))
            .expect_err("must be rejected before any request is made");

        assert_eq!(err.kind, ApiErrorKind::Unauthorized);
        assert!(!err.is_fallback_eligible());
    }
}
