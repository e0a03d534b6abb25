use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use crate::models::google_places::PlaceDetails;

/// A meeting spot that survived both the text search and the detail lookup
#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ResolvedPlace {
    pub place_id: String,
    pub name: String,
    pub formatted_address: String,
    pub reviews: Vec<Review>,
    pub photo_reference: Option<String>,
    pub rating: Option<f64>,
    pub location: Option<Location>,
}

/// Review as handed back by the detail lookup, untouched
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
#[serde(default)]
pub struct Review {
    pub author_name: String,
    pub author_url: String,
    pub profile_photo_url: String,
    pub relative_time_description: String,
    pub text: String,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl From<PlaceDetails> for ResolvedPlace {
    fn from(details: PlaceDetails) -> Self {
        let photo_reference = details
            .photos
            .into_iter()
            .next()
            .map(|photo| photo.photo_reference);

        Self {
            place_id: details.place_id,
            name: details.name,
            formatted_address: details.formatted_address,
            reviews: details.reviews,
            photo_reference,
            rating: details.rating,
            location: details.geometry.map(|geometry| geometry.location),
        }
    }
}
