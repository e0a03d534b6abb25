use serde::{Deserialize, Serialize};
use crate::models::place::{Location, Review};

/// Body of `findplacefromtext/json`
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct FindPlaceResponse {
    #[serde(default)]
    pub candidates: Vec<PlaceCandidate>,
    pub status: String,
    pub error_message: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct PlaceCandidate {
    pub place_id: String,
}

/// Body of `details/json`
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct PlaceDetailsResponse {
    pub result: Option<PlaceDetails>,
    pub status: String,
    pub error_message: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct PlaceDetails {
    pub place_id: String,
    pub name: String,
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub photos: Vec<Photo>,
    pub rating: Option<f64>,
    pub geometry: Option<Geometry>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Photo {
    pub photo_reference: String,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Geometry {
    pub location: Location,
}
