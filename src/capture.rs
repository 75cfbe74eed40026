//! Device capabilities the note flow consumes: picking an image and
//! finding the current position.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Coordinates;

/// A position fix with its reverse-geocoded address, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fix {
    pub coordinates: Coordinates,
    pub address: Option<String>,
}

pub trait Geolocator {
    /// Fails with [`Error::PermissionDenied`] when location access is refused.
    fn locate(&self) -> Result<Fix>;
}

pub trait ImageSource {
    /// Transient URI of the picked image, `None` when the pick was cancelled.
    fn pick(&self) -> Result<Option<String>>;
}

/// Position supplied up front, e.g. from command-line arguments.
#[derive(Debug, Clone)]
pub struct FixedLocation {
    fix: Fix,
}

impl FixedLocation {
    pub fn new(coordinates: Coordinates, address: Option<String>) -> Self {
        Self {
            fix: Fix {
                coordinates,
                address,
            },
        }
    }
}

impl Geolocator for FixedLocation {
    fn locate(&self) -> Result<Fix> {
        Ok(self.fix.clone())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedLocation;

impl Geolocator for DeniedLocation {
    fn locate(&self) -> Result<Fix> {
        Err(Error::PermissionDenied("Location permission denied".into()))
    }
}

/// Image given as a path or `file://` URI.
#[derive(Debug, Clone, Default)]
pub struct PathImageSource {
    uri: Option<String>,
}

impl PathImageSource {
    pub fn new(uri: Option<String>) -> Self {
        Self { uri }
    }
}

impl ImageSource for PathImageSource {
    fn pick(&self) -> Result<Option<String>> {
        Ok(self.uri.clone().filter(|u| !u.trim().is_empty()))
    }
}

/// Structured reverse-geocoding result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocodedAddress {
    pub name: Option<String>,
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub subregion: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

impl GeocodedAddress {
    /// Comma-joined non-empty parts; the subregion stands in for a missing city.
    pub fn format(&self) -> Option<String> {
        let locality = non_empty(&self.city).or_else(|| non_empty(&self.subregion));
        let parts: Vec<&str> = [
            non_empty(&self.name),
            non_empty(&self.street),
            non_empty(&self.postal_code),
            locality,
            non_empty(&self.region),
            non_empty(&self.country),
        ]
        .into_iter()
        .flatten()
        .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

fn non_empty(part: &Option<String>) -> Option<&str> {
    part.as_deref().filter(|s| !s.is_empty())
}
