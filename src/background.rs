//! Background selection for the widget.
//!
//! Condition labels take precedence over temperature: a rainy day at 32°C
//! renders [`Background::Rainy`], not [`Background::Hot`].

use serde::Serialize;
use utoipa::ToSchema;

const HOT_THRESHOLD: f64 = 30.0;
const WARM_THRESHOLD: f64 = 20.0;
const MILD_THRESHOLD: f64 = 10.0;

/// Shown before any lookup has succeeded
const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1504608524841-42fe6f032b4b?auto=format&fit=crop&w=2000&q=80";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    Rainy,
    Snowy,
    Storm,
    Cloudy,
    Hot,
    Warm,
    Mild,
    Cold,
}

impl Background {
    /// Pick a background from a temperature in °C and a provider condition
    /// label such as "Rain" or "Clouds". First matching rule wins.
    pub fn classify(temperature: f64, label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "rain" | "drizzle" => Self::Rainy,
            "snow" => Self::Snowy,
            "thunderstorm" => Self::Storm,
            "clouds" => Self::Cloudy,
            _ if temperature >= HOT_THRESHOLD => Self::Hot,
            _ if temperature >= WARM_THRESHOLD => Self::Warm,
            _ if temperature >= MILD_THRESHOLD => Self::Mild,
            // NaN lands here too
            _ => Self::Cold,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rainy => "rainy",
            Self::Snowy => "snowy",
            Self::Storm => "storm",
            Self::Cloudy => "cloudy",
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::Mild => "mild",
            Self::Cold => "cold",
        }
    }

    pub const fn image_url(self) -> &'static str {
        match self {
            Self::Rainy => "https://images.unsplash.com/photo-1519692933481-e162a57d6721?auto=format&fit=crop&w=2000&q=80",
            Self::Snowy => "https://images.unsplash.com/photo-1478265409131-1f65c88f965c?auto=format&fit=crop&w=2000&q=80",
            Self::Storm => "https://images.unsplash.com/photo-1605727216801-e27ce1d0cc28?auto=format&fit=crop&w=2000&q=80",
            Self::Cloudy => "https://images.unsplash.com/photo-1534088568595-a066f410bcda?auto=format&fit=crop&w=2000&q=80",
            Self::Hot => "https://images.unsplash.com/photo-1524594081293-190a2fe0baae?auto=format&fit=crop&w=2000&q=80",
            Self::Warm => "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?auto=format&fit=crop&w=2000&q=80",
            Self::Mild => "https://images.unsplash.com/photo-1500382017468-9049fed747ef?auto=format&fit=crop&w=2000&q=80",
            Self::Cold => "https://images.unsplash.com/photo-1560258018-c7db7645254e?auto=format&fit=crop&w=2000&q=80",
        }
    }

    pub const fn default_image_url() -> &'static str {
        DEFAULT_IMAGE_URL
    }
}

impl std::fmt::Display for Background {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
