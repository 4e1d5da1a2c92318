use serde::Serialize;

use crate::background::Background;
use crate::forecast::{sampler, DailySample, Forecast};
use crate::weather::CurrentWeather;

/// The only message the widget ever shows for a failed lookup
pub const LOOKUP_FAILED_MESSAGE: &str = "City not found. Please try again.";

/// Current conditions and forecast from one successful lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupData {
    pub current: CurrentWeather,
    pub forecast: Forecast,
}

impl LookupData {
    pub fn background(&self) -> Background {
        self.current.background()
    }

    pub fn daily(&self) -> Vec<DailySample> {
        sampler::daily_samples(&self.forecast.entries)
    }
}

/// Widget lookup lifecycle
///
/// `last` carries the previously loaded data so it stays visible while a new
/// lookup runs and after one fails.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupState {
    #[default]
    Idle,
    Loading {
        query: String,
        last: Option<LookupData>,
    },
    Loaded {
        data: LookupData,
    },
    Failed {
        message: String,
        last: Option<LookupData>,
    },
}

impl LookupState {
    /// Enter `Loading`, dropping any error but keeping displayed data
    pub fn loading(&self, city: &str) -> Self {
        Self::Loading {
            query: city.to_string(),
            last: self.data().cloned(),
        }
    }

    pub fn loaded(data: LookupData) -> Self {
        Self::Loaded { data }
    }

    /// Enter `Failed` with the generic message, keeping displayed data
    pub fn failed(&self) -> Self {
        Self::Failed {
            message: LOOKUP_FAILED_MESSAGE.to_string(),
            last: self.data().cloned(),
        }
    }

    /// Data to display, stale or not
    pub fn data(&self) -> Option<&LookupData> {
        match self {
            Self::Idle => None,
            Self::Loaded { data } => Some(data),
            Self::Loading { last, .. } | Self::Failed { last, .. } => last.as_ref(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Everything the page renders: the search box contents and the lookup state
#[derive(Debug, Clone, Serialize)]
pub struct WidgetState {
    pub city: String,
    #[serde(flatten)]
    pub lookup: LookupState,
}
