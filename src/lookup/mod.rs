pub mod handlers;
mod provider;
mod session;
mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use provider::{fetch_both, OpenWeatherMap, WeatherProvider};
pub use session::LookupSession;
pub use state::{LookupData, LookupState, WidgetState, LOOKUP_FAILED_MESSAGE};
