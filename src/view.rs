//! Server-rendered HTML for the widget page.
//!
//! Pages are tera templates compiled once at startup with HTML auto-escaping,
//! so city names and provider text never reach the markup unescaped.

use std::sync::Arc;

use axum::http::StatusCode;
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

use crate::background::Background;
use crate::error::HttpError;
use crate::impl_into_response;
use crate::lookup::{LookupData, WidgetState};

const PAGE_TEMPLATE: &str = "page.html";
const LOADING_TEMPLATE: &str = "loading.html";

/// Round half up, matching how temperatures are shown everywhere on the page
pub fn round_temperature(value: f64) -> i64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Template compilation failed: {0}")]
    Compile(String),

    #[error("Template rendering failed: {0}")]
    Render(String),
}

impl HttpError for ViewError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_code(&self) -> Option<&'static str> {
        Some(match self {
            Self::Compile(_) => "TEMPLATE_COMPILE_ERROR",
            Self::Render(_) => "TEMPLATE_RENDER_ERROR",
        })
    }
}

impl_into_response!(ViewError);

/// Current conditions as the card shows them
#[derive(Debug, Serialize)]
struct CurrentCard<'a> {
    city: &'a str,
    country: &'a str,
    icon: &'a str,
    description: &'a str,
    temperature: i64,
    feels_like: i64,
    humidity: u32,
    wind_speed: String,
    pressure: u32,
}

#[derive(Debug, Serialize)]
struct DayTile {
    weekday: String,
    icon: String,
    description: String,
    temperature: i64,
    condition: String,
}

/// Compiled page templates, shared by every request
#[derive(Clone)]
pub struct PageRenderer {
    tera: Arc<Tera>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, ViewError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html", ".htm", ".xml"]);

        tera.add_raw_template(PAGE_TEMPLATE, embedded::PAGE)
            .map_err(|e| ViewError::Compile(format!("{PAGE_TEMPLATE}: {e}")))?;
        tera.add_raw_template(LOADING_TEMPLATE, embedded::LOADING)
            .map_err(|e| ViewError::Compile(format!("{LOADING_TEMPLATE}: {e}")))?;

        tracing::debug!("Page templates compiled");
        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render the whole page for the current widget state
    pub fn render_page(&self, widget: &WidgetState) -> Result<String, ViewError> {
        let mut context = Context::new();
        context.insert("style", embedded::STYLE);

        if widget.lookup.is_loading() {
            return self.render(LOADING_TEMPLATE, &context);
        }

        let data = widget.lookup.data();
        let background_url = data
            .map(|d| d.background().image_url())
            .unwrap_or_else(Background::default_image_url);

        context.insert("city", &widget.city);
        context.insert("error", &widget.lookup.error());
        context.insert("background_url", background_url);
        if let Some(data) = data {
            context.insert("current", &current_card(data));
            context.insert("days", &day_tiles(data));
        }

        self.render(PAGE_TEMPLATE, &context)
    }

    fn render(&self, name: &str, context: &Context) -> Result<String, ViewError> {
        self.tera
            .render(name, context)
            .map_err(|e| ViewError::Render(format!("{name}: {e}")))
    }
}

fn current_card(data: &LookupData) -> CurrentCard<'_> {
    let current = &data.current;
    CurrentCard {
        city: &current.city,
        country: &current.country,
        icon: &current.icon,
        description: &current.description,
        temperature: round_temperature(current.temperature),
        feels_like: round_temperature(current.feels_like),
        humidity: current.humidity,
        wind_speed: current.wind_speed.to_string(),
        pressure: current.pressure,
    }
}

fn day_tiles(data: &LookupData) -> Vec<DayTile> {
    data.daily()
        .into_iter()
        .map(|day| DayTile {
            temperature: round_temperature(day.temperature),
            weekday: day.weekday,
            icon: day.icon,
            description: day.description,
            condition: day.condition,
        })
        .collect()
}

mod embedded {
    pub const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; color: #fff; }
.page { min-height: 100vh; padding: 2rem; background-size: cover; background-position: center; background-attachment: fixed; }
.wrap { max-width: 56rem; margin: 0 auto; }
form input { width: 100%; box-sizing: border-box; padding: .75rem 1.5rem; border: 0; border-radius: 9999px; background: rgba(255,255,255,.2); color: #fff; font-size: 1rem; }
.error { color: #fecaca; margin-top: .5rem; }
.card { margin-top: 2rem; padding: 2rem; border-radius: 1.5rem; background: rgba(0,0,0,.3); }
.temp { font-size: 3.75rem; font-weight: bold; }
.desc { font-size: 1.25rem; text-transform: capitalize; }
.stats, .days { display: grid; gap: 1rem; }
.stats { grid-template-columns: repeat(2, 1fr); }
.days { grid-template-columns: repeat(5, 1fr); text-align: center; }
.tile { padding: 1rem; border-radius: .75rem; background: rgba(255,255,255,.1); }
.label { font-size: .875rem; opacity: .7; }
.loading { min-height: 100vh; display: flex; align-items: center; justify-content: center; font-size: 1.5rem; background: linear-gradient(to bottom right, #3b82f6, #9333ea); }
footer { text-align: center; opacity: .5; margin-top: 2rem; font-weight: 600; }
"#;

    // Background URLs come from the fixed Background table, not user input
    pub const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Weather</title>
<style>{{ style | safe }}</style>
</head>
<body>
<div class="page" style="background-image: linear-gradient(to bottom, rgba(0, 0, 0, 0.5), rgba(0, 0, 0, 0.7)), url({{ background_url | safe }})">
<div class="wrap">
<form method="post" action="/">
<input type="text" name="city" value="{{ city }}" placeholder="Enter city name...">
<button type="submit">Search</button>
</form>
{% if error %}<p class="error">{{ error }}</p>
{% endif %}
{%- if current %}
<div class="card">
<h1>{{ current.city }}, {{ current.country }}</h1>
<div>
<img src="https://openweathermap.org/img/wn/{{ current.icon }}@2x.png" alt="{{ current.description }}" width="96" height="96">
<div class="temp">{{ current.temperature }}°C</div>
<div class="desc">{{ current.description }}</div>
</div>
<div class="stats">
<div class="tile"><div class="label">Feels Like</div><div>{{ current.feels_like }}°C</div></div>
<div class="tile"><div class="label">Humidity</div><div>{{ current.humidity }}%</div></div>
<div class="tile"><div class="label">Wind Speed</div><div>{{ current.wind_speed }} m/s</div></div>
<div class="tile"><div class="label">Pressure</div><div>{{ current.pressure }} hPa</div></div>
</div>
{%- if days %}
<h2>5-Day Forecast</h2>
<div class="days">
{%- for day in days %}
<div class="tile"><div>{{ day.weekday }}</div><img src="https://openweathermap.org/img/wn/{{ day.icon }}.png" alt="{{ day.description }}" width="48" height="48"><div>{{ day.temperature }}°C</div><div class="label">{{ day.condition }}</div></div>
{%- endfor %}
</div>
{%- endif %}
</div>
{%- endif %}
</div>
<footer>skyview</footer>
</div>
</body>
</html>
"#;

    pub const LOADING: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta http-equiv="refresh" content="1">
<title>Weather</title>
<style>{{ style | safe }}</style>
</head>
<body><div class="loading">Loading...</div></body>
</html>
"#;
}
