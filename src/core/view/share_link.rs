use crate::core::data::complex::Complex;
use crate::core::view::view_state::{
    DEFAULT_FOCUS, DEFAULT_ZOOM_CENTER, DEFAULT_ZOOM_SIZE, MIN_ZOOM_SIZE, ViewState,
};
use percent_encoding::percent_decode_str;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

const LOC_KEY: &str = "loc";
const ZOOM_CENTER_KEY: &str = "zoomCenter";
const ZOOM_SIZE_KEY: &str = "zoomSize";

/// Serializable snapshot of a [`ViewState`], one field per query key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareState {
    pub loc: [f64; 2],
    pub zoom_center: [f64; 2],
    pub zoom_size: f64,
}

impl Default for ShareState {
    fn default() -> Self {
        Self::from(&ViewState::default())
    }
}

impl From<&ViewState> for ShareState {
    fn from(view: &ViewState) -> Self {
        Self {
            loc: view.focus().to_array(),
            zoom_center: view.zoom_center().to_array(),
            zoom_size: view.zoom_size(),
        }
    }
}

impl From<ShareState> for ViewState {
    fn from(state: ShareState) -> Self {
        ViewState::new(
            Complex::from(state.loc),
            Complex::from(state.zoom_center),
            state.zoom_size,
        )
    }
}

impl ShareState {
    /// `loc=[..]&zoomCenter=[..]&zoomSize=..` with JSON-encoded values.
    #[must_use]
    pub fn to_query(&self) -> String {
        format!(
            "{LOC_KEY}={}&{ZOOM_CENTER_KEY}={}&{ZOOM_SIZE_KEY}={}",
            to_json(&self.loc),
            to_json(&self.zoom_center),
            to_json(&self.zoom_size),
        )
    }

    /// Appends the query to `base_url`, dropping any query it already has.
    #[must_use]
    pub fn to_link(&self, base_url: &str) -> String {
        let base = base_url.split('?').next().unwrap_or_default();
        format!("{base}?{}", self.to_query())
    }

    /// Parses a query string or full link. Never fails: missing or malformed
    /// fields fall back to their defaults.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let query = match input.split_once('?') {
            Some((_, query)) => query,
            None => input.strip_prefix('#').unwrap_or(input),
        };

        let mut state = Self::default();

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));

            match key {
                LOC_KEY => {
                    if let Some(loc) = decode_point(key, raw) {
                        state.loc = loc;
                    }
                }
                ZOOM_CENTER_KEY => {
                    if let Some(center) = decode_point(key, raw) {
                        state.zoom_center = center;
                    }
                }
                ZOOM_SIZE_KEY => match decode_value::<f64>(key, raw) {
                    Some(size) if size.is_finite() && size >= MIN_ZOOM_SIZE => {
                        state.zoom_size = size;
                    }
                    Some(size) => {
                        warn!(zoom_size = size, "share link zoom size out of range, using default");
                    }
                    None => {}
                },
                _ => {}
            }
        }

        state
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.loc == DEFAULT_FOCUS.to_array()
            && self.zoom_center == DEFAULT_ZOOM_CENTER.to_array()
            && self.zoom_size == DEFAULT_ZOOM_SIZE
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    // arrays and finite floats always serialize
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_owned())
}

fn decode_point(key: &str, raw: &str) -> Option<[f64; 2]> {
    let point = decode_value::<[f64; 2]>(key, raw)?;
    if point.iter().all(|v| v.is_finite()) {
        Some(point)
    } else {
        None
    }
}

fn decode_value<T: DeserializeOwned>(key: &str, raw: &str) -> Option<T> {
    let spaced = raw.replace('+', " ");
    let decoded = match percent_decode_str(&spaced).decode_utf8() {
        Ok(decoded) => decoded,
        Err(err) => {
            warn!(key, %err, "share link value is not valid UTF-8, using default");
            return None;
        }
    };

    match serde_json::from_str(&decoded) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, %err, "share link value is not valid JSON, using default");
            None
        }
    }
}
