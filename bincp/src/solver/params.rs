use anyhow::{Context, Result, bail, ensure};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Tuning parameters of a [`SolverGateway`](crate::solver::SolverGateway)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SolverParams {
    /// Wall time limit of the search. Unlimited if not specified
    pub max_time_in_seconds: Option<f64>,
    /// Stop as soon as the first solution is found
    pub stop_after_first_solution: bool,
    /// Log every improving solution and the final statistics at info level
    pub log_search_progress: bool,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            max_time_in_seconds: None,
            stop_after_first_solution: false,
            log_search_progress: true,
        }
    }
}

impl SolverParams {
    /// Returns a copy of `self` with the parameters in `overlay` merged on top.
    ///
    /// The overlay is either a JSON object (`{"max_time_in_seconds": 10}`)
    /// or a list of `key:value` pairs separated by whitespace, commas or semicolons
    /// (`max_time_in_seconds:10 log_search_progress:false`).
    pub fn with_overlay(&self, overlay: &str) -> Result<SolverParams> {
        let overlay = overlay.trim();
        if overlay.is_empty() {
            return Ok(self.clone());
        }
        let entries = match overlay.starts_with('{') {
            true => serde_json::from_str::<Map<String, Value>>(overlay)
                .context("solver parameters are not a valid JSON object")?,
            false => parse_key_values(overlay)?,
        };

        let mut merged = match serde_json::to_value(self)? {
            Value::Object(map) => map,
            _ => unreachable!("solver parameters always serialize to an object"),
        };
        for (key, value) in entries {
            ensure!(
                merged.contains_key(&key),
                "unknown solver parameter: {key}"
            );
            merged.insert(key, value);
        }
        serde_json::from_value(Value::Object(merged))
            .with_context(|| format!("invalid solver parameters: {overlay}"))
    }
}

fn parse_key_values(overlay: &str) -> Result<Map<String, Value>> {
    let mut entries = Map::new();
    let mut tokens = overlay
        .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|t| !t.is_empty());

    while let Some(token) = tokens.next() {
        let (key, raw_value) = match token.split_once(':') {
            Some((key, "")) => match tokens.next() {
                Some(value) => (key, value),
                None => bail!("missing value for solver parameter: {key}"),
            },
            Some((key, value)) => (key, value),
            None => bail!("expected key:value, found: {token}"),
        };
        let value = serde_json::from_str::<Value>(raw_value)
            .with_context(|| format!("invalid value '{raw_value}' for solver parameter {key}"))?;
        entries.insert(key.trim().to_string(), value);
    }
    Ok(entries)
}
