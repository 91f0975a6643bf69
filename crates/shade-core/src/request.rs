//! JSON front door for adjustment calls.
//!
//! JSON can express "argument omitted" separately from "argument is null",
//! which the typed API cannot. Omitting `cols` is a usage error; an explicit
//! `null` for any argument is the pass-through sentinel; the string `"NA"`
//! is the missing-value marker.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::adjust::adjuster::ColorAdjuster;
use crate::adjust::args::{Arg, FactorInput, FlagInput};
use crate::color::batch::ColorInput;
use crate::error::AdjustError;

const NA: &str = "NA";

/// A decoded but not yet validated adjustment call.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdjustRequest {
    #[serde(default, deserialize_with = "present")]
    cols: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    adj: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    plot: Option<Value>,
}

/// Result of an adjustment call. `colors` is `null` on pass-through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustResponse {
    pub colors: Option<Vec<String>>,
}

impl AdjustResponse {
    pub fn to_json(&self) -> Result<String, AdjustError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Wrap any present value (including `null`) in `Some`, so that `None`
/// means the key was absent.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl AdjustRequest {
    pub fn from_json(json: &str) -> Result<Self, AdjustError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert into typed arguments, applying defaults for omitted ones.
    pub fn into_args(
        self,
    ) -> Result<(Arg<Vec<ColorInput>>, Arg<FactorInput>, Arg<FlagInput>), AdjustError> {
        let cols = match self.cols {
            None => return Err(AdjustError::MissingArgument("cols")),
            Some(v) => cols_arg(v)?,
        };
        let adj = match self.adj {
            None => Arg::Value(FactorInput::Number(0.0)),
            Some(v) => factor_arg(v)?,
        };
        let plot = match self.plot {
            None => Arg::Value(FlagInput::Bool(false)),
            Some(v) => flag_arg(v)?,
        };
        Ok((cols, adj, plot))
    }

    /// Validate and run against `adjuster`.
    pub fn run(self, adjuster: &mut ColorAdjuster<'_>) -> Result<AdjustResponse, AdjustError> {
        let (cols, adj, plot) = self.into_args()?;
        let colors = adjuster.adjust_colours(cols, adj, plot)?;
        Ok(AdjustResponse { colors })
    }
}

fn coercion(name: &'static str, expected: &'static str, value: &Value) -> AdjustError {
    AdjustError::Coercion {
        name,
        expected,
        value: value.to_string(),
    }
}

fn cols_arg(value: Value) -> Result<Arg<Vec<ColorInput>>, AdjustError> {
    match value {
        Value::Null => Ok(Arg::Null),
        Value::String(s) if s == NA => Ok(Arg::Na),
        Value::String(s) => Ok(Arg::Value(vec![ColorInput::Spec(s)])),
        Value::Array(items) => items
            .into_iter()
            .map(color_input)
            .collect::<Result<Vec<_>, _>>()
            .map(Arg::Value),
        other => Err(coercion("cols", "a color or list of colors", &other)),
    }
}

fn color_input(value: Value) -> Result<ColorInput, AdjustError> {
    match value {
        Value::Null => Ok(ColorInput::Na),
        Value::String(s) if s == NA => Ok(ColorInput::Na),
        Value::String(s) => Ok(ColorInput::Spec(s)),
        Value::Array(ref channels) if channels.len() == 3 => {
            let mut rgb = [0u8; 3];
            for (slot, channel) in rgb.iter_mut().zip(channels) {
                *slot = channel
                    .as_u64()
                    .and_then(|c| u8::try_from(c).ok())
                    .ok_or_else(|| coercion("cols", "an [r, g, b] triple of 0..=255", &value))?;
            }
            Ok(ColorInput::Rgb(rgb))
        }
        other => Err(coercion("cols", "a color specification", &other)),
    }
}

fn factor_arg(value: Value) -> Result<Arg<FactorInput>, AdjustError> {
    match value {
        Value::Null => Ok(Arg::Null),
        Value::String(s) if s == NA => Ok(Arg::Na),
        Value::String(s) => Ok(Arg::Value(FactorInput::Text(s))),
        Value::Bool(b) => Ok(Arg::Value(FactorInput::Number(f64::from(u8::from(b))))),
        Value::Number(ref n) => n
            .as_f64()
            .map(|f| Arg::Value(FactorInput::Number(f)))
            .ok_or_else(|| coercion("adj", "numeric", &value)),
        other => Err(coercion("adj", "numeric", &other)),
    }
}

fn flag_arg(value: Value) -> Result<Arg<FlagInput>, AdjustError> {
    match value {
        Value::Null => Ok(Arg::Null),
        Value::String(s) if s == NA => Ok(Arg::Na),
        Value::String(s) => Ok(Arg::Value(FlagInput::Text(s))),
        Value::Bool(b) => Ok(Arg::Value(FlagInput::Bool(b))),
        Value::Number(ref n) => n
            .as_f64()
            .map(|f| Arg::Value(FlagInput::Number(f)))
            .ok_or_else(|| coercion("plot", "logical", &value)),
        other => Err(coercion("plot", "logical", &other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn run(json: &str) -> Result<AdjustResponse, AdjustError> {
        AdjustRequest::from_json(json)?.run(&mut ColorAdjuster::new())
    }

    #[test]
    fn test_defaults_are_identity_without_plot() {
        let res = run(r##"{ "cols": ["#abcdef", [1, 2, 3]] }"##).unwrap();
        assert_eq!(res.colors.unwrap(), ["#ABCDEF", "#010203"]);
    }

    #[test]
    fn test_missing_cols_is_usage_error() {
        let err = run(r#"{ "adj": 0.5 }"#).unwrap_err();
        assert!(matches!(err, AdjustError::MissingArgument("cols")), "{err}");
        assert_eq!(err.kind(), ErrorKind::Usage);
    }

    #[test]
    fn test_unknown_key_is_usage_error() {
        let err = run(r#"{ "cols": ["red"], "colour": 1 }"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Usage, "{err}");
    }

    #[test]
    fn test_null_cols_passes_through() {
        let res = run(r#"{ "cols": null, "adj": 0.5 }"#).unwrap();
        assert_eq!(res.colors, None);
        assert_eq!(res.to_json().unwrap(), r#"{"colors":null}"#);
    }

    #[test]
    fn test_null_element_is_na() {
        let err = run(r#"{ "cols": ["red", null] }"#).unwrap_err();
        assert!(matches!(err, AdjustError::ColorNa), "{err}");
        let err = run(r#"{ "cols": ["NA"] }"#).unwrap_err();
        assert!(matches!(err, AdjustError::ColorNa), "{err}");
    }

    #[test]
    fn test_adj_forms() {
        let res = run(r##"{ "cols": "#000000", "adj": "0.5" }"##).unwrap();
        assert_eq!(res.colors.unwrap(), ["#808080"]);

        let res = run(r##"{ "cols": "#123456", "adj": true }"##).unwrap();
        assert_eq!(res.colors.unwrap(), ["#FFFFFF"]);

        let err = run(r#"{ "cols": ["red"], "adj": "abc" }"#).unwrap_err();
        assert!(matches!(err, AdjustError::Coercion { name: "adj", .. }), "{err}");

        let err = run(r#"{ "cols": ["red"], "adj": "NA" }"#).unwrap_err();
        assert!(matches!(err, AdjustError::ArgumentNa("adj")), "{err}");

        let err = run(r#"{ "cols": ["red"], "adj": [1] }"#).unwrap_err();
        assert!(matches!(err, AdjustError::Coercion { name: "adj", .. }), "{err}");
    }

    #[test]
    fn test_bad_triple() {
        let err = run(r#"{ "cols": [[0, 0, 256]] }"#).unwrap_err();
        assert!(matches!(err, AdjustError::Coercion { name: "cols", .. }), "{err}");
    }

    #[test]
    fn test_plot_forms() {
        let res = run(r#"{ "cols": ["red"], "plot": "TRUE" }"#).unwrap();
        assert_eq!(res.colors.unwrap(), ["#FF0000"]);

        let res = run(r#"{ "cols": ["red"], "plot": null }"#).unwrap();
        assert_eq!(res.colors, None);

        let err = run(r#"{ "cols": ["red"], "plot": {} }"#).unwrap_err();
        assert!(matches!(err, AdjustError::Coercion { name: "plot", .. }), "{err}");
    }
}
