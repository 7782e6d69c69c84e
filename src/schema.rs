// plotdesk/src/schema.rs

use serde::Deserialize;
use serde_json::{error::Category, Value};
use tracing::info;

use crate::error::LoadError;
use crate::format::FileFormat;

/// `stepsize` value that switches to caller-supplied x-values.
const CUSTOM_STEPS: &str = "custom";

/// Normalized representation of one plottable series. Built once per load
/// attempt, immutable afterwards, consumed by coordinate preparation.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotRecord {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// The y-series, verbatim and in document order.
    pub values: Vec<f64>,
    pub step: StepDescriptor,
}

/// How x-values are obtained for the series.
#[derive(Clone, Debug, PartialEq)]
pub enum StepDescriptor {
    /// Uniform progression: index `i` maps to `i * size`.
    Fixed(f64),
    /// One x-value per y-value, supplied by the document.
    Explicit(Vec<f64>),
}

/// Document shape before validation. Every field is optional so one pass can
/// report all absent required keys, not just the first.
#[derive(Debug, Deserialize)]
struct RawDocument {
    title: Option<Value>,
    xlabel: Option<Value>,
    ylabel: Option<Value>,
    data: Option<Value>,
    stepsize: Option<Value>,
    steps: Option<Value>,
}

impl RawDocument {
    fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.is_none() {
            missing.push("title");
        }
        if self.xlabel.is_none() {
            missing.push("xlabel");
        }
        if self.ylabel.is_none() {
            missing.push("ylabel");
        }
        if self.data.is_none() {
            missing.push("data");
        }
        if self.stepsize.is_none() {
            missing.push("stepsize");
        }
        missing
    }
}

/// Parse `content` declared to be in `format` and produce a [`PlotRecord`].
///
/// Success is all-or-nothing; no partially populated record is ever
/// returned. The explicit-steps/data length agreement is deliberately not
/// checked here, it is enforced when coordinates are prepared.
pub fn validate(content: &str, format: FileFormat) -> Result<PlotRecord, LoadError> {
    match format {
        FileFormat::Unknown => Err(LoadError::UnsupportedFormat),
        FileFormat::Csv => Err(LoadError::CsvNotImplemented),
        FileFormat::Json => validate_json(content),
    }
}

fn validate_json(content: &str) -> Result<PlotRecord, LoadError> {
    let raw: RawDocument = serde_json::from_str(content).map_err(|err| match err.classify() {
        // Well-formed JSON whose root is not an object.
        Category::Data => LoadError::Internal(err.to_string()),
        _ => LoadError::MalformedDocument(err),
    })?;

    let missing = raw.missing_keys();
    if !missing.is_empty() {
        return Err(LoadError::MissingRequiredKeys(missing));
    }

    // Label values are opaque; presence is the only requirement.
    let title = text_value(raw.title.unwrap_or_default());
    let x_label = text_value(raw.xlabel.unwrap_or_default());
    let y_label = text_value(raw.ylabel.unwrap_or_default());

    let Some(Value::Array(items)) = raw.data else {
        return Err(LoadError::InvalidDataShape);
    };
    let values = numeric_values(&items).ok_or(LoadError::InvalidDataShape)?;

    let stepsize = raw.stepsize.unwrap_or_default();
    let step = if stepsize.as_str() == Some(CUSTOM_STEPS) {
        let Some(Value::Array(items)) = raw.steps else {
            return Err(LoadError::MissingOrInvalidSteps);
        };
        let steps = numeric_values(&items).ok_or(LoadError::MissingOrInvalidSteps)?;
        info!(count = steps.len(), "custom step values loaded");
        StepDescriptor::Explicit(steps)
    } else {
        let size = coerce_step(&stepsize)
            .ok_or_else(|| LoadError::InvalidStepSizeFormat(stepsize.to_string()))?;
        info!(size, "step size identified");
        StepDescriptor::Fixed(size)
    };

    Ok(PlotRecord { title, x_label, y_label, values, step })
}

fn text_value(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn numeric_values(items: &[Value]) -> Option<Vec<f64>> {
    items.iter().map(Value::as_f64).collect()
}

/// JSON numbers pass through; strings must parse as a float after trimming.
fn coerce_step(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(content: &str) -> Result<PlotRecord, LoadError> {
        validate(content, FileFormat::Json)
    }

    #[test]
    fn fixed_step_document_loads() {
        let record =
            load(r#"{"title":"T","xlabel":"X","ylabel":"Y","data":[1,2,3],"stepsize":"2"}"#)
                .unwrap();
        assert_eq!(record.title, "T");
        assert_eq!(record.x_label, "X");
        assert_eq!(record.y_label, "Y");
        assert_eq!(record.values, vec![1.0, 2.0, 3.0]);
        assert_eq!(record.step, StepDescriptor::Fixed(2.0));
    }

    #[test]
    fn numeric_stepsize_accepted() {
        let record =
            load(r#"{"title":"T","xlabel":"X","ylabel":"Y","data":[4],"stepsize":0.5}"#).unwrap();
        assert_eq!(record.step, StepDescriptor::Fixed(0.5));
    }

    #[test]
    fn padded_stepsize_string_accepted() {
        let record =
            load(r#"{"title":"T","xlabel":"X","ylabel":"Y","data":[4],"stepsize":" 2.5 "}"#)
                .unwrap();
        assert_eq!(record.step, StepDescriptor::Fixed(2.5));
    }

    #[test]
    fn custom_steps_document_loads() {
        let record = load(
            r#"{"title":"T","xlabel":"X","ylabel":"Y","data":[5,6],"stepsize":"custom","steps":[0,10]}"#,
        )
        .unwrap();
        assert_eq!(record.values, vec![5.0, 6.0]);
        assert_eq!(record.step, StepDescriptor::Explicit(vec![0.0, 10.0]));
    }

    #[test]
    fn mismatched_steps_still_load() {
        // Length agreement is a plotting-time concern, not a load failure.
        let record = load(
            r#"{"title":"T","xlabel":"X","ylabel":"Y","data":[1,2],"stepsize":"custom","steps":[1]}"#,
        )
        .unwrap();
        assert_eq!(record.step, StepDescriptor::Explicit(vec![1.0]));
    }

    #[test]
    fn empty_data_array_loads() {
        let record =
            load(r#"{"title":"T","xlabel":"X","ylabel":"Y","data":[],"stepsize":1}"#).unwrap();
        assert!(record.values.is_empty());
    }

    #[test]
    fn all_missing_keys_reported_together() {
        let err = load("{}").unwrap_err();
        match err {
            LoadError::MissingRequiredKeys(keys) => {
                assert_eq!(keys, vec!["title", "xlabel", "ylabel", "data", "stepsize"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn partially_missing_keys_reported_by_name() {
        let err = load(r#"{"title":"T","xlabel":"X","data":[1]}"#).unwrap_err();
        match err {
            LoadError::MissingRequiredKeys(keys) => assert_eq!(keys, vec!["ylabel", "stepsize"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let record = load(
            r#"{"title":"T","xlabel":"X","ylabel":"Y","data":[1],"stepsize":1,"comment":"hi"}"#,
        )
        .unwrap();
        assert_eq!(record.values, vec![1.0]);
    }

    #[test]
    fn label_values_are_opaque() {
        let record =
            load(r#"{"title":42,"xlabel":null,"ylabel":"Y","data":[1],"stepsize":1}"#).unwrap();
        assert_eq!(record.title, "42");
        assert_eq!(record.x_label, "null");
    }

    #[test]
    fn non_array_data_rejected() {
        for doc in [
            r#"{"title":"T","xlabel":"X","ylabel":"Y","data":7,"stepsize":1}"#,
            r#"{"title":"T","xlabel":"X","ylabel":"Y","data":{"a":1},"stepsize":1}"#,
            r#"{"title":"T","xlabel":"X","ylabel":"Y","data":"1,2","stepsize":1}"#,
        ] {
            assert!(matches!(load(doc), Err(LoadError::InvalidDataShape)), "{doc}");
        }
    }

    #[test]
    fn non_numeric_data_element_rejected() {
        let err = load(r#"{"title":"T","xlabel":"X","ylabel":"Y","data":[1,"x"],"stepsize":1}"#)
            .unwrap_err();
        assert!(matches!(err, LoadError::InvalidDataShape));
    }

    #[test]
    fn custom_without_steps_rejected() {
        let err = load(r#"{"title":"T","xlabel":"X","ylabel":"Y","data":[1],"stepsize":"custom"}"#)
            .unwrap_err();
        assert!(matches!(err, LoadError::MissingOrInvalidSteps));
    }

    #[test]
    fn non_array_steps_rejected() {
        let err = load(
            r#"{"title":"T","xlabel":"X","ylabel":"Y","data":[1],"stepsize":"custom","steps":5}"#,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::MissingOrInvalidSteps));

        let err = load(
            r#"{"title":"T","xlabel":"X","ylabel":"Y","data":[1],"stepsize":"custom","steps":["a"]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::MissingOrInvalidSteps));
    }

    #[test]
    fn uncoercible_stepsize_rejected() {
        for stepsize in [r#""abc""#, "true", "null", "[1]"] {
            let doc = format!(
                r#"{{"title":"T","xlabel":"X","ylabel":"Y","data":[1],"stepsize":{stepsize}}}"#
            );
            assert!(
                matches!(load(&doc), Err(LoadError::InvalidStepSizeFormat(_))),
                "{stepsize}"
            );
        }
    }

    #[test]
    fn malformed_document_rejected() {
        let err = load(r#"{"title":"T","#).unwrap_err();
        assert!(matches!(err, LoadError::MalformedDocument(_)));
    }

    #[test]
    fn non_object_root_is_internal() {
        let err = load("[1,2,3]").unwrap_err();
        assert!(matches!(err, LoadError::Internal(_)));
    }

    #[test]
    fn csv_is_not_implemented() {
        let err = validate("a,b\n1,2\n", FileFormat::Csv).unwrap_err();
        assert!(matches!(err, LoadError::CsvNotImplemented));
    }

    #[test]
    fn unknown_format_rejected() {
        let err = validate("whatever", FileFormat::Unknown).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat));
    }
}
