//! Reading and writing `<evaluation>` elements.

use crate::error::RuleMlError;
use crate::rules::{Characteristics, Measure, MeasureValue, RuleCharacteristics};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename = "evaluations")]
struct Evaluations {
    #[serde(rename = "evaluation", default)]
    evaluations: Vec<EvaluationElement>,
}

#[derive(Debug, Serialize, Deserialize)]
struct EvaluationElement {
    #[serde(rename = "@measure")]
    measure: String,
    #[serde(rename = "@value")]
    value: String,
}

/// Writes the set measures of `characteristics` as an `<evaluations>`
/// element holding one `<evaluation>` per measure, in [`Measure::ALL`]
/// order.
///
/// # Examples
///
/// ```
/// use u_drsa::rules::RuleCharacteristics;
/// use u_drsa::ruleml::write_evaluations;
///
/// let mut characteristics = RuleCharacteristics::new();
/// characteristics.set_support(3);
///
/// let xml = write_evaluations(&characteristics).unwrap();
/// assert!(xml.contains(r#"<evaluation measure="Support" value="3"/>"#));
/// ```
pub fn write_evaluations<C>(characteristics: &C) -> Result<String, RuleMlError>
where
    C: Characteristics + ?Sized,
{
    let evaluations = Measure::ALL
        .iter()
        .filter(|&&m| characteristics.is_set(m))
        .filter_map(|&m| {
            characteristics.measure(m).map(|value| EvaluationElement {
                measure: m.ruleml_name().to_string(),
                value: value.to_string(),
            })
        })
        .collect();

    quick_xml::se::to_string(&Evaluations { evaluations })
        .map_err(|e| RuleMlError::Xml(e.to_string()))
}

/// Reads the `<evaluation>` children of the root element of `xml`.
///
/// The root element's name is not checked, so a whole rule element may be
/// passed; its other children are ignored.
///
/// # Errors
///
/// - [`RuleMlError::Xml`] if `xml` is not well formed
/// - [`RuleMlError::UnknownMeasure`] for an unrecognised measure name
/// - [`RuleMlError::InvalidValue`] if a value does not parse
pub fn read_evaluations(xml: &str) -> Result<RuleCharacteristics, RuleMlError> {
    let parsed: Evaluations =
        quick_xml::de::from_str(xml).map_err(|e| RuleMlError::Xml(e.to_string()))?;

    let mut characteristics = RuleCharacteristics::new();
    for element in parsed.evaluations {
        let (measure, legacy) = Measure::from_ruleml_name(&element.measure)
            .ok_or_else(|| RuleMlError::UnknownMeasure(element.measure.clone()))?;
        if legacy {
            tracing::warn!(
                legacy = %element.measure,
                current = measure.ruleml_name(),
                "legacy rule evaluation measure name"
            );
        }
        let invalid = || RuleMlError::InvalidValue {
            measure: element.measure.clone(),
            value: element.value.clone(),
        };
        let value = parse_value(&element.value).ok_or_else(invalid)?;
        characteristics
            .set(measure, value)
            .map_err(|_| invalid())?;
    }
    Ok(characteristics)
}

/// Whole numbers parse as counts, anything else as a real. The record
/// converts the value to the measure's kind.
fn parse_value(text: &str) -> Option<MeasureValue> {
    let text = text.trim();
    text.parse()
        .map(MeasureValue::Count)
        .or_else(|_| text.parse().map(MeasureValue::Real))
        .ok()
}
