//! Value domains of template parameters.
//! Every raw value is expanded into the ordered list of strings it can take
//! during the sweep: a quoted literal, a `start...step...end` range or a
//! space-separated list.

use crate::combinations::{total_combinations, Combinations};
use crate::error::{Error, Result};
use crate::template::Template;
use log::debug;

/// Significant digits used when formatting range values.
const RANGE_PRECISION: i32 = 6;
const RANGE_REL_TOLERANCE: f64 = 1e-9;
const RANGE_ABS_TOLERANCE: f64 = 1e-12;

/// Candidate values of a single parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueDomain {
    /// Value starting with `"`: one opaque string, rendered verbatim.
    Quoted(String),
    /// Values generated from `start...step...end`.
    Range(Vec<String>),
    /// Space-separated values. A single value is a constant parameter.
    List(Vec<String>),
}

impl ValueDomain {
    pub fn values(&self) -> &[String] {
        match self {
            ValueDomain::Quoted(value) => std::slice::from_ref(value),
            ValueDomain::Range(values) | ValueDomain::List(values) => values,
        }
    }

    pub fn cardinality(&self) -> usize {
        self.values().len()
    }
}

/// A template entry together with its expanded domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Position in document order across all sections.
    pub index: usize,
    pub section: String,
    pub key: String,
    pub domain: ValueDomain,
}

impl Parameter {
    pub fn cardinality(&self) -> usize {
        self.domain.cardinality()
    }

    /// Parameters with more than one candidate show up in directory names.
    pub fn is_varying(&self) -> bool {
        self.cardinality() > 1
    }

    /// Canonical boolean token for constant list values mentioning
    /// `true` or `false` (case-insensitive).
    pub fn boolean_token(&self) -> Option<&'static str> {
        match &self.domain {
            ValueDomain::List(values) if values.len() == 1 => {
                let lower = values[0].to_lowercase();
                if lower.contains("true") {
                    Some("true")
                } else if lower.contains("false") {
                    Some("false")
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Value written to the generated file for the given selection index.
    pub fn render(&self, selection: usize) -> &str {
        match &self.domain {
            ValueDomain::Quoted(value) => value,
            _ => match self.boolean_token() {
                Some(token) => token,
                None => &self.domain.values()[selection],
            },
        }
    }

    /// Selected candidate, as used in directory names.
    pub fn value(&self, selection: usize) -> &str {
        &self.domain.values()[selection]
    }
}

/// Ordered parameters of a template and the size of their Cartesian product.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    parameters: Vec<Parameter>,
    cardinalities: Vec<usize>,
    total: u64,
}

impl ParameterSet {
    /// Resolves every record of `template` into a [`Parameter`].
    ///
    /// # Errors
    /// * `Error::EmptyTemplate` if the template has no parameters
    /// * `Error::MalformedRange` if a range cannot be expanded
    /// * `Error::CombinationOverflow` if the product exceeds `u64::MAX`
    pub fn resolve(template: &Template) -> Result<Self> {
        if template.is_empty() {
            return Err(Error::EmptyTemplate);
        }

        let mut parameters = Vec::with_capacity(template.len());
        for (index, record) in template.records().enumerate() {
            let domain = resolve_value(record.key, record.value)?;
            debug!(
                "Parameter {} '{}' has {} value(s): {:?}",
                index,
                record.key,
                domain.cardinality(),
                domain.values()
            );
            parameters.push(Parameter {
                index,
                section: record.section.to_string(),
                key: record.key.to_string(),
                domain,
            });
        }

        let cardinalities: Vec<usize> = parameters.iter().map(Parameter::cardinality).collect();
        let total = total_combinations(&cardinalities)?;
        Ok(Self { parameters, cardinalities, total })
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn cardinalities(&self) -> &[usize] {
        &self.cardinalities
    }

    /// Product of all cardinalities.
    pub fn total_combinations(&self) -> u64 {
        self.total
    }

    /// Every combination, in increasing index order.
    pub fn combinations(&self) -> Combinations<'_> {
        Combinations::new(&self.cardinalities, self.total)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

/// Strips comment leftovers from a raw value: one trailing space, then one
/// trailing `&` marker, then one more trailing space.
pub fn clean_value(raw: &str) -> &str {
    let value = raw.strip_suffix(' ').unwrap_or(raw);
    let value = value.strip_suffix('&').unwrap_or(value);
    value.strip_suffix(' ').unwrap_or(value)
}

/// Classifies a raw template value and expands it into its domain.
pub fn resolve_value(key: &str, raw: &str) -> Result<ValueDomain> {
    let value = clean_value(raw);

    if value.starts_with('"') {
        return Ok(ValueDomain::Quoted(value.to_string()));
    }
    if value.contains("...") {
        return expand_range(key, value).map(ValueDomain::Range);
    }
    Ok(ValueDomain::List(value.split(' ').map(str::to_string).collect()))
}

fn is_close(a: f64, b: f64) -> bool {
    let tolerance = (RANGE_REL_TOLERANCE * a.abs().max(b.abs())).max(RANGE_ABS_TOLERANCE);
    (a - b).abs() <= tolerance
}

/// Expands `start...step...end` into `%g`-formatted values, end included.
pub fn expand_range(key: &str, value: &str) -> Result<Vec<String>> {
    let malformed = |reason: String| Error::MalformedRange {
        key: key.to_string(),
        value: value.to_string(),
        reason,
    };

    let parts: Vec<&str> = value.split("...").collect();
    if parts.len() != 3 {
        return Err(malformed(format!(
            "expected 'start...step...end', found {} component(s)",
            parts.len()
        )));
    }

    let mut bounds = [0.0f64; 3];
    for (slot, part) in bounds.iter_mut().zip(&parts) {
        let number: f64 = part
            .trim()
            .parse()
            .map_err(|_| malformed(format!("'{}' is not a number", part.trim())))?;
        if !number.is_finite() {
            return Err(malformed(format!("'{}' is not finite", part.trim())));
        }
        *slot = number;
    }
    let [start, step, end] = bounds;

    if step <= 0.0 {
        return Err(malformed("step must be positive".to_string()));
    }

    let mut values = Vec::new();
    let mut current = start;
    while current < end || is_close(current, end) {
        values.push(format_g(current));
        let next = current + step;
        if next == current {
            return Err(malformed("step is too small to advance".to_string()));
        }
        current = next;
    }

    if values.is_empty() {
        return Err(malformed("start is greater than end".to_string()));
    }
    Ok(values)
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Formats a float like C's `%g`: six significant digits, trailing zeros
/// removed, exponent form for exponents below -4 or from 6 up.
pub fn format_g(value: f64) -> String {
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let scientific = format!("{:.*e}", (RANGE_PRECISION - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= RANGE_PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (RANGE_PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}
