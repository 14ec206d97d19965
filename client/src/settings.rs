//! Settings bag handed to the analyzer attachment operations.

use std::collections::HashMap;

use logic2_protocol::{
    analyzer_setting_value, high_level_analyzer_setting_value, AnalyzerSettingValue,
    HighLevelAnalyzerSettingValue,
};

/// One analyzer setting value. The application matches both the setting
/// name and the value kind against the analyzer's catalog entry; nothing is
/// checked on this side.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    String(String),
    Int(i64),
    Bool(bool),
    Float(f64),
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::String(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::String(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Int(value)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        SettingValue::Float(value)
    }
}

impl SettingValue {
    fn to_analyzer_wire(&self) -> AnalyzerSettingValue {
        use analyzer_setting_value::Value;
        let value = match self {
            SettingValue::String(x) => Value::StringValue(x.clone()),
            SettingValue::Int(x) => Value::Int64Value(*x),
            SettingValue::Bool(x) => Value::BoolValue(*x),
            SettingValue::Float(x) => Value::DoubleValue(*x),
        };
        AnalyzerSettingValue { value: Some(value) }
    }

    /// The high level analyzer wire form only carries strings and numbers,
    /// so integers and booleans go over as numbers.
    fn to_high_level_wire(&self) -> HighLevelAnalyzerSettingValue {
        use high_level_analyzer_setting_value::Value;
        let value = match self {
            SettingValue::String(x) => Value::StringValue(x.clone()),
            SettingValue::Int(x) => Value::NumberValue(*x as f64),
            SettingValue::Bool(x) => Value::NumberValue(u8::from(*x) as f64),
            SettingValue::Float(x) => Value::NumberValue(*x),
        };
        HighLevelAnalyzerSettingValue { value: Some(value) }
    }
}

/// Name-to-value map configuring an analyzer or a high level analyzer.
///
/// Names and values must match the settings the analyzer shows in the
/// application exactly; mismatches are reported by the application when the
/// analyzer is attached.
///
/// ```
/// use logic2_client::AnalyzerSettings;
///
/// let settings = AnalyzerSettings::new()
///     .with("Bit Rate (Bits/s)", 115_200_i64)
///     .with("Signal inversion", "Non Inverted");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyzerSettings {
    values: HashMap<String, SettingValue>,
}

impl AnalyzerSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a setting, replacing any previous value under the same name.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn to_wire(&self) -> HashMap<String, AnalyzerSettingValue> {
        self.values
            .iter()
            .map(|(name, value)| (name.clone(), value.to_analyzer_wire()))
            .collect()
    }

    pub(crate) fn to_high_level_wire(&self) -> HashMap<String, HighLevelAnalyzerSettingValue> {
        self.values
            .iter()
            .map(|(name, value)| (name.clone(), value.to_high_level_wire()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyzer_setting_value::Value as AnalyzerValue;
    use high_level_analyzer_setting_value::Value as HighLevelValue;

    #[test]
    fn each_primitive_maps_to_its_arm() {
        let settings = AnalyzerSettings::new()
            .with("s", "text")
            .with("i", 9600_i64)
            .with("b", true)
            .with("f", 0.5);
        let wire = settings.to_wire();
        assert_eq!(wire.len(), 4);
        assert_eq!(
            wire["s"].value,
            Some(AnalyzerValue::StringValue("text".to_string()))
        );
        assert_eq!(wire["i"].value, Some(AnalyzerValue::Int64Value(9600)));
        assert_eq!(wire["b"].value, Some(AnalyzerValue::BoolValue(true)));
        assert_eq!(wire["f"].value, Some(AnalyzerValue::DoubleValue(0.5)));
    }

    #[test]
    fn high_level_wire_sends_non_strings_as_numbers() {
        let settings = AnalyzerSettings::new()
            .with("s", "text")
            .with("i", 7_i64)
            .with("b", true)
            .with("f", 2.5);
        let wire = settings.to_high_level_wire();
        assert_eq!(
            wire["s"].value,
            Some(HighLevelValue::StringValue("text".to_string()))
        );
        assert_eq!(wire["i"].value, Some(HighLevelValue::NumberValue(7.0)));
        assert_eq!(wire["b"].value, Some(HighLevelValue::NumberValue(1.0)));
        assert_eq!(wire["f"].value, Some(HighLevelValue::NumberValue(2.5)));
    }

    #[test]
    fn later_values_replace_earlier_ones() {
        let settings = AnalyzerSettings::new().with("rate", 9600_i64).with("rate", 115_200_i64);
        let wire = settings.to_wire();
        assert_eq!(wire.len(), 1);
        assert_eq!(wire["rate"].value, Some(AnalyzerValue::Int64Value(115_200)));
    }
}
