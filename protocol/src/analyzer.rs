//! Analyzer and high level analyzer attachment messages.

use std::collections::HashMap;

/// One analyzer setting. The key it is stored under and the active value
/// arm must match what the analyzer's catalog entry expects; the server is
/// the only place that is checked.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AnalyzerSettingValue {
    #[prost(oneof = "analyzer_setting_value::Value", tags = "1, 2, 3, 4")]
    pub value: ::core::option::Option<analyzer_setting_value::Value>,
}

pub mod analyzer_setting_value {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Value {
        #[prost(string, tag = "1")]
        StringValue(::prost::alloc::string::String),
        #[prost(int64, tag = "2")]
        Int64Value(i64),
        #[prost(bool, tag = "3")]
        BoolValue(bool),
        #[prost(double, tag = "4")]
        DoubleValue(f64),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddAnalyzerRequest {
    #[prost(uint64, tag = "1")]
    pub capture_id: u64,
    /// Exact name as listed in the application's analyzer catalog.
    #[prost(string, tag = "2")]
    pub analyzer_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub analyzer_label: ::prost::alloc::string::String,
    #[prost(map = "string, message", tag = "4")]
    pub settings: HashMap<::prost::alloc::string::String, AnalyzerSettingValue>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddAnalyzerReply {
    #[prost(uint64, tag = "1")]
    pub analyzer_id: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoveAnalyzerRequest {
    #[prost(uint64, tag = "1")]
    pub analyzer_id: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoveAnalyzerReply {}

/// High level analyzer settings carry only strings and numbers.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HighLevelAnalyzerSettingValue {
    #[prost(oneof = "high_level_analyzer_setting_value::Value", tags = "1, 2")]
    pub value: ::core::option::Option<high_level_analyzer_setting_value::Value>,
}

pub mod high_level_analyzer_setting_value {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Value {
        #[prost(string, tag = "1")]
        StringValue(::prost::alloc::string::String),
        #[prost(double, tag = "2")]
        NumberValue(f64),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddHighLevelAnalyzerRequest {
    #[prost(uint64, tag = "1")]
    pub capture_id: u64,
    /// Directory of the extension the high level analyzer ships in.
    #[prost(string, tag = "2")]
    pub extension_directory: ::prost::alloc::string::String,
    /// Name as declared in the extension manifest.
    #[prost(string, tag = "3")]
    pub hla_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub hla_label: ::prost::alloc::string::String,
    /// Analyzer whose output feeds this high level analyzer.
    #[prost(uint64, tag = "5")]
    pub input_analyzer_id: u64,
    #[prost(map = "string, message", tag = "6")]
    pub settings: HashMap<::prost::alloc::string::String, HighLevelAnalyzerSettingValue>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddHighLevelAnalyzerReply {
    #[prost(uint64, tag = "1")]
    pub analyzer_id: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoveHighLevelAnalyzerRequest {
    #[prost(uint64, tag = "1")]
    pub capture_id: u64,
    #[prost(uint64, tag = "2")]
    pub analyzer_id: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoveHighLevelAnalyzerReply {}
