//! Export and save messages.

use crate::capture::LogicChannels;

/// Numeric radix used for analyzer fields where one applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum RadixType {
    Unspecified = 0,
    Binary = 1,
    Decimal = 2,
    Hexadecimal = 3,
    Ascii = 4,
}

/// Raw sample export in the application's CSV layout: all selected analog
/// channels combine into `analog.csv`, digital ones into `digital.csv`,
/// written into an existing directory.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExportRawDataCsvRequest {
    #[prost(uint64, tag = "1")]
    pub capture_id: u64,
    #[prost(string, tag = "2")]
    pub directory: ::prost::alloc::string::String,
    /// Empty selection exports every configured channel.
    #[prost(message, optional, tag = "3")]
    pub logic_channels: ::core::option::Option<LogicChannels>,
    /// Thins analog samples in the output; stored data is untouched.
    #[prost(uint64, tag = "4")]
    pub analog_downsample_ratio: u64,
    /// Wall clock timestamps instead of capture-relative ones.
    #[prost(bool, tag = "5")]
    pub iso8601_timestamp: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExportRawDataCsvReply {}

/// Raw sample export in the application's binary layout, one `.bin` file per
/// exported channel, written into an existing directory.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExportRawDataBinaryRequest {
    #[prost(uint64, tag = "1")]
    pub capture_id: u64,
    #[prost(string, tag = "2")]
    pub directory: ::prost::alloc::string::String,
    /// Empty selection exports every configured channel.
    #[prost(message, optional, tag = "3")]
    pub logic_channels: ::core::option::Option<LogicChannels>,
    #[prost(uint64, tag = "4")]
    pub analog_downsample_ratio: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExportRawDataBinaryReply {}

/// One analyzer taking part in a data table export, with the radix its
/// numeric fields are rendered in.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DataTableAnalyzerConfiguration {
    #[prost(uint64, tag = "1")]
    pub analyzer_id: u64,
    #[prost(enumeration = "RadixType", tag = "2")]
    pub radix_type: i32,
}

/// Row filter applied to the exported data table, in the search syntax of
/// the application's data table view.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DataTableFilter {
    #[prost(string, tag = "1")]
    pub query: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "2")]
    pub columns: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExportDataTableCsvRequest {
    #[prost(uint64, tag = "1")]
    pub capture_id: u64,
    #[prost(string, tag = "2")]
    pub filepath: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "3")]
    pub analyzers: ::prost::alloc::vec::Vec<DataTableAnalyzerConfiguration>,
    #[prost(bool, tag = "4")]
    pub iso8601_timestamp: bool,
    /// Column subset to export; empty exports every column.
    #[prost(string, repeated, tag = "5")]
    pub export_columns: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "6")]
    pub filter: ::core::option::Option<DataTableFilter>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExportDataTableCsvReply {}

/// Export of a single analyzer in its plugin's native format rather than the
/// data table layout.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LegacyExportAnalyzerRequest {
    #[prost(string, tag = "1")]
    pub filepath: ::prost::alloc::string::String,
    #[prost(uint64, tag = "2")]
    pub analyzer_id: u64,
    #[prost(enumeration = "RadixType", tag = "3")]
    pub radix_type: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LegacyExportAnalyzerReply {}
