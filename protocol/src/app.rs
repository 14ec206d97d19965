//! Application identity and device enumeration messages.

/// Version triple reported by the application for its automation API.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Version {
    #[prost(uint32, tag = "1")]
    pub major: u32,
    #[prost(uint32, tag = "2")]
    pub minor: u32,
    #[prost(uint32, tag = "3")]
    pub patch: u32,
}

/// Identity of the running application instance.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AppInfo {
    #[prost(message, optional, tag = "1")]
    pub api_version: ::core::option::Option<Version>,
    #[prost(string, tag = "2")]
    pub application_version: ::prost::alloc::string::String,
    /// Process id of the application instance that owns the RPC endpoint.
    #[prost(uint64, tag = "3")]
    pub launch_pid: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAppInfoRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAppInfoReply {
    #[prost(message, optional, tag = "1")]
    pub app_info: ::core::option::Option<AppInfo>,
}

/// Hardware families distinguished by the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DeviceType {
    Unknown = 0,
    Logic = 1,
    Logic4 = 2,
    Logic8 = 3,
    Logic16 = 4,
    LogicPro8 = 5,
    LogicPro16 = 6,
}

/// Snapshot of one attached (or simulated) device.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Device {
    #[prost(string, tag = "1")]
    pub device_id: ::prost::alloc::string::String,
    #[prost(enumeration = "DeviceType", tag = "2")]
    pub device_type: i32,
    #[prost(bool, tag = "3")]
    pub is_simulation: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetDevicesRequest {
    #[prost(bool, tag = "1")]
    pub include_simulation_devices: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetDevicesReply {
    #[prost(message, repeated, tag = "1")]
    pub devices: ::prost::alloc::vec::Vec<Device>,
}
