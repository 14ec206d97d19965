//! Unary call stub for the `saleae.Manager` service.

use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::Channel;
use tonic::{Request, Response, Status};

use crate::analyzer::{
    AddAnalyzerReply, AddAnalyzerRequest, AddHighLevelAnalyzerReply, AddHighLevelAnalyzerRequest,
    RemoveAnalyzerReply, RemoveAnalyzerRequest, RemoveHighLevelAnalyzerReply,
    RemoveHighLevelAnalyzerRequest,
};
use crate::app::{GetAppInfoReply, GetAppInfoRequest, GetDevicesReply, GetDevicesRequest};
use crate::capture::{
    CloseCaptureReply, CloseCaptureRequest, LoadCaptureReply, LoadCaptureRequest,
    SaveCaptureReply, SaveCaptureRequest, StartCaptureReply, StartCaptureRequest,
    StopCaptureReply, StopCaptureRequest, WaitCaptureReply, WaitCaptureRequest,
};
use crate::export::{
    ExportDataTableCsvReply, ExportDataTableCsvRequest, ExportRawDataBinaryReply,
    ExportRawDataBinaryRequest, ExportRawDataCsvReply, ExportRawDataCsvRequest,
    LegacyExportAnalyzerReply, LegacyExportAnalyzerRequest,
};

/// Client stub for the `saleae.Manager` service.
///
/// Cloning is cheap and clones share the underlying channel, so one stub per
/// in-flight call is the intended usage. Every method is a single unary
/// round-trip; no call is retried.
#[derive(Debug, Clone)]
pub struct ManagerStub {
    inner: tonic::client::Grpc<Channel>,
}

impl ManagerStub {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    async fn unary<Req, Rep>(&mut self, path: &'static str, request: Req) -> Result<Rep, Status>
    where
        Req: prost::Message + 'static,
        Rep: prost::Message + Default + 'static,
    {
        self.inner
            .ready()
            .await
            .map_err(|e| Status::unavailable(format!("channel not ready: {}", e)))?;
        let codec: ProstCodec<Req, Rep> = ProstCodec::default();
        self.inner
            .unary(
                Request::new(request),
                PathAndQuery::from_static(path),
                codec,
            )
            .await
            .map(Response::into_inner)
    }

    pub async fn get_app_info(
        &mut self,
        request: GetAppInfoRequest,
    ) -> Result<GetAppInfoReply, Status> {
        self.unary("/saleae.Manager/GetAppInfo", request).await
    }

    pub async fn get_devices(
        &mut self,
        request: GetDevicesRequest,
    ) -> Result<GetDevicesReply, Status> {
        self.unary("/saleae.Manager/GetDevices", request).await
    }

    pub async fn start_capture(
        &mut self,
        request: StartCaptureRequest,
    ) -> Result<StartCaptureReply, Status> {
        self.unary("/saleae.Manager/StartCapture", request).await
    }

    pub async fn stop_capture(
        &mut self,
        request: StopCaptureRequest,
    ) -> Result<StopCaptureReply, Status> {
        self.unary("/saleae.Manager/StopCapture", request).await
    }

    pub async fn wait_capture(
        &mut self,
        request: WaitCaptureRequest,
    ) -> Result<WaitCaptureReply, Status> {
        self.unary("/saleae.Manager/WaitCapture", request).await
    }

    pub async fn load_capture(
        &mut self,
        request: LoadCaptureRequest,
    ) -> Result<LoadCaptureReply, Status> {
        self.unary("/saleae.Manager/LoadCapture", request).await
    }

    pub async fn save_capture(
        &mut self,
        request: SaveCaptureRequest,
    ) -> Result<SaveCaptureReply, Status> {
        self.unary("/saleae.Manager/SaveCapture", request).await
    }

    pub async fn close_capture(
        &mut self,
        request: CloseCaptureRequest,
    ) -> Result<CloseCaptureReply, Status> {
        self.unary("/saleae.Manager/CloseCapture", request).await
    }

    pub async fn add_analyzer(
        &mut self,
        request: AddAnalyzerRequest,
    ) -> Result<AddAnalyzerReply, Status> {
        self.unary("/saleae.Manager/AddAnalyzer", request).await
    }

    pub async fn remove_analyzer(
        &mut self,
        request: RemoveAnalyzerRequest,
    ) -> Result<RemoveAnalyzerReply, Status> {
        self.unary("/saleae.Manager/RemoveAnalyzer", request).await
    }

    pub async fn add_high_level_analyzer(
        &mut self,
        request: AddHighLevelAnalyzerRequest,
    ) -> Result<AddHighLevelAnalyzerReply, Status> {
        self.unary("/saleae.Manager/AddHighLevelAnalyzer", request)
            .await
    }

    pub async fn remove_high_level_analyzer(
        &mut self,
        request: RemoveHighLevelAnalyzerRequest,
    ) -> Result<RemoveHighLevelAnalyzerReply, Status> {
        self.unary("/saleae.Manager/RemoveHighLevelAnalyzer", request)
            .await
    }

    pub async fn export_raw_data_csv(
        &mut self,
        request: ExportRawDataCsvRequest,
    ) -> Result<ExportRawDataCsvReply, Status> {
        self.unary("/saleae.Manager/ExportRawDataCsv", request).await
    }

    pub async fn export_raw_data_binary(
        &mut self,
        request: ExportRawDataBinaryRequest,
    ) -> Result<ExportRawDataBinaryReply, Status> {
        self.unary("/saleae.Manager/ExportRawDataBinary", request)
            .await
    }

    pub async fn export_data_table_csv(
        &mut self,
        request: ExportDataTableCsvRequest,
    ) -> Result<ExportDataTableCsvReply, Status> {
        self.unary("/saleae.Manager/ExportDataTableCsv", request)
            .await
    }

    pub async fn legacy_export_analyzer(
        &mut self,
        request: LegacyExportAnalyzerRequest,
    ) -> Result<LegacyExportAnalyzerReply, Status> {
        self.unary("/saleae.Manager/LegacyExportAnalyzer", request)
            .await
    }
}
