//! Host setup errors
//!
//! The simulation itself cannot fail. These cover acquiring the page
//! elements and the GPU before the first frame.

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element not found: #{0}")]
    MissingElement(String),
    #[error("element #{0} is not a canvas")]
    NotACanvas(String),
    #[error("surface creation failed: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("device request failed: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}
