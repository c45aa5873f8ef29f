use std::fmt;

use egui_wgpu::wgpu;
use winit::error::{EventLoopError, OsError};

#[derive(Debug)]
pub enum PlatformError {
    EventLoop(EventLoopError),
    Window(OsError),
    Surface(wgpu::CreateSurfaceError),
    Adapter(wgpu::RequestAdapterError),
    Device(wgpu::RequestDeviceError),
    /// The surface reports no texture format at all.
    NoSurfaceFormat,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::EventLoop(e) => write!(f, "event loop: {e}"),
            PlatformError::Window(e) => write!(f, "window creation failed: {e}"),
            PlatformError::Surface(e) => write!(f, "surface creation failed: {e}"),
            PlatformError::Adapter(e) => write!(f, "no suitable adapter: {e}"),
            PlatformError::Device(e) => write!(f, "device request failed: {e}"),
            PlatformError::NoSurfaceFormat => write!(f, "surface has no supported format"),
        }
    }
}

impl std::error::Error for PlatformError {}

impl From<EventLoopError> for PlatformError {
    fn from(e: EventLoopError) -> Self {
        PlatformError::EventLoop(e)
    }
}

impl From<OsError> for PlatformError {
    fn from(e: OsError) -> Self {
        PlatformError::Window(e)
    }
}

impl From<wgpu::CreateSurfaceError> for PlatformError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        PlatformError::Surface(e)
    }
}

impl From<wgpu::RequestAdapterError> for PlatformError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        PlatformError::Adapter(e)
    }
}

impl From<wgpu::RequestDeviceError> for PlatformError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        PlatformError::Device(e)
    }
}
