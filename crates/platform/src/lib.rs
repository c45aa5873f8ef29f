//! Desktop window host: runs a [`UiApp`] inside a winit window rendered by
//! egui-wgpu, and pumps bus events from the runtimes into it.

use std::sync::Arc;
use std::{thread, time::Duration};

use app_api::{RepaintHandle, UiApp};
use bus::{Bus, CoreEvent};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy},
    window::{Window, WindowId},
};

mod error;
mod renderer;

pub use error::PlatformError;
pub use renderer::Renderer;

const FRAME: Duration = Duration::from_millis(16); // ~60Hz

enum UserEvent {
    Tick,
    Repaint,
    Core(CoreEvent),
}

/// Opens the window and blocks until it is closed.
pub fn run(mut app: Box<dyn UiApp>, bus: Bus, title: &str) -> Result<(), PlatformError> {
    let event_loop = EventLoop::<UserEvent>::with_user_event().build()?;
    let proxy = event_loop.create_proxy();

    let Bus { cmd_tx, evt_rx, .. } = bus;
    app.set_bus_sender(cmd_tx);
    let repaint_proxy = proxy.clone();
    let repaint: RepaintHandle = Arc::new(move || {
        let _ = repaint_proxy.send_event(UserEvent::Repaint);
    });
    app.set_repaint_handle(repaint);

    // runtime events -> UI thread
    let events_proxy = proxy.clone();
    thread::spawn(move || {
        while let Ok(evt) = evt_rx.recv() {
            if events_proxy.send_event(UserEvent::Core(evt)).is_err() {
                break;
            }
        }
    });

    let mut host = PlatformApp {
        app,
        title: title.to_string(),
        window: None,
        renderer: None,
        proxy: Some(proxy),
        ticker_started: false,
        error: None,
    };
    event_loop.run_app(&mut host)?;

    match host.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct PlatformApp {
    app: Box<dyn UiApp>,
    title: String,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    proxy: Option<EventLoopProxy<UserEvent>>,
    ticker_started: bool,
    error: Option<PlatformError>,
}

impl PlatformApp {
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PlatformError> {
        if self.window.is_none() {
            let window = event_loop
                .create_window(Window::default_attributes().with_title(self.title.as_str()))?;
            self.window = Some(Arc::new(window));
        }
        if self.renderer.is_none() {
            if let Some(window) = &self.window {
                self.renderer = Some(Renderer::new(Arc::clone(window))?);
            }
        }
        Ok(())
    }

    fn start_ticker(&mut self) {
        if self.ticker_started {
            return;
        }
        self.ticker_started = true;
        if let Some(proxy) = self.proxy.take() {
            thread::spawn(move || {
                loop {
                    if proxy.send_event(UserEvent::Tick).is_err() {
                        break;
                    }
                    thread::sleep(FRAME);
                }
            });
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler<UserEvent> for PlatformApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(e) = self.init(event_loop) {
            log::warn!(target: "platform", "startup failed: {e}");
            self.error = Some(e);
            event_loop.exit();
            return;
        }
        self.start_ticker();
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::Tick | UserEvent::Repaint => self.request_redraw(),
            UserEvent::Core(evt) => {
                self.app.on_core_event(evt);
                self.request_redraw();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let (Some(window), Some(renderer)) = (self.window.as_ref(), self.renderer.as_mut()) else {
            return;
        };
        renderer.on_window_event(window, &event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(new_size) => renderer.resize(new_size),
            WindowEvent::RedrawRequested => {
                let app = &mut self.app;
                renderer.render(window, |ctx| app.ui(ctx));
            }
            _ => {}
        }
    }
}
