use std::sync::Arc;
use std::sync::mpsc::Sender;

use bus::{CoreCommand, CoreEvent};
use egui::Context;

/// Asks the platform for another frame. Callable from any thread.
pub type RepaintHandle = Arc<dyn Fn() + Send + Sync>;

pub trait UiApp {
    fn ui(&mut self, ctx: &Context);
    fn set_bus_sender(&mut self, tx: Sender<CoreCommand>);
    fn on_core_event(&mut self, evt: CoreEvent);
    fn set_repaint_handle(&mut self, handle: RepaintHandle);
}
