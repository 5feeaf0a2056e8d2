mod event;
mod handler;
mod registry;
mod signal;

pub use event::{EventKind, HostEvent};
pub use handler::SignalHandler;
pub use registry::{EventHandlerFn, EventRegistry, HostContext};
pub use signal::PluginSignal;
