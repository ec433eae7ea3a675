//! Application layer: dispatcher, command emitter, dashboard app and UI

pub mod app;
pub mod command;
pub mod context;
pub mod dispatcher;
pub mod ui;

pub use app::{App, Focus};
pub use command::{CommandEmitter, CommandSink};
pub use context::DashboardContext;
pub use dispatcher::{DispatchOutcome, DispatchStats, EventDispatcher, Route};
