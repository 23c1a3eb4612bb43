//! Agent adapters implementing the [`Agent`](ensemble_application::Agent) port

mod echo;
mod registry;
mod settings;

pub use echo::EchoAgent;
pub use registry::AgentRegistry;
pub use settings::SettingsError;
