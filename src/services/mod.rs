pub mod renderer;

pub use renderer::{PressJob, PressService};
