// Application layer: wires CLI commands to the helpers.

pub mod runner;

pub use runner::execute;
