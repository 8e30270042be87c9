pub mod console_interface;
pub mod core;
pub mod state_graph;

#[cfg(test)]
mod test;
