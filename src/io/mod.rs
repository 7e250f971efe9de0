pub mod route_reader;
pub use route_reader::*;
pub mod route_writer;
pub use route_writer::*;
