pub mod code_writer;
pub mod request_reader;
