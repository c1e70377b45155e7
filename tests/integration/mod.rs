//! Integration tests for the restful CLI

mod cli_end_to_end;
mod config_layers;
