mod common;
mod config_file;
