use crate::server::data::command_file::CommandFileRepository;
use test_utils::{builder::TestBuilder, error::TestError, fixture::CommandSource};

mod command_file;
