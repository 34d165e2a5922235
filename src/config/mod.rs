mod parser;

pub use parser::IconConfig;
pub(crate) use parser::{DEFAULT_EXTENSIONS, parse_config};
