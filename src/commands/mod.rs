pub mod check;
pub mod config;
pub mod context;
pub mod fix;
pub mod guidelines;
pub mod init;

pub use check::run_check;
pub use config::run_config;
pub use context::{FileReader, RealFileReader};
pub use fix::run_fix;
pub use guidelines::run_guidelines;
pub use init::{generate_config_template, run_init, run_init_impl};
