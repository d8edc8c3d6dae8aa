pub mod logging;
pub mod machine_output;
pub mod paths;
pub mod probe;
