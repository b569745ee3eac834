#[macro_use] extern crate prettytable;
#[macro_use] extern crate lazy_static;
#[macro_use] extern crate log;

mod classification;
mod classifier;
mod error;
mod instructions;
mod pipeline;
mod register;
#[cfg_attr(not(feature = "trace_classification"), allow(dead_code))]
mod report;
mod source;
mod token;

use std::io;
use std::process;

fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

  #[cfg(feature = "trace_classification")]
  eprintln!("Classification Tracing ENABLED");

  let stdin = io::stdin();
  let stdout = io::stdout();

  if let Err(e) = pipeline::run(stdin.lock(), stdout.lock()) {
    error!("{}", e);
    process::exit(1);
  }
}
