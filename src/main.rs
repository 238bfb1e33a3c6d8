// Copyright 2026 The Ycomb Developers
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

#[macro_use]
extern crate tracing;
extern crate tracing_subscriber;
extern crate ycomb;

use std::io::{self, Write};

use tracing_subscriber::EnvFilter;

use ycomb::factorial::DEMO_ARGUMENT;
use ycomb::Construction;

fn main() -> io::Result<()> {
    // Logging is opt-in and goes to stderr; stdout carries only the results.
    if let Ok(filter) = EnvFilter::try_from_env("YCOMB_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .with_writer(io::stderr)
            .init();
        debug!("tracing initialized");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for &construction in Construction::ALL.iter() {
        let result = construction.eval(DEMO_ARGUMENT);
        debug!(construction = construction.name(), n = DEMO_ARGUMENT, result = result, "evaluated factorial");
        writeln!(out, "{}", result)?;
    }

    out.flush()
}
