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

/*!
 * Anonymous recursion through the fixed-point (Y) combinator.
 *
 * ```
 * # use ycomb::{y, partial_factorial};
 * let factorial = y(partial_factorial::<u64>);
 * assert_eq!(factorial(9), 362880);
 * ```
 */

#[macro_use]
extern crate tracing;
extern crate num_integer;
extern crate num_traits;

#[cfg(test)]
extern crate num_bigint;

pub mod fix;
pub mod factorial;

// Re-exports

pub use fix::{y, y_compact, Func, SelfApply};
pub use factorial::{partial_factorial, Construction};
