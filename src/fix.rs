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
 * Fixed-point combinators.
 *
 * Both combinators here satisfy `y(f)(a) = f(y(f))(a)` without any function
 * referring to itself by name, and without a mutable cell holding "the
 * function itself". The recursion comes entirely from self-application:
 * a closure that is handed itself as an argument.
 *
 * Rust cannot give `x(x)` a finite type directly, so the argument is wrapped
 * in [`SelfApply`](struct.SelfApply.html), a newtype around "a function that
 * accepts a `SelfApply`". That type is the only recursive thing in this
 * module.
 *
 * ## Termination
 *
 * The self-application is only unfolded when the resulting function is
 * called, so building a fixed point never loops. A generator that never
 * reaches a base case recurses until the thread's stack is exhausted, which
 * aborts the process. Guaranteeing termination (for example by a strictly
 * decreasing, non-negative argument) is the caller's job.
 */

use std::fmt;
use std::rc::Rc;

/// A shared, immutable function value `A -> R`.
pub type Func<'a, A, R> = Rc<dyn Fn(A) -> R + 'a>;

/**
 * A function that expects to be applied to itself.
 *
 * Applying a `SelfApply` to a copy of itself (`x(x)`) produces the
 * function being defined. Cloning only bumps a reference count.
 */
pub struct SelfApply<'a, A, R>(Rc<dyn Fn(SelfApply<'a, A, R>) -> Func<'a, A, R> + 'a>);

impl<'a, A, R> SelfApply<'a, A, R> {
    pub fn new<G>(g: G) -> SelfApply<'a, A, R>
        where G: Fn(SelfApply<'a, A, R>) -> Func<'a, A, R> + 'a
    {
        SelfApply(Rc::new(g))
    }

    /// `self(x)`
    #[inline]
    pub fn apply(&self, x: SelfApply<'a, A, R>) -> Func<'a, A, R> {
        (self.0)(x)
    }

    /// `x(x)`
    #[inline]
    pub fn apply_self(&self) -> Func<'a, A, R> {
        self.apply(self.clone())
    }
}

impl<'a, A, R> Clone for SelfApply<'a, A, R> {
    fn clone(&self) -> SelfApply<'a, A, R> {
        SelfApply(self.0.clone())
    }
}

impl<'a, A, R> fmt::Debug for SelfApply<'a, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("SelfApply(..)")
    }
}

/**
 * The fixed-point combinator.
 *
 * Given a generator `f` of shape `self_ref -> arg -> result`, returns a
 * function `arg -> result` that behaves as if `self_ref` were the returned
 * function itself.
 *
 * Built as `g(g)` where `g(x) = a -> f(x(x))(a)`. Each call of the result
 * with an argument invokes `f` exactly once; `f` is never invoked while the
 * fixed point is being built.
 *
 * ```
 * # use ycomb::fix::y;
 * # use ycomb::factorial::partial_factorial;
 * let fact = y(partial_factorial::<u64>);
 * assert_eq!(fact(9), 362880);
 * ```
 *
 * Any generator works, not just factorial:
 *
 * ```
 * # use std::rc::Rc;
 * # use ycomb::fix::{y, Func};
 * fn fib<'a>(slf: Func<'a, u64, u64>) -> Func<'a, u64, u64> {
 *     Rc::new(move |n: u64| if n < 2 { n } else { slf(n - 1) + slf(n - 2) })
 * }
 *
 * assert_eq!(y(fib)(20), 6765);
 * ```
 */
pub fn y<'a, A, R, F>(f: F) -> Func<'a, A, R>
    where A: 'a, R: 'a,
          F: Fn(Func<'a, A, R>) -> Func<'a, A, R> + 'a
{
    trace!(variant = "named", "constructing fixed point");

    let f = Rc::new(f);
    let g = |f: Rc<F>| SelfApply::new(move |x: SelfApply<'a, A, R>| {
        let f = f.clone();
        let unfolded: Func<'a, A, R> = Rc::new(move |a: A| (*f)(x.apply_self())(a));
        unfolded
    });

    g(f.clone()).apply(g(f))
}

/**
 * A shorter fixed-point combinator, `f -> (x -> x(x))(x -> a -> f(x(x))(a))`.
 *
 * Instead of building `g` twice and applying one copy to the other, the
 * single `g` is applied to itself directly. Results are identical to
 * [`y`](fn.y.html) for every terminating generator; only the number of
 * intermediate closures differs.
 *
 * ```
 * # use ycomb::fix::{y, y_compact};
 * # use ycomb::factorial::partial_factorial;
 * let fact = y_compact(partial_factorial::<u64>);
 * assert_eq!(fact(9), y(partial_factorial::<u64>)(9));
 * ```
 */
pub fn y_compact<'a, A, R, F>(f: F) -> Func<'a, A, R>
    where A: 'a, R: 'a,
          F: Fn(Func<'a, A, R>) -> Func<'a, A, R> + 'a
{
    trace!(variant = "compact", "constructing fixed point");

    let f = Rc::new(f);
    SelfApply::new(move |x: SelfApply<'a, A, R>| {
        let f = f.clone();
        let unfolded: Func<'a, A, R> = Rc::new(move |a: A| (*f)(x.apply_self())(a));
        unfolded
    }).apply_self()
}
