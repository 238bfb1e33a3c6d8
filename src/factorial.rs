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
 * Factorial, three ways.
 *
 * [`partial_factorial`](fn.partial_factorial.html) is the one recursive step
 * of factorial, with the recursive call abstracted out into a parameter.
 * Tying the knot is left to a fixed-point combinator:
 *
 * - [`named`](fn.named.html) uses [`fix::y`](../fix/fn.y.html),
 * - [`anonymous`](fn.anonymous.html) writes both the combinator and the step
 *   inline as a single expression,
 * - [`compact`](fn.compact.html) uses [`fix::y_compact`](../fix/fn.y_compact.html).
 *
 * The input domain is the non-negative integers. The `u32` entry points and
 * the `Unsigned` bound on [`factorial`](fn.factorial.html) keep negative
 * numbers out at the type level:
 *
 * ```compile_fail
 * # use ycomb::factorial::factorial;
 * let fact = factorial::<i64>();
 * ```
 *
 * ```compile_fail
 * # use ycomb::factorial::named;
 * named(-1);
 * ```
 *
 * Fixed-width results overflow past `20!` for `u64`; use an
 * arbitrary-precision type such as `num_bigint::BigUint` for larger inputs.
 */

use std::fmt;
use std::rc::Rc;

use num_integer::Integer;
use num_traits::Unsigned;

use fix::{self, Func, SelfApply};

/// The argument the demonstration evaluates, `9! = 362880`.
pub const DEMO_ARGUMENT: u32 = 9;

/**
 * One step of factorial: `a -> if a == 0 { 1 } else { a * slf(a - 1) }`.
 *
 * `slf` stands in for factorial itself. The argument must be a non-negative
 * integer; a negative argument of a signed type never reaches the base case
 * and recurses until the stack is exhausted.
 */
pub fn partial_factorial<'a, T>(slf: Func<'a, T, T>) -> Func<'a, T, T>
    where T: Integer + Clone + 'a
{
    Rc::new(move |a: T| {
        if a.is_zero() {
            T::one()
        } else {
            let pred = a.clone() - T::one();
            a * slf(pred)
        }
    })
}

/**
 * Factorial over any unsigned integer type, as `y(partial_factorial)`.
 *
 * The returned function can be called any number of times.
 *
 * ```
 * # extern crate num_bigint;
 * # extern crate ycomb;
 * # use num_bigint::BigUint;
 * # use ycomb::factorial::factorial;
 * # fn main() {
 * let fact = factorial::<BigUint>();
 * let expected: BigUint = "30414093201713378043612608166064768844377641568960512000000000000"
 *     .parse()
 *     .unwrap();
 * assert_eq!(fact(BigUint::from(50u32)), expected);
 * # }
 * ```
 */
pub fn factorial<'a, T>() -> Func<'a, T, T>
    where T: Integer + Unsigned + Clone + 'a
{
    fix::y(partial_factorial::<T>)
}

/// `n!` through the named combinator and the named generator.
pub fn named(n: u32) -> u64 {
    factorial::<u64>()(u64::from(n))
}

/**
 * `n!` without naming the combinator or the generator.
 *
 * Everything is one nested expression: a closure taking the generator
 * builds `g(g)` from two inline copies of `g`, it is applied to an inline
 * factorial step, and the result is applied to `n`.
 */
pub fn anonymous(n: u32) -> u64 {
    type Fact = Func<'static, u64, u64>;
    type Step = Rc<dyn Fn(Fact) -> Fact>;

    (|f: Step| {
        let (f1, f2) = (f.clone(), f);
        SelfApply::new(move |x: SelfApply<'static, u64, u64>| {
            let f = f1.clone();
            Rc::new(move |a: u64| f(x.apply_self())(a)) as Fact
        }).apply(SelfApply::new(move |x: SelfApply<'static, u64, u64>| {
            let f = f2.clone();
            Rc::new(move |a: u64| f(x.apply_self())(a)) as Fact
        }))
    })(Rc::new(|slf: Fact| {
        Rc::new(move |a: u64| if a == 0 { 1 } else { a * slf(a - 1) }) as Fact
    }) as Step)(u64::from(n))
}

/// `n!` through the compact combinator.
pub fn compact(n: u32) -> u64 {
    fix::y_compact(partial_factorial::<u64>)(u64::from(n))
}

/// The three ways of building factorial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Construction {
    Named,
    Anonymous,
    Compact,
}

impl Construction {
    /// Every construction, in the order the demonstration prints them.
    pub const ALL: [Construction; 3] = [
        Construction::Named,
        Construction::Anonymous,
        Construction::Compact,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Construction::Named => "named",
            Construction::Anonymous => "anonymous",
            Construction::Compact => "compact",
        }
    }

    /// Computes `n!` using this construction.
    pub fn eval(self, n: u32) -> u64 {
        match self {
            Construction::Named => named(n),
            Construction::Anonymous => anonymous(n),
            Construction::Compact => compact(n),
        }
    }
}

impl fmt::Display for Construction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn known_values() {
        let cases = [
            (0u32, 1u64),
            (1,    1),
            (5,    120),
            (9,    362880),
            (12,   479001600),
            (20,   2432902008176640000),
        ];

        for &(n, expected) in cases.iter() {
            for &c in Construction::ALL.iter() {
                assert_eq!(c.eval(n), expected, "{} {}!", c, n);
            }
        }
    }

    #[test]
    fn demo_argument() {
        assert_eq!(named(DEMO_ARGUMENT), 362880);
        assert_eq!(anonymous(DEMO_ARGUMENT), 362880);
        assert_eq!(compact(DEMO_ARGUMENT), 362880);
    }

    #[test]
    fn constructions_agree() {
        for n in 0..21 {
            let expected = named(n);
            assert_eq!(anonymous(n), expected, "anonymous {}!", n);
            assert_eq!(compact(n), expected, "compact {}!", n);
        }
    }

    #[test]
    fn zero_is_base_case() {
        let calls = ::std::cell::Cell::new(0);
        let fact = fix::y::<u32, u32, _>(|slf| {
            calls.set(calls.get() + 1);
            partial_factorial(slf)
        });
        assert_eq!(fact(0), 1);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn repeated_calls() {
        for &c in Construction::ALL.iter() {
            let first = c.eval(9);
            for _ in 0..10 {
                assert_eq!(c.eval(9), first);
            }
        }

        let fact = factorial::<u64>();
        let results: Vec<u64> = (0..5).map(|_| fact(7)).collect();
        assert_eq!(results, vec![5040; 5]);
    }

    #[test]
    fn signed_in_domain() {
        let fact = fix::y(partial_factorial::<i64>);
        assert_eq!(fact(0), 1);
        assert_eq!(fact(10), 3628800);
    }

    #[test]
    fn big_factorial() {
        let fact = factorial::<BigUint>();
        let expected: BigUint = "15511210043330985984000000".parse().unwrap();
        assert_eq!(fact(BigUint::from(25u32)), expected);

        let product = (1..101u32).fold(BigUint::from(1u32), |acc, i| acc * BigUint::from(i));
        assert_eq!(fact(BigUint::from(100u32)), product);
    }

    #[test]
    fn construction_names() {
        let names: Vec<String> = Construction::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(names, vec!["named", "anonymous", "compact"]);
        assert_eq!(Construction::Compact.name(), "compact");
    }
}
