#![forbid(unsafe_code)]

//! Probabilistic prime search over unbounded integers.
//!
//! `next_prime` / `prev_prime` walk odd candidates in the given direction and
//! test each with trial division over a small-prime table followed by 25
//! rounds of Miller-Rabin with uniformly random bases, giving a
//! false-positive probability of at most 4^-25 per accepted candidate.
//! There is no upper bound on the search; termination is probabilistic but
//! overwhelming at the prime densities involved, and no failure mode is
//! exposed to callers.

use lazy_static::lazy_static;
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Miller-Rabin round count. Must never be lowered.
const MR_ROUNDS: u32 = 25;

lazy_static! {
    /// Trial-division primes filtering most composites before Miller-Rabin.
    static ref SMALL_PRIMES: Vec<BigUint> = [
        3u32, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61,
        67, 71, 73, 79, 83, 89, 97,
    ]
    .iter()
    .map(|&p| BigUint::from(p))
    .collect();
}

/// Smallest probable prime strictly greater than `n`.
#[must_use]
pub fn next_prime(n: &BigUint) -> BigUint {
    let mut p = if n.is_even() { n + 1u32 } else { n + 2u32 };
    while !is_probable_prime(&p) {
        p += 2u32;
    }
    p
}

/// Largest probable prime strictly smaller than `n`. Returns 2 for `n <= 3`.
#[must_use]
pub fn prev_prime(n: &BigUint) -> BigUint {
    if *n <= BigUint::from(3u32) {
        return BigUint::from(2u32);
    }
    let mut p = if n.is_even() { n - 1u32 } else { n - 2u32 };
    while !is_probable_prime(&p) {
        p -= 2u32;
    }
    p
}

/// Trial division fast path, then random-base Miller-Rabin.
#[must_use]
pub fn is_probable_prime(n: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    if *n < two {
        return false;
    }
    if *n == two {
        return true;
    }
    if n.is_even() {
        return false;
    }
    for p in SMALL_PRIMES.iter() {
        if (n % p).is_zero() {
            return n == p;
        }
    }
    miller_rabin(n, MR_ROUNDS)
}

fn miller_rabin(n: &BigUint, rounds: u32) -> bool {
    let one = BigUint::one();
    let two = BigUint::from(2u32);
    let nm1 = n - &one;

    // n - 1 = d * 2^s with d odd
    let mut d = nm1.clone();
    let mut s = 0u32;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    let mut rng = rand::thread_rng();
    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &nm1);
        let mut x = a.modpow(&d, n);
        if x == one || x == nm1 {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == nm1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
