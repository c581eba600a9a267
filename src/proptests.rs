//! Property-based tests across fractions, decomposition, convergents and partitions.

#[cfg(test)]
mod tests {
    use num_integer::Integer;
    use proptest::prelude::*;

    use crate::{
        decompose, partitions, ContinuedFraction, Error, Fraction, InfiniteContinuedFraction,
    };

    // Strategy for generating non-zero denominators
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-100_000i64..=-1i64), (1i64..=100_000i64)]
    }

    // Strategy biased towards the edges of the i64 range
    fn edge_int() -> impl Strategy<Value = i64> {
        prop_oneof![
            Just(i64::MIN),
            Just(i64::MIN + 1),
            Just(i64::MAX),
            Just(-1i64),
            Just(0i64),
            Just(1i64),
            any::<i64>(),
            -100_000i64..100_000,
        ]
    }

    proptest! {
        #[test]
        fn reduce_gives_coprime(n in -100_000i64..100_000, d in non_zero_int()) {
            let mut f = Fraction::new(n, d).unwrap();
            f.reduce().unwrap();
            prop_assert_eq!(f.gcd(), Ok(1));
        }

        #[test]
        fn reduce_keeps_value(n in edge_int(), d in edge_int()) {
            prop_assume!(d != 0);
            let f = match Fraction::new(n, d) {
                Ok(f) => f,
                Err(e) => {
                    prop_assert_eq!((n, d, e), (i64::MIN, -1, Error::Overflow));
                    return Ok(());
                }
            };

            match f.clone().reduced() {
                Ok(r) => {
                    prop_assert_eq!(r.gcd(), Ok(1));
                    let cross = |a: &i64, b: &i64| *a as i128 * *b as i128;
                    prop_assert_eq!(cross(f.numer(), r.denom()), cross(r.numer(), f.denom()));
                    prop_assert_eq!(f.integer_part(), r.integer_part());
                }
                // gcd is 2^63
                Err(e) => {
                    prop_assert_eq!(e, Error::Overflow);
                    prop_assert!(n == 0 || n == i64::MIN);
                    prop_assert_eq!(d, i64::MIN);
                }
            }
        }

        #[test]
        fn reduce_is_idempotent(n in edge_int(), d in edge_int()) {
            prop_assume!(d != 0);
            if let Ok(once) = Fraction::new(n, d).and_then(Fraction::reduced) {
                let twice = once.clone().reduced().unwrap();
                prop_assert_eq!(once, twice);
            }
        }

        #[test]
        fn convergents_reproduce_rational(n in -1_000_000i64..1_000_000, d in 2i64..1_000_000) {
            // lowest terms with d >= 2 always gives at least two terms
            let g = n.gcd(&d);
            prop_assume!(d / g >= 2);
            let (n, d) = (n / g, d / g);

            let last = decompose(n, d).unwrap().convergents().last();
            prop_assert_eq!(last, Some((n, d)));
        }

        #[test]
        fn convergents_are_coprime(n in 1u64..1_000_000, d in 2u64..1_000_000) {
            let cf: ContinuedFraction<u64> = decompose(n, d).unwrap().collect();
            for (h, k) in cf.convergents() {
                prop_assert_eq!(h.gcd(&k), 1);
            }
        }

        #[test]
        fn recurring_stream_stops_at_overflow(a0 in 1i64..1000, tail in prop::collection::vec(1i64..1000, 1..5)) {
            let mut terms = vec![a0];
            terms.extend(tail);
            let cf = ContinuedFraction::new(terms, true);
            let pairs: Vec<_> = cf.convergents().collect();
            prop_assert!(!pairs.is_empty());
            prop_assert!(pairs.iter().all(|(h, k)| *h > 0 && *k > 0));
            // increasing until the stream stops
            prop_assert!(pairs.windows(2).all(|w| w[1].1 > w[0].1 || w[0].1 == 1));
        }

        #[test]
        fn partition_recurrence(n in 2i64..80, m in 2i64..20) {
            // p(n, m) = p(n - 1, m - 1) + p(n - m, m)
            let lhs = partitions::<u64>(n, m).unwrap();
            let rhs = partitions::<u64>(n - 1, m - 1).unwrap()
                + if n >= m { partitions::<u64>(n - m, m).unwrap() } else { 0 };
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn partitions_below_m_are_zero(n in 0i64..100, extra in 1i64..100) {
            prop_assert_eq!(partitions::<u64>(n, n + extra + 1), Ok(0));
        }

        #[test]
        fn partitions_near_m_are_small(m in 3i64..5_000) {
            // {3, 1, ...} and {2, 2, 1, ...}, then {4, 1..}, {3, 2, 1..}, {2, 2, 2, 1..}
            prop_assert_eq!(partitions::<u64>(m + 2, m), Ok(2));
            prop_assert_eq!(partitions::<u64>(m + 3, m), Ok(3));
        }
    }

    #[cfg(feature = "num-bigint")]
    proptest! {
        #[test]
        fn bounded_and_big_convergents_agree(terms in prop::collection::vec(1u32..50, 2..12)) {
            use num_bigint::BigUint;

            let small = ContinuedFraction::new(terms.iter().map(|&t| t as u64).collect(), false);
            let big = ContinuedFraction::new(terms.iter().map(|&t| BigUint::from(t)).collect(), false);
            let small: Vec<_> = small.convergents().collect();
            let big: Vec<_> = big.convergents().collect();
            prop_assert_eq!(small.len(), big.len());
            for ((h, k), (bh, bk)) in small.into_iter().zip(big) {
                prop_assert_eq!(BigUint::from(h), bh);
                prop_assert_eq!(BigUint::from(k), bk);
            }
        }
    }
}
