use arbint::{BigInt, Digit, Error};
use proptest::prelude::*;

/// Digits biased towards the values that stress carries and borrows.
fn digit() -> impl Strategy<Value = Digit> {
    prop_oneof![
        Just(0),
        Just(1),
        Just(Digit::MAX),
        Just(Digit::MAX - 1),
        any::<Digit>(),
    ]
}

fn bigint() -> impl Strategy<Value = BigInt> {
    (prop::collection::vec(digit(), 0..6), any::<bool>())
        .prop_map(|(digits, negative)| BigInt::from_digits(digits, negative))
}

fn int(s: &str) -> BigInt {
    s.parse().unwrap()
}

proptest! {
    #[test]
    fn decimal_round_trip(a in bigint()) {
        prop_assert_eq!(BigInt::from_decimal_str(&a.to_decimal_string()).unwrap(), a.clone());
        prop_assert_eq!(a.to_string(), a.to_decimal_string());
    }

    #[test]
    fn decimal_strings_round_trip(s in "-?[1-9][0-9]{0,80}") {
        prop_assert_eq!(int(&s).to_string(), s);
    }

    #[test]
    fn addition_commutes(a in bigint(), b in bigint()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn multiplication_commutes(a in bigint(), b in bigint()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn addition_associates(a in bigint(), b in bigint(), c in bigint()) {
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn multiplication_distributes(a in bigint(), b in bigint(), c in bigint()) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn identities(a in bigint()) {
        prop_assert_eq!(&a + &BigInt::zero(), a.clone());
        prop_assert_eq!(&a * &BigInt::one(), a.clone());
        let zero = &a * &BigInt::zero();
        prop_assert!(zero.is_zero());
        prop_assert!(!zero.is_negative());
        prop_assert!((&a - &a).is_zero());
        prop_assert!(!(&a - &a).is_negative());
    }

    #[test]
    fn subtraction_inverts_addition(a in bigint(), b in bigint()) {
        prop_assert_eq!(&(&a - &b) + &b, a.clone());
        prop_assert_eq!(&(&a + &b) - &b, a.clone());
        prop_assert_eq!(&a - &b, &a + &(-&b));
    }

    #[test]
    fn comparison_is_trichotomous(a in bigint(), b in bigint()) {
        let holds = [a < b, a == b, a > b];
        prop_assert_eq!(holds.iter().filter(|&&h| h).count(), 1);
        prop_assert_eq!(a < b, b > a);
        // consistent with the sign of the difference
        let difference = &a - &b;
        prop_assert_eq!(a > b, !difference.is_negative() && !difference.is_zero());
    }

    #[test]
    fn agrees_with_i128(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (BigInt::from(a), BigInt::from(b));
        let (a, b) = (a as i128, b as i128);
        prop_assert_eq!((&x + &y).to_string(), (a + b).to_string());
        prop_assert_eq!((&x - &y).to_string(), (a - b).to_string());
        prop_assert_eq!((&x * &y).to_string(), (a * b).to_string());
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
    }

    #[test]
    fn be_bytes_round_trip(a in bigint()) {
        prop_assert_eq!(BigInt::from_be_bytes(&a.to_be_bytes()), a.abs());
    }
}

#[cfg(feature = "division")]
proptest! {
    #[test]
    fn division_reconstructs(a in bigint(), b in bigint()) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert_eq!(&(&q * &b) + &r, a.clone());
        prop_assert_eq!(r.cmp_magnitude(&b), core::cmp::Ordering::Less);
        prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
    }

    #[test]
    fn division_agrees_with_i128(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(b != 0);
        let (q, r) = BigInt::from(a).div_rem(&BigInt::from(b)).unwrap();
        let (a, b) = (a as i128, b as i128);
        prop_assert_eq!(q.to_string(), (a / b).to_string());
        prop_assert_eq!(r.to_string(), (a % b).to_string());
    }
}

#[test]
#[cfg(not(feature = "u64"))]
fn borrow_across_words() {
    let a = BigInt::from_digits(vec![4294967295, 4294967295, 1], false);
    let b = BigInt::from_digits(vec![4294967295, 0, 1], false);
    assert_eq!((&a - &b).digits(), &[0, 4294967295]);
}

#[test]
fn large_product() {
    let q = int("100000000000000000000000000000");
    let p = int("100000000000000000000000000000");
    assert_eq!(
        (&q * &p).to_decimal_string(),
        "10000000000000000000000000000000000000000000000000000000000"
    );
}

#[test]
fn parse_matches_words() {
    assert_eq!(int("12345"), BigInt::from_digits(vec![12345], false));
}

#[test]
fn zero_renders_unsigned() {
    assert_eq!(int("0").to_decimal_string(), "0");
    assert_eq!(int("-0").to_decimal_string(), "0");
    assert_eq!((int("-5") * int("0")).to_decimal_string(), "0");
}

#[test]
fn invalid_input() {
    assert_eq!("".parse::<BigInt>(), Err(Error::InvalidFormat));
    assert_eq!("-".parse::<BigInt>(), Err(Error::InvalidFormat));
    assert_eq!("12x".parse::<BigInt>(), Err(Error::InvalidFormat));
}

#[test]
fn factorial() {
    let mut product = BigInt::one();
    for i in 1..=50u64 {
        product *= BigInt::from(i);
    }
    assert_eq!(
        product.to_string(),
        "30414093201713378043612608166064768844377641568960512000000000000"
    );
}

#[test]
#[cfg(not(feature = "division"))]
fn division_unsupported() {
    assert_eq!(BigInt::one().div_rem(&BigInt::one()), Err(Error::Unsupported));
}
