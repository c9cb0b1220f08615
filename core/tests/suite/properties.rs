//! Property tests: every produced pair has exactly one slot populated, and a
//! wrapped call behaves like invoking the callable with its arguments bound.

use futures_util::FutureExt;
use proptest::prelude::*;

use handled_core::{Call, Pair, invoke, invoke_async, try_invoke, try_invoke_async, try_wrap, wrap};

#[derive(Debug, Clone)]
enum Behaviour {
    Return(i64),
    Fail(String),
    Panic(String),
}

fn behaviour() -> impl Strategy<Value = Behaviour> {
    prop_oneof![
        any::<i64>().prop_map(Behaviour::Return),
        "[a-z]{1,12}".prop_map(Behaviour::Fail),
        "[a-z]{1,12}".prop_map(Behaviour::Panic),
    ]
}

fn run(behaviour: Behaviour) -> Result<i64, String> {
    match behaviour {
        Behaviour::Return(value) => Ok(value),
        Behaviour::Fail(error) => Err(error),
        Behaviour::Panic(message) => panic!("{message}"),
    }
}

fn exactly_one<T, E>(pair: Pair<T, E>) -> bool {
    let (value, error) = pair.into_tuple();
    value.is_some() != error.is_some()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sync_pairs_have_exactly_one_slot(b in behaviour()) {
        prop_assert!(exactly_one(invoke(|| run(b.clone()))));

        let pair = try_invoke(|| run(b.clone()));
        prop_assert_eq!(pair.is_error(), !matches!(b, Behaviour::Return(_)));
        prop_assert!(exactly_one(pair));
    }

    #[test]
    fn async_pairs_have_exactly_one_slot(b in behaviour()) {
        let plain = invoke_async(|| {
            let b = b.clone();
            async move { run(b) }
        })
        .now_or_never()
        .expect("ready future settles on first poll");
        prop_assert!(exactly_one(plain));

        let fallible = try_invoke_async(|| {
            let b = b.clone();
            async move { run(b) }
        })
        .now_or_never()
        .expect("ready future settles on first poll");
        prop_assert_eq!(fallible.is_error(), !matches!(b, Behaviour::Return(_)));
        prop_assert!(exactly_one(fallible));
    }

    #[test]
    fn wrap_equals_invoke_with_bound_arguments(a in any::<i64>(), b in any::<i64>()) {
        let add = |a: i64, b: i64| a.checked_add(b).expect("overflow");
        let wrapped = wrap(add).call((a, b));
        let direct = invoke(|| add(a, b));
        prop_assert_eq!(wrapped.is_error(), direct.is_error());
        prop_assert_eq!(wrapped.into_value(), direct.into_value());

        let sub = |a: i64, b: i64| a.checked_sub(b).ok_or("underflow");
        let wrapped = try_wrap(sub).call((a, b));
        let direct = try_invoke(|| sub(a, b));
        prop_assert_eq!(wrapped.is_error(), direct.is_error());
        prop_assert_eq!(wrapped.into_value(), direct.into_value());
    }
}
