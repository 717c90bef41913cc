use crate::config::Result;

/// A single place a config value may come from (env, file, default).
///
/// Sources are chained with [`ConfigSource::or`], the first one that yields a value wins.
pub trait ConfigSource: Sized {
    type Value;

    fn source_value(self) -> Option<Result<Self::Value>>;

    fn or<T: ConfigSource<Value = Self::Value>>(self, fallback: T) -> Or<Self, T> {
        Or::new(self, fallback)
    }
}

#[derive(Clone)]
pub struct Or<A, B>(A, B);

impl<A, B> Or<A, B>
where
    A: ConfigSource,
    B: ConfigSource<Value = A::Value>,
{
    fn new(first: A, fallback: B) -> Self {
        Or(first, fallback)
    }
}

impl<A, B> ConfigSource for Or<A, B>
where
    A: ConfigSource,
    B: ConfigSource<Value = A::Value>,
{
    type Value = A::Value;

    fn source_value(self) -> Option<Result<Self::Value>> {
        self.0.source_value().or_else(|| self.1.source_value())
    }
}

impl<V> ConfigSource for Option<V> {
    type Value = V;

    fn source_value(self) -> Option<Result<Self::Value>> {
        self.map(Ok)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{config::from_env::FromEnv, util::testing::with_env_vars};

    #[rstest]
    #[case(None, 10)]
    #[case(Some("13"), 13)]
    fn env_then_fallback(#[case] env: Option<&str>, #[case] outcome: i32) {
        with_env_vars(
            vec![("VICK_TEST_VALUE", env), ("VICK_TEST_FALLBACK", Some("10"))],
            || {
                let val = FromEnv::<i32>::new("VICK_TEST_VALUE")
                    .or(None)
                    .or(FromEnv::new("VICK_TEST_FALLBACK"));
                assert_eq!(val.source_value().unwrap().unwrap(), outcome);
            },
        );
    }

    #[rstest]
    fn option_fallback() {
        with_env_vars(vec![("VICK_TEST_VALUE", None)], || {
            let val = FromEnv::<i32>::new("VICK_TEST_VALUE").or(Some(7));
            assert_eq!(val.source_value().unwrap().unwrap(), 7);
        });
    }

    #[rstest]
    fn nothing_provided() {
        with_env_vars(vec![("VICK_TEST_VALUE", None)], || {
            let val = FromEnv::<i32>::new("VICK_TEST_VALUE").or(None);
            assert!(val.source_value().is_none());
        });
    }
}
