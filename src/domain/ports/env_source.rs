/// Treat an empty value as unset.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Read-only access to named environment values.
///
/// Implementations return the raw string for a set variable and `None` for
/// an unset one. An empty string is a set value and must be returned as
/// `Some(String::new())`.
///
/// # Examples
///
/// ```
/// use webconfig::domain::ports::EnvSource;
/// use webconfig::infrastructure::env::MapEnv;
///
/// let env = MapEnv::new().with("REACT_APP_AWS_REGION", "eu-west-1");
/// assert_eq!(env.var("REACT_APP_AWS_REGION").as_deref(), Some("eu-west-1"));
/// assert_eq!(env.var("REACT_APP_SCOPE"), None);
/// ```
pub trait EnvSource {
    /// Look up a variable by name.
    fn var(&self, key: &str) -> Option<String>;

    /// Look up a variable, treating an empty value as unset.
    fn non_empty_var(&self, key: &str) -> Option<String> {
        non_empty(self.var(key))
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

impl<T: EnvSource + ?Sized> EnvSource for Box<T> {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Option<&'static str>);

    impl EnvSource for Fixed {
        fn var(&self, _key: &str) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[test]
    fn test_non_empty_var_filters_empty_values() {
        assert_eq!(Fixed(Some("")).non_empty_var("ANY"), None);
        assert_eq!(Fixed(None).non_empty_var("ANY"), None);
        assert_eq!(Fixed(Some("x")).non_empty_var("ANY").as_deref(), Some("x"));
    }

    #[test]
    fn test_non_empty_helper() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(" ".into())).as_deref(), Some(" "));
    }

    #[test]
    fn test_blanket_impls_delegate() {
        let boxed: Box<dyn EnvSource> = Box::new(Fixed(Some("v")));
        assert_eq!(boxed.var("ANY").as_deref(), Some("v"));

        let by_ref = &Fixed(Some(""));
        assert_eq!(by_ref.var("ANY").as_deref(), Some(""));
    }
}
