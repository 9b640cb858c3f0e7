/// Parses a pointer literal, panicking on malformed input. Intended for tests.
#[macro_export]
macro_rules! json_pointer {
    () => {
        $crate::JsonPointer::root()
    };
    ($path:expr) => {
        $path
            .parse::<$crate::JsonPointer>()
            .unwrap_or_else(|err| panic!("invalid json pointer `{}`: {}", $path, err))
    };
}
