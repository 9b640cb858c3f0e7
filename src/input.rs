/// Something that may hold JSON text.
///
/// `None` stands for a null input, which every comparison rejects with
/// [`FixtureError::InvalidArgument`](crate::FixtureError::InvalidArgument)
/// before any parsing happens, even when both sides are null.
pub trait JsonInput {
    fn json_text(&self) -> Option<&str>;
}

impl JsonInput for str {
    fn json_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl JsonInput for String {
    fn json_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: JsonInput + ?Sized> JsonInput for &T {
    fn json_text(&self) -> Option<&str> {
        (**self).json_text()
    }
}

impl<T: AsRef<str>> JsonInput for Option<T> {
    fn json_text(&self) -> Option<&str> {
        self.as_ref().map(AsRef::as_ref)
    }
}
