/// File base name [`FixtureLoader::load`](crate::FixtureLoader::load) reads.
pub const DEFAULT_REQUEST: &str = "request";

/// File base name [`JsonVerifier::assert_json`](crate::JsonVerifier::assert_json) compares against.
pub const DEFAULT_RESPONSE: &str = "response";

/// `json/{class_name}/{method_name}/{file_name}.json`, relative to a resource root.
///
/// Identifiers are used verbatim.
pub fn fixture_path(class_name: &str, method_name: &str, file_name: &str) -> String {
    format!("json/{}/{}/{}.json", class_name, method_name, file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template() {
        assert_eq!(
            fixture_path("TestClass", "test", "request"),
            "json/TestClass/test/request.json"
        );
        assert_eq!(
            fixture_path("tests", "loads_fixture", DEFAULT_RESPONSE),
            "json/tests/loads_fixture/response.json"
        );
        assert_eq!(fixture_path("", "", ""), "json///.json");
    }
}
