//! Search trigger attached to the product table.
//!
//! The trigger collects the current values of the search fields, encodes them
//! as query parameters, appends them to the route exposed by the trigger
//! element and navigates the page there. URL construction is kept free of any
//! browser types so it can be exercised directly; the DOM binding lives in
//! [`crate::browser`].

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left untouched when encoding a single URI component.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Numeric key code reported for the Enter key.
pub const ENTER_KEY_CODE: i64 = 13;

/// Named key identifier reported for the Enter key.
pub const ENTER_KEY: &str = "Enter";

/// A single named input contributing one `name=value` pair to the query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchField {
    pub name: String,
    pub value: String,
}

/// Key sent for a field that has no `name` attribute.
pub const MISSING_NAME: &str = "null";

impl SearchField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Builds a field from the raw `name` attribute, which may be absent.
    pub fn from_attribute(name: Option<String>, value: impl Into<String>) -> Self {
        Self::new(name.unwrap_or_else(|| MISSING_NAME.to_string()), value)
    }
}

/// Key code as delivered by the event payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyCode {
    Number(u32),
    Text(String),
}

impl KeyCode {
    /// Coerces the code to an integer the way a lenient integer parse does:
    /// leading whitespace and an optional sign are accepted, then the leading
    /// run of digits is used. Returns `None` when no digits are found.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            KeyCode::Number(code) => Some(i64::from(*code)),
            KeyCode::Text(raw) => {
                let trimmed = raw.trim_start();
                let (negative, rest) = match trimmed.as_bytes().first() {
                    Some(b'-') => (true, &trimmed[1..]),
                    Some(b'+') => (false, &trimmed[1..]),
                    _ => (false, trimmed),
                };
                let digits_end = rest
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(rest.len());
                let magnitude = rest[..digits_end].parse::<i64>().ok()?;
                Some(if negative { -magnitude } else { magnitude })
            }
        }
    }
}

/// Key press observed on a search field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyPress {
    /// Named key identifier, e.g. `"Enter"`.
    pub key: Option<String>,
    /// Legacy numeric key code.
    pub key_code: Option<KeyCode>,
}

impl KeyPress {
    pub fn named(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            key_code: None,
        }
    }

    pub fn with_code(code: KeyCode) -> Self {
        Self {
            key: None,
            key_code: Some(code),
        }
    }
}

/// Returns `true` when the key press is the Enter key. Either the named key or
/// the numeric code is enough; neither is treated as authoritative.
pub fn is_enter(press: &KeyPress) -> bool {
    let named = press.key.as_deref() == Some(ENTER_KEY);
    let coded = press
        .key_code
        .as_ref()
        .and_then(KeyCode::as_integer)
        .is_some_and(|code| code == ENTER_KEY_CODE);
    named || coded
}

/// Percent-encodes a single query component.
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Joins the fields into `name=value` pairs separated by `&`, keeping the
/// order of the fields.
pub fn build_query_string(fields: &[SearchField]) -> String {
    fields
        .iter()
        .map(|field| {
            format!(
                "{}={}",
                encode_component(&field.name),
                encode_component(&field.value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Appends the encoded fields to `route`, using `?` unless the route already
/// carries a query string.
pub fn build_search_url(route: &str, fields: &[SearchField]) -> String {
    let separator = if route.contains('?') { '&' } else { '?' };
    format!("{route}{separator}{}", build_query_string(fields))
}

/// Container holding the search fields.
pub trait FieldSource {
    /// Current fields in document order.
    fn search_fields(&self) -> Vec<SearchField>;
}

/// Element exposing the route the search navigates to.
pub trait RouteSource {
    fn search_route(&self) -> String;
}

/// Performs the full-page navigation.
pub trait Navigator {
    fn assign(&self, url: &str);
}

/// Wires a field container and a trigger element to a navigator.
pub struct SearchTrigger<C, T, N> {
    container: C,
    trigger: T,
    navigator: N,
}

impl<C, T, N> SearchTrigger<C, T, N>
where
    C: FieldSource,
    T: RouteSource,
    N: Navigator,
{
    /// Builds the trigger once the page is ready. Returns `None` when either
    /// the container or the trigger element is absent, in which case no
    /// handlers must be installed.
    pub fn install(container: Option<C>, trigger: Option<T>, navigator: N) -> Option<Self> {
        Some(Self {
            container: container?,
            trigger: trigger?,
            navigator,
        })
    }

    /// URL the search would navigate to with the current field state.
    pub fn search_url(&self) -> String {
        build_search_url(
            &self.trigger.search_route(),
            &self.container.search_fields(),
        )
    }

    pub fn perform_search(&self) {
        self.navigator.assign(&self.search_url());
    }

    /// Direct activation of the trigger element.
    pub fn activate(&self) {
        self.perform_search();
    }

    /// Key press inside one of the search fields.
    pub fn key_down(&self, press: &KeyPress) {
        if is_enter(press) {
            self.perform_search();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct Fields(Vec<SearchField>);

    impl FieldSource for Fields {
        fn search_fields(&self) -> Vec<SearchField> {
            self.0.clone()
        }
    }

    struct Button(&'static str);

    impl RouteSource for Button {
        fn search_route(&self) -> String {
            self.0.to_string()
        }
    }

    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl Navigator for &Recorder {
        fn assign(&self, url: &str) {
            self.0.borrow_mut().push(url.to_string());
        }
    }

    fn fields(pairs: &[(&str, &str)]) -> Vec<SearchField> {
        pairs
            .iter()
            .map(|(name, value)| SearchField::new(*name, *value))
            .collect()
    }

    #[test]
    fn appends_query_with_question_mark() {
        let url = build_search_url("/products", &fields(&[("q", "wid get")]));
        assert_eq!(url, "/products?q=wid%20get");
    }

    #[test]
    fn appends_query_with_ampersand_when_route_has_query() {
        let url = build_search_url("/products?sort=asc", &fields(&[("q", "x")]));
        assert_eq!(url, "/products?sort=asc&q=x");
    }

    #[test]
    fn no_fields_leaves_trailing_separator() {
        assert_eq!(build_search_url("/products", &[]), "/products?");
        assert_eq!(build_search_url("/products?a=1", &[]), "/products?a=1&");
    }

    #[test]
    fn empty_values_still_contribute_pairs() {
        let url = build_search_url(
            "/search/",
            &fields(&[("id", ""), ("name", "lamp"), ("ean", "")]),
        );
        assert_eq!(url, "/search/?id=&name=lamp&ean=");
    }

    #[test]
    fn encodes_names_and_values_independently() {
        let query = build_query_string(&fields(&[("a&b", "c=d"), ("цена", "10€")]));
        assert_eq!(query, "a%26b=c%3Dd&%D1%86%D0%B5%D0%BD%D0%B0=10%E2%82%AC");
    }

    #[test]
    fn field_without_name_uses_null_key() {
        let fields = [
            SearchField::from_attribute(None, "x"),
            SearchField::from_attribute(Some("q".to_string()), "y"),
        ];
        assert_eq!(build_query_string(&fields), "null=x&q=y");
    }

    #[test]
    fn keeps_uri_component_unreserved_characters() {
        assert_eq!(encode_component("A-z_0.9!~*'()"), "A-z_0.9!~*'()");
        assert_eq!(encode_component("a/b?c#d+e"), "a%2Fb%3Fc%23d%2Be");
    }

    #[test]
    fn enter_detection_accepts_named_key_and_code() {
        assert!(is_enter(&KeyPress::named("Enter")));
        assert!(is_enter(&KeyPress::with_code(KeyCode::Number(13))));
        assert!(is_enter(&KeyPress::with_code(KeyCode::Text("13".into()))));
        assert!(is_enter(&KeyPress::with_code(KeyCode::Text(" 13px".into()))));
        assert!(!is_enter(&KeyPress::named("a")));
        assert!(!is_enter(&KeyPress::with_code(KeyCode::Number(65))));
        assert!(!is_enter(&KeyPress::with_code(KeyCode::Text("x13".into()))));
        assert!(!is_enter(&KeyPress::default()));
    }

    #[test]
    fn key_code_coercion() {
        assert_eq!(KeyCode::Text("-7".into()).as_integer(), Some(-7));
        assert_eq!(KeyCode::Text("+42abc".into()).as_integer(), Some(42));
        assert_eq!(KeyCode::Text("".into()).as_integer(), None);
        assert_eq!(KeyCode::Text("-".into()).as_integer(), None);
    }

    #[test]
    fn activation_and_enter_navigate_to_same_url() {
        let recorder = Recorder::default();
        let trigger = SearchTrigger::install(
            Some(Fields(fields(&[("name", "wid get"), ("price_gte", "10")]))),
            Some(Button("/search/")),
            &recorder,
        )
        .unwrap();

        trigger.activate();
        trigger.key_down(&KeyPress::named("Enter"));
        trigger.key_down(&KeyPress::with_code(KeyCode::Number(13)));

        let visited = recorder.0.borrow();
        assert_eq!(visited.len(), 3);
        assert_eq!(visited[0], "/search/?name=wid%20get&price_gte=10");
        assert!(visited.iter().all(|url| url == &visited[0]));
    }

    #[test]
    fn other_keys_do_not_navigate() {
        let recorder = Recorder::default();
        let trigger = SearchTrigger::install(
            Some(Fields(fields(&[("name", "x")]))),
            Some(Button("/search/")),
            &recorder,
        )
        .unwrap();

        trigger.key_down(&KeyPress::named("Tab"));
        trigger.key_down(&KeyPress::with_code(KeyCode::Number(27)));

        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn missing_elements_install_nothing() {
        let recorder = Recorder::default();
        let no_container =
            SearchTrigger::install(None::<Fields>, Some(Button("/search/")), &recorder);
        let no_trigger = SearchTrigger::install(Some(Fields(vec![])), None::<Button>, &recorder);

        assert!(no_container.is_none());
        assert!(no_trigger.is_none());
        assert!(recorder.0.borrow().is_empty());
    }
}
