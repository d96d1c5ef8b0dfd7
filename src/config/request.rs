/// Per-request overrides parsed from a query parameter bag.
///
/// Malformed values never fail: non-numeric or zero dimensions and empty names read as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderRequest {
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub display_name: Option<String>,
}

impl RenderRequest {
    /// Build from decoded key/value pairs. Later duplicates win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut out = Self::default();
        for (k, v) in pairs {
            let v = v.as_ref();
            match k.as_ref() {
                "w" | "width" => out.width = parse_dimension(v),
                "h" | "height" => out.height = parse_dimension(v),
                "name" | "display_name" => {
                    out.display_name = (!v.is_empty()).then(|| v.to_string());
                }
                _ => {}
            }
        }
        out
    }

    /// Build from a raw `application/x-www-form-urlencoded` query string (leading `?` allowed).
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(
            query
                .split('&')
                .filter(|part| !part.is_empty())
                .map(|part| match part.split_once('=') {
                    Some((k, v)) => (form_decode(k), form_decode(v)),
                    None => (form_decode(part), String::new()),
                }),
        )
    }
}

/// Leading-integer parse: optional whitespace and sign, then digits; trailing junk is ignored.
/// Zero and unparsable input read as absent.
fn parse_dimension(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (neg, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let magnitude: i64 = digits[..end].parse().ok()?;
    let v = if neg { -magnitude } else { magnitude };
    (v != 0).then_some(v)
}

fn form_decode(s: &str) -> String {
    fn hex(b: u8) -> Option<u8> {
        match b {
            b'0'..=b'9' => Some(b - b'0'),
            b'a'..=b'f' => Some(b - b'a' + 10),
            b'A'..=b'F' => Some(b - b'A' + 10),
            _ => None,
        }
    }

    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                match (hex(bytes[i + 1]), hex(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 2;
                    }
                    _ => out.push(b'%'),
                }
            }
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
#[path = "../../tests/unit/config/request.rs"]
mod tests;
