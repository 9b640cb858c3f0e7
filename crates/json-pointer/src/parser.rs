use std::borrow::Cow;

use crate::ParseJsonPointerError;

pub(crate) fn parse_json_pointer(input: &str) -> Result<Vec<String>, ParseJsonPointerError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let bytes = input.as_bytes();
    if bytes[0] != b'/' {
        return Err(ParseJsonPointerError::NotAbsolute {
            pointer: input.to_string(),
        });
    }

    let mut segments = Vec::new();
    let mut start = 1;
    loop {
        let end = memchr::memchr(b'/', &bytes[start..])
            .map(|idx| start + idx)
            .unwrap_or(bytes.len());
        let segment = unescape_segment(&input[start..end]).map_err(|idx| {
            ParseJsonPointerError::InvalidEscape {
                pointer: input.to_string(),
                offset: start + idx,
            }
        })?;
        segments.push(segment.into_owned());

        if end == bytes.len() {
            break;
        }
        start = end + 1;
    }

    Ok(segments)
}

/// Decodes `~0` and `~1`. On a dangling or unknown escape returns the offset of its `~`.
fn unescape_segment(segment: &str) -> Result<Cow<'_, str>, usize> {
    let bytes = segment.as_bytes();
    let first = match memchr::memchr(b'~', bytes) {
        Some(idx) => idx,
        None => return Ok(Cow::Borrowed(segment)),
    };

    let mut out = String::with_capacity(segment.len());
    out.push_str(&segment[..first]);

    let mut i = first;
    while i < bytes.len() {
        match bytes[i] {
            b'~' => {
                match bytes.get(i + 1) {
                    Some(b'0') => out.push('~'),
                    Some(b'1') => out.push('/'),
                    _ => return Err(i),
                }
                i += 2;
            }
            _ => {
                let next = memchr::memchr(b'~', &bytes[i..])
                    .map(|idx| i + idx)
                    .unwrap_or(bytes.len());
                out.push_str(&segment[i..next]);
                i = next;
            }
        }
    }

    Ok(Cow::Owned(out))
}

pub(crate) fn escape_segment(segment: &str) -> Cow<'_, str> {
    if memchr::memchr2(b'~', b'/', segment.as_bytes()).is_none() {
        return Cow::Borrowed(segment);
    }
    Cow::Owned(segment.replace('~', "~0").replace('/', "~1"))
}
