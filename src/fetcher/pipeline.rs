use bytes::Bytes;
use chrono::Utc;
use encoding_rs::Encoding;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{StatusCode, header::HeaderMap};
use url::Url;

use crate::fetcher::{
    errors::FetchError,
    types::{Charset, PageResponse},
};

/// `charset=` parameter inside a Content-Type header value.
static HEADER_CHARSET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

/// `<meta charset="...">` and the older
/// `<meta http-equiv="Content-Type" content="...; charset=...">` forms.
static MARKUP_CHARSET_RES: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap(),
        Regex::new(r#"(?i)<meta\s+[^>]*?http-equiv\s*=\s*["']?content-type["']?[^>]*?content\s*=\s*["']?[^"'>]*?charset\s*=\s*([^"'\s;/>]+)"#).unwrap(),
    ]
});

/// How much of the body head is scanned for meta tags and fed to the
/// statistical detector.
const SNIFF_WINDOW: usize = 4096;

/// Turn a raw HTTP body into a [`PageResponse`] with a UTF-8 view of the
/// markup, resolving the charset from the header, the document head, or a
/// statistical guess, in that order.
pub fn process_response(
    url_final: Url,
    status: StatusCode,
    headers: HeaderMap,
    body_raw: Bytes,
    content_type: &str,
) -> Result<PageResponse, FetchError> {
    let charset = resolve_charset(content_type, &body_raw);
    let body_utf8 = decode_body(&body_raw, &charset)?;

    Ok(PageResponse {
        url_final,
        status,
        headers,
        body_raw,
        body_utf8,
        charset,
        fetched_at: Utc::now(),
    })
}

/// Parse a candidate charset label; unknown labels are skipped so the next
/// detection stage gets a chance.
fn charset_for_label(label: &str) -> Option<Charset> {
    Encoding::for_label(label.trim().as_bytes()).map(Charset::from_encoding)
}

fn resolve_charset(content_type: &str, body_raw: &[u8]) -> Charset {
    if let Some(caps) = HEADER_CHARSET_RE.captures(content_type)
        && let Some(charset) = charset_for_label(&caps[1])
    {
        return charset;
    }

    let head = &body_raw[..body_raw.len().min(SNIFF_WINDOW)];
    let markup = String::from_utf8_lossy(head);
    for re in MARKUP_CHARSET_RES.iter() {
        if let Some(caps) = re.captures(&markup)
            && let Some(charset) = charset_for_label(&caps[1])
        {
            return charset;
        }
    }

    // Nothing declared; guess from byte statistics.
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(head, false);
    Charset::from_encoding(detector.guess(None, true))
}

fn decode_body(body_raw: &[u8], charset: &Charset) -> Result<String, FetchError> {
    let encoding = charset.encoding();
    let (decoded, _, malformed) = encoding.decode(body_raw);
    if malformed {
        return Err(FetchError::Charset(format!(
            "body is not valid {}",
            encoding.name()
        )));
    }
    Ok(decoded.into_owned())
}
