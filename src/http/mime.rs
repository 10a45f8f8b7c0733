//! Content-Type lookup by file extension.

pub const FALLBACK: &str = "application/octet-stream";

/// Returns the MIME type for `file_name`, judged by the text after its last
/// `.`. Matching is exact and case-sensitive.
pub fn mime_type(file_name: &str) -> &'static str {
    let Some((_, ext)) = file_name.rsplit_once('.') else {
        return FALLBACK;
    };

    match ext {
        "txt" => "text/plain",
        "html" => "text/html",
        "jpg" | "jpeg" => "image/jpeg",
        _ => FALLBACK,
    }
}
