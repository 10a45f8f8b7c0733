use filehost::http::mime::mime_type;

#[test]
fn test_known_extensions() {
    assert_eq!(mime_type("notes.txt"), "text/plain");
    assert_eq!(mime_type("index.html"), "text/html");
    assert_eq!(mime_type("photo.jpg"), "image/jpeg");
    assert_eq!(mime_type("photo.jpeg"), "image/jpeg");
}

#[test]
fn test_unknown_extension_falls_back() {
    assert_eq!(mime_type("style.css"), "application/octet-stream");
    assert_eq!(mime_type("archive.tar.gz"), "application/octet-stream");
    assert_eq!(mime_type("page.htm"), "application/octet-stream");
}

#[test]
fn test_no_extension_falls_back() {
    assert_eq!(mime_type("Makefile"), "application/octet-stream");
    assert_eq!(mime_type(""), "application/octet-stream");
    assert_eq!(mime_type("trailing."), "application/octet-stream");
}

#[test]
fn test_extension_match_is_case_sensitive() {
    assert_eq!(mime_type("INDEX.HTML"), "application/octet-stream");
    assert_eq!(mime_type("photo.JPG"), "application/octet-stream");
    assert_eq!(mime_type("notes.Txt"), "application/octet-stream");
}

#[test]
fn test_dotfile_uses_text_after_dot() {
    assert_eq!(mime_type(".txt"), "text/plain");
    assert_eq!(mime_type("dir/.html"), "text/html");
}
