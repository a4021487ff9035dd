//! A walk through the request-line parser with well-formed and malformed
//! input. Run with `cargo run --example parse_line`.

use microserve_rs::parse_request_line;

fn main() {
    let lines = [
        "GET /index.html HTTP/1.1",
        "GET /classic.html HTTP/1.1",
        "POST /forms.html HTTP/1.1",
        "BREW /coffee HTTP/1.1",
        "GET /index.html",
        "GET",
        "",
    ];

    for line in lines {
        match parse_request_line(line) {
            Ok(request) => {
                println!("{line:?} -> method={method}, path={path}", method = request.method, path = request.path);
            }
            Err(err) => {
                println!("{line:?} -> rejected: {err}");
            }
        }
    }
}
