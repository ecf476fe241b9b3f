//! Behavioral specs for the live URL check.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use crate::prelude::*;

/// Serve one HTTP response with the given body and return its URL.
fn serve_html(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 2048];
            let _ = stream.read(&mut buf);
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(body.as_bytes());
        }
    });
    format!("http://{addr}/")
}

/// > A failed fetch is one error: score 85, exit 0
#[test]
fn fetch_failure_is_single_error() {
    let site = temp_site(&[]);
    seocheck_cmd()
        .arg(site.path())
        .args(["--no-project", "--url", &closed_port_url()])
        .assert()
        .success()
        .stdout(predicates::str::contains("[Live] Could not fetch URL"))
        .stdout(predicates::str::contains("Score: 85/100"))
        .stdout(predicates::str::contains("WARNINGS:").not());
}

/// > Live findings are prefixed and scored with project findings
#[test]
fn live_page_findings_are_prefixed() {
    let url = serve_html("<html><head><title>Home</title></head><body></body></html>");
    seocheck_cmd()
        .args(["--no-project", "--url", &url])
        .assert()
        .success()
        .stdout(predicates::str::contains("[Live] Missing meta description"))
        .stdout(predicates::str::contains("[Live] No canonical URL"))
        .stdout(predicates::str::contains("[Live] No H1 in HTML"))
        .stdout(predicates::str::contains("Score: 75/100"));
}

/// > Live and project findings are merged
#[test]
fn live_and_project_findings_merge() {
    seocheck_cmd()
        .arg(fixture("good-site"))
        .args(["--url", &closed_port_url()])
        .assert()
        .success()
        .stdout(predicates::str::contains("Score: 85/100"));
}
