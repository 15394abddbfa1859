#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Datelike, NaiveDate};
use std::cell::RefCell;
use std::env;
use std::fs;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use timereport::errors::{AppError, AppResult};
use timereport::models::{PageInfo, RawTimelogEntry, Row, TimelogPage};
use timereport::source::TimelogSource;

pub fn tr() -> Command {
    cargo_bin_cmd!("timereport")
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timereport.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

pub fn entry(
    user: &str,
    spent_at: &str,
    seconds: i64,
    issue: &str,
    labels: &[&str],
) -> RawTimelogEntry {
    RawTimelogEntry {
        user: user.to_string(),
        issue: issue.to_string(),
        labels: labels.iter().map(|l| l.to_string()).collect(),
        spent_at: DateTime::parse_from_rfc3339(spent_at).expect("valid rfc3339"),
        time_spent: seconds,
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

/// A row as the normalizer would produce it for `date`.
pub fn row(user: &str, day: &str, hours: f64) -> Row {
    let d = date(day);
    Row {
        user: user.to_string(),
        date: d,
        hours,
        labels: vec![],
        issue: format!("issue of {user}"),
        year: d.year(),
        month: d.month(),
        iso_week: d.iso_week().week(),
    }
}

/// In-memory paginated source. Page `i` answers cursor `""` (i = 0) or
/// `"c{i}"`, and records every cursor it was asked for.
pub struct PagedSource {
    pages: Vec<TimelogPage>,
    pub cursors: RefCell<Vec<String>>,
    fail_at: Option<usize>,
}

impl PagedSource {
    pub fn new(pages: Vec<Vec<RawTimelogEntry>>) -> Self {
        let last = pages.len().saturating_sub(1);
        let pages = pages
            .into_iter()
            .enumerate()
            .map(|(i, entries)| TimelogPage {
                entries,
                page_info: PageInfo {
                    end_cursor: Some(format!("c{}", i + 1)),
                    has_next_page: i < last,
                },
            })
            .collect();
        Self::from_pages(pages)
    }

    pub fn from_pages(pages: Vec<TimelogPage>) -> Self {
        Self {
            pages,
            cursors: RefCell::new(Vec::new()),
            fail_at: None,
        }
    }

    /// Answer call number `call` (0-based) with a transport failure.
    pub fn failing_at(mut self, call: usize) -> Self {
        self.fail_at = Some(call);
        self
    }

    pub fn calls(&self) -> usize {
        self.cursors.borrow().len()
    }
}

impl TimelogSource for PagedSource {
    fn fetch_page(&self, _namespace: &str, cursor: &str) -> AppResult<TimelogPage> {
        let call = self.calls();
        self.cursors.borrow_mut().push(cursor.to_string());

        if self.fail_at == Some(call) {
            return Err(AppError::SourceUnavailable(
                "unexpected status code returned: 502 Bad Gateway".into(),
            ));
        }

        let expected = if call == 0 { String::new() } else { format!("c{call}") };
        assert_eq!(cursor, expected, "cursor of call {call}");

        self.pages
            .get(call)
            .cloned()
            .ok_or_else(|| AppError::SourceDataError(format!("no page {call}")))
    }
}

/// Read one member of an xlsx (zip) archive as text.
pub fn xlsx_entry(path: &Path, name: &str) -> String {
    let file = fs::File::open(path).expect("open xlsx");
    let mut archive = zip::ZipArchive::new(file).expect("xlsx is a zip archive");
    let mut content = String::new();
    archive
        .by_name(name)
        .expect("xlsx member")
        .read_to_string(&mut content)
        .expect("read xlsx member");
    content
}

/// Sheet names in workbook order.
pub fn sheet_names(path: &Path) -> Vec<String> {
    let xml = xlsx_entry(path, "xl/workbook.xml");
    xml.match_indices("<sheet ")
        .map(|(i, _)| {
            let rest = &xml[i..];
            let start = rest.find("name=\"").expect("sheet name") + 6;
            let len = rest[start..].find('"').expect("closing quote");
            rest[start..start + len].to_string()
        })
        .collect()
}

pub const EPS: f64 = 1e-9;

/// A raw HTTP/1.1 response with a JSON body.
pub fn http_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

/// Local GraphQL stand-in: answers one connection per entry of `responses`
/// and hands back the raw requests it received.
pub fn serve(responses: Vec<String>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
    let addr = listener.local_addr().expect("local addr");
    let handle = thread::spawn(move || {
        responses
            .into_iter()
            .map(|response| {
                let (mut stream, _) = listener.accept().expect("accept");
                let request = read_request(&mut stream);
                stream.write_all(response.as_bytes()).expect("write response");
                request
            })
            .collect()
    });
    (format!("http://{addr}/api/graphql"), handle)
}

/// Accepts one connection, reads the request and keeps the socket open for
/// `hold` without answering.
pub fn serve_silent(hold: Duration) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
    let addr = listener.local_addr().expect("local addr");
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        read_request(&mut stream);
        thread::sleep(hold);
    });
    (format!("http://{addr}/api/graphql"), handle)
}

/// Reads headers plus a `Content-Length` body.
fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf).to_ascii_lowercase();
        if let Some(end) = text.find("\r\n\r\n") {
            let body_len = text[..end]
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + body_len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
