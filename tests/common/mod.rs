#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// 测试桩收到的一次请求的完整快照。
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not valid JSON")
    }
}

struct CannedResponse {
    status: u16,
    body: String,
}

/// 脚本化 HTTP 桩：每个连接处理一个请求，按入队顺序回放响应。
/// 响应一律带 Connection: close，客户端为每个请求新建连接。
pub struct StubServer {
    base_url: String,
    responses: Arc<Mutex<VecDeque<CannedResponse>>>,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: Option<JoinHandle<()>>,
}

impl StubServer {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind stub listener");
        let addr = listener.local_addr().expect("failed to read stub address");
        let responses: Arc<Mutex<VecDeque<CannedResponse>>> =
            Arc::new(Mutex::new(VecDeque::new()));
        let recorded: Arc<Mutex<Vec<RecordedRequest>>> = Arc::new(Mutex::new(Vec::new()));

        let queue = responses.clone();
        let log = recorded.clone();
        let handle = thread::spawn(move || {
            for stream in listener.incoming() {
                let mut stream = match stream {
                    Ok(stream) => stream,
                    Err(_) => continue,
                };
                let request = match read_request(&mut stream) {
                    Some(request) => request,
                    None => continue,
                };
                if request.path == "/__shutdown" {
                    let _ = write_response(&mut stream, 200, "");
                    break;
                }
                let canned = queue.lock().unwrap().pop_front().unwrap_or(CannedResponse {
                    status: 500,
                    body: "stub has no response queued".to_string(),
                });
                log.lock().unwrap().push(request);
                let _ = write_response(&mut stream, canned.status, &canned.body);
            }
        });

        StubServer {
            base_url: format!("http://{addr}"),
            responses,
            recorded,
            handle: Some(handle),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 追加一条按顺序回放的响应。
    pub fn push_response(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(CannedResponse {
            status,
            body: body.to_string(),
        });
    }

    /// 停止监听线程并取回全部已记录的请求。
    pub fn finish(mut self) -> Vec<RecordedRequest> {
        let address = self.base_url.trim_start_matches("http://").to_string();
        if let Ok(mut stream) = TcpStream::connect(&address) {
            let _ = stream.write_all(
                b"GET /__shutdown HTTP/1.1\r\nHost: stub\r\nConnection: close\r\n\r\n",
            );
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        std::mem::take(&mut *self.recorded.lock().unwrap())
    }
}

fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut reader = BufReader::new(stream.try_clone().ok()?);
    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let mut headers = Vec::new();
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).ok()?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim().to_string();
            let value = value.trim().to_string();
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.parse().unwrap_or(0);
            }
            headers.push((name, value));
        }
    }

    let mut body = vec![0_u8; content_length];
    if content_length > 0 {
        reader.read_exact(&mut body).ok()?;
    }

    Some(RecordedRequest {
        method,
        path,
        headers,
        body,
    })
}

fn write_response(stream: &mut TcpStream, status: u16, body: &str) -> std::io::Result<()> {
    let reason = match status {
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(response.as_bytes())
}
