//! Fake results API for fetch tests.
//!
//! Binds 127.0.0.1 on a random port and answers every request with the same
//! canned reply, recording each request head. Point `FetchOptions::base_url`
//! at [`FakeApi::base_url`].

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Clone, Debug)]
pub enum Reply {
    /// Status code and JSON body.
    Json(u16, String),
    /// Accept, then say nothing for this long.
    Hang(Duration),
}

pub struct FakeApi {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeApi {
    pub fn start(reply: Reply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake api");
        let addr = listener.local_addr().expect("local addr");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                let head = read_head(&mut stream);
                log.lock().unwrap().push(head);
                match &reply {
                    Reply::Json(status, body) => {
                        let _ = stream.write_all(response(*status, body).as_bytes());
                        let _ = stream.flush();
                    }
                    Reply::Hang(d) => thread::sleep(*d),
                }
            }
        });

        Self { addr, requests }
    }

    pub fn json(body: serde_json::Value) -> Self {
        Self::start(Reply::Json(200, body.to_string()))
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Request heads seen so far, lowercased.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn read_head(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    String::from_utf8_lossy(&buf).to_ascii_lowercase()
}

fn response(status: u16, body: &str) -> String {
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}
