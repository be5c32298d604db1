//! Local DNS and HTTP stubs shared by the integration tests

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]

use hickory_resolver::proto::op::{Message, MessageType, ResponseCode};
use hickory_resolver::proto::rr::rdata::A;
use hickory_resolver::proto::rr::{RData, Record};
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};

/// Start a UDP DNS server answering every query with `answers` as A records
pub async fn spawn_dns_stub(answers: Vec<Ipv4Addr>, rcode: ResponseCode) -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();

    tokio::spawn(async move {
        let mut buf = [0u8; 1500];
        loop {
            let Ok((len, peer)) = socket.recv_from(&mut buf).await else {
                break;
            };
            let Ok(query) = Message::from_vec(&buf[..len]) else {
                continue;
            };

            let mut response = Message::new();
            response
                .set_id(query.id())
                .set_message_type(MessageType::Response)
                .set_op_code(query.op_code())
                .set_recursion_desired(query.recursion_desired())
                .set_recursion_available(true)
                .set_response_code(rcode);
            response.add_queries(query.queries().to_vec());

            if rcode == ResponseCode::NoError {
                if let Some(question) = query.queries().first() {
                    for ip in &answers {
                        response.add_answer(Record::from_rdata(
                            question.name().clone(),
                            300,
                            RData::A(A(*ip)),
                        ));
                    }
                }
            }

            let bytes = response.to_vec().unwrap();
            let _ = socket.send_to(&bytes, peer).await;
        }
    });

    addr
}

/// Canned HTTP response keyed by request path
#[derive(Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
}

impl StubResponse {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: r#"{"status":"error"}"#.to_string(),
        }
    }
}

/// A running HTTP stub and the paths it has been asked for
pub struct HttpStub {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<String>>>,
}

/// Start an HTTP/1.1 server answering from `routes`; unknown paths get a 404
pub async fn spawn_http_stub(routes: Vec<(&str, StubResponse)>) -> HttpStub {
    let routes: HashMap<String, StubResponse> = routes
        .into_iter()
        .map(|(path, response)| (path.to_string(), response))
        .collect();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }

            let request = String::from_utf8_lossy(&request);
            let path = request
                .lines()
                .next()
                .and_then(|line| line.split_whitespace().nth(1))
                .unwrap_or("/")
                .to_string();
            seen.lock().unwrap().push(path.clone());

            let response = routes
                .get(&path)
                .cloned()
                .unwrap_or_else(|| StubResponse::status(404));
            let raw = format!(
                "HTTP/1.1 {} STUB\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                response.status,
                response.body.len(),
                response.body
            );
            let _ = stream.write_all(raw.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    HttpStub {
        base_url: format!("http://{addr}"),
        requests,
    }
}
