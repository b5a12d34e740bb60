//! HTTP transport tests against a local JSON-RPC responder

use std::{net::SocketAddr, sync::Arc};

use alloy_primitives::U256;
use nexum_ethcall_client::{
    BatchTransport, Client, ClientError, Error, ErrorPayload, HttpTransport, Request,
    eth::{self, FilterQuery},
};
use serde_json::{Value, json};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    sync::Mutex,
};
use url::Url;

type Answer = fn(&str, &Value) -> Result<Value, (i64, &'static str)>;

/// Answers like a node: block 0xc5d489, an offline gas oracle, `echo` returns
/// its params
fn node(method: &str, params: &Value) -> Result<Value, (i64, &'static str)> {
    match method {
        "eth_blockNumber" => Ok(json!("0xc5d489")),
        "eth_gasPrice" => Err((-32000, "gas price oracle offline")),
        "echo" => Ok(params.clone()),
        _ => Err((-32601, "method not found")),
    }
}

/// Local responder that answers every batch in reverse order
struct Responder {
    addr: SocketAddr,
    bodies: Arc<Mutex<Vec<Value>>>,
}

impl Responder {
    async fn start(answer: Answer) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let bodies = Arc::new(Mutex::new(Vec::new()));

        let recorded = bodies.clone();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                tokio::spawn(handle(stream, answer, recorded.clone()));
            }
        });
        Self { addr, bodies }
    }

    fn url(&self) -> Url {
        Url::parse(&format!("http://{}", self.addr)).unwrap()
    }
}

async fn handle(mut stream: TcpStream, answer: Answer, bodies: Arc<Mutex<Vec<Value>>>) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let (header_end, content_length) = loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..pos]).to_ascii_lowercase();
            let length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .map(|value| value.trim().parse::<usize>().unwrap())
                .unwrap_or(0);
            break (pos + 4, length);
        }
    };
    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body: Value = serde_json::from_slice(&buf[header_end..header_end + content_length]).unwrap();
    bodies.lock().await.push(body.clone());

    let entries: Vec<Value> = body
        .as_array()
        .unwrap()
        .iter()
        .rev()
        .map(|request| {
            let method = request["method"].as_str().unwrap_or_default();
            match answer(method, &request["params"]) {
                Ok(result) => json!({"jsonrpc": "2.0", "id": request["id"], "result": result}),
                Err((code, message)) => json!({
                    "jsonrpc": "2.0",
                    "id": request["id"],
                    "error": {"code": code, "message": message},
                }),
            }
        })
        .collect();
    let payload = serde_json::to_vec(&entries).unwrap();

    let head = format!(
        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
        payload.len()
    );
    stream.write_all(head.as_bytes()).await.unwrap();
    stream.write_all(&payload).await.unwrap();
    stream.shutdown().await.ok();
}

#[tokio::test]
async fn test_mixed_batch_keeps_request_order() {
    let responder = Responder::start(node).await;
    let transport = HttpTransport::new(responder.url()).unwrap();

    let responses = transport
        .batch_call(&[
            Request::new("eth_blockNumber"),
            Request::new("eth_gasPrice"),
            Request::new("eth_blockNumber"),
        ])
        .await
        .unwrap();

    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0].result(), &Ok(json!("0xc5d489")));
    assert_eq!(
        responses[1].result(),
        &Err(ErrorPayload::new(-32000, "gas price oracle offline"))
    );
    assert_eq!(responses[2].result(), &Ok(json!("0xc5d489")));
}

#[tokio::test]
async fn test_params_are_sent_in_order() {
    let responder = Responder::start(node).await;
    let transport = HttpTransport::new(responder.url()).unwrap();

    let filter = FilterQuery::new()
        .with_from_block(12965000u64)
        .to_filter_arg()
        .unwrap();
    let responses = transport
        .batch_call(&[Request::with_params(
            "echo",
            vec![filter.clone(), json!(true), json!("0x1")],
        )])
        .await
        .unwrap();
    assert_eq!(responses[0].result(), &Ok(json!([filter, true, "0x1"])));

    let bodies = responder.bodies.lock().await;
    assert_eq!(bodies.len(), 1);
    let batch = bodies[0].as_array().unwrap();
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0]["method"], "echo");
    assert_eq!(batch[0]["params"][0]["fromBlock"], "0xc5d488");
}

#[tokio::test]
async fn test_no_params_sends_one_batch() {
    let responder = Responder::start(node).await;
    let transport = HttpTransport::new(responder.url()).unwrap();

    transport
        .batch_call(&[Request::new("eth_blockNumber"), Request::new("eth_gasPrice")])
        .await
        .unwrap();

    let bodies = responder.bodies.lock().await;
    assert_eq!(bodies.len(), 1);
    let methods: Vec<_> = bodies[0]
        .as_array()
        .unwrap()
        .iter()
        .map(|request| request["method"].clone())
        .collect();
    assert_eq!(methods, [json!("eth_blockNumber"), json!("eth_gasPrice")]);
}

#[tokio::test]
async fn test_client_over_http() {
    let responder = Responder::start(node).await;
    let client = Client::new(responder.url()).unwrap();

    let mut block_number = U256::ZERO;
    let mut gas_price = U256::from(7u64);
    let err = client
        .call(&mut [
            &mut eth::block_number().returns(&mut block_number),
            &mut eth::gas_price().returns(&mut gas_price),
        ])
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "response handling failed: gas price oracle offline"
    );
    assert!(matches!(
        &err,
        ClientError::ResponseHandling {
            index: 1,
            source: Error::Protocol(_)
        }
    ));
    assert_eq!(block_number, U256::from(12965001u64));
    assert_eq!(gas_price, U256::from(7u64));
}

#[tokio::test]
async fn test_unreachable_node_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = Client::new(Url::parse(&format!("http://{addr}")).unwrap()).unwrap();
    let mut block_number = U256::from(3u64);
    let err = client
        .call(&mut [&mut eth::block_number().returns(&mut block_number)])
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(block_number, U256::from(3u64));
}
