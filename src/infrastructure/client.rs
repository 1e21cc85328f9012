//! HTTP adapter for the remote pony maze service.

use crate::domain::{ApiError, ApiResult, Dimensions, Direction, MazeIdentity, MoveResult, RawMazeSnapshot};
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

pub const DEFAULT_BASE_URL: &str = "https://ponychallenge.trustpilot.com/pony-challenge";

/// Calls the orchestration layer makes against the maze service.
pub trait MazeApi {
    fn create_maze(&self, dimensions: Dimensions, player_name: &str) -> ApiResult<MazeIdentity>;
    fn get_maze(&self, maze_id: &str) -> ApiResult<RawMazeSnapshot>;
    fn move_pony(&self, game_id: &str, direction: Direction) -> ApiResult<MoveResult>;
    fn print_maze(&self, game_id: &str) -> ApiResult<String>;
}

/// Request body for maze creation. Difficulty is always 0.
pub fn create_maze_body(dimensions: Dimensions, player_name: &str) -> Value {
    json!({
        "maze-width": dimensions.width,
        "maze-height": dimensions.height,
        "maze-player-name": player_name,
        "difficulty": 0,
    })
}

/// Blocking reqwest client bound to one base URL. No retries.
pub struct HttpMazeApi {
    base_url: String,
    client: Client,
}

impl HttpMazeApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a service path such as `/maze/abc/print`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send(&self, request: RequestBuilder) -> ApiResult<reqwest::blocking::Response> {
        let response = request.send()?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text()?;
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        Err(ApiError::Server {
            status: status.as_u16(),
            body,
        })
    }

    fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let text = self.send(request)?.text()?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl Default for HttpMazeApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl MazeApi for HttpMazeApi {
    fn create_maze(&self, dimensions: Dimensions, player_name: &str) -> ApiResult<MazeIdentity> {
        let request = self
            .client
            .post(self.endpoint("/maze"))
            .json(&create_maze_body(dimensions, player_name));
        self.send_json(request)
    }

    fn get_maze(&self, maze_id: &str) -> ApiResult<RawMazeSnapshot> {
        let request = self.client.get(self.endpoint(&format!("/maze/{maze_id}")));
        self.send_json(request)
    }

    fn move_pony(&self, game_id: &str, direction: Direction) -> ApiResult<MoveResult> {
        let request = self
            .client
            .post(self.endpoint(&format!("/maze/{game_id}")))
            .json(&json!({ "direction": direction }));
        self.send_json(request)
    }

    fn print_maze(&self, game_id: &str) -> ApiResult<String> {
        let request = self.client.get(self.endpoint(&format!("/maze/{game_id}/print")));
        Ok(self.send(request)?.text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread;

    #[test]
    fn test_endpoint_joins_base_and_path() {
        let api = HttpMazeApi::new("http://localhost:8080/pony-challenge/");
        assert_eq!(api.base_url(), "http://localhost:8080/pony-challenge");
        assert_eq!(
            api.endpoint("/maze/abc/print"),
            "http://localhost:8080/pony-challenge/maze/abc/print"
        );
    }

    #[test]
    fn test_default_base_url() {
        let api = HttpMazeApi::default();
        assert_eq!(api.endpoint("/maze"), format!("{DEFAULT_BASE_URL}/maze"));
    }

    #[test]
    fn test_create_maze_body_uses_service_keys() {
        let body = create_maze_body(Dimensions { width: 15, height: 20 }, "rarity");
        assert_eq!(body["maze-width"], 15);
        assert_eq!(body["maze-height"], 20);
        assert_eq!(body["maze-player-name"], "rarity");
        assert_eq!(body["difficulty"], 0);
    }

    /// Serves one canned HTTP response on a local port and returns the base
    /// URL plus a handle yielding the raw request that was received.
    fn serve_once(status_line: &str, content_type: &str, body: &str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            request
        });
        (base_url, handle)
    }

    fn read_request(stream: &mut TcpStream) -> String {
        let mut raw = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let read = stream.read(&mut chunk).unwrap();
            if read == 0 {
                break;
            }
            raw.extend_from_slice(&chunk[..read]);
            let text = String::from_utf8_lossy(&raw);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if raw.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&raw).into_owned()
    }

    #[test]
    fn test_server_error_with_json_body() {
        let (base_url, handle) = serve_once("400 Bad Request", "application/json", r#"{"error":"bad name"}"#);
        let api = HttpMazeApi::new(base_url);

        let err = api
            .create_maze(Dimensions { width: 15, height: 15 }, "rarity")
            .unwrap_err();

        assert!(!err.is_transport());
        assert_eq!(err.server_body(), Some(&json!({ "error": "bad name" })));
        assert!(matches!(err, ApiError::Server { status: 400, .. }));

        let request = handle.join().unwrap();
        assert!(request.starts_with("POST /maze "));
        assert!(request.contains(r#""maze-player-name":"rarity""#));
    }

    #[test]
    fn test_server_error_with_text_body() {
        let (base_url, handle) = serve_once("500 Internal Server Error", "text/plain", "maze exploded");
        let api = HttpMazeApi::new(base_url);

        let err = api.get_maze("abc123").unwrap_err();

        assert_eq!(err.server_body(), Some(&Value::String("maze exploded".to_string())));
        assert!(handle.join().unwrap().starts_with("GET /maze/abc123 "));
    }

    #[test]
    fn test_success_reply_decoded() {
        let (base_url, handle) = serve_once("200 OK", "application/json", r#"{"maze_id":"abc123"}"#);
        let api = HttpMazeApi::new(base_url);

        let identity = api
            .create_maze(Dimensions { width: 15, height: 15 }, "rarity")
            .unwrap();

        assert_eq!(identity.maze_id.as_deref(), Some("abc123"));
        handle.join().unwrap();
    }

    #[test]
    fn test_undecodable_success_reply_is_a_transport_error() {
        let (base_url, handle) = serve_once("200 OK", "application/json", "not json");
        let api = HttpMazeApi::new(base_url);

        let err = api.move_pony("game-7", Direction::North).unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
        assert!(err.is_transport());
        let request = handle.join().unwrap();
        assert!(request.starts_with("POST /maze/game-7 "));
        assert!(request.contains(r#"{"direction":"north"}"#));
    }

    #[test]
    fn test_print_reply_returned_as_text() {
        let (base_url, handle) = serve_once("200 OK", "text/plain", "+---+\n| P |\n+---+");
        let api = HttpMazeApi::new(base_url);

        assert_eq!(api.print_maze("game-7").unwrap(), "+---+\n| P |\n+---+");
        assert!(handle.join().unwrap().starts_with("GET /maze/game-7/print "));
    }

    #[test]
    fn test_unreachable_service_is_a_transport_error() {
        // Bind then release a port so nothing is listening on it.
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let api = HttpMazeApi::new(format!("http://{addr}"));

        let err = api.get_maze("abc").unwrap_err();

        assert!(err.is_transport());
        assert!(err.server_body().is_none());
    }
}
