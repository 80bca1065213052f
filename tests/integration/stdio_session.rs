/// End-to-end sessions over the JSON-RPC line protocol
use basic_mcp_server::*;
use serde_json::{json, Value};
use tokio::io::BufReader;

#[cfg(test)]
mod stdio_session_tests {
    use super::*;

    async fn run_session(requests: &[Value]) -> Vec<Value> {
        let input: String = requests
            .iter()
            .map(|r| format!("{}\n", r))
            .collect();

        let server = BasicMcpServer::new(ServerConfig::with_name(Some("Session Test".to_string())));
        let mut output = Vec::new();
        server
            .serve(BufReader::new(input.as_bytes()), &mut output)
            .await
            .expect("session should finish cleanly");

        String::from_utf8(output)
            .expect("output should be UTF-8")
            .lines()
            .map(|line| serde_json::from_str(line).expect("each line should be JSON"))
            .collect()
    }

    fn tool_payload(response: &Value) -> Value {
        let text = response["result"]["content"][0]["text"]
            .as_str()
            .expect("tool result should carry text content");
        serde_json::from_str(text).expect("tool text should be JSON")
    }

    #[tokio::test]
    async fn test_full_session() {
        let responses = run_session(&[
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {"name": "it", "version": "0.0.1"}
            }}),
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
            json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call", "params": {
                "name": "echo", "arguments": {"message": "hi"}
            }}),
        ])
        .await;

        // The notification gets no reply
        assert_eq!(responses.len(), 3);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[0]["result"]["serverInfo"]["name"], "Session Test");

        let names: Vec<&str> = responses[1]["result"]["tools"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|t| t["name"].as_str())
            .collect();
        assert_eq!(names, vec!["calculator", "list_files", "system_info", "echo"]);

        let echo = tool_payload(&responses[2]);
        assert_eq!(echo["message"], "hi");
        assert_eq!(echo["length"], 2);
        assert!(echo["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_error_envelopes_are_tool_results() {
        let responses = run_session(&[
            json!({"jsonrpc": "2.0", "id": "div", "method": "tools/call", "params": {
                "name": "calculator", "arguments": {"operation": "divide", "a": 1, "b": 0}
            }}),
            json!({"jsonrpc": "2.0", "id": "mod", "method": "tools/call", "params": {
                "name": "calculator", "arguments": {"operation": "mod", "a": 1, "b": 2}
            }}),
            json!({"jsonrpc": "2.0", "id": "ls", "method": "tools/call", "params": {
                "name": "list_files", "arguments": {"directory": "/nonexistent"}
            }}),
        ])
        .await;

        assert_eq!(responses.len(), 3);
        for response in &responses {
            assert!(response.get("error").is_none());
            assert_eq!(response["result"]["isError"], true);
        }

        assert_eq!(tool_payload(&responses[0])["error"], "Division by zero is not allowed");
        assert_eq!(tool_payload(&responses[1])["error"], "Unknown operation: mod");
        assert!(tool_payload(&responses[2])["error"]
            .as_str()
            .unwrap()
            .starts_with("Directory does not exist"));
    }

    #[tokio::test]
    async fn test_list_files_over_the_wire() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("report.csv"), "a,b\n1,2\n").unwrap();
        std::fs::write(temp_dir.path().join("skip.txt"), "").unwrap();

        let responses = run_session(&[json!({"jsonrpc": "2.0", "id": 1, "method": "tools/call", "params": {
            "name": "list_files",
            "arguments": {"directory": temp_dir.path().to_string_lossy(), "pattern": "*.csv"}
        }})])
        .await;

        assert_eq!(responses[0]["result"]["isError"], false);
        let listing = tool_payload(&responses[0]);
        assert_eq!(listing["count"], 1);
        assert_eq!(listing["pattern"], "*.csv");
        assert_eq!(listing["files"][0]["name"], "report.csv");
        assert_eq!(listing["files"][0]["size"], 8);
        assert_eq!(listing["files"][0]["is_file"], true);
    }

    #[tokio::test]
    async fn test_invalid_arguments_are_protocol_errors() {
        let responses = run_session(&[json!({"jsonrpc": "2.0", "id": 9, "method": "tools/call", "params": {
            "name": "calculator", "arguments": {"operation": "add", "a": "two", "b": 3}
        }})])
        .await;

        assert_eq!(responses[0]["error"]["code"], -32602);
        assert!(responses[0].get("result").is_none());
    }

    #[tokio::test]
    async fn test_ping_writes_exact_line() {
        let reader = tokio_test::io::Builder::new()
            .read(b"{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n")
            .build();
        let writer = tokio_test::io::Builder::new()
            .write(b"{\"jsonrpc\":\"2.0\",\"id\":1,\"result\":{}}")
            .write(b"\n")
            .build();

        let server = BasicMcpServer::new(ServerConfig::default());
        server
            .serve(BufReader::new(reader), writer)
            .await
            .expect("ping session should succeed");
    }

    #[tokio::test]
    async fn test_notifications_write_nothing() {
        let reader = tokio_test::io::Builder::new()
            .read(b"{\"jsonrpc\":\"2.0\",\"method\":\"notifications/initialized\"}\n")
            .read(b"\n")
            .build();
        // No writes are expected; any write fails the session
        let writer = tokio_test::io::Builder::new().build();

        let server = BasicMcpServer::new(ServerConfig::default());
        server
            .serve(BufReader::new(reader), writer)
            .await
            .expect("notification session should succeed");
    }
}
