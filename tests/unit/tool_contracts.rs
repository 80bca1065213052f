/// Contract tests: every tool returns exactly one of success or error
use basic_mcp_server::tools::*;
use basic_mcp_server::*;
use serde_json::json;

#[cfg(test)]
mod tool_contract_tests {
    use super::*;

    #[test]
    fn test_add() {
        let envelope = calculate(&CalculationRequest {
            operation: "add".to_string(),
            a: 2.0,
            b: 3.0,
        });

        assert_eq!(envelope.success().unwrap().result, 5.0);
        assert!(envelope.failure().is_none());
    }

    #[test]
    fn test_divide_by_zero() {
        let envelope = calculate(&CalculationRequest {
            operation: "divide".to_string(),
            a: 1.0,
            b: 0.0,
        });

        assert!(envelope.success().is_none());
        assert_eq!(envelope.failure().unwrap().error, "Division by zero is not allowed");
    }

    #[test]
    fn test_unknown_operation() {
        let envelope = calculate(&CalculationRequest {
            operation: "mod".to_string(),
            a: 1.0,
            b: 2.0,
        });

        assert_eq!(envelope.failure().unwrap().error, "Unknown operation: mod");
    }

    #[test]
    fn test_list_nonexistent_directory() {
        let envelope = list_files(&FileListRequest {
            directory: "/nonexistent".to_string(),
            ..FileListRequest::default()
        });

        assert!(envelope
            .failure()
            .unwrap()
            .error
            .starts_with("Directory does not exist"));
    }

    #[test]
    fn test_system_info_respects_allow_list() {
        let envelope = system_info();
        let info = envelope.success().unwrap();

        for key in info.environment_variables.keys() {
            assert!(SAFE_ENV_VARS.contains(&key.as_str()), "leaked {}", key);
        }
    }

    #[test]
    fn test_echo() {
        let envelope = echo(&EchoRequest {
            message: "hi".to_string(),
        });
        let response = envelope.success().unwrap();

        assert_eq!(response.message, "hi");
        assert_eq!(response.length, 2);
    }

    #[test]
    fn test_wire_shape_of_success_and_error() {
        let invoker = ToolInvoker::new();

        let ok = invoker
            .invoke(CALCULATOR, json!({"operation": "multiply", "a": 3, "b": 4})
                .as_object()
                .cloned()
                .unwrap())
            .unwrap();
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({"result": 12.0, "operation": "multiply", "inputs": {"a": 3.0, "b": 4.0}})
        );

        let err = invoker
            .invoke(CALCULATOR, json!({"operation": "divide", "a": 3, "b": 0})
                .as_object()
                .cloned()
                .unwrap())
            .unwrap();
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({
                "error": "Division by zero is not allowed",
                "operation": "divide",
                "inputs": {"a": 3.0, "b": 0.0}
            })
        );
    }
}
