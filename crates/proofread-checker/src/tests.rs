//! Integration tests for the Checker

#[cfg(test)]
mod tests {
    use crate::{CheckError, Checker, CheckerConfig};
    use proofread_llm::MockTransport;
    use std::sync::Arc;
    use std::thread;

    fn config_with_key() -> CheckerConfig {
        CheckerConfig {
            api_key: "sk-test".to_string(),
            ..Default::default()
        }
    }

    const TYPO_ANSWER: &str = r#"Here are the issues: [{"original":"teh","suggestion":"the","explanation":"typo","position":0}] Hope this helps!"#;

    #[test]
    fn test_full_check_flow() {
        let checker = Checker::new(MockTransport::with_content(TYPO_ANSWER));

        let issues = checker.check("teh cat sat on the mat", &config_with_key()).unwrap();

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].original_text(), "teh");
        assert_eq!(issues[0].suggestion(), "the");
        assert_eq!(issues[0].length(), 3);
        assert_eq!(checker.transport().call_count(), 1);
    }

    #[test]
    fn test_request_carries_key_model_and_prompt() {
        let checker = Checker::new(MockTransport::with_content("[]"));
        let config = CheckerConfig {
            api_key: "sk-abc".to_string(),
            model: "gpt-4o".to_string(),
            max_tokens: 1234,
            ..Default::default()
        };

        checker.check("Me and him goes.", &config).unwrap();

        let request = checker.transport().last_request().unwrap();
        assert_eq!(request.api_key, "sk-abc");

        let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["max_tokens"], 1234);
        assert_eq!(body["messages"][0]["role"], "user");
        let content = body["messages"][0]["content"].as_str().unwrap();
        assert!(content.ends_with("Text to analyze:\nMe and him goes."));
    }

    #[test]
    fn test_blank_text_skips_transport() {
        let checker = Checker::new(MockTransport::with_content(TYPO_ANSWER));

        for text in ["", "   ", "\n\t  \r\n"] {
            let issues = checker.check(text, &config_with_key()).unwrap();
            assert!(issues.is_empty());
        }
        assert_eq!(checker.transport().call_count(), 0);
    }

    #[test]
    fn test_blank_text_wins_over_missing_key() {
        let checker = Checker::new(MockTransport::with_content(TYPO_ANSWER));
        let result = checker.check("  ", &CheckerConfig::default());
        assert_eq!(result, Ok(Vec::new()));
    }

    #[test]
    fn test_missing_key_fails_without_transport() {
        let checker = Checker::new(MockTransport::with_content(TYPO_ANSWER));

        let result = checker.check("teh cat", &CheckerConfig::default());

        assert_eq!(result, Err(CheckError::MissingCredential));
        assert_eq!(checker.transport().call_count(), 0);
    }

    #[test]
    fn test_invalid_config_fails_without_transport() {
        let checker = Checker::new(MockTransport::with_content(TYPO_ANSWER));
        let config = CheckerConfig {
            max_tokens: 0,
            ..config_with_key()
        };

        let result = checker.check("teh cat", &config);

        assert!(matches!(result, Err(CheckError::Config(_))));
        assert_eq!(checker.transport().call_count(), 0);
    }

    #[test]
    fn test_server_error_status() {
        let checker = Checker::new(MockTransport::new(500, "Internal Server Error"));

        let result = checker.check("teh cat", &config_with_key());

        assert_eq!(result, Err(CheckError::RemoteService { code: 500 }));
        assert_eq!(checker.transport().call_count(), 1);
    }

    #[test]
    fn test_non_200_success_codes_are_errors() {
        let checker = Checker::new(MockTransport::new(202, TYPO_ANSWER));
        let result = checker.check("teh cat", &config_with_key());
        assert_eq!(result, Err(CheckError::RemoteService { code: 202 }));
    }

    #[test]
    fn test_transport_failure() {
        let checker = Checker::new(MockTransport::failing("connection refused"));

        let result = checker.check("teh cat", &config_with_key());

        match result {
            Err(CheckError::Transport(msg)) => assert!(msg.contains("connection refused")),
            other => panic!("Expected Transport error, got {:?}", other),
        }
        assert_eq!(checker.transport().call_count(), 1);
    }

    #[test]
    fn test_uninterpretable_answer_is_empty_not_error() {
        let checker = Checker::new(MockTransport::with_content("Looks perfect to me."));
        let result = checker.check("The cat sat.", &config_with_key());
        assert_eq!(result, Ok(Vec::new()));
    }

    #[test]
    fn test_check_or_empty_records_diagnostic() {
        let checker = Checker::new(MockTransport::new(500, ""));

        let report = checker.check_or_empty("teh cat", &config_with_key());

        assert!(report.issues.is_empty());
        assert!(report.is_degraded());
        assert!(report.diagnostic.unwrap().contains("500"));
    }

    #[test]
    fn test_check_or_empty_missing_key() {
        let checker = Checker::new(MockTransport::with_content(TYPO_ANSWER));

        let report = checker.check_or_empty("teh cat", &CheckerConfig::default());

        assert!(report.issues.is_empty());
        assert!(report.diagnostic.unwrap().contains("API key"));
        assert_eq!(checker.transport().call_count(), 0);
    }

    #[test]
    fn test_check_or_empty_success_has_no_diagnostic() {
        let checker = Checker::new(MockTransport::with_content(TYPO_ANSWER));

        let report = checker.check_or_empty("teh cat", &config_with_key());

        assert_eq!(report.issues.len(), 1);
        assert!(!report.is_degraded());
    }

    #[test]
    fn test_concurrent_checks_share_checker() {
        let checker = Arc::new(Checker::new(MockTransport::with_content(TYPO_ANSWER)));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let checker = Arc::clone(&checker);
                thread::spawn(move || {
                    let config = CheckerConfig {
                        api_key: format!("sk-{}", i),
                        ..Default::default()
                    };
                    checker.check("teh cat", &config).unwrap().len()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
        assert_eq!(checker.transport().call_count(), 8);
    }
}
