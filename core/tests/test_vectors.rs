//! Verify the text codec and error mapping against JSON test vectors stored
//! in `test-vectors/`.
//!
//! Each vector file describes inputs and the expected decoded result, so the
//! same cases can be replayed by any other client of the backend.

use jobpost_core::codec::{join_lines, parse_language_lines, parse_lines};
use jobpost_core::{ApiError, HttpResponse, JobPostClient, Language};

// ---------------------------------------------------------------------------
// Codec
// ---------------------------------------------------------------------------

#[test]
fn line_vectors() {
    let raw = include_str!("../../test-vectors/codec.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["lines"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = case["input"].as_str();
        let expected: Vec<String> = serde_json::from_value(case["expected"].clone()).unwrap();

        let lines = parse_lines(input);
        assert_eq!(lines, expected, "{name}: parsed lines");
        assert_eq!(parse_lines(Some(&join_lines(&lines))), lines, "{name}: stable after normalization");
    }
}

#[test]
fn language_vectors() {
    let raw = include_str!("../../test-vectors/codec.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["languages"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected: Vec<Language> = serde_json::from_value(case["expected"].clone()).unwrap();
        assert_eq!(parse_language_lines(case["input"].as_str()), expected, "{name}");
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn error_vectors() {
    let raw = include_str!("../../test-vectors/errors.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = JobPostClient::new("http://localhost:5000/api");
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let status = case["status"].as_u64().unwrap() as u16;
        let response = HttpResponse {
            status,
            headers: Vec::new(),
            body: case["body"].as_str().unwrap().to_string(),
        };

        // every operation shares the same status handling
        let errors = [
            c.parse_get_job_post(response.clone()).unwrap_err(),
            c.parse_update_job_post(response.clone()).unwrap_err(),
            c.parse_delete_job_post(response).unwrap_err(),
        ];
        for err in errors {
            match case["expected_kind"].as_str().unwrap() {
                "NotFound" => assert!(matches!(err, ApiError::NotFound { .. }), "{name}: expected NotFound"),
                "HttpError" => assert!(
                    matches!(err, ApiError::HttpError { status: s, .. } if s == status),
                    "{name}: expected HttpError"
                ),
                other => panic!("{name}: unknown expected_kind: {other}"),
            }
            assert_eq!(err.to_string(), case["expected_message"].as_str().unwrap(), "{name}: message");
        }
    }
}
