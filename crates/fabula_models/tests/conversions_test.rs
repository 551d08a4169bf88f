use fabula_core::{GenerateRequest, Message};
use fabula_error::ModelsErrorKind;
use fabula_models::ModelConfig;
use fabula_models::openai_compat::{ChatResponse, from_chat_response, to_chat_request};

fn defaults() -> ModelConfig {
    ModelConfig::from_yaml_str(
        "model: tide-70b\ndefault_params:\n  temperature: 0.7\n  max_tokens: 512\n  top_p: 0.9\n  seed: 11\n",
    )
    .expect("config")
}

#[test]
fn request_overrides_win_over_defaults() {
    let cfg = defaults();
    let req = GenerateRequest::builder()
        .messages(vec![Message::system("sys"), Message::user("go")])
        .temperature(Some(0.85))
        .build()
        .expect("request");

    let chat = to_chat_request(&req, cfg.model(), cfg.default_params()).expect("chat");
    assert_eq!(chat.model(), "tide-70b");
    assert_eq!(*chat.temperature(), Some(0.85));
    assert_eq!(*chat.max_tokens(), Some(512));
    assert_eq!(*chat.top_p(), Some(0.9));

    let json = serde_json::to_value(&chat).expect("json");
    assert_eq!(json["messages"][0]["role"], "system");
    assert_eq!(json["messages"][1]["content"], "go");
    assert_eq!(json["seed"], 11);
}

#[test]
fn unset_parameters_are_not_serialized() {
    let req = GenerateRequest::new(vec![Message::user("go")]);
    let chat = to_chat_request(&req, "m", &Default::default()).expect("chat");
    let json = serde_json::to_value(&chat).expect("json");
    assert!(json.get("temperature").is_none());
    assert!(json.get("max_tokens").is_none());
}

#[test]
fn response_takes_first_choice_and_usage() {
    let body = r#"{
        "choices": [
            {"message": {"role": "assistant", "content": "The fog lifted."}, "finish_reason": "stop"},
            {"message": {"role": "assistant", "content": "ignored"}}
        ],
        "usage": {"prompt_tokens": 120, "completion_tokens": 40, "total_tokens": 160}
    }"#;
    let response: ChatResponse = serde_json::from_str(body).expect("parse");
    let generated = from_chat_response(&response).expect("convert");

    assert_eq!(generated.text(), "The fog lifted.");
    let usage = generated.usage().expect("usage");
    assert_eq!(*usage.total_tokens(), Some(160));
}

#[test]
fn missing_usage_is_none() {
    let body = r#"{"choices": [{"message": {"content": "x"}}]}"#;
    let response: ChatResponse = serde_json::from_str(body).expect("parse");
    assert!(from_chat_response(&response).expect("convert").usage().is_none());
}

#[test]
fn no_choices_is_an_error() {
    let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).expect("parse");
    let err = from_chat_response(&response).unwrap_err();
    assert_eq!(err.kind, ModelsErrorKind::EmptyResponse);
}
