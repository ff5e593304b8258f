//! Kokoro Backend Integration Tests
//!
//! Runs the Kokoro backend against a wiremock sidecar stand-in, verifying
//! both the request shape it sends and its handling of sidecar responses.

use std::io::Cursor;

use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vox_gateway::{
    ServerConfig,
    config::EngineKind,
    core::{AudioCache, TtsEngine, TtsError, create_synthesizer},
};

/// Encode a mono WAV for mock sidecar responses
fn wav_bytes(samples: &[f32], sample_rate: u32) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for &sample in samples {
            writer.write_sample(sample).unwrap();
        }
        writer.finalize().unwrap();
    }
    cursor.into_inner()
}

fn config_for(server_url: &str, dir: &tempfile::TempDir) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 8000,
        api_key: "k".to_string(),
        tts_engine: EngineKind::Kokoro,
        voices_dir: dir.path().join("voices"),
        model_cache_dir: dir.path().join("models"),
        cache_dir: dir.path().join("cache"),
        kokoro_url: server_url.to_string(),
        piper_bin: None,
        cors_allowed_origins: None,
    }
}

#[tokio::test]
async fn test_posts_expected_request_shape() {
    let server = MockServer::start().await;
    let dir = tempfile::TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/v1/audio/speech"))
        .and(body_partial_json(serde_json::json!({
            "model": "kokoro",
            "input": "Hello there.",
            "voice": "af_sky",
            "response_format": "wav",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(wav_bytes(&[0.1; 240], 24000)))
        .expect(1)
        .mount(&server)
        .await;

    let backend =
        create_synthesizer(EngineKind::Kokoro, &config_for(&server.uri(), &dir)).unwrap();
    let audio = backend
        .synthesize_raw("Hello there.", "af_sky", 1.25)
        .await
        .unwrap();

    assert_eq!(audio.sample_rate, 24000);
    assert_eq!(audio.samples.len(), 240);
}

#[tokio::test]
async fn test_sidecar_error_is_reported() {
    let server = MockServer::start().await;
    let dir = tempfile::TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/v1/audio/speech"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
        .mount(&server)
        .await;

    let backend =
        create_synthesizer(EngineKind::Kokoro, &config_for(&server.uri(), &dir)).unwrap();
    let result = backend.synthesize_raw("Hello.", "af_sarah", 1.0).await;

    match result {
        Err(TtsError::Synthesis(message)) => {
            assert!(message.contains("500"), "message: {message}");
            assert!(message.contains("model not loaded"), "message: {message}");
        }
        other => panic!("expected Synthesis error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_wav_is_an_error() {
    let server = MockServer::start().await;
    let dir = tempfile::TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/v1/audio/speech"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"not a wav".to_vec()))
        .mount(&server)
        .await;

    let backend =
        create_synthesizer(EngineKind::Kokoro, &config_for(&server.uri(), &dir)).unwrap();
    let result = backend.synthesize_raw("Hello.", "af_sarah", 1.0).await;

    assert!(matches!(result, Err(TtsError::Encoding(_))));
}

#[tokio::test]
async fn test_engine_caches_sidecar_output() {
    let server = MockServer::start().await;
    let dir = tempfile::TempDir::new().unwrap();

    // expect(1): the repeat request must be served from disk, not the sidecar
    Mock::given(method("POST"))
        .and(path("/v1/audio/speech"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(wav_bytes(&[0.1; 2400], 24000)))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server.uri(), &dir);
    let backend = create_synthesizer(EngineKind::Kokoro, &config).unwrap();
    let cache = AudioCache::new(config.cache_dir.clone()).await;
    let engine = TtsEngine::new(backend, cache);

    let first = engine.synthesize("Hello.", "af_sarah", 1.0).await.unwrap();
    let second = engine.synthesize("Hello.", "af_sarah", 1.0).await.unwrap();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unknown_voice_resolved_before_sidecar_call() {
    let server = MockServer::start().await;
    let dir = tempfile::TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/v1/audio/speech"))
        .and(body_partial_json(serde_json::json!({"voice": "af_sarah"})))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(wav_bytes(&[0.1; 240], 24000)))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server.uri(), &dir);
    let backend = create_synthesizer(EngineKind::Kokoro, &config).unwrap();
    let cache = AudioCache::new(config.cache_dir.clone()).await;
    let engine = TtsEngine::new(backend, cache);

    let audio = engine
        .synthesize("Hi.", "definitely-not-a-voice", 1.0)
        .await
        .unwrap();
    assert!(!audio.is_empty());
}
