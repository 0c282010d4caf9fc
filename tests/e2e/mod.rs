// End-to-end tests for the TTS playground API
//
// Each test starts the real router on 127.0.0.1:0 together with a fake Azure
// TTS endpoint that records every request it receives, so tests can assert
// both what the client gets back and what (if anything) went upstream.

mod test_health;
