use async_trait::async_trait;

use crate::domain::llm::{choose_reply, CANNED_REPLIES, MOCK_PROVIDER_ID};
use crate::domain::{ChatMessage, ChatProvider, DomainError, LatencyWindow};

/// Local stand-in for a real LLM: canned replies after a simulated delay
#[derive(Debug, Clone)]
pub struct MockChatProvider {
    replies: &'static [&'static str],
    latency: LatencyWindow,
}

impl MockChatProvider {
    pub fn new(latency: LatencyWindow) -> Self {
        Self {
            replies: &CANNED_REPLIES,
            latency,
        }
    }

    pub fn latency(&self) -> LatencyWindow {
        self.latency
    }
}

impl Default for MockChatProvider {
    fn default() -> Self {
        Self::new(LatencyWindow::default())
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn generate(&self, _messages: &[ChatMessage]) -> Result<String, DomainError> {
        // thread_rng is not Send; draw everything before the await point
        let (reply, delay) = {
            let mut rng = rand::thread_rng();
            (
                choose_reply(&mut rng, self.replies),
                self.latency.sample(&mut rng),
            )
        };

        tokio::time::sleep(delay).await;

        reply
            .map(str::to_string)
            .ok_or_else(|| DomainError::internal("Mock reply catalog is empty"))
    }

    fn provider_name(&self) -> &'static str {
        MOCK_PROVIDER_ID
    }
}
