use async_trait::async_trait;
use excuse_gen::{Result, llm::InferenceClient};
use mockall::mock;

mock! {
    // Inference client double for handler tests
    pub Inference {}

    #[async_trait]
    impl InferenceClient for Inference {
        async fn complete(&self, prompt: &str) -> Result<String>;
    }
}

/// Mock that answers every prompt with `text`.
pub fn replying(text: &'static str) -> MockInference {
    let mut mock = MockInference::new();
    mock.expect_complete()
        .returning(move |_| Ok(text.to_string()));
    mock
}

/// Mock that fails the test if it is ever called.
pub fn never_called() -> MockInference {
    let mut mock = MockInference::new();
    mock.expect_complete().never();
    mock
}
