use super::types::ExcuseRequest;

/// Short descriptor for a seriousness level, clamped to the 1..=5 scale.
pub fn seriousness_descriptor(level: u8) -> &'static str {
    match level {
        0 | 1 => "very silly",
        2 => "lighthearted",
        3 => "balanced",
        4 => "earnest",
        _ => "serious",
    }
}

/// Builds the instruction sent to the model for one excuse request.
pub fn build_prompt(request: &ExcuseRequest) -> String {
    let mut fields = vec![
        format!("- Category: {}", request.category),
        format!("- Tone: {}", request.tone),
        format!(
            "- Seriousness Level: {}/5 (1=very silly, 5=serious), aim for {}",
            request.seriousness,
            seriousness_descriptor(request.seriousness)
        ),
        format!("- Recipient: {}", request.recipient_name.trim()),
        format!("- Sender: {}", request.sender_name.trim()),
        format!("- ETA/When: {}", request.eta_when.trim()),
    ];
    if let Some(context) = request.context() {
        fields.push(format!("- Additional context: {}", context));
    }

    let mut prompt = String::from(
        "You are an AI assistant that generates professional excuse emails. \
         Generate a JSON response with \"subject\" and \"body\" fields.\n\nContext:\n",
    );
    prompt.push_str(&fields.join("\n"));
    prompt.push_str(
        "\n\nGenerate an email with:\n\
         1. A professional subject line\n\
         2. A complete email body with greeting, apology/excuse, reason, next step, and sign-off\n\
         3. Match the tone and seriousness level appropriately\n\n\
         Respond ONLY with valid JSON in this format:\n\
         {\"subject\": \"Subject Line\", \"body\": \"Dear [Recipient],\\n\\nEmail body content...\\n\\nBest regards,\\n[Sender]\"}\n",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::excuse::{Category, Tone};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn request(context: Option<&str>) -> ExcuseRequest {
        ExcuseRequest {
            category: Category::MissedDeadline,
            tone: Tone::Apologetic,
            seriousness: 4,
            recipient_name: " Dana ".to_string(),
            sender_name: "Sam".to_string(),
            eta_when: "Friday EOD".to_string(),
            context: context.map(str::to_string),
        }
    }

    #[test]
    fn test_prompt_contains_all_fields() {
        let prompt = build_prompt(&request(None));

        assert!(prompt.contains("- Category: Missed Deadline\n"));
        assert!(prompt.contains("- Tone: Apologetic\n"));
        assert!(prompt.contains("- Seriousness Level: 4/5 (1=very silly, 5=serious), aim for earnest"));
        assert!(prompt.contains("- Recipient: Dana\n"));
        assert!(prompt.contains("- Sender: Sam\n"));
        assert!(prompt.contains("- ETA/When: Friday EOD\n"));
        assert!(!prompt.contains("Additional context"));
    }

    #[test]
    fn test_prompt_fields_are_one_per_line() {
        let prompt = build_prompt(&request(Some("flat tyre")));
        assert!(prompt.contains(
            "Context:\n- Category: Missed Deadline\n- Tone: Apologetic\n- Seriousness Level: 4/5"
        ));
        assert!(prompt.contains("- Additional context: flat tyre\n\nGenerate an email with:"));
    }

    #[test]
    fn test_prompt_requests_json_only() {
        let prompt = build_prompt(&request(None));
        assert!(prompt.contains("Respond ONLY with valid JSON"));
        assert!(prompt.contains(r#"{"subject": "Subject Line", "body": "Dear [Recipient],\n\n"#));
    }

    #[test]
    fn test_prompt_includes_context_when_present() {
        let prompt = build_prompt(&request(Some("  the build server caught fire ")));
        assert!(prompt.contains("- Additional context: the build server caught fire\n"));
    }

    #[rstest]
    #[case(1, "very silly")]
    #[case(2, "lighthearted")]
    #[case(3, "balanced")]
    #[case(4, "earnest")]
    #[case(5, "serious")]
    fn test_seriousness_descriptor(#[case] level: u8, #[case] expected: &str) {
        assert_eq!(seriousness_descriptor(level), expected);
    }
}
