//! Instruction templates sent to the completion service.
//!
//! The builders only substitute values into the fixed templates; bounds
//! checking of topic and complexity happens at the request boundary, an
//! out-of-range complexity passes through unmodified.

pub const MCQ_PROMPT_TEMPLATE: &str = r#"Generate a unique multiple-choice question about {topic} with an initial complexity level of {complexity}.
Question requirements:
1. Adjust the difficulty based on the complexity level (1-5, where 1 is very simple and 5 is very complex).
2. For lower complexity (1-2), focus on basic facts, definitions, or simple concepts.
3. For higher complexity (4-5), include more advanced concepts, require analysis, or combine multiple ideas.
4. Review this history of previous questions:
{history}
5. If your generated question is similar to any in the history, INCREASE THE COMPLEXITY LEVEL BY 1 (up to a maximum of 5) and generate a new, more advanced question.
6. Repeat step 5 until you generate a question that is significantly different from all questions in the history.
7. Ensure the final question explores aspects or applications of the topic not covered in previous questions.
8. Make all options plausible, but only one should be correct.
The output should be a JSON object with the keys "question", "options", "answer", and "explanation".
Formatting rules:
1. Present the options as a JSON array: ["A. option", "B. option", "C. option", "D. option"]
2. The answer must be a single letter: "A", "B", "C", or "D".
3. Provide a clear explanation for the correct answer, matching the final complexity level.
4. Include the final complexity level (1-5) used to generate the question in your response under the key "complexity".
5. Strictly adhere to the specified output format.
6. Ensure the JSON is valid and can be parsed by a standard JSON parser.
Options must be a JSON array with exactly 4 elements.
Each option must start with "A.", "B.", "C.", or "D.".
Return ONLY a valid JSON object, no markdown, no explanation, no extra text.
Use double quotes for all JSON keys and string values.

Before submitting, double-check that your question is not repeating or closely resembling any in the history."#;

pub const PDF_CONTEXT_PROMPT_TEMPLATE: &str = r#"Using the following context from a PDF:
{context}

Generate a unique multiple-choice question about {topic} with complexity level {complexity}.
Present the output as a valid JSON object with keys: question, options (list of 4), answer (A/B/C/D), explanation.
Options must be plausible and only one correct. Use double quotes for JSON. No extra text."#;

pub const CHAT_SYSTEM_PROMPT_TEMPLATE: &str = r#"You are an assistant discussing the following multiple-choice question with the user.
{mcq_details}

Your task:
1. Respond to user questions about this MCQ, its topic, its options, or closely related information.
2. Provide concise but informative answers, including additional relevant facts when appropriate.
3. If a question is somewhat related to the MCQ topic, even if not directly about the question itself, provide a brief answer and then guide the conversation back to the MCQ.
4. Only if a question is completely unrelated to the MCQ topic, respond with: "That's not directly related to the question about [brief topic]. Would you like to know more about [specific aspect of the MCQ]?"
5. You can provide general information about locations, dates, or contexts related to the MCQ topic if asked.
6. If you don't have specific information about a related aspect, it's okay to say so and offer what you do know about the topic.

Remember, your primary focus is on the MCQ and related information, but be flexible in addressing closely associated topics to enhance understanding."#;

/// Renders the MCQ generation prompt, joining the history as bullet lines.
pub fn build_mcq_prompt(topic: &str, complexity: u8, history: &[String]) -> String {
    let formatted_history = history
        .iter()
        .map(|q| format!("- {}", q))
        .collect::<Vec<_>>()
        .join("\n");

    MCQ_PROMPT_TEMPLATE
        .replace("{topic}", topic)
        .replace("{complexity}", &complexity.to_string())
        .replace("{history}", &formatted_history)
}

/// Renders the single-attempt PDF variant prompt. The context must
/// already be truncated by the caller.
pub fn build_pdf_context_prompt(context: &str, topic: &str, complexity: u8) -> String {
    PDF_CONTEXT_PROMPT_TEMPLATE
        .replace("{context}", context)
        .replace("{topic}", topic)
        .replace("{complexity}", &complexity.to_string())
}

/// Renders the chat system prompt with the MCQ text embedded verbatim.
pub fn build_chat_system_prompt(mcq_details: &str) -> String {
    CHAT_SYSTEM_PROMPT_TEMPLATE.replace("{mcq_details}", mcq_details)
}
